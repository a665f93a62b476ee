//! Recursive numeric kernels parameterized by `n` alone.

use super::error::{AlgorithmError, AlgorithmResult};

/// Naive doubly-recursive Fibonacci, O(2^n).
pub fn fibonacci(n: u64) -> u64 {
    if n <= 1 {
        n
    } else {
        fibonacci(n - 1) + fibonacci(n - 2)
    }
}

/// Recursive factorial.
///
/// Catalogued as O(n!) after the quantity it produces; the recursion itself
/// makes `n` multiplications. Fails once the product exceeds `u128`
/// (n > 34).
pub fn factorial(n: u64) -> AlgorithmResult<u128> {
    if n <= 1 {
        return Ok(1);
    }
    factorial(n - 1)?
        .checked_mul(u128::from(n))
        .ok_or(AlgorithmError::Overflow {
            what: "factorial",
            n,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fibonacci() {
        let expected = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        for (n, &value) in expected.iter().enumerate() {
            assert_eq!(fibonacci(n as u64), value);
        }
        assert_eq!(fibonacci(20), 6765);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), Ok(1));
        assert_eq!(factorial(1), Ok(1));
        assert_eq!(factorial(5), Ok(120));
        assert_eq!(factorial(10), Ok(3_628_800));
        assert!(factorial(34).is_ok());
    }

    #[test]
    fn test_factorial_overflow() {
        assert_eq!(
            factorial(35),
            Err(AlgorithmError::Overflow {
                what: "factorial",
                n: 35,
            })
        );
    }
}
