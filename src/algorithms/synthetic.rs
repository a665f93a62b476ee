//! Synthetic workloads that exist only to exhibit a growth rate.

use super::error::{AlgorithmError, AlgorithmResult};

/// O(1): reads the first element.
pub fn constant_time(data: &[i64]) -> AlgorithmResult<i64> {
    data.first().copied().ok_or(AlgorithmError::EmptyInput)
}

/// O(n³): a triple loop that overwrites `data[i]` with `data[j] + data[k]`.
pub fn cubic_time(data: &mut [i64]) {
    let n = data.len();
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                data[i] = data[j].wrapping_add(data[k]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_time() {
        assert_eq!(constant_time(&[4, 5, 6]), Ok(4));
        assert_eq!(constant_time(&[]), Err(AlgorithmError::EmptyInput));
    }

    #[test]
    fn test_cubic_time_touches_every_slot() {
        // The last write for each i is data[n-1] + data[n-1]; the final row
        // reads its own slot while rewriting it.
        let mut data = vec![1, 2, 3];
        cubic_time(&mut data);
        assert_eq!(data, vec![6, 6, 60]);
    }

    #[test]
    fn test_cubic_time_wraps_instead_of_panicking() {
        let mut data = vec![i64::MAX, i64::MAX];
        cubic_time(&mut data);
        assert_eq!(data.len(), 2);
    }
}
