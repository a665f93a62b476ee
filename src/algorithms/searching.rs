//! Sequence searches. Both return `None` when the target is absent.

/// Linear scan, O(n). Returns the first index holding `target`.
pub fn linear_search(data: &[i64], target: i64) -> Option<usize> {
    data.iter().position(|&value| value == target)
}

/// Iterative binary search over an ascending slice, O(log n).
pub fn binary_search(data: &[i64], target: i64) -> Option<usize> {
    // Half-open window [left, right).
    let mut left = 0;
    let mut right = data.len();
    while left < right {
        let mid = left + (right - left) / 2;
        match data[mid].cmp(&target) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => left = mid + 1,
            std::cmp::Ordering::Greater => right = mid,
        }
    }
    None
}
