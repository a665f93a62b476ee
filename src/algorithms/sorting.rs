//! In-place comparison sorts.

/// Bubble sort, O(n²).
pub fn bubble_sort(data: &mut [i64]) {
    let n = data.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
            }
        }
    }
}

/// Top-down merge sort, O(n log n).
///
/// Each level copies both halves out before merging back into `data`, so the
/// auxiliary space is O(n) per level of recursion.
pub fn merge_sort(data: &mut [i64]) {
    if data.len() <= 1 {
        return;
    }

    let mid = data.len() / 2;
    let mut left = data[..mid].to_vec();
    let mut right = data[mid..].to_vec();
    merge_sort(&mut left);
    merge_sort(&mut right);

    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        if left[i] < right[j] {
            data[k] = left[i];
            i += 1;
        } else {
            data[k] = right[j];
            j += 1;
        }
        k += 1;
    }

    // At most one of the halves still has elements.
    for &value in left[i..].iter().chain(&right[j..]) {
        data[k] = value;
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_sort_small() {
        let mut data = vec![5, 3, 4, 1, 2];
        merge_sort(&mut data);
        assert_eq!(data, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_merge_sort_idempotent() {
        let mut data = vec![1, 2, 3, 4, 5];
        merge_sort(&mut data);
        assert_eq!(data, vec![1, 2, 3, 4, 5]);
        merge_sort(&mut data);
        assert_eq!(data, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_merge_sort_duplicates_and_negatives() {
        let mut data = vec![3, -1, 3, 0, -7, 2, 2];
        merge_sort(&mut data);
        assert_eq!(data, vec![-7, -1, 0, 2, 2, 3, 3]);
    }

    #[test]
    fn test_bubble_sort() {
        let mut data = vec![9, 4, 7, 1, 8, 2];
        bubble_sort(&mut data);
        assert_eq!(data, vec![1, 2, 4, 7, 8, 9]);
    }

    #[test]
    fn test_sorts_handle_trivial_inputs() {
        let mut empty: Vec<i64> = Vec::new();
        bubble_sort(&mut empty);
        merge_sort(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![42];
        bubble_sort(&mut single);
        merge_sort(&mut single);
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn test_sorts_agree_with_std() {
        let original: Vec<i64> = (0..64).map(|i| (i * 37 + 11) % 101).collect();
        let mut expected = original.clone();
        expected.sort_unstable();

        let mut bubbled = original.clone();
        bubble_sort(&mut bubbled);
        assert_eq!(bubbled, expected);

        let mut merged = original;
        merge_sort(&mut merged);
        assert_eq!(merged, expected);
    }
}
