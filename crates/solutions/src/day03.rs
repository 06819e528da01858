use rustc_hash::FxHashMap;

/// Returns `[earlier, current]` for the first pair summing to `target`, or an
/// empty vector.
pub fn two_sum(nums: &[i64], target: i64) -> Vec<usize> {
    let mut seen: FxHashMap<i64, usize> = FxHashMap::default();
    for (index, &value) in nums.iter().enumerate() {
        if let Some(&earlier) = target.checked_sub(value).and_then(|diff| seen.get(&diff)) {
            return vec![earlier, index];
        }
        seen.insert(value, index);
    }
    Vec::new()
}

/// Stores the value each index is waiting for and answers `[current, earlier]`.
pub fn two_sum_reversed(nums: &[i64], target: i64) -> Vec<usize> {
    let mut pending: FxHashMap<i64, usize> = FxHashMap::default();
    for (index, &value) in nums.iter().enumerate() {
        if let Some(&earlier) = pending.get(&value) {
            return vec![index, earlier];
        }
        if let Some(wanted) = target.checked_sub(value) {
            pending.insert(wanted, index);
        }
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_pair_in_scan_order() {
        assert_eq!(two_sum(&[2, 7, 11, 15], 9), vec![0, 1]);
        assert_eq!(two_sum(&[3, 2, 4], 6), vec![1, 2]);
        assert_eq!(two_sum(&[3, 3], 6), vec![0, 1]);
    }

    #[test]
    fn missing_pair_is_empty() {
        assert!(two_sum(&[1, 2, 3], 100).is_empty());
        assert!(two_sum(&[], 0).is_empty());
        assert!(two_sum_reversed(&[5], 10).is_empty());
    }

    #[test]
    fn reversed_variant_swaps_indices() {
        for (nums, target) in [(&[2, 7, 11, 15][..], 9), (&[3, 2, 4][..], 6), (&[3, 3][..], 6)] {
            let mut forward = two_sum(nums, target);
            forward.reverse();
            assert_eq!(two_sum_reversed(nums, target), forward);
        }
    }

    #[test]
    fn extreme_targets_do_not_overflow() {
        assert!(two_sum(&[i64::MIN, 1], i64::MAX).is_empty());
        assert_eq!(two_sum(&[i64::MAX, -1], i64::MAX - 1), vec![0, 1]);
    }
}
