use rustc_hash::FxHashSet;

pub fn contains_duplicate(nums: &[i64]) -> bool {
    let mut seen = FxHashSet::default();
    seen.reserve(nums.len());
    nums.iter().any(|num| !seen.insert(*num))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_repeated_value() {
        assert!(contains_duplicate(&[1, 2, 3, 1]));
        assert!(contains_duplicate(&[1, 1, 1, 3, 3, 4, 3, 2, 4, 2]));
    }

    #[test]
    fn distinct_values_have_no_duplicate() {
        assert!(!contains_duplicate(&[1, 2, 3, 4]));
        assert!(!contains_duplicate(&[]));
        assert!(!contains_duplicate(&[i64::MIN, i64::MAX]));
    }
}
