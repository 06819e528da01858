use rustc_hash::FxHashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{ch}' is not a lowercase ASCII letter")]
pub struct NotLowercase {
    pub ch: char,
}

/// Counts characters of `s` up and of `t` down; anagrams cancel out.
pub fn is_anagram(s: &str, t: &str) -> bool {
    if s.chars().count() != t.chars().count() {
        return false;
    }
    let mut counts: FxHashMap<char, i64> = FxHashMap::default();
    for (lhs, rhs) in s.chars().zip(t.chars()) {
        *counts.entry(lhs).or_default() += 1;
        *counts.entry(rhs).or_default() -= 1;
    }
    counts.values().all(|count| *count == 0)
}

/// Fixed 26-slot table; only `a..=z` are accepted once the lengths agree.
pub fn is_anagram_ascii(s: &str, t: &str) -> Result<bool, NotLowercase> {
    if s.chars().count() != t.chars().count() {
        return Ok(false);
    }
    let mut counts = [0_i32; 26];
    for ch in s.chars() {
        counts[slot(ch)?] += 1;
    }
    for ch in t.chars() {
        counts[slot(ch)?] -= 1;
    }
    Ok(counts.iter().all(|count| *count == 0))
}

fn slot(ch: char) -> Result<usize, NotLowercase> {
    if ch.is_ascii_lowercase() {
        Ok(usize::from(ch as u8 - b'a'))
    } else {
        Err(NotLowercase { ch })
    }
}
