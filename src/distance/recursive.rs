//! Naive recursive edit distance.
//!
//! The reference formulation of the recurrence, with no memoization.
//! Worst-case time is O(3^min(l1, l2)), so this evaluator is meant for
//! cross-checking and small inputs; use [`crate::distance::table`] for
//! real workloads.

use std::cmp::min;

use crate::distance::ensure_prefix;
use crate::error::Result;

/// Calculate the edit distance between the first `l1` symbols of `seq1`
/// and the first `l2` symbols of `seq2`.
///
/// Prefix lengths are validated against the actual sequence lengths and
/// rejected with an error when they exceed them.
pub fn prefix_distance(seq1: &[char], seq2: &[char], l1: usize, l2: usize) -> Result<usize> {
    ensure_prefix(seq1, l1)?;
    ensure_prefix(seq2, l2)?;

    Ok(prefix_distance_unchecked(seq1, seq2, l1, l2))
}

/// Calculate the edit distance between two strings with the recursive
/// evaluator.
pub fn distance(s1: &str, s2: &str) -> usize {
    let seq1: Vec<char> = s1.chars().collect();
    let seq2: Vec<char> = s2.chars().collect();

    prefix_distance_unchecked(&seq1, &seq2, seq1.len(), seq2.len())
}

fn prefix_distance_unchecked(seq1: &[char], seq2: &[char], l1: usize, l2: usize) -> usize {
    // An empty prefix is reached by inserting or deleting every symbol
    // of the other prefix.
    if l1 == 0 {
        return l2;
    }
    if l2 == 0 {
        return l1;
    }

    let deletion = prefix_distance_unchecked(seq1, seq2, l1 - 1, l2) + 1;
    let insertion = prefix_distance_unchecked(seq1, seq2, l1, l2 - 1) + 1;
    let substitution = prefix_distance_unchecked(seq1, seq2, l1 - 1, l2 - 1)
        + if seq1[l1 - 1] == seq2[l2 - 1] { 0 } else { 1 };

    min(min(deletion, insertion), substitution)
}
