//! Dynamic-programming edit distance.
//!
//! The production evaluators: a full cost-table formulation over
//! bounds-checked prefix lengths, and a rolling two-row variant that
//! computes the same scalar result in O(len2) memory.

use std::cmp::min;

use crate::distance::ensure_prefix;
use crate::error::{LevdistError, Result};

/// Calculate the edit distance between the first `l1` symbols of `seq1`
/// and the first `l2` symbols of `seq2` with a full cost table.
///
/// Cell (i, j) of the (l1+1) x (l2+1) table holds the distance between
/// the i-symbol prefix of `seq1` and the j-symbol prefix of `seq2`; row 0
/// and column 0 are the pure insertion/deletion costs. Runs in
/// O(l1 * l2) time and space; the table is dropped before returning.
pub fn prefix_distance(seq1: &[char], seq2: &[char], l1: usize, l2: usize) -> Result<usize> {
    ensure_prefix(seq1, l1)?;
    ensure_prefix(seq2, l2)?;

    let mut table = try_table(l1 + 1, l2 + 1)?;

    // Initialize first row and column
    for i in 0..=l1 {
        table[i][0] = i;
    }
    for j in 0..=l2 {
        table[0][j] = j;
    }

    // Fill the table; each cell depends on the cells above, to the left,
    // and diagonally above-left, all already computed in this order.
    for i in 1..=l1 {
        let c1 = seq1[i - 1];

        for j in 1..=l2 {
            let c2 = seq2[j - 1];

            table[i][j] = if c1 == c2 {
                // Equal symbols carry the diagonal at no cost.
                table[i - 1][j - 1]
            } else {
                min(
                    min(
                        table[i - 1][j] + 1, // deletion
                        table[i][j - 1] + 1, // insertion
                    ),
                    table[i - 1][j - 1] + 1, // substitution
                )
            };
        }
    }

    Ok(table[l1][l2])
}

/// Calculate the edit distance between two strings.
///
/// Uses only two rolling table rows, since each row depends on the
/// previous row alone. Returns the same result as [`prefix_distance`]
/// over the full lengths.
#[allow(clippy::needless_range_loop)]
pub fn distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    let mut prev_row = vec![0; len2 + 1];
    let mut curr_row = vec![0; len2 + 1];

    // Initialize first row
    for j in 0..=len2 {
        prev_row[j] = j;
    }

    for i in 1..=len1 {
        curr_row[0] = i;

        for j in 1..=len2 {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] {
                0
            } else {
                1
            };

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Allocate a zeroed rows x cols cost table, surfacing allocation
/// failure as an error instead of aborting.
fn try_table(rows: usize, cols: usize) -> Result<Vec<Vec<usize>>> {
    let mut table = Vec::new();
    table
        .try_reserve_exact(rows)
        .map_err(|_| table_exhausted(rows, cols))?;

    for _ in 0..rows {
        let mut row = Vec::new();
        row.try_reserve_exact(cols)
            .map_err(|_| table_exhausted(rows, cols))?;
        row.resize(cols, 0);
        table.push(row);
    }

    Ok(table)
}

fn table_exhausted(rows: usize, cols: usize) -> LevdistError {
    LevdistError::resource_exhausted(format!("cost table of {rows} x {cols} cells"))
}
