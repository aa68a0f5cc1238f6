//! Levenshtein distance, cost matrix and traceback alignment.
//!
//! # Pipeline
//!
//! ```text
//! (a, b) → matrix::build → CostMatrix ─┬→ CostMatrix::distance()
//!                                      └→ traceback::align → Alignment
//! ```
//!
//! All operations cost 1. Everything here is pure: each call allocates its
//! own table and nothing is shared between calls.
//!
//! The functions in this module are the string boundary. They reject empty
//! words; normalization (trimming, case folding, filtering) happens before,
//! in [`crate::normalize`].

pub mod format;
pub mod matrix;
pub mod traceback;


use tracing::debug;

use crate::error::{AlignError, AlignResult, Side};

pub use format::format_matrix;
pub use matrix::{CostMatrix, build};
pub use traceback::{Alignment, EditOp, GAP, align, align_with_gap};

/// Compute the edit distance between `a` and `b` together with the full
/// cost matrix.
///
/// # Errors
///
/// Returns [`AlignError::InvalidInput`] if either word is empty.
pub fn compute_distance(a: &str, b: &str) -> AlignResult<(usize, CostMatrix)> {
    let (a, b) = to_sequences(a, b)?;
    let matrix = build(&a, &b);
    let distance = matrix.distance();
    debug!(
        rows = matrix.rows(),
        cols = matrix.cols(),
        distance,
        "cost matrix built"
    );
    Ok((distance, matrix))
}

/// Recover one optimal alignment of `a` and `b` from `matrix`.
///
/// `matrix` must come from [`compute_distance`] on the same words. Returns
/// `(aligned_a, aligned_b)` with [`GAP`] marking inserted/deleted positions.
#[must_use]
pub fn compute_alignment(matrix: &CostMatrix, a: &str, b: &str) -> (String, String) {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let Alignment {
        aligned_a,
        aligned_b,
        ..
    } = align(matrix, &a, &b);
    (aligned_a, aligned_b)
}

/// Split both words into symbol sequences, rejecting empty ones.
pub(crate) fn to_sequences(a: &str, b: &str) -> AlignResult<(Vec<char>, Vec<char>)> {
    if a.is_empty() {
        return Err(AlignError::InvalidInput { side: Side::First });
    }
    if b.is_empty() {
        return Err(AlignError::InvalidInput { side: Side::Second });
    }
    Ok((a.chars().collect(), b.chars().collect()))
}
