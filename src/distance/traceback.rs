//! Traceback: recover one optimal alignment from a finished cost matrix.
//!
//! The walk starts at the bottom-right cell and moves toward `(0, 0)`. At
//! each cell the first applicable rule wins, in this order:
//!
//! 1. symbols equal → match, move diagonally
//! 2. diagonal cost + 1 → substitution, move diagonally
//! 3. at the top row, or left cost + 1 → insertion, move left
//! 4. otherwise → deletion, move up
//!
//! The order picks which of several equally cheap alignments is returned.
//! Reordering the rules changes the output for tied cells.

use serde::Serialize;
use tracing::debug;

use super::matrix::CostMatrix;

/// Gap marker used by [`align`].
pub const GAP: char = '_';

/// One column of an alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditOp {
    /// Both symbols kept and equal.
    Match,
    /// Both symbols kept, different.
    Substitute,
    /// Symbol present only in `b` (gap on the `a` side).
    Insert,
    /// Symbol present only in `a` (gap on the `b` side).
    Delete,
}

impl EditOp {
    /// Whether this column costs one edit.
    #[must_use]
    pub const fn is_edit(self) -> bool {
        !matches!(self, Self::Match)
    }
}

/// An optimal alignment of two words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alignment {
    /// `a` with gap markers inserted.
    pub aligned_a: String,
    /// `b` with gap markers inserted.
    pub aligned_b: String,
    /// The column-by-column operations, left to right.
    pub operations: Vec<EditOp>,
}

impl Alignment {
    /// Number of columns that cost an edit. Equals the matrix distance.
    #[must_use]
    pub fn cost(&self) -> usize {
        self.operations.iter().filter(|op| op.is_edit()).count()
    }
}

/// Trace back through `matrix` using [`GAP`] as the gap marker.
///
/// `matrix` must have been built from the same `a` and `b`.
#[must_use]
pub fn align(matrix: &CostMatrix, a: &[char], b: &[char]) -> Alignment {
    align_with_gap(matrix, a, b, GAP)
}

/// Trace back through `matrix`, marking gaps with `gap`.
///
/// # Panics
///
/// Panics if `matrix` does not have `len(a) + 1` rows and `len(b) + 1`
/// columns.
#[must_use]
pub fn align_with_gap(matrix: &CostMatrix, a: &[char], b: &[char], gap: char) -> Alignment {
    assert!(
        matrix.rows() == a.len() + 1 && matrix.cols() == b.len() + 1,
        "matrix is {}x{} but inputs are {}x{}",
        matrix.rows(),
        matrix.cols(),
        a.len(),
        b.len()
    );

    let (mut i, mut j) = (a.len(), b.len());
    let mut columns: Vec<(char, char, EditOp)> = Vec::with_capacity(i + j);

    while i > 0 || j > 0 {
        let cost = matrix.get(i, j);
        if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
            columns.push((a[i - 1], b[j - 1], EditOp::Match));
            i -= 1;
            j -= 1;
        } else if i > 0 && j > 0 && cost == matrix.get(i - 1, j - 1) + 1 {
            columns.push((a[i - 1], b[j - 1], EditOp::Substitute));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || cost == matrix.get(i, j - 1) + 1) {
            columns.push((gap, b[j - 1], EditOp::Insert));
            j -= 1;
        } else {
            columns.push((a[i - 1], gap, EditOp::Delete));
            i -= 1;
        }
    }

    columns.reverse();

    let alignment = Alignment {
        aligned_a: columns.iter().map(|&(x, _, _)| x).collect(),
        aligned_b: columns.iter().map(|&(_, y, _)| y).collect(),
        operations: columns.into_iter().map(|(_, _, op)| op).collect(),
    };
    debug!(
        columns = alignment.operations.len(),
        cost = alignment.cost(),
        "traceback complete"
    );
    alignment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::matrix::build;

    fn run(a: &str, b: &str) -> Alignment {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let m = build(&a, &b);
        align(&m, &a, &b)
    }

    #[test]
    fn test_identical_single() {
        let al = run("a", "a");
        assert_eq!(al.aligned_a, "a");
        assert_eq!(al.aligned_b, "a");
        assert_eq!(al.operations, vec![EditOp::Match]);
        assert_eq!(al.cost(), 0);
    }

    #[test]
    fn test_leading_insertion() {
        let al = run("abc", "yabd");
        assert_eq!(al.aligned_a, "_abc");
        assert_eq!(al.aligned_b, "yabd");
        assert_eq!(
            al.operations,
            vec![
                EditOp::Insert,
                EditOp::Match,
                EditOp::Match,
                EditOp::Substitute
            ]
        );
        assert_eq!(al.cost(), 2);
    }

    #[test]
    fn test_kitten_sitting() {
        let al = run("kitten", "sitting");
        assert_eq!(al.aligned_a, "kitten_");
        assert_eq!(al.aligned_b, "sitting");
        assert_eq!(al.cost(), 3);
    }

    #[test]
    fn test_flaw_lawn() {
        let al = run("flaw", "lawn");
        assert_eq!(al.aligned_a, "flaw_");
        assert_eq!(al.aligned_b, "_lawn");
        assert_eq!(al.operations.first(), Some(&EditOp::Delete));
        assert_eq!(al.operations.last(), Some(&EditOp::Insert));
    }

    #[test]
    fn test_pure_deletion() {
        let al = run("abc", "b");
        assert_eq!(al.aligned_a, "abc");
        assert_eq!(al.aligned_b, "_b_");
    }

    #[test]
    fn test_custom_gap() {
        let a: Vec<char> = "ab".chars().collect();
        let b: Vec<char> = "b".chars().collect();
        let m = build(&a, &b);
        let al = align_with_gap(&m, &a, &b, '-');
        assert_eq!(al.aligned_a, "ab");
        assert_eq!(al.aligned_b, "-b");
    }

    #[test]
    fn test_deterministic() {
        let first = run("intention", "execution");
        let second = run("intention", "execution");
        assert_eq!(first, second);
        assert_eq!(first.aligned_a, "intention");
        assert_eq!(first.aligned_b, "execution");
        assert_eq!(first.cost(), 5);
    }

    #[test]
    #[should_panic(expected = "matrix is")]
    fn test_mismatched_matrix() {
        let a: Vec<char> = "ab".chars().collect();
        let m = build(&a, &a);
        let _ = align(&m, &a, &['x']);
    }
}
