//! Dynamic-programming cost matrix for the Levenshtein distance.
//!
//! Cell `(i, j)` holds the minimum number of single-symbol insertions,
//! deletions and substitutions that turn the first `i` symbols of `a` into
//! the first `j` symbols of `b`. The table is kept in full (no two-row
//! rolling buffer) because the aligner walks it afterwards.

use std::fmt;

/// A `(m + 1) × (n + 1)` table of edit costs, stored row-major in one
/// contiguous buffer.
///
/// Only [`build`] creates one; there are no mutators.
#[derive(Clone, PartialEq, Eq)]
pub struct CostMatrix {
    cells: Vec<usize>, // row * cols + col
    rows: usize,
    cols: usize,
}

impl CostMatrix {
    /// Number of rows, `len(a) + 1`.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `len(b) + 1`.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Cost of turning `a[..i]` into `b[..j]`.
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` lies outside the table.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.rows && j < self.cols,
            "cell ({i}, {j}) outside {}x{} matrix",
            self.rows,
            self.cols
        );
        self.cells[i * self.cols + j]
    }

    /// Row `i` as a slice of `cols()` costs.
    #[must_use]
    pub fn row(&self, i: usize) -> &[usize] {
        let start = i * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Iterate over the rows in ascending order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[usize]> {
        self.cells.chunks(self.cols)
    }

    /// Copy the table out as nested rows (used for JSON output).
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<usize>> {
        self.iter_rows().map(<[usize]>::to_vec).collect()
    }

    /// The edit distance: the bottom-right cell.
    #[must_use]
    pub fn distance(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }
}

impl fmt::Debug for CostMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter_rows()).finish()
    }
}

/// Build the cost matrix for `a` against `b`.
///
/// Row 0 and column 0 hold the pure insertion/deletion costs `0..=n` and
/// `0..=m`. Every inner cell copies its diagonal neighbour when the symbols
/// are equal and is otherwise one more than the cheapest of its upper
/// (deletion), left (insertion) and diagonal (substitution) neighbours.
/// Cells are filled in ascending `i`, then ascending `j`, so all three
/// neighbours exist when a cell is computed.
///
/// Never fails. Empty inputs yield a single row or column of boundary
/// costs; rejecting them is the caller's job.
#[must_use]
pub fn build<T: PartialEq>(a: &[T], b: &[T]) -> CostMatrix {
    let rows = a.len() + 1;
    let cols = b.len() + 1;
    let mut cells = vec![0usize; rows * cols];

    for (j, cell) in cells[..cols].iter_mut().enumerate() {
        *cell = j;
    }
    for i in 1..rows {
        cells[i * cols] = i;
    }

    for i in 1..rows {
        let (done, current) = cells.split_at_mut(i * cols);
        let up_row = &done[(i - 1) * cols..];
        let row = &mut current[..cols];
        for j in 1..cols {
            row[j] = if a[i - 1] == b[j - 1] {
                up_row[j - 1]
            } else {
                1 + up_row[j] // deletion
                    .min(row[j - 1]) // insertion
                    .min(up_row[j - 1]) // substitution
            };
        }
    }

    CostMatrix { cells, rows, cols }
}
