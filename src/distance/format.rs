//! Plain-text rendering of a cost matrix.
//!
//! The layout is fixed: a column-index header, then one line per row
//! (`"{i} |"` followed by `"{cost:>3}:"` per column), each line followed by a
//! dashed rule as wide as that line minus three.

use std::fmt::Write as _;

use super::matrix::CostMatrix;

/// Render `matrix` as the `The matrix:` table.
#[must_use]
pub fn format_matrix(matrix: &CostMatrix) -> String {
    let mut output = String::from("The matrix:\n\n");

    let mut header = String::from("  ");
    for j in 0..matrix.cols() {
        let _ = write!(header, "{j:4}");
    }
    push_line(&mut output, &header);
    push_rule(&mut output, header.len());

    for (i, costs) in matrix.iter_rows().enumerate() {
        let mut row = format!("{i} |");
        for cost in costs {
            let _ = write!(row, "{cost:3}:");
        }
        push_line(&mut output, &row);
        push_rule(&mut output, row.len());
    }

    output
}

fn push_line(output: &mut String, line: &str) {
    output.push_str(line);
    output.push('\n');
}

/// Three spaces, then dashes for `line_len - 3` columns.
fn push_rule(output: &mut String, line_len: usize) {
    output.push_str("   ");
    output.push_str(&"-".repeat(line_len.saturating_sub(3)));
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::matrix::build;

    fn matrix(a: &str, b: &str) -> CostMatrix {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        build(&a, &b)
    }

    #[test]
    fn test_single_cell_words() {
        let expected = "The matrix:\n\n     0   1\n   -------\n\
            0 |  0:  1:\n   --------\n\
            1 |  1:  0:\n   --------\n";
        assert_eq!(format_matrix(&matrix("a", "a")), expected);
    }

    #[test]
    fn test_two_by_three() {
        let expected = "The matrix:\n\n     0   1   2   3\n   ---------------\n\
            0 |  0:  1:  2:  3:\n   ----------------\n\
            1 |  1:  0:  1:  2:\n   ----------------\n\
            2 |  2:  1:  0:  1:\n   ----------------\n";
        assert_eq!(format_matrix(&matrix("ab", "abc")), expected);
    }

    #[test]
    fn test_wide_row_labels_lengthen_rule() {
        let text = format_matrix(&matrix("abcdefghijkl", "ab"));
        assert!(text.contains("\n9 |  9:  8:  7:\n   ------------\n"));
        assert!(text.contains("\n10 | 10:  9:  8:\n   -------------\n"));
        assert!(text.ends_with("12 | 12: 11: 10:\n   -------------\n"));
    }
}
