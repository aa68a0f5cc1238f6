//! Full edit-distance report: normalize, build, align, render.
//!
//! This is what the front ends call. It owns the caller-side policy
//! (normalization, length limit, gap marker) that the distance code leaves
//! to its callers, and renders the result either as the plain-text report
//! or as JSON.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::distance::{self, EditOp, GAP, align_with_gap, build, format_matrix};
use crate::error::{AlignError, AlignResult, Side};
use crate::normalize::normalize_word;

/// Default cap on normalized word length.
///
/// The matrix is `O(m * n)`; 1000 × 1000 is about 8 MB of `usize` cells.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 1000;

/// Caller policy applied before the matrix is built.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Trim, lowercase and strip non-letters from both words.
    pub normalize: bool,
    /// Reject words longer than this many characters (after normalization).
    pub max_input_chars: Option<usize>,
    /// Gap marker used in the alignment.
    pub gap: char,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            normalize: true,
            max_input_chars: Some(DEFAULT_MAX_INPUT_CHARS),
            gap: GAP,
        }
    }
}

/// Output encoding for [`Report::write_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

/// The result of one edit-distance computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// First word as compared (after normalization).
    pub word_a: String,
    /// Second word as compared (after normalization).
    pub word_b: String,
    pub distance: usize,
    /// The cost matrix, one inner vector per row.
    pub matrix: Vec<Vec<usize>>,
    pub aligned_a: String,
    pub aligned_b: String,
    pub operations: Vec<EditOp>,
    #[serde(skip)]
    matrix_text: String,
}

impl Report {
    /// Run the whole pipeline on two raw words.
    ///
    /// # Errors
    ///
    /// [`AlignError::InvalidInput`] if a word is empty after normalization,
    /// [`AlignError::InputTooLong`] if a word exceeds
    /// [`ReportConfig::max_input_chars`].
    pub fn compute(raw_a: &str, raw_b: &str, config: &ReportConfig) -> AlignResult<Self> {
        let (word_a, word_b) = if config.normalize {
            (normalize_word(raw_a), normalize_word(raw_b))
        } else {
            (raw_a.to_owned(), raw_b.to_owned())
        };

        let (a, b) = distance::to_sequences(&word_a, &word_b)?;
        if let Some(max) = config.max_input_chars {
            check_len(Side::First, a.len(), max)?;
            check_len(Side::Second, b.len(), max)?;
        }

        let matrix = build(&a, &b);
        let alignment = align_with_gap(&matrix, &a, &b, config.gap);
        debug!(
            word_a = %word_a,
            word_b = %word_b,
            distance = matrix.distance(),
            "report computed"
        );

        Ok(Self {
            distance: matrix.distance(),
            matrix: matrix.to_rows(),
            matrix_text: format_matrix(&matrix),
            aligned_a: alignment.aligned_a,
            aligned_b: alignment.aligned_b,
            operations: alignment.operations,
            word_a,
            word_b,
        })
    }

    /// The formatted matrix table alone.
    #[must_use]
    pub fn matrix_text(&self) -> &str {
        &self.matrix_text
    }

    /// Render the plain-text report: matrix, distance, alignment.
    #[must_use]
    pub fn render_text(&self) -> String {
        format!(
            "{}\nThe edit distance is: {}\n\nAlignment is:\n{}\n{}\n",
            self.matrix_text, self.distance, self.aligned_a, self.aligned_b
        )
    }

    /// Render the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`AlignError::Json`] if serialization fails.
    pub fn to_json(&self) -> AlignResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render in `format`.
    ///
    /// # Errors
    ///
    /// Returns [`AlignError::Json`] if JSON serialization fails.
    pub fn render(&self, format: ReportFormat) -> AlignResult<String> {
        match format {
            ReportFormat::Text => Ok(self.render_text()),
            ReportFormat::Json => self.to_json(),
        }
    }

    /// Atomically write the rendered report to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`AlignError::Io`] if the file cannot be written.
    pub fn write_to(&self, path: &Path, format: ReportFormat) -> AlignResult<()> {
        let rendered = self.render(format)?;
        crate::util::atomic::atomic_write(path, &rendered)
    }
}

fn check_len(side: Side, len: usize, max: usize) -> AlignResult<()> {
    if len > max {
        return Err(AlignError::InputTooLong { side, len, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_layout() {
        let report = Report::compute("a", "a", &ReportConfig::default()).expect("valid");
        let expected = "The matrix:\n\n     0   1\n   -------\n\
            0 |  0:  1:\n   --------\n\
            1 |  1:  0:\n   --------\n\
            \nThe edit distance is: 0\n\nAlignment is:\na\na\n";
        assert_eq!(report.render_text(), expected);
    }

    #[test]
    fn test_normalizes_inputs() {
        let report =
            Report::compute("  Kitten! ", "SITTING", &ReportConfig::default()).expect("valid");
        assert_eq!(report.word_a, "kitten");
        assert_eq!(report.word_b, "sitting");
        assert_eq!(report.distance, 3);
        assert_eq!(report.aligned_a, "kitten_");
        assert_eq!(report.aligned_b, "sitting");
    }

    #[test]
    fn test_raw_mode_keeps_case() {
        let config = ReportConfig {
            normalize: false,
            ..ReportConfig::default()
        };
        let report = Report::compute("Ab", "ab", &config).expect("valid");
        assert_eq!(report.distance, 1);
    }

    #[test]
    fn test_empty_after_normalization() {
        let err = Report::compute("123", "abc", &ReportConfig::default()).expect_err("first word has no letters");
        assert!(matches!(err, AlignError::InvalidInput { side: Side::First }));
    }

    #[test]
    fn test_length_limit() {
        let config = ReportConfig {
            max_input_chars: Some(3),
            ..ReportConfig::default()
        };
        let err = Report::compute("abc", "abcd", &config).expect_err("second word over the limit");
        assert!(matches!(
            err,
            AlignError::InputTooLong {
                side: Side::Second,
                len: 4,
                max: 3
            }
        ));

        let unlimited = ReportConfig {
            max_input_chars: None,
            ..ReportConfig::default()
        };
        assert!(Report::compute("abc", "abcd", &unlimited).is_ok());
    }

    #[test]
    fn test_custom_gap() {
        let config = ReportConfig {
            gap: '-',
            ..ReportConfig::default()
        };
        let report = Report::compute("flaw", "lawn", &config).expect("valid");
        assert_eq!(report.aligned_a, "flaw-");
        assert_eq!(report.aligned_b, "-lawn");
    }

    #[test]
    fn test_json_fields() {
        let report = Report::compute("abc", "yabd", &ReportConfig::default()).expect("valid");
        let value: serde_json::Value =
            serde_json::from_str(&report.to_json().expect("json")).expect("parse");
        assert_eq!(value["distance"], 2);
        assert_eq!(value["aligned_a"], "_abc");
        assert_eq!(value["matrix"][3][4], 2);
        assert_eq!(value["operations"][0], "insert");
        assert_eq!(value["operations"][3], "substitute");
        assert!(value.get("matrix_text").is_none());
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.txt");
        let report = Report::compute("flaw", "lawn", &ReportConfig::default()).expect("valid");
        report.write_to(&path, ReportFormat::Text).expect("write");
        let written = std::fs::read_to_string(&path).expect("read");
        assert_eq!(written, report.render_text());
        assert!(written.contains("The edit distance is: 2"));
    }
}
