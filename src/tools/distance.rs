//! `edit_distance`: the whole report, structured and as text.

use serde::Serialize;

use crate::report::{Report, ReportConfig};

use super::{CallError, WordPairParams, to_value};

#[derive(Debug, Serialize)]
struct DistanceOutput<'a> {
    #[serde(flatten)]
    report: &'a Report,
    /// The plain-text report (matrix table, distance, alignment).
    text: String,
}

pub fn run(config: &ReportConfig, words: &WordPairParams) -> Result<serde_json::Value, CallError> {
    let report = words.compute(config)?;
    to_value(&DistanceOutput {
        report: &report,
        text: report.render_text(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kitten_sitting() {
        let words = WordPairParams {
            word_a: "Kitten".to_owned(),
            word_b: "sitting!".to_owned(),
            normalize: None,
        };
        let out = run(&ReportConfig::default(), &words).expect("valid words");
        assert_eq!(out["distance"], 3);
        assert_eq!(out["word_a"], "kitten");
        assert_eq!(out["matrix"][6][7], 3);
        let text = out["text"].as_str().expect("text field");
        assert!(text.starts_with("The matrix:\n\n"));
        assert!(text.ends_with("The edit distance is: 3\n\nAlignment is:\nkitten_\nsitting\n"));
    }
}
