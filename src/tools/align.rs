//! `align`: one optimal alignment with its column operations.

use serde::Serialize;

use crate::distance::EditOp;
use crate::report::ReportConfig;

use super::{CallError, WordPairParams, to_value};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AlignOutput<'a> {
    distance: usize,
    aligned_a: &'a str,
    aligned_b: &'a str,
    operations: &'a [EditOp],
}

pub fn run(config: &ReportConfig, words: &WordPairParams) -> Result<serde_json::Value, CallError> {
    let report = words.compute(config)?;
    to_value(&AlignOutput {
        distance: report.distance,
        aligned_a: &report.aligned_a,
        aligned_b: &report.aligned_b,
        operations: &report.operations,
    })
}
