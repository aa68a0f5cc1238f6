//! `matrix`: the cost matrix on its own.

use serde::Serialize;

use crate::report::ReportConfig;

use super::{CallError, WordPairParams, to_value};

#[derive(Debug, Serialize)]
struct MatrixOutput<'a> {
    rows: usize,
    cols: usize,
    cells: &'a [Vec<usize>],
    text: &'a str,
}

pub fn run(config: &ReportConfig, words: &WordPairParams) -> Result<serde_json::Value, CallError> {
    let report = words.compute(config)?;
    to_value(&MatrixOutput {
        rows: report.matrix.len(),
        cols: report.matrix.first().map_or(0, Vec::len),
        cells: &report.matrix,
        text: report.matrix_text(),
    })
}
