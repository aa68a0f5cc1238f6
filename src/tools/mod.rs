//! Word-pair operations served over JSON-RPC.
//!
//! Each operation takes `{"wordA", "wordB", "normalize"?}` and returns a
//! structured JSON value. Failures are typed as [`CallError`] so the server
//! can map them onto JSON-RPC error codes.

pub mod align;
pub mod distance;
pub mod matrix;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AlignError;
use crate::report::{Report, ReportConfig};

/// Why a call produced no result.
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    /// No operation with this name.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// The params did not match the operation's schema.
    #[error("invalid params for {operation}: {source}")]
    InvalidParams {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The words were rejected (empty or over the length limit).
    #[error(transparent)]
    Rejected(#[from] AlignError),

    /// The operation's output could not be encoded.
    #[error("failed to encode result: {0}")]
    Output(#[source] serde_json::Error),
}

/// Name, summary and params schema of one operation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationInfo {
    pub name: &'static str,
    pub summary: &'static str,
    pub params_schema: serde_json::Value,
}

/// The two words every operation takes, plus an optional normalization
/// override.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WordPairParams {
    /// First word (matrix rows).
    pub word_a: String,
    /// Second word (matrix columns).
    pub word_b: String,
    /// Override [`ReportConfig::normalize`] for this call.
    #[serde(default)]
    pub normalize: Option<bool>,
}

impl WordPairParams {
    fn parse(operation: &'static str, params: serde_json::Value) -> Result<Self, CallError> {
        serde_json::from_value(params).map_err(|source| CallError::InvalidParams { operation, source })
    }

    /// Run the report pipeline for these words under `config`.
    pub fn compute(&self, config: &ReportConfig) -> crate::AlignResult<Report> {
        let mut config = config.clone();
        if let Some(normalize) = self.normalize {
            config.normalize = normalize;
        }
        Report::compute(&self.word_a, &self.word_b, &config)
    }
}

/// Params schema shared by all operations.
fn word_pair_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "wordA": { "type": "string", "description": "First word" },
            "wordB": { "type": "string", "description": "Second word" },
            "normalize": {
                "type": "boolean",
                "description": "Trim, lowercase and drop non-letters first (default: server setting)"
            }
        },
        "required": ["wordA", "wordB"],
        "additionalProperties": false
    })
}

type Handler = fn(&ReportConfig, &WordPairParams) -> Result<serde_json::Value, CallError>;

/// Operation table: name, summary, handler.
const OPERATIONS: &[(&str, &str, Handler)] = &[
    (
        "edit_distance",
        "Distance, cost matrix and one optimal alignment, plus the plain-text report",
        distance::run,
    ),
    (
        "align",
        "One optimal alignment with per-column operations",
        align::run,
    ),
    (
        "matrix",
        "The cost matrix as rows and as an indexed text table",
        matrix::run,
    ),
];

/// Dispatches operation calls under one default [`ReportConfig`].
pub struct ToolRouter {
    config: ReportConfig,
}

impl ToolRouter {
    /// Create a new router.
    #[must_use]
    pub const fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Describe every operation.
    #[must_use]
    pub fn operations() -> Vec<OperationInfo> {
        OPERATIONS
            .iter()
            .map(|&(name, summary, _)| OperationInfo {
                name,
                summary,
                params_schema: word_pair_schema(),
            })
            .collect()
    }

    /// Whether `name` is an operation this router serves.
    #[must_use]
    pub fn serves(name: &str) -> bool {
        OPERATIONS.iter().any(|&(n, _, _)| n == name)
    }

    /// Run operation `name` with JSON `params`.
    pub fn call(&self, name: &str, params: serde_json::Value) -> Result<serde_json::Value, CallError> {
        let Some(&(operation, _, handler)) = OPERATIONS.iter().find(|&&(n, _, _)| n == name) else {
            return Err(CallError::UnknownOperation(name.to_owned()));
        };
        debug!(operation, "dispatching call");
        let words = WordPairParams::parse(operation, params)?;
        handler(&self.config, &words)
    }
}

/// Serialize an operation's output into the response value.
fn to_value(output: &impl Serialize) -> Result<serde_json::Value, CallError> {
    serde_json::to_value(output).map_err(CallError::Output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn router() -> ToolRouter {
        ToolRouter::new(ReportConfig::default())
    }

    #[test]
    fn test_operation_names() {
        let names: Vec<&str> = ToolRouter::operations().iter().map(|op| op.name).collect();
        assert_eq!(names, vec!["edit_distance", "align", "matrix"]);
        assert!(ToolRouter::serves("align"));
        assert!(!ToolRouter::serves("ping"));
    }

    #[test]
    fn test_normalize_override() {
        let raw = router()
            .call("align", json!({"wordA": "Ab", "wordB": "ab", "normalize": false}))
            .expect("raw call");
        assert_eq!(raw["distance"], 1);

        let normalized = router()
            .call("align", json!({"wordA": "Ab", "wordB": "ab"}))
            .expect("normalized call");
        assert_eq!(normalized["distance"], 0);
    }

    #[test]
    fn test_unknown_operation() {
        let err = router().call("diff", json!({})).expect_err("unknown");
        assert!(matches!(err, CallError::UnknownOperation(ref name) if name == "diff"));
    }

    #[test]
    fn test_bad_params() {
        let err = router()
            .call("matrix", json!({"wordA": "abc"}))
            .expect_err("missing wordB");
        assert!(matches!(err, CallError::InvalidParams { operation: "matrix", .. }));

        let err = router()
            .call("matrix", json!({"wordA": "a", "wordB": "b", "gap": "-"}))
            .expect_err("unknown field");
        assert!(matches!(err, CallError::InvalidParams { .. }));
    }

    #[test]
    fn test_rejected_words() {
        let err = router()
            .call("edit_distance", json!({"wordA": "1234", "wordB": "abc"}))
            .expect_err("empty after normalization");
        assert!(matches!(err, CallError::Rejected(AlignError::InvalidInput { .. })));
        assert!(err.to_string().contains("both words must be non-empty"));
    }
}
