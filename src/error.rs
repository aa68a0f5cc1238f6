//! Error types for the lev-align crate.

use std::fmt;
use std::path::PathBuf;

/// Which of the two input words an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The first word (rows of the cost matrix).
    First,
    /// The second word (columns of the cost matrix).
    Second,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Second => f.write_str("second"),
        }
    }
}

/// Errors raised at the distance/alignment boundary and by the front ends.
#[derive(Debug, thiserror::Error)]
pub enum AlignError {
    /// An input word was empty (after normalization, if any was applied).
    #[error("invalid input: the {side} word is empty; both words must be non-empty")]
    InvalidInput { side: Side },

    /// An input word exceeds the configured length limit.
    #[error("invalid input: the {side} word has {len} characters (limit {max})")]
    InputTooLong { side: Side, len: usize, max: usize },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error with context.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience result type for lev-align operations.
pub type AlignResult<T> = Result<T, AlignError>;
