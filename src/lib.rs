//! `lev-align`: Levenshtein edit distance with the full cost matrix and a
//! deterministic optimal alignment.
//!
//! The core in [`distance`] is pure and synchronous: build the
//! `(m + 1) × (n + 1)` cost matrix, read the distance from its bottom-right
//! cell, and trace back one alignment. [`report`] layers the caller policy
//! on top (normalization, length limit, text/JSON rendering), and [`server`]
//! answers JSON-RPC 2.0 calls to its operations over stdio.
//!
//! # Architecture
//!
//! ```text
//! CLI args ─────────────────────────────────┐
//! stdin (JSON-RPC) → server::handle_line → ToolRouter::call ─┴→ Report::compute
//!                                               ↓
//!                              normalize → matrix::build → traceback::align
//! stdout ←──────────── render_text / to_json ←──┘
//! ```
//!
//! # Example
//!
//! ```
//! let (distance, matrix) = lev_align::compute_distance("kitten", "sitting")?;
//! assert_eq!(distance, 3);
//! let (a, b) = lev_align::compute_alignment(&matrix, "kitten", "sitting");
//! assert_eq!((a.as_str(), b.as_str()), ("kitten_", "sitting"));
//! # Ok::<(), lev_align::AlignError>(())
//! ```

pub mod distance;
pub mod error;
pub mod normalize;
pub mod report;
pub mod server;
pub mod tools;
pub mod util;

pub use distance::{Alignment, CostMatrix, EditOp, compute_alignment, compute_distance};
pub use error::{AlignError, AlignResult, Side};
pub use report::{Report, ReportConfig, ReportFormat};
pub use server::run_server;
