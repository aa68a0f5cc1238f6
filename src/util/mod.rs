//! Small filesystem helpers.

pub mod atomic;
