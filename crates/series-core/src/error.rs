// File: crates/series-core/src/error.rs
// Summary: Construction-time error type; derivation itself never fails.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    /// A hardcoded table does not cover the chart's year range.
    #[error("dataset '{label}' has {actual} points, expected {expected}")]
    LengthMismatch {
        label: String,
        expected: usize,
        actual: usize,
    },
}
