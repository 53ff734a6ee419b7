//! Errors raised while analyzing a single source document.
//!
//! These never cross the public `analyze` boundary: the aggregator turns
//! them into a failed [`AnalysisResult`](crate::analysis::AnalysisResult).

use thiserror::Error;

/// Faults that abort the analysis of one document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The content contains NUL characters and is not source text.
    #[error("content looks binary: NUL character on line {line}")]
    BinaryContent { line: usize },

    /// The content is not UTF-8 text.
    #[error("content is not valid UTF-8 (first invalid byte at offset {offset})")]
    InvalidEncoding { offset: usize },

    /// The file could not be read.
    #[error("cannot read {path}: {message}")]
    Read { path: String, message: String },

    /// A single line exceeds the configured scanning limit.
    #[error("line {line} is {length} characters long, limit is {max}")]
    LineTooLong {
        line: usize,
        length: usize,
        max: usize,
    },

    /// Arithmetic fault while computing complexity metrics.
    #[error("complexity calculation failed: {0}")]
    Complexity(String),
}
