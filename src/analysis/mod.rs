//! Single-file structure and complexity analysis.
//!
//! # Architecture
//!
//! ```text
//!  filename ──▶ language::detect ──▶ Language
//!                                       │
//!        ┌──────────────────┬───────────┴──────────┐
//!        ▼                  ▼                      ▼
//!  stats::collect   structure::extract    complexity::compute
//!        │                  │                      │
//!        └──────────────────┴──────────┬───────────┘
//!                                      ▼
//!                          Analyzer ─▶ AnalysisResult
//! ```
//!
//! The three passes are independent and all read the same content. Only the
//! [`Analyzer`] sees their errors; callers always receive an
//! [`AnalysisResult`].

mod analyzer;
pub mod complexity;
pub mod stats;
pub mod structure;
mod text;
mod types;

pub use analyzer::{analyze, Analyzer};
pub use structure::{get_extractor, StructureExtractor};
pub use types::{
    AnalysisResult, ComplexityMetrics, Declaration, DeclarationKind, ImportDeclaration,
    LineStats, ScanLimits, SourceDocument, StructureSummary, TypeDeclaration,
};
