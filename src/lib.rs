//! code-analyzer - source structure and complexity summaries.
//!
//! Given a file name and its text, code-analyzer infers the language from
//! the extension and reports line statistics, the functions, classes and
//! imports declared in the file, and heuristic complexity scores.
//!
//! Recognition is line-based and regex-driven rather than a full parse, so
//! it is fast and tolerant of broken code but misses declarations that span
//! several lines.
//!
//! # Architecture
//!
//! - `language`: extension-based language detection
//! - `analysis`: statistics, structure extraction, complexity, aggregation
//! - `runner`: file collection and parallel batch analysis
//! - `config`: YAML configuration file
//! - `report`: output formatting (text, JSON)
//! - `cli`, `logging`: the command-line binary
//!
//! # Example
//!
//! ```
//! use code_analyzer::{analyze, Language};
//!
//! let result = analyze("sample.py", "def foo(a, b):\n    if a:\n        return b\n");
//! assert!(result.success);
//! assert_eq!(result.language, Language::Python);
//! assert_eq!(result.structure.functions[0].name, "foo");
//! assert_eq!(result.complexity.cyclomatic_complexity, 2);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod language;
pub mod logging;
pub mod report;
pub mod runner;

pub use analysis::{
    analyze, AnalysisResult, Analyzer, ComplexityMetrics, Declaration, DeclarationKind,
    ImportDeclaration, LineStats, ScanLimits, SourceDocument, StructureSummary, TypeDeclaration,
};
pub use config::Config;
pub use error::AnalysisError;
pub use language::{detect, list_supported_languages, Language};
pub use runner::Runner;
