//! Value types produced by an analysis.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::language::Language;

/// A source file handed to the analyzer by its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceDocument<'a> {
    pub filename: &'a str,
    pub content: &'a str,
}

impl<'a> SourceDocument<'a> {
    pub fn new(filename: &'a str, content: &'a str) -> Self {
        Self { filename, content }
    }
}

/// Guards applied before structure extraction.
///
/// Every limit is off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanLimits {
    /// Longest line (in characters) the extractor will scan.
    #[serde(default)]
    pub max_line_length: Option<usize>,
}

impl ScanLimits {
    /// Limits that reject lines longer than `max` characters.
    pub fn with_max_line_length(max: usize) -> Self {
        Self {
            max_line_length: Some(max),
        }
    }
}

/// Line and character counts for a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStats {
    pub total_lines: usize,
    pub non_empty_lines: usize,
    pub comment_lines: usize,
    pub character_count: usize,
    /// Number of entries in [`StructureSummary::functions`].
    pub functions_count: usize,
    /// Number of entries in [`StructureSummary::classes`].
    pub classes_count: usize,
}

/// Kind tag of a recognized function header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Function,
    Method,
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Function => "function",
            DeclarationKind::Method => "method",
        }
    }
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A function or method header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    /// Raw parameter list text, exactly as captured.
    pub parameters: String,
    /// Line number (1-indexed)
    pub line_number: usize,
    /// Always empty: no doc comment association is performed.
    pub docstring: String,
    #[serde(rename = "type")]
    pub kind: DeclarationKind,
}

impl Declaration {
    pub fn new(name: &str, parameters: &str, line_number: usize, kind: DeclarationKind) -> Self {
        Self {
            name: name.to_string(),
            parameters: parameters.to_string(),
            line_number,
            docstring: String::new(),
            kind,
        }
    }
}

/// A class, struct or type header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub name: String,
    pub line_number: usize,
    /// Reserved; methods are never associated with their type.
    pub methods: Vec<String>,
    pub docstring: String,
}

impl TypeDeclaration {
    pub fn new(name: &str, line_number: usize) -> Self {
        Self {
            name: name.to_string(),
            line_number,
            methods: Vec::new(),
            docstring: String::new(),
        }
    }
}

/// An import statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDeclaration {
    pub module: String,
    pub line_number: usize,
    /// Empty when the import has no alias.
    pub alias: String,
}

impl ImportDeclaration {
    pub fn new(module: &str, line_number: usize) -> Self {
        Self::with_alias(module, line_number, "")
    }

    pub fn with_alias(module: &str, line_number: usize, alias: &str) -> Self {
        Self {
            module: module.to_string(),
            line_number,
            alias: alias.to_string(),
        }
    }
}

/// Declarations found in a document, each list in source line order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureSummary {
    pub functions: Vec<Declaration>,
    pub classes: Vec<TypeDeclaration>,
    pub imports: Vec<ImportDeclaration>,
}

impl StructureSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.classes.is_empty() && self.imports.is_empty()
    }
}

/// Heuristic complexity scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplexityMetrics {
    pub cyclomatic_complexity: u32,
    pub nesting_depth: u32,
    pub maintainability_index: f64,
}

/// The outcome of analyzing one document.
///
/// A failed analysis carries no partial data: stats, structure and
/// complexity are all zeroed and `language` is [`Language::Unknown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub filename: String,
    pub language: Language,
    pub stats: LineStats,
    pub structure: StructureSummary,
    pub complexity: ComplexityMetrics,
    pub success: bool,
    pub error_message: String,
}

impl AnalysisResult {
    /// The canonical failure record for `filename`.
    pub fn failure(filename: &str, error: &AnalysisError) -> Self {
        Self {
            filename: filename.to_string(),
            language: Language::Unknown,
            stats: LineStats::default(),
            structure: StructureSummary::default(),
            complexity: ComplexityMetrics::default(),
            success: false,
            error_message: error.to_string(),
        }
    }

    /// Number of functions and methods found.
    pub fn function_count(&self) -> usize {
        self.structure.functions.len()
    }

    /// Number of classes and types found.
    pub fn class_count(&self) -> usize {
        self.structure.classes.len()
    }
}
