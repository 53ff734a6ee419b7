//! Line-oriented structure extraction.
//!
//! Each supported language provides a [`StructureExtractor`] made of
//! single-line regular expressions for three declaration kinds: functions,
//! types and imports. The kinds are checked independently on every line, so
//! one line can yield e.g. both a function and an import, but never two
//! functions.
//!
//! These are deliberately shallow recognizers. Declarations spanning several
//! lines (wrapped parameter lists, decorators, annotations) are not seen.
//!
//! # Adding a New Language
//!
//! Implement `StructureExtractor` in a new module and map the language to it
//! in [`get_extractor`].

mod go;
mod java;
mod javascript;
mod python;

pub use go::GoExtractor;
pub use java::JavaExtractor;
pub use javascript::JavaScriptExtractor;
pub use python::PythonExtractor;

use regex::{Captures, Regex};

use crate::error::AnalysisError;
use crate::language::Language;

use super::{text, Declaration, ImportDeclaration, ScanLimits, StructureSummary, TypeDeclaration};

/// Language-specific declaration recognizer.
///
/// Every method receives one trimmed source line and its 1-based number.
pub trait StructureExtractor: Send + Sync {
    /// Returns the language identifier (e.g., "go", "python").
    fn language_id(&self) -> &'static str;

    /// Recognize a function or method header.
    fn function(&self, line: &str, line_number: usize) -> Option<Declaration>;

    /// Recognize a class, struct or type header.
    fn type_declaration(&self, line: &str, line_number: usize) -> Option<TypeDeclaration>;

    /// Recognize an import statement.
    fn import(&self, line: &str, line_number: usize) -> Option<ImportDeclaration>;
}

static PYTHON_EXTRACTOR: PythonExtractor = PythonExtractor;
static JAVASCRIPT_EXTRACTOR: JavaScriptExtractor = JavaScriptExtractor;
static JAVA_EXTRACTOR: JavaExtractor = JavaExtractor;
static GO_EXTRACTOR: GoExtractor = GoExtractor;

/// Get the extractor for a language.
///
/// Returns None for [`Language::Unknown`].
pub fn get_extractor(language: Language) -> Option<&'static dyn StructureExtractor> {
    match language {
        Language::Python => Some(&PYTHON_EXTRACTOR),
        // TypeScript shares the JavaScript rules
        Language::JavaScript | Language::TypeScript => Some(&JAVASCRIPT_EXTRACTOR),
        Language::Java => Some(&JAVA_EXTRACTOR),
        Language::Go => Some(&GO_EXTRACTOR),
        Language::Unknown => None,
    }
}

/// Extract functions, types and imports from `content`.
///
/// Unknown languages yield an empty summary without scanning. Otherwise
/// every line is checked against `limits` before it is matched, and the
/// first offending line aborts the extraction.
pub fn extract(
    content: &str,
    language: Language,
    limits: &ScanLimits,
) -> Result<StructureSummary, AnalysisError> {
    let mut summary = StructureSummary::new();

    let extractor = match get_extractor(language) {
        Some(e) => e,
        None => return Ok(summary),
    };

    for (idx, line) in content.split('\n').enumerate() {
        let line_number = idx + 1;
        check_line(line, line_number, limits)?;

        let trimmed = text::trim(line);
        if let Some(decl) = extractor.function(trimmed, line_number) {
            summary.functions.push(decl);
        }
        if let Some(ty) = extractor.type_declaration(trimmed, line_number) {
            summary.classes.push(ty);
        }
        if let Some(import) = extractor.import(trimmed, line_number) {
            summary.imports.push(import);
        }
    }

    Ok(summary)
}

/// Reject lines the scanner should not process.
fn check_line(line: &str, line_number: usize, limits: &ScanLimits) -> Result<(), AnalysisError> {
    if line.contains('\0') {
        return Err(AnalysisError::BinaryContent { line: line_number });
    }

    let Some(max) = limits.max_line_length else {
        return Ok(());
    };

    // Byte length bounds the character count from above.
    if line.len() > max {
        let length = line.chars().count();
        if length > max {
            return Err(AnalysisError::LineTooLong {
                line: line_number,
                length,
                max,
            });
        }
    }

    Ok(())
}

/// Search `line` with each pattern in order; the first hit wins.
fn first_match<'t>(patterns: &[Regex], line: &'t str) -> Option<Captures<'t>> {
    patterns.iter().find_map(|p| p.captures(line))
}

/// Text of a capture group, or "" when the group did not participate.
fn group<'t>(caps: &Captures<'t>, idx: usize) -> &'t str {
    caps.get(idx).map_or("", |m| m.as_str())
}
