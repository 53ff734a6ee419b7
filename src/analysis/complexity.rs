//! Keyword-based complexity heuristics.
//!
//! - Cyclomatic complexity: start at 1, add 1 for every control-flow keyword
//!   of the language that appears on a line (each keyword counts once per
//!   line), capped at 50.
//! - Nesting depth: indentation levels of 4 columns for Python, peak brace
//!   balance for everything else.
//! - Maintainability index: `max(0, 100 - 2 * cyclomatic - 5 * nesting)`.

use crate::error::AnalysisError;
use crate::language::Language;

use super::{text, ComplexityMetrics};

/// Highest cyclomatic complexity that is reported.
pub const MAX_CYCLOMATIC: u32 = 50;

/// Columns per Python indentation level.
const INDENT_WIDTH: usize = 4;

const PYTHON_KEYWORDS: &[&str] = &["if", "elif", "for", "while", "try", "except", "with"];
const C_FAMILY_KEYWORDS: &[&str] = &["if", "for", "while", "try", "catch", "switch"];
const GO_KEYWORDS: &[&str] = &["if", "for", "switch", "select"];
const DEFAULT_KEYWORDS: &[&str] = &["if", "for", "while"];

/// Control-flow keywords counted for a language.
pub fn keywords(language: Language) -> &'static [&'static str] {
    match language {
        Language::Python => PYTHON_KEYWORDS,
        Language::JavaScript | Language::TypeScript | Language::Java => C_FAMILY_KEYWORDS,
        Language::Go => GO_KEYWORDS,
        Language::Unknown => DEFAULT_KEYWORDS,
    }
}

/// Compute all complexity metrics for `content`.
pub fn compute(content: &str, language: Language) -> Result<ComplexityMetrics, AnalysisError> {
    let cyclomatic = cyclomatic_complexity(content, language);
    let nesting = nesting_depth(content, language)?;

    Ok(ComplexityMetrics {
        cyclomatic_complexity: cyclomatic.min(MAX_CYCLOMATIC as usize) as u32,
        nesting_depth: u32::try_from(nesting).map_err(|_| {
            AnalysisError::Complexity(format!("nesting depth {} out of range", nesting))
        })?,
        maintainability_index: maintainability_index(cyclomatic, nesting),
    })
}

/// Uncapped keyword count, including the baseline path.
fn cyclomatic_complexity(content: &str, language: Language) -> usize {
    let keywords = keywords(language);
    let mut complexity = 1;

    for line in content.split('\n') {
        let padded = format!(" {} ", line);
        let trimmed = text::trim(line);
        for kw in keywords {
            if padded.contains(&format!(" {} ", kw)) || starts_with_token(trimmed, kw) {
                complexity += 1;
            }
        }
    }

    complexity
}

/// Whether `trimmed` begins with `kw` followed by a space.
fn starts_with_token(trimmed: &str, kw: &str) -> bool {
    trimmed
        .strip_prefix(kw)
        .is_some_and(|rest| rest.starts_with(' '))
}

/// Maximum nesting observed anywhere in the file.
fn nesting_depth(content: &str, language: Language) -> Result<usize, AnalysisError> {
    if language.is_brace_delimited() {
        brace_depth(content)
    } else {
        Ok(indent_depth(content))
    }
}

/// Deepest indentation level over non-blank lines.
fn indent_depth(content: &str) -> usize {
    content
        .split('\n')
        .filter(|line| !text::is_blank(line))
        .map(|line| text::leading_space(line) / INDENT_WIDTH)
        .max()
        .unwrap_or(0)
}

/// Peak of the running `{` minus `}` balance, checked line by line.
fn brace_depth(content: &str) -> Result<usize, AnalysisError> {
    let overflow = || AnalysisError::Complexity("brace balance overflow".to_string());

    let mut current: i64 = 0;
    let mut max_depth: i64 = 0;

    for line in content.split('\n') {
        let opens = i64::try_from(line.matches('{').count()).map_err(|_| overflow())?;
        let closes = i64::try_from(line.matches('}').count()).map_err(|_| overflow())?;
        current = current
            .checked_add(opens)
            .and_then(|v| v.checked_sub(closes))
            .ok_or_else(overflow)?;
        max_depth = max_depth.max(current);
    }

    usize::try_from(max_depth).map_err(|_| overflow())
}

/// `max(0, 100 - cyclomatic * 2 - nesting * 5)`.
fn maintainability_index(cyclomatic: usize, nesting: usize) -> f64 {
    let penalty = cyclomatic
        .saturating_mul(2)
        .saturating_add(nesting.saturating_mul(5));
    100usize.saturating_sub(penalty) as f64
}
