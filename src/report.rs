//! Output formatting for analysis results.
//!
//! Supports two output formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::analysis::AnalysisResult;
use crate::language::Language;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Pretty,
    Json,
}

// =============================================================================
// JSON Format
// =============================================================================

/// JSON envelope around a batch of results.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub files_analyzed: usize,
    pub failures: usize,
    pub results: Vec<AnalysisResult>,
}

impl JsonReport {
    pub fn new(results: &[AnalysisResult]) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            files_analyzed: results.len(),
            failures: results.iter().filter(|r| !r.success).count(),
            results: results.to_vec(),
        }
    }
}

/// JSON answer to a capability query.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonLanguages {
    pub languages: Vec<Language>,
}

/// Write results in JSON format.
pub fn write_json(results: &[AnalysisResult]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&JsonReport::new(results))?;
    println!("{}", json);
    Ok(())
}

/// Write the supported languages in JSON format.
pub fn write_languages_json(languages: &[Language]) -> anyhow::Result<()> {
    let report = JsonLanguages {
        languages: languages.to_vec(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write results in human-readable format.
pub fn write_pretty(results: &[AnalysisResult]) {
    print!("{}", render_pretty(results));
}

/// Write the supported languages, one per line.
pub fn write_languages_pretty(languages: &[Language]) {
    println!("{}", "Supported languages:".bold());
    for lang in languages {
        println!("  {}", lang);
    }
}

/// Render results as colored text.
pub fn render_pretty(results: &[AnalysisResult]) -> String {
    let mut out = String::new();

    for result in results {
        render_one(&mut out, result);
        out.push('\n');
    }

    let failures = results.iter().filter(|r| !r.success).count();
    let summary = format!("{} file(s) analyzed, {} failed", results.len(), failures);
    if failures > 0 {
        let _ = writeln!(out, "{}", summary.red().bold());
    } else {
        let _ = writeln!(out, "{}", summary.green().bold());
    }

    out
}

fn render_one(out: &mut String, result: &AnalysisResult) {
    if !result.success {
        let _ = writeln!(
            out,
            "{} {}: {}",
            "✗".red(),
            result.filename.bold(),
            result.error_message.red()
        );
        return;
    }

    let _ = writeln!(
        out,
        "{} {} ({})",
        "✓".green(),
        result.filename.bold(),
        result.language.to_string().cyan()
    );

    let stats = &result.stats;
    let _ = writeln!(
        out,
        "  lines: {} total, {} non-empty, {} comments; {} characters",
        stats.total_lines, stats.non_empty_lines, stats.comment_lines, stats.character_count
    );

    let cx = &result.complexity;
    let _ = writeln!(
        out,
        "  complexity: cyclomatic {}, nesting {}, maintainability {}",
        cx.cyclomatic_complexity,
        cx.nesting_depth,
        colorize_maintainability(cx.maintainability_index)
    );

    if !result.structure.imports.is_empty() {
        let _ = writeln!(out, "  {} ({}):", "imports".dimmed(), result.structure.imports.len());
        for import in &result.structure.imports {
            if import.alias.is_empty() {
                let _ = writeln!(out, "    {:>5}  {}", import.line_number, import.module);
            } else {
                let _ = writeln!(
                    out,
                    "    {:>5}  {} as {}",
                    import.line_number, import.module, import.alias
                );
            }
        }
    }

    if !result.structure.classes.is_empty() {
        let _ = writeln!(out, "  {} ({}):", "classes".dimmed(), stats.classes_count);
        for class in &result.structure.classes {
            let _ = writeln!(out, "    {:>5}  {}", class.line_number, class.name);
        }
    }

    if !result.structure.functions.is_empty() {
        let _ = writeln!(out, "  {} ({}):", "functions".dimmed(), stats.functions_count);
        for func in &result.structure.functions {
            let _ = writeln!(
                out,
                "    {:>5}  {} {}({})",
                func.line_number, func.kind, func.name, func.parameters
            );
        }
    }
}

fn colorize_maintainability(index: f64) -> ColoredString {
    let text = format!("{:.1}", index);
    if index >= 70.0 {
        text.green()
    } else if index >= 40.0 {
        text.yellow()
    } else {
        text.red()
    }
}
