//! Per-document analysis entry point.

use tracing::{debug, warn};

use crate::error::AnalysisError;
use crate::language::detect;

use super::{complexity, stats, structure};
use super::{AnalysisResult, ScanLimits, SourceDocument};

/// Runs language detection, statistics, structure extraction and complexity
/// scoring for one document at a time.
///
/// `Analyzer` holds only its scan limits, so a single instance can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Analyzer {
    limits: ScanLimits,
}

impl Analyzer {
    /// Create an analyzer with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom limits.
    pub fn with_limits(limits: ScanLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ScanLimits {
        &self.limits
    }

    /// Analyze `content` as the file `filename`.
    ///
    /// Never fails: any fault yields [`AnalysisResult::failure`].
    pub fn analyze(&self, filename: &str, content: &str) -> AnalysisResult {
        self.analyze_document(SourceDocument::new(filename, content))
    }

    /// Analyze raw file bytes; content that is not UTF-8 is a failure.
    pub fn analyze_bytes(&self, filename: &str, bytes: &[u8]) -> AnalysisResult {
        match std::str::from_utf8(bytes) {
            Ok(content) => self.analyze(filename, content),
            Err(e) => {
                let err = AnalysisError::InvalidEncoding {
                    offset: e.valid_up_to(),
                };
                warn!(file = filename, error = %err, "analysis failed");
                AnalysisResult::failure(filename, &err)
            }
        }
    }

    /// Analyze a borrowed document.
    pub fn analyze_document(&self, doc: SourceDocument<'_>) -> AnalysisResult {
        match self.try_analyze(doc) {
            Ok(result) => {
                debug!(
                    file = doc.filename,
                    language = %result.language,
                    functions = result.stats.functions_count,
                    classes = result.stats.classes_count,
                    cyclomatic = result.complexity.cyclomatic_complexity,
                    "analysis complete"
                );
                result
            }
            Err(e) => {
                warn!(file = doc.filename, error = %e, "analysis failed");
                AnalysisResult::failure(doc.filename, &e)
            }
        }
    }

    fn try_analyze(&self, doc: SourceDocument<'_>) -> Result<AnalysisResult, AnalysisError> {
        let language = detect(doc.filename);

        let mut stats = stats::collect(doc.content, language);
        let structure = structure::extract(doc.content, language, &self.limits)?;
        stats.functions_count = structure.functions.len();
        stats.classes_count = structure.classes.len();

        let complexity = complexity::compute(doc.content, language)?;

        Ok(AnalysisResult {
            filename: doc.filename.to_string(),
            language,
            stats,
            structure,
            complexity,
            success: true,
            error_message: String::new(),
        })
    }
}

/// Analyze one document with default limits.
pub fn analyze(filename: &str, content: &str) -> AnalysisResult {
    Analyzer::default().analyze(filename, content)
}
