//! Batch runner that collects files and analyzes them on a worker pool.

use std::fs;
use std::path::{Path, PathBuf};

use globset::GlobSet;
use rayon::prelude::*;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::analysis::{AnalysisResult, Analyzer};
use crate::config::Config;
use crate::error::AnalysisError;
use crate::language::{detect, Language};

/// Analyzes many files concurrently.
pub struct Runner {
    analyzer: Analyzer,
    exclude: GlobSet,
    follow_links: bool,
    jobs: Option<usize>,
}

impl Runner {
    /// Create a runner with default settings around `analyzer`.
    pub fn new(analyzer: Analyzer) -> Self {
        Self {
            analyzer,
            exclude: GlobSet::empty(),
            follow_links: false,
            jobs: None,
        }
    }

    /// Create a runner from a loaded configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            analyzer: Analyzer::with_limits(config.limits),
            exclude: config.exclude_set()?,
            follow_links: config.follow_links,
            jobs: config.jobs,
        })
    }

    /// Set the number of worker threads (None uses the rayon default).
    pub fn jobs(mut self, jobs: Option<usize>) -> Self {
        if jobs.is_some() {
            self.jobs = jobs;
        }
        self
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Expand `paths` into the files to analyze.
    ///
    /// Files named explicitly are always kept. Directories are walked for
    /// files in a supported language, skipping hidden directories and paths
    /// matching the exclude patterns. The result is sorted and deduplicated.
    pub fn collect_files(&self, paths: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for root in paths {
            let metadata = fs::metadata(root)
                .map_err(|e| anyhow::anyhow!("cannot access path {}: {}", root.display(), e))?;

            if !metadata.is_dir() {
                files.push(root.clone());
                continue;
            }

            for entry in WalkDir::new(root)
                .follow_links(self.follow_links)
                .into_iter()
                .filter_entry(|e| {
                    // Skip hidden directories below the root
                    !(e.depth() > 0
                        && e.file_type().is_dir()
                        && e.file_name().to_string_lossy().starts_with('.'))
                })
            {
                let entry = entry?;
                if !entry.file_type().is_file() {
                    continue;
                }

                let path = entry.path();
                if self.is_excluded(root, path) {
                    debug!(file = %path.display(), "excluded by config");
                    continue;
                }
                if detect(&path.to_string_lossy()) == Language::Unknown {
                    continue;
                }
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        files.dedup();
        Ok(files)
    }

    fn is_excluded(&self, root: &Path, path: &Path) -> bool {
        if self.exclude.is_empty() {
            return false;
        }
        let rel = path.strip_prefix(root).unwrap_or(path);
        self.exclude.is_match(path) || self.exclude.is_match(rel)
    }

    /// Analyze every file, in parallel. Results are in `files` order.
    pub fn run(&self, files: &[PathBuf]) -> anyhow::Result<Vec<AnalysisResult>> {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(jobs) = self.jobs {
            builder = builder.num_threads(jobs);
        }
        let pool = builder.build()?;

        let results = pool.install(|| {
            files
                .par_iter()
                .map(|path| self.analyze_path(path))
                .collect::<Vec<_>>()
        });

        Ok(results)
    }

    /// Read and analyze one file. Read errors become failure records.
    pub fn analyze_path(&self, path: &Path) -> AnalysisResult {
        let filename = path.to_string_lossy();

        let result = match fs::read(path) {
            Ok(bytes) => self.analyzer.analyze_bytes(&filename, &bytes),
            Err(e) => AnalysisResult::failure(
                &filename,
                &AnalysisError::Read {
                    path: filename.to_string(),
                    message: e.to_string(),
                },
            ),
        };

        if result.success {
            info!(
                file = %filename,
                language = %result.language,
                "analysis complete: {} functions, {} classes found",
                result.function_count(),
                result.class_count()
            );
        }

        result
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new(Analyzer::default())
    }
}
