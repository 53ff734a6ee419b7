//! Configuration file for the command-line analyzer.
//!
//! The file is YAML and entirely optional; every field has a default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::analysis::ScanLimits;

/// Config file names looked up in the working directory.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["code-analyzer.yaml", ".code-analyzer.yaml"];

/// Written by `code-analyzer init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# code-analyzer configuration
version: "1"

# Lines longer than this (in characters) make the analysis of a file fail.
# Unlimited when unset.
# limits:
#   max_line_length: 100000

# Glob patterns for paths to skip when walking directories.
exclude:
  - "**/node_modules/**"
  - "**/vendor/**"

# Worker threads for analyzing many files (default: one per CPU).
# jobs: 8

# Follow symbolic links while walking directories.
follow_links: false
"#;

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub limits: ScanLimits,
    /// Glob patterns for paths to exclude from directory walks
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Number of worker threads; None uses the rayon default
    #[serde(default)]
    pub jobs: Option<usize>,
    #[serde(default)]
    pub follow_links: bool,
}

impl Config {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::parse_str(&content)
    }

    /// Parse a config from YAML text.
    pub fn parse_str(content: &str) -> anyhow::Result<Self> {
        // An empty or comment-only file is a valid config.
        if content.lines().all(|l| l.trim().is_empty() || l.trim_start().starts_with('#')) {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Load the config at `path`, or discover one in `dir`, or fall back to
    /// defaults when neither exists.
    pub fn load(path: Option<&Path>, dir: &Path) -> anyhow::Result<(Self, Option<PathBuf>)> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => discover(dir),
        };

        match path {
            Some(p) => {
                let config = Self::parse_file(&p)
                    .map_err(|e| anyhow::anyhow!("parsing config {}: {}", p.display(), e))?;
                validate(&config)?;
                Ok((config, Some(p)))
            }
            None => Ok((Config::default(), None)),
        }
    }

    /// Compile the exclude patterns into one matcher.
    pub fn exclude_set(&self) -> anyhow::Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.exclude {
            let glob = Glob::new(pattern)
                .map_err(|e| anyhow::anyhow!("invalid exclude pattern {:?}: {}", pattern, e))?;
            builder.add(glob);
        }
        Ok(builder.build()?)
    }
}

/// Find a config file in `dir`.
pub fn discover(dir: &Path) -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
}

/// Check a config for values that cannot work.
pub fn validate(config: &Config) -> anyhow::Result<()> {
    if config.limits.max_line_length == Some(0) {
        anyhow::bail!("limits.max_line_length must be greater than 0");
    }
    if config.jobs == Some(0) {
        anyhow::bail!("jobs must be greater than 0");
    }
    config.exclude_set()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_template_parses() {
        let config = Config::parse_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.version, "1");
        assert_eq!(config.limits.max_line_length, None);
        assert_eq!(config.exclude.len(), 2);
        assert_eq!(config.jobs, None);
        assert!(!config.follow_links);
        validate(&config).unwrap();
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::parse_str("").unwrap(), Config::default());
        assert_eq!(Config::parse_str("# nothing\n\n").unwrap(), Config::default());
        assert_eq!(Config::default().limits, ScanLimits::default());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(Config::parse_str("threads: 4\n").is_err());
        assert!(Config::parse_str("limits:\n  max_lines: 4\n").is_err());
    }

    #[test]
    fn test_validate() {
        let config = Config::parse_str("jobs: 0\n").unwrap();
        assert!(validate(&config).is_err());

        let config = Config::parse_str("limits:\n  max_line_length: 0\n").unwrap();
        assert!(validate(&config).is_err());

        let config = Config::parse_str("exclude:\n  - \"a/[b\"\n").unwrap();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_exclude_set() {
        let config = Config::parse_str("exclude:\n  - \"**/generated/**\"\n").unwrap();
        let set = config.exclude_set().unwrap();
        assert!(set.is_match("src/generated/api.ts"));
        assert!(!set.is_match("src/api.ts"));
    }

    #[test]
    fn test_load_discovers_config() {
        let temp = TempDir::new().unwrap();
        let (config, path) = Config::load(None, temp.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.is_none());

        std::fs::write(temp.path().join(".code-analyzer.yaml"), "jobs: 2\n").unwrap();
        let (config, path) = Config::load(None, temp.path()).unwrap();
        assert_eq!(config.jobs, Some(2));
        assert!(path.unwrap().ends_with(".code-analyzer.yaml"));
    }

    #[test]
    fn test_load_explicit_path_errors() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.yaml");
        assert!(Config::load(Some(&missing), temp.path()).is_err());

        let bad = temp.path().join("bad.yaml");
        std::fs::write(&bad, "jobs: 0\n").unwrap();
        assert!(Config::load(Some(&bad), temp.path()).is_err());
    }
}
