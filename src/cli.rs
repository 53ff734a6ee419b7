//! Command-line interface for code-analyzer.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::{Config, DEFAULT_CONFIG_TEMPLATE};
use crate::language::list_supported_languages;
use crate::report::{self, Format};
use crate::runner::Runner;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Summarize the structure and complexity of source files.
///
/// Detects the language of each file from its extension, lists its
/// functions, classes and imports, and scores cyclomatic complexity,
/// nesting depth and maintainability.
#[derive(Parser)]
#[command(name = "code-analyzer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze files or directories
    Analyze(AnalyzeArgs),
    /// List the supported languages
    Languages(LanguagesArgs),
    /// Write a default configuration file
    Init(InitArgs),
}

/// Arguments for the analyze command.
#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Files or directories to analyze
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub format: Format,

    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long, env = "CODE_ANALYZER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (overrides the config file)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Exit non-zero if any file fails to analyze
    #[arg(long)]
    pub fail_on_error: bool,
}

/// Arguments for the languages command.
#[derive(Parser)]
pub struct LanguagesArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub format: Format,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "code-analyzer.yaml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Run the analyze command.
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<i32> {
    if args.jobs == Some(0) {
        eprintln!("Error: --jobs must be greater than 0");
        return Ok(EXIT_ERROR);
    }

    let cwd = std::env::current_dir()?;
    let (config, config_path) = match Config::load(args.config.as_deref(), &cwd) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };
    if let Some(path) = &config_path {
        tracing::debug!(config = %path.display(), "loaded config");
    }

    let runner = Runner::from_config(&config)?.jobs(args.jobs);

    let files = match runner.collect_files(&args.paths) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    if files.is_empty() {
        eprintln!("Warning: no files to analyze");
        return Ok(EXIT_SUCCESS);
    }

    let results = runner.run(&files)?;

    match args.format {
        Format::Json => report::write_json(&results)?,
        Format::Pretty => report::write_pretty(&results),
    }

    if args.fail_on_error && results.iter().any(|r| !r.success) {
        Ok(EXIT_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

/// Run the languages command.
pub fn run_languages(args: &LanguagesArgs) -> anyhow::Result<i32> {
    let languages = list_supported_languages();
    match args.format {
        Format::Json => report::write_languages_json(languages)?,
        Format::Pretty => report::write_languages_pretty(languages),
    }
    Ok(EXIT_SUCCESS)
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    if args.output.exists() && !args.force {
        eprintln!("Error: file already exists: {}", args.output.display());
        eprintln!("Remove it or pass --force to overwrite");
        return Ok(EXIT_ERROR);
    }

    // Create output directory if needed
    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error: failed to create directory: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    }

    if let Err(e) = std::fs::write(&args.output, DEFAULT_CONFIG_TEMPLATE) {
        eprintln!("Error: failed to write config: {}", e);
        return Ok(EXIT_ERROR);
    }

    println!("Created {}", args.output.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to adjust limits and excludes", args.output.display());
    println!(
        "  2. Run: code-analyzer analyze . --config {}",
        args.output.display()
    );

    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze_args() {
        let cli = Cli::try_parse_from([
            "code-analyzer",
            "-vv",
            "analyze",
            "src",
            "lib.py",
            "--format",
            "json",
            "--jobs",
            "4",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Analyze(args) => {
                assert_eq!(args.paths, vec![PathBuf::from("src"), PathBuf::from("lib.py")]);
                assert_eq!(args.format, Format::Json);
                assert_eq!(args.jobs, Some(4));
                assert!(!args.fail_on_error);
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_analyze_requires_paths() {
        assert!(Cli::try_parse_from(["code-analyzer", "analyze"]).is_err());
        assert!(Cli::try_parse_from(["code-analyzer", "analyze", "x", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_analyze_rejects_zero_jobs() {
        let args = AnalyzeArgs {
            paths: vec![PathBuf::from(".")],
            format: Format::Json,
            config: None,
            jobs: Some(0),
            fail_on_error: false,
        };
        assert_eq!(run_analyze(&args).unwrap(), EXIT_ERROR);
    }

    #[test]
    fn test_analyze_fail_on_error() {
        let temp = TempDir::new().unwrap();
        let bad = temp.path().join("bad.py");
        std::fs::write(&bad, b"\0").unwrap();
        let config = temp.path().join("config.yaml");
        std::fs::write(&config, "jobs: 1\n").unwrap();

        let args = AnalyzeArgs {
            paths: vec![bad],
            format: Format::Json,
            config: Some(config),
            jobs: None,
            fail_on_error: true,
        };
        assert_eq!(run_analyze(&args).unwrap(), EXIT_FAILED);
    }

    #[test]
    fn test_analyze_bad_config_is_usage_error() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("config.yaml");
        std::fs::write(&config, "unknown_key: 1\n").unwrap();

        let args = AnalyzeArgs {
            paths: vec![temp.path().to_path_buf()],
            format: Format::Pretty,
            config: Some(config),
            jobs: None,
            fail_on_error: false,
        };
        assert_eq!(run_analyze(&args).unwrap(), EXIT_ERROR);
    }

    #[test]
    fn test_init_writes_template() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("conf/code-analyzer.yaml");
        let args = InitArgs {
            output: output.clone(),
            force: false,
        };

        assert_eq!(run_init(&args).unwrap(), EXIT_SUCCESS);
        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written, DEFAULT_CONFIG_TEMPLATE);
        Config::parse_file(&output).unwrap();

        // Refuses to overwrite without --force
        assert_eq!(run_init(&args).unwrap(), EXIT_ERROR);
        let args = InitArgs {
            output,
            force: true,
        };
        assert_eq!(run_init(&args).unwrap(), EXIT_SUCCESS);
    }
}
