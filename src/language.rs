//! Language detection from file names.

use phf::phf_map;
use serde::{Deserialize, Serialize};

/// Languages the analyzer knows how to scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Java,
    Go,
    /// Unrecognized or missing extension. Not an error.
    Unknown,
}

/// Extension (with leading dot, lowercase) to language.
static EXTENSIONS: phf::Map<&'static str, Language> = phf_map! {
    ".py" => Language::Python,
    ".js" => Language::JavaScript,
    ".jsx" => Language::JavaScript,
    ".ts" => Language::TypeScript,
    ".tsx" => Language::TypeScript,
    ".java" => Language::Java,
    ".go" => Language::Go,
};

/// Languages reported by capability discovery, in their published order.
static SUPPORTED: &[Language] = &[
    Language::Python,
    Language::JavaScript,
    Language::Java,
    Language::Go,
    Language::TypeScript,
];

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Java => "java",
            Language::Go => "go",
            Language::Unknown => "unknown",
        }
    }

    /// Whether this language uses braces (rather than indentation) for blocks.
    pub fn is_brace_delimited(&self) -> bool {
        !matches!(self, Language::Python)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "python" => Ok(Language::Python),
            "javascript" => Ok(Language::JavaScript),
            "typescript" => Ok(Language::TypeScript),
            "java" => Ok(Language::Java),
            "go" => Ok(Language::Go),
            "unknown" => Ok(Language::Unknown),
            _ => Err(format!("unknown language: {}", s)),
        }
    }
}

/// Detect the language of a file from its name.
///
/// Only the extension of the final path component is considered, compared
/// case-insensitively. Names without an extension, including dot-files such
/// as `.bashrc`, map to [`Language::Unknown`].
pub fn detect(filename: &str) -> Language {
    let lower = filename.to_lowercase();
    EXTENSIONS
        .get(extension(&lower))
        .copied()
        .unwrap_or(Language::Unknown)
}

/// The extension of the last path component, including its dot.
fn extension(path: &str) -> &str {
    let base = path
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(path);
    // Leading dots belong to the name, not the extension.
    let name = base.trim_start_matches('.');
    match name.rfind('.') {
        Some(idx) => &name[idx..],
        None => "",
    }
}

/// The languages this analyzer supports, in capability-discovery order.
pub fn list_supported_languages() -> &'static [Language] {
    SUPPORTED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_known_extensions() {
        assert_eq!(detect("main.py"), Language::Python);
        assert_eq!(detect("app.js"), Language::JavaScript);
        assert_eq!(detect("view.jsx"), Language::JavaScript);
        assert_eq!(detect("index.ts"), Language::TypeScript);
        assert_eq!(detect("page.tsx"), Language::TypeScript);
        assert_eq!(detect("Main.java"), Language::Java);
        assert_eq!(detect("server.go"), Language::Go);
    }

    #[test]
    fn test_detect_is_case_insensitive() {
        assert_eq!(detect("SCRIPT.PY"), Language::Python);
        assert_eq!(detect("Component.TSX"), Language::TypeScript);
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(detect("notes.txt"), Language::Unknown);
        assert_eq!(detect("Makefile"), Language::Unknown);
        assert_eq!(detect(""), Language::Unknown);
        assert_eq!(detect("lib.rs"), Language::Unknown);
        assert_eq!(detect("archive.py.bak"), Language::Unknown);
    }

    #[test]
    fn test_detect_uses_last_component() {
        assert_eq!(detect("src/pkg.v2/main.go"), Language::Go);
        assert_eq!(detect("pkg.py/README"), Language::Unknown);
        assert_eq!(detect("dir\\module.py"), Language::Python);
    }

    #[test]
    fn test_dotfiles_have_no_extension() {
        assert_eq!(detect(".py"), Language::Unknown);
        assert_eq!(detect(".config.js"), Language::JavaScript);
    }

    #[test]
    fn test_supported_languages_order() {
        let names: Vec<&str> = list_supported_languages()
            .iter()
            .map(|l| l.as_str())
            .collect();
        assert_eq!(names, vec!["python", "javascript", "java", "go", "typescript"]);
    }

    #[test]
    fn test_round_trip_name() {
        for lang in list_supported_languages() {
            assert_eq!(lang.as_str().parse::<Language>().unwrap(), *lang);
        }
        assert!("cobol".parse::<Language>().is_err());
    }
}
