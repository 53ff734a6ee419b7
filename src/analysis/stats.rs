//! Line and character statistics.

use lazy_static::lazy_static;
use regex::Regex;

use crate::language::Language;

use super::{text, LineStats};

lazy_static! {
    /// `#` comments (Python, and the fallback for unknown languages)
    static ref HASH_COMMENT: Regex = Regex::new(r"^[\s\x1C-\x1F]*#").unwrap();
    /// `//` and `/*` comments (C-family languages)
    static ref SLASH_COMMENT: Regex = Regex::new(r"^[\s\x1C-\x1F]*//|^[\s\x1C-\x1F]*/\*").unwrap();
}

fn comment_pattern(language: Language) -> &'static Regex {
    match language {
        Language::JavaScript | Language::TypeScript | Language::Java | Language::Go => {
            &SLASH_COMMENT
        }
        Language::Python | Language::Unknown => &HASH_COMMENT,
    }
}

/// Count lines, non-empty lines, comment lines and characters.
///
/// Lines are produced by a plain split on `\n`, so content ending in a
/// newline has a trailing empty line and empty content is one line. The
/// function and class counters are left at zero for the aggregator to fill.
pub fn collect(content: &str, language: Language) -> LineStats {
    let pattern = comment_pattern(language);

    let mut stats = LineStats {
        character_count: content.chars().count(),
        ..LineStats::default()
    };

    for line in content.split('\n') {
        stats.total_lines += 1;
        if !text::is_blank(line) {
            stats.non_empty_lines += 1;
        }
        if pattern.is_match(line) {
            stats.comment_lines += 1;
        }
    }

    stats
}
