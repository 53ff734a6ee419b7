//! Whitespace rules shared by the line scanners.
//!
//! A whitespace character is a Unicode `White_Space` character or one of the
//! ASCII separators U+001C..=U+001F. Regexes spell the same set as
//! `[\s\x1C-\x1F]`.

/// Whether `c` counts as whitespace when scanning lines.
pub(crate) fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// `line` without leading and trailing whitespace.
pub(crate) fn trim(line: &str) -> &str {
    line.trim_matches(is_space)
}

/// Whether `line` holds nothing but whitespace.
pub(crate) fn is_blank(line: &str) -> bool {
    trim(line).is_empty()
}

/// Number of whitespace characters at the start of `line`.
pub(crate) fn leading_space(line: &str) -> usize {
    line.chars().take_while(|&c| is_space(c)).count()
}
