//! Property tests for the analyzer.

use code_analyzer::analysis::complexity::MAX_CYCLOMATIC;
use code_analyzer::{analyze, detect, Language};
use proptest::prelude::*;

const EXTENSIONS: &[&str] = &["py", "js", "jsx", "ts", "tsx", "java", "go", "txt", "rs", ""];

/// Source-like lines: declarations, control flow, braces and free text.
fn source_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("def handler(request):".to_string()),
        Just("class Widget(Base):".to_string()),
        Just("import os, sys".to_string()),
        Just("    if x > 0:".to_string()),
        Just("for (let i = 0; i < n; i++) {".to_string()),
        Just("}".to_string()),
        Just("public static void main(String[] args) {".to_string()),
        Just("const f = (a, b) => a + b;".to_string()),
        Just("// while we wait".to_string()),
        "[ -~\t]{0,60}",
    ]
}

fn source() -> impl Strategy<Value = String> {
    prop::collection::vec(source_line(), 0..40).prop_map(|lines| lines.join("\n"))
}

fn filename() -> impl Strategy<Value = String> {
    ("[a-z_]{1,12}", prop::sample::select(EXTENSIONS)).prop_map(|(stem, ext)| {
        if ext.is_empty() {
            stem
        } else {
            format!("{}.{}", stem, ext)
        }
    })
}

proptest! {
    #[test]
    fn complexity_stays_in_bounds(name in filename(), content in source()) {
        let result = analyze(&name, &content);
        prop_assert!(result.success);

        let cx = result.complexity;
        prop_assert!(cx.cyclomatic_complexity >= 1);
        prop_assert!(cx.cyclomatic_complexity <= MAX_CYCLOMATIC);
        prop_assert!(cx.maintainability_index >= 0.0);
        prop_assert!(cx.maintainability_index <= 98.0);
    }

    #[test]
    fn counts_match_structure(name in filename(), content in source()) {
        let result = analyze(&name, &content);

        prop_assert_eq!(result.stats.functions_count, result.structure.functions.len());
        prop_assert_eq!(result.stats.classes_count, result.structure.classes.len());
        prop_assert_eq!(result.stats.total_lines, content.split('\n').count());
        prop_assert!(result.stats.non_empty_lines <= result.stats.total_lines);
        prop_assert!(result.stats.comment_lines <= result.stats.total_lines);
        prop_assert_eq!(result.stats.character_count, content.chars().count());
    }

    #[test]
    fn line_numbers_point_into_file(name in filename(), content in source()) {
        let result = analyze(&name, &content);
        let total = result.stats.total_lines;

        let lines = result
            .structure
            .functions
            .iter()
            .map(|f| f.line_number)
            .chain(result.structure.classes.iter().map(|c| c.line_number))
            .chain(result.structure.imports.iter().map(|i| i.line_number));
        for line in lines {
            prop_assert!(line >= 1 && line <= total);
        }
    }

    #[test]
    fn analysis_is_deterministic(name in filename(), content in source()) {
        prop_assert_eq!(analyze(&name, &content), analyze(&name, &content));
    }

    #[test]
    fn unknown_language_has_no_structure(stem in "[a-z]{1,8}", content in source()) {
        let result = analyze(&format!("{}.txt", stem), &content);
        prop_assert_eq!(result.language, Language::Unknown);
        prop_assert!(result.structure.is_empty());
    }

    #[test]
    fn detection_ignores_directories(dir in "[a-z.]{0,10}", stem in "[a-z]{1,8}") {
        let path = format!("{}/{}.go", dir, stem);
        prop_assert_eq!(detect(&path), Language::Go);
        prop_assert_eq!(detect(&format!("{}/{}", dir, stem)), Language::Unknown);
    }
}
