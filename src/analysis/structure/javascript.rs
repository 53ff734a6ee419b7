//! JavaScript and TypeScript declaration rules.

use lazy_static::lazy_static;
use regex::Regex;

use super::{first_match, group, StructureExtractor};
use crate::analysis::{Declaration, DeclarationKind, ImportDeclaration, TypeDeclaration};

lazy_static! {
    /// Function forms, tried in order. The first one found anywhere in the
    /// line wins.
    static ref FUNCTION_PATTERNS: Vec<Regex> = vec![
        // function name(params)
        Regex::new(r"function[\s\x1C-\x1F]+(\w+)[\s\x1C-\x1F]*\((.*?)\)").unwrap(),
        // const name = (params) =>
        Regex::new(r"(?:const|let|var)[\s\x1C-\x1F]+(\w+)[\s\x1C-\x1F]*=[\s\x1C-\x1F]*\((.*?)\)[\s\x1C-\x1F]*=>").unwrap(),
        // const name = function(params)
        Regex::new(r"(?:const|let|var)[\s\x1C-\x1F]+(\w+)[\s\x1C-\x1F]*=[\s\x1C-\x1F]*function[\s\x1C-\x1F]*\((.*?)\)").unwrap(),
        // name: (params) =>
        Regex::new(r"(\w+)[\s\x1C-\x1F]*:[\s\x1C-\x1F]*\((.*?)\)[\s\x1C-\x1F]*=>").unwrap(),
    ];

    static ref CLASS_RE: Regex = Regex::new(r"^class[\s\x1C-\x1F]+(\w+)").unwrap();

    static ref IMPORT_PATTERNS: Vec<Regex> = vec![
        // import ... from 'path'
        Regex::new(r#"import[\s\x1C-\x1F]+.*?[\s\x1C-\x1F]+from[\s\x1C-\x1F]+['"]([^'"]+)['"]"#).unwrap(),
        // import 'path'
        Regex::new(r#"import[\s\x1C-\x1F]+['"]([^'"]+)['"]"#).unwrap(),
    ];
}

/// Structure rules for `.js`, `.jsx`, `.ts` and `.tsx` files.
#[derive(Debug, Default, Clone, Copy)]
pub struct JavaScriptExtractor;

impl StructureExtractor for JavaScriptExtractor {
    fn language_id(&self) -> &'static str {
        "javascript"
    }

    fn function(&self, line: &str, line_number: usize) -> Option<Declaration> {
        let caps = first_match(&FUNCTION_PATTERNS, line)?;
        Some(Declaration::new(
            group(&caps, 1),
            group(&caps, 2),
            line_number,
            DeclarationKind::Function,
        ))
    }

    fn type_declaration(&self, line: &str, line_number: usize) -> Option<TypeDeclaration> {
        let caps = CLASS_RE.captures(line)?;
        Some(TypeDeclaration::new(group(&caps, 1), line_number))
    }

    fn import(&self, line: &str, line_number: usize) -> Option<ImportDeclaration> {
        let caps = first_match(&IMPORT_PATTERNS, line)?;
        Some(ImportDeclaration::new(group(&caps, 1), line_number))
    }
}
