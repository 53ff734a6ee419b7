//! Java declaration rules.

use lazy_static::lazy_static;
use regex::Regex;

use super::{group, StructureExtractor};
use crate::analysis::{Declaration, DeclarationKind, ImportDeclaration, TypeDeclaration};

lazy_static! {
    // [visibility] [static] ReturnType name(params)
    static ref METHOD_RE: Regex = Regex::new(
        r"(?:public|private|protected)?[\s\x1C-\x1F]*(?:static)?[\s\x1C-\x1F]*\w+[\s\x1C-\x1F]+(\w+)[\s\x1C-\x1F]*\((.*?)\)"
    ).unwrap();
    static ref CLASS_RE: Regex = Regex::new(r"^(?:public|private)?[\s\x1C-\x1F]*class[\s\x1C-\x1F]+(\w+)").unwrap();
    static ref IMPORT_RE: Regex = Regex::new(r"^import[\s\x1C-\x1F]+([^;]+);").unwrap();
}

/// Structure rules for `.java` files.
#[derive(Debug, Default, Clone, Copy)]
pub struct JavaExtractor;

impl StructureExtractor for JavaExtractor {
    fn language_id(&self) -> &'static str {
        "java"
    }

    /// Method headers. Any line mentioning `class` or `interface` is skipped
    /// so type headers with constructor-like text are not taken as methods.
    fn function(&self, line: &str, line_number: usize) -> Option<Declaration> {
        if line.contains("class") || line.contains("interface") {
            return None;
        }
        let caps = METHOD_RE.captures(line)?;
        Some(Declaration::new(
            group(&caps, 1),
            group(&caps, 2),
            line_number,
            DeclarationKind::Method,
        ))
    }

    fn type_declaration(&self, line: &str, line_number: usize) -> Option<TypeDeclaration> {
        let caps = CLASS_RE.captures(line)?;
        Some(TypeDeclaration::new(group(&caps, 1), line_number))
    }

    fn import(&self, line: &str, line_number: usize) -> Option<ImportDeclaration> {
        let caps = IMPORT_RE.captures(line)?;
        Some(ImportDeclaration::new(group(&caps, 1), line_number))
    }
}
