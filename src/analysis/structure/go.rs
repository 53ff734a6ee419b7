//! Go declaration rules.

use lazy_static::lazy_static;
use regex::Regex;

use super::{group, StructureExtractor};
use crate::analysis::{Declaration, DeclarationKind, ImportDeclaration, TypeDeclaration};

lazy_static! {
    /// Free functions and methods alike: `func [(recv)] name(params)`
    static ref FUNCTION_RE: Regex =
        Regex::new(r"^func[\s\x1C-\x1F]+(?:\([^)]*\)[\s\x1C-\x1F]*)?(\w+)[\s\x1C-\x1F]*\((.*?)\)").unwrap();
    static ref STRUCT_RE: Regex = Regex::new(r"^type[\s\x1C-\x1F]+(\w+)[\s\x1C-\x1F]+struct").unwrap();
    /// Single-line imports: `import "path"` or `import alias "path"`
    static ref IMPORT_RE: Regex =
        Regex::new(r#"^import[\s\x1C-\x1F]+(?:"([^"]+)"|(\w+)[\s\x1C-\x1F]+"([^"]+)")"#).unwrap();
}

/// Structure rules for `.go` files.
#[derive(Debug, Default, Clone, Copy)]
pub struct GoExtractor;

impl StructureExtractor for GoExtractor {
    fn language_id(&self) -> &'static str {
        "go"
    }

    fn function(&self, line: &str, line_number: usize) -> Option<Declaration> {
        let caps = FUNCTION_RE.captures(line)?;
        Some(Declaration::new(
            group(&caps, 1),
            group(&caps, 2),
            line_number,
            DeclarationKind::Function,
        ))
    }

    fn type_declaration(&self, line: &str, line_number: usize) -> Option<TypeDeclaration> {
        let caps = STRUCT_RE.captures(line)?;
        Some(TypeDeclaration::new(group(&caps, 1), line_number))
    }

    fn import(&self, line: &str, line_number: usize) -> Option<ImportDeclaration> {
        let caps = IMPORT_RE.captures(line)?;
        let module = caps.get(1).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
        Some(ImportDeclaration::with_alias(
            module,
            line_number,
            group(&caps, 2),
        ))
    }
}
