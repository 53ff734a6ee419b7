//! Python declaration rules.

use lazy_static::lazy_static;
use regex::Regex;

use super::{group, StructureExtractor};
use crate::analysis::{text, Declaration, DeclarationKind, ImportDeclaration, TypeDeclaration};

lazy_static! {
    // def name(params):
    static ref FUNCTION_RE: Regex = Regex::new(r"^def[\s\x1C-\x1F]+(\w+)[\s\x1C-\x1F]*\((.*?)\):").unwrap();
    // class Name: / class Name(Base, ...):
    static ref CLASS_RE: Regex = Regex::new(r"^class[\s\x1C-\x1F]+(\w+)(?:\([^)]*\))?:").unwrap();
    // import a, b / from pkg import a, b
    static ref IMPORT_RE: Regex = Regex::new(r"^(?:from[\s\x1C-\x1F]+([^\s\x1C-\x1F]+)[\s\x1C-\x1F]+)?import[\s\x1C-\x1F]+(.+)").unwrap();
}

/// Structure rules for `.py` files.
#[derive(Debug, Default, Clone, Copy)]
pub struct PythonExtractor;

impl StructureExtractor for PythonExtractor {
    fn language_id(&self) -> &'static str {
        "python"
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
        let caps = CLASS_RE.captures(line)?;
        Some(TypeDeclaration::new(group(&caps, 1), line_number))
    }

    fn import(&self, line: &str, line_number: usize) -> Option<ImportDeclaration> {
        let caps = IMPORT_RE.captures(line)?;
        // Only the first of several comma-separated names is kept.
        let first = group(&caps, 2).split(',').next().map_or("", text::trim);
        let module = match caps.get(1) {
            Some(package) => format!("{}.{}", package.as_str(), first),
            None => first.to_string(),
        };
        Some(ImportDeclaration::new(&module, line_number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_function() {
        let decl = PythonExtractor.function("def foo(a, b):", 1).unwrap();
        assert_eq!(decl.name, "foo");
        assert_eq!(decl.parameters, "a, b");
        assert_eq!(decl.kind, DeclarationKind::Function);
        assert_eq!(decl.line_number, 1);

        let decl = PythonExtractor.function("def run(self) -> None:", 7);
        assert!(decl.is_none(), "return annotations break the `):` anchor");
    }

    #[test]
    fn test_python_function_requires_line_start() {
        assert!(PythonExtractor.function("async def fetch(url):", 1).is_none());
        assert!(PythonExtractor.function("x = 1  # def foo():", 1).is_none());
        assert!(PythonExtractor.function("def noop():", 1).is_some());
    }

    #[test]
    fn test_python_class() {
        let ty = PythonExtractor.type_declaration("class Config:", 3).unwrap();
        assert_eq!(ty.name, "Config");
        assert!(ty.methods.is_empty());

        let ty = PythonExtractor
            .type_declaration("class Handler(Base, metaclass=Meta):", 9)
            .unwrap();
        assert_eq!(ty.name, "Handler");

        assert!(PythonExtractor.type_declaration("class Broken", 1).is_none());
    }

    #[test]
    fn test_python_plain_import_keeps_first_name() {
        let import = PythonExtractor.import("import os, sys, re", 2).unwrap();
        assert_eq!(import.module, "os");
        assert_eq!(import.alias, "");
    }

    #[test]
    fn test_python_from_import() {
        let import = PythonExtractor
            .import("from collections import OrderedDict, defaultdict", 1)
            .unwrap();
        assert_eq!(import.module, "collections.OrderedDict");

        let import = PythonExtractor.import("from . import utils", 1).unwrap();
        assert_eq!(import.module, "..utils");
    }

    #[test]
    fn test_python_import_alias_is_not_split() {
        let import = PythonExtractor.import("import numpy as np", 1).unwrap();
        assert_eq!(import.module, "numpy as np");
        assert_eq!(import.alias, "");
    }

    #[test]
    fn test_python_import_needs_whitespace() {
        assert!(PythonExtractor.import("important = True", 1).is_none());
    }
}
