use ast_grep_language::LanguageExt;

use super::*;
pub(super) use crate::types::{RawField, StructDecl, TypeSignature};

mod docs;
mod structs;

const FIXTURE: &str = include_str!("../../../../tests/fixtures/types.go");

fn parse_and_extract(source: &str) -> GoFile {
    let root = SupportLang::Go.ast_grep(source);
    extract(&root)
}

fn find_struct<'a>(file: &'a GoFile, name: &str) -> &'a StructDecl {
    file.structs
        .iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("should find struct named '{name}'"))
}

fn find_field<'a>(decl: &'a StructDecl, ident: &str) -> &'a RawField {
    decl.fields
        .iter()
        .find(|f| f.ident.as_deref() == Some(ident))
        .unwrap_or_else(|| panic!("should find field named '{ident}'"))
}

#[test]
fn package_name_extracted() {
    let file = parse_and_extract(FIXTURE);
    assert_eq!(file.package, "scheduler");
    assert!(!file.has_errors);
}

#[test]
fn syntax_errors_are_flagged() {
    let file = parse_and_extract("package broken\n\ntype Job struct {\n\tName string\n}}}\n");
    assert!(file.has_errors);
}
