//! Go extractor using a `KindMatcher`-first strategy.
//!
//! Extracts struct type declarations (fields, tags, doc comments, structured
//! type signatures), non-struct type names, constant groups with their
//! marker comments, the import table, and `RequestPartDefinitions`.

use ast_grep_core::matcher::KindMatcher;
use ast_grep_core::ops::Any;
use ast_grep_language::SupportLang;

use crate::types::GoFile;

mod helpers;
mod processors;

const GO_TOP_KINDS: &[&str] = &[
    "package_clause",
    "import_declaration",
    "type_declaration",
    "const_declaration",
    "var_declaration",
];

/// Extract the documentation-relevant declarations of a Go source file.
pub fn extract<D: ast_grep_core::Doc<Lang = SupportLang>>(
    root: &ast_grep_core::AstGrep<D>,
) -> GoFile {
    let mut file = GoFile {
        has_errors: root.root().dfs().any(|n| n.kind().as_ref() == "ERROR"),
        ..GoFile::default()
    };
    let matchers: Vec<KindMatcher> = GO_TOP_KINDS
        .iter()
        .map(|k| KindMatcher::new(k, SupportLang::Go))
        .collect();
    let matcher = Any::new(matchers);

    for node in root.root().find_all(&matcher) {
        // Declarations inside function bodies are not part of the package scope.
        if node
            .parent()
            .is_some_and(|p| p.kind().as_ref() != "source_file")
        {
            continue;
        }
        let kind = node.kind();
        match kind.as_ref() {
            "package_clause" => {
                if let Some(name) = processors::process_package_clause(&node) {
                    file.package = name;
                }
            }
            "import_declaration" => {
                file.imports.extend(processors::process_import_declaration(&node));
            }
            "type_declaration" => {
                processors::process_type_declaration(&node, &mut file);
            }
            "const_declaration" => {
                if let Some(group) = processors::process_const_declaration(&node) {
                    file.const_groups.push(group);
                }
            }
            "var_declaration" => {
                file.part_definitions
                    .extend(processors::process_var_declaration(&node));
            }
            _ => {}
        }
    }
    file
}

#[cfg(test)]
mod tests;
