use ast_grep_core::Node;

use crate::types::{ConstGroup, ConstSpec, GoFile, ImportSpec, RawField, StructDecl, TypeSignature};

use super::helpers::{extract_go_doc, parse_type, string_literal};

const PART_DEFINITIONS_VAR: &str = "RequestPartDefinitions";

// ── package_clause ────────────────────────────────────────────────

pub(super) fn process_package_clause<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    node.children()
        .find(|c| c.kind().as_ref() == "package_identifier")
        .map(|n| n.text().to_string())
}

// ── import_declaration ────────────────────────────────────────────

pub(super) fn process_import_declaration<D: ast_grep_core::Doc>(
    node: &Node<D>,
) -> Vec<ImportSpec> {
    let mut imports = Vec::new();
    for child in node.children() {
        match child.kind().as_ref() {
            "import_spec" => imports.extend(process_import_spec(&child)),
            "import_spec_list" => imports.extend(
                child
                    .children()
                    .filter(|c| c.kind().as_ref() == "import_spec")
                    .filter_map(|spec| process_import_spec(&spec)),
            ),
            _ => {}
        }
    }
    imports
}

fn process_import_spec<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<ImportSpec> {
    let path = node.field("path").map(|n| string_literal(&n.text()))?;
    let alias = node.field("name").map(|n| n.text().to_string());
    Some(ImportSpec { alias, path })
}

// ── type_declaration ──────────────────────────────────────────────

pub(super) fn process_type_declaration<D: ast_grep_core::Doc>(node: &Node<D>, file: &mut GoFile) {
    let doc = extract_go_doc(node);

    for child in node.children() {
        if child.kind().as_ref() == "type_spec" {
            process_type_spec(&child, &doc, file);
        }
    }
}

fn process_type_spec<D: ast_grep_core::Doc>(node: &Node<D>, decl_doc: &str, file: &mut GoFile) {
    let Some(name) = node.field("name").map(|n| n.text().to_string()) else {
        return;
    };

    // Grouped declarations carry their comments on each spec.
    let own_doc = extract_go_doc(node);
    let doc = if own_doc.is_empty() {
        decl_doc.to_string()
    } else {
        own_doc
    };

    if let Some(body) = node.field("type").filter(|b| b.kind().as_ref() == "struct_type") {
        file.structs.push(StructDecl {
            name,
            doc,
            fields: extract_struct_fields(&body),
            file: 0,
        });
    }
}

fn extract_struct_fields<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<RawField> {
    node.children()
        .filter(|c| c.kind().as_ref() == "field_declaration_list")
        .flat_map(|list| {
            list.children()
                .filter(|c| c.kind().as_ref() == "field_declaration")
                .filter_map(|field| process_field_declaration(&field))
                .collect::<Vec<_>>()
        })
        .collect()
}

fn process_field_declaration<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<RawField> {
    let ident = node
        .children()
        .find(|c| c.kind().as_ref() == "field_identifier")
        .map(|n| n.text().to_string());

    let mut signature = parse_type(&node.field("type")?);
    // Embedded `*Base`: the star is an anonymous sibling of the type.
    if ident.is_none() && node.children().any(|c| c.kind().as_ref() == "*") {
        signature = TypeSignature::Pointer(Box::new(signature));
    }

    Some(RawField {
        ident,
        signature,
        tag: node.field("tag").map(|t| string_literal(&t.text())),
        doc: extract_go_doc(node),
    })
}

// ── const_declaration ─────────────────────────────────────────────

pub(super) fn process_const_declaration<D: ast_grep_core::Doc>(
    node: &Node<D>,
) -> Option<ConstGroup> {
    let specs: Vec<ConstSpec> = node
        .children()
        .filter(|c| c.kind().as_ref() == "const_spec")
        .filter_map(|spec| {
            let name = spec
                .children()
                .find(|c| c.kind().as_ref() == "identifier")?
                .text()
                .to_string();
            Some(ConstSpec {
                name,
                doc: extract_go_doc(&spec),
            })
        })
        .collect();

    if specs.is_empty() {
        return None;
    }
    Some(ConstGroup {
        doc: extract_go_doc(node),
        specs,
    })
}

// ── var_declaration ───────────────────────────────────────────────

/// Key/value pairs of `var RequestPartDefinitions = map[string]string{...}`.
pub(super) fn process_var_declaration<D: ast_grep_core::Doc>(
    node: &Node<D>,
) -> Vec<(String, String)> {
    let mut specs = Vec::new();
    for child in node.children() {
        match child.kind().as_ref() {
            "var_spec" => specs.push(child),
            "var_spec_list" => specs.extend(
                child
                    .children()
                    .filter(|c| c.kind().as_ref() == "var_spec"),
            ),
            _ => {}
        }
    }

    specs
        .iter()
        .filter(|spec| {
            spec.children()
                .any(|c| c.kind().as_ref() == "identifier" && c.text() == PART_DEFINITIONS_VAR)
        })
        .flat_map(|spec| {
            spec.dfs()
                .find(|n| n.kind().as_ref() == "literal_value")
                .map(|literal| part_definition_entries(&literal))
                .unwrap_or_default()
        })
        .collect()
}

fn part_definition_entries<D: ast_grep_core::Doc>(literal: &Node<D>) -> Vec<(String, String)> {
    literal
        .children()
        .filter(|c| c.kind().as_ref() == "keyed_element")
        .filter_map(|element| {
            let parts: Vec<_> = element
                .children()
                .filter(|c| c.is_named() && c.kind().as_ref() != "comment")
                .collect();
            let key = parts.first()?;
            let value = parts.last()?;
            Some((string_literal(&key.text()), string_literal(&value.text())))
        })
        .collect()
}
