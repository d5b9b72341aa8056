use ast_grep_core::Node;

use crate::types::TypeSignature;

// ── Doc comment extraction ────────────────────────────────────────

/// Extract Go doc comments by walking backward through sibling `comment` nodes.
///
/// Go convention: doc comments are `//` comments immediately preceding
/// a declaration, with no blank lines in between.
pub(super) fn extract_go_doc<D: ast_grep_core::Doc>(node: &Node<D>) -> String {
    let mut comments = Vec::new();
    let mut boundary = node.start_pos().line();
    let mut current = node.prev();
    while let Some(sibling) = current {
        if sibling.kind().as_ref() != "comment"
            || sibling.end_pos().line() + 1 < boundary
            || is_trailing(&sibling)
        {
            break;
        }
        comments.push(sibling.text().to_string());
        boundary = sibling.start_pos().line();
        current = sibling.prev();
    }
    comments.reverse();
    uncomment(&comments)
}

/// Whether `comment` trails code on its own first line (`Name string // note`).
/// Such a comment belongs to that code, never to the next declaration.
fn is_trailing<D: ast_grep_core::Doc>(comment: &Node<D>) -> bool {
    let line = comment.start_pos().line();
    let mut current = comment.prev();
    while let Some(node) = current {
        if node.kind().as_ref() != "comment" && !node.text().trim().is_empty() {
            return node.end_pos().line() == line;
        }
        current = node.prev();
    }
    false
}

/// Strip comment markers, keeping indentation past the first space so that
/// YAML blocks inside comments stay well-formed. `nolint:` lines are dropped.
pub(super) fn uncomment<S: AsRef<str>>(comments: &[S]) -> String {
    let mut lines = Vec::new();
    for comment in comments {
        let comment = comment.as_ref();
        if let Some(line) = comment.strip_prefix("//") {
            lines.push(strip_one_space(line));
        } else if let Some(block) = comment.strip_prefix("/*") {
            let block = block.strip_suffix("*/").unwrap_or(block);
            lines.extend(block.lines().map(strip_one_space));
        }
    }
    lines
        .into_iter()
        .filter(|line| !line.contains("nolint:"))
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_one_space(line: &str) -> &str {
    line.strip_prefix(' ').unwrap_or(line)
}

// ── Type signatures ───────────────────────────────────────────────

/// Convert a type node into a [`TypeSignature`].
pub(super) fn parse_type<D: ast_grep_core::Doc>(node: &Node<D>) -> TypeSignature {
    let kind = node.kind();
    match kind.as_ref() {
        "type_identifier" | "identifier" => TypeSignature::Named(node.text().to_string()),
        "qualified_type" => {
            let package = node.field("package").map(|n| n.text().to_string());
            let name = node.field("name").map(|n| n.text().to_string());
            match (package, name) {
                (Some(package), Some(name)) => TypeSignature::Qualified { package, name },
                _ => other(node),
            }
        }
        "pointer_type" => first_named_child(node).map_or_else(
            || other(node),
            |inner| TypeSignature::Pointer(Box::new(parse_type(&inner))),
        ),
        "slice_type" | "array_type" | "implicit_length_array_type" => {
            node.field("element").map_or_else(
                || other(node),
                |elem| TypeSignature::Array(Box::new(parse_type(&elem))),
            )
        }
        "map_type" => match (node.field("key"), node.field("value")) {
            (Some(key), Some(value)) => TypeSignature::Map {
                key: Box::new(parse_type(&key)),
                value: Box::new(parse_type(&value)),
            },
            _ => other(node),
        },
        "struct_type" => TypeSignature::Struct,
        "interface_type" => TypeSignature::Interface,
        "parenthesized_type" => {
            first_named_child(node).map_or_else(|| other(node), |inner| parse_type(&inner))
        }
        _ => other(node),
    }
}

fn other<D: ast_grep_core::Doc>(node: &Node<D>) -> TypeSignature {
    TypeSignature::Other(node.text().split_whitespace().collect::<Vec<_>>().join(" "))
}

fn first_named_child<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    node.children()
        .find(|c| c.is_named() && c.kind().as_ref() != "comment")
}

// ── Literals ──────────────────────────────────────────────────────

/// Decode a Go string literal, raw (`` `...` ``) or interpreted (`"..."`).
pub(super) fn string_literal(text: &str) -> String {
    let text = text.trim();
    if let Some(raw) = text.strip_prefix('`').and_then(|t| t.strip_suffix('`')) {
        return raw.to_string();
    }
    let inner = text
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text);
    inner.replace("\\\"", "\"").replace("\\\\", "\\")
}
