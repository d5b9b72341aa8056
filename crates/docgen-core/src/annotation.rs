//! Comment annotation parsing.
//!
//! A documentation comment is either free text or a small YAML block:
//!
//! ```text
//! description: |
//!   BulkSize is the number of items to process per node at once.
//! examples:
//!   - name: BulkSize Example
//!     value: "10000"
//! values:
//!   - fast
//!   - slow
//! ```
//!
//! Free text may also be followed by a structured block, in which case the
//! first line becomes the summary and the block supplies the rest.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

const KNOWN_KEYS: &[&str] = &["description", "examples", "values"];

/// A labelled example value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub name: String,
    pub value: String,
}

impl Example {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Parsed documentation of a type or field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// First line of the description, used as the line comment.
    pub summary: String,
    pub description: String,
    pub examples: Vec<Example>,
    /// Allowed values declared with a `values:` list.
    pub values: Vec<String>,
}

impl Annotation {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.description.is_empty() && self.examples.is_empty() && self.values.is_empty()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Block {
    description: Option<String>,
    examples: Vec<RawExample>,
    values: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawExample {
    name: Option<Value>,
    value: Option<Value>,
}

/// Parse a raw comment block into an [`Annotation`].
///
/// Never fails: text that is not a structured block is treated as prose.
///
/// ```
/// use docgen_core::annotation::parse;
///
/// let text = parse("Job is a single job.\n\nIt is immutable.");
/// assert_eq!(text.summary, "Job is a single job.");
/// assert_eq!(text.description, "Job is a single job.\n\nIt is immutable.");
///
/// let text = parse("description: |\n  Name of the Job\nexamples:\n  - name: Name Example\n    value: \"\\\"web\\\"\"\n");
/// assert_eq!(text.description, "Name of the Job");
/// assert_eq!(text.examples[0].value, "\"web\"");
/// ```
#[must_use]
pub fn parse(raw: &str) -> Annotation {
    if raw.trim().is_empty() {
        return Annotation::default();
    }

    if let Some(block) = parse_block(raw) {
        let description = block
            .description
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        return assemble(first_line(&description), description, block);
    }

    let description = raw.trim().to_string();
    let summary = first_line(&description);
    let tail = description.lines().skip(1).collect::<Vec<_>>().join("\n");

    match parse_block(&tail) {
        Some(block) => {
            let structured = block
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map_or_else(|| summary.clone(), ToString::to_string);
            assemble(summary, structured, block)
        }
        None => Annotation {
            summary,
            description,
            ..Annotation::default()
        },
    }
}

/// Parse `text` as a structured block when it is a mapping with at least one
/// recognised key. Prose that happens to be valid YAML (`Note: ...`) is not a block.
fn parse_block(text: &str) -> Option<Block> {
    if text.trim().is_empty() {
        return None;
    }
    let value: Value = serde_yaml::from_str(text).ok()?;
    let mapping = value.as_mapping()?;
    let known = mapping
        .keys()
        .filter_map(Value::as_str)
        .any(|key| KNOWN_KEYS.contains(&key));
    if !known {
        return None;
    }
    serde_yaml::from_value(value).ok()
}

fn assemble(summary: String, description: String, block: Block) -> Annotation {
    let examples = block
        .examples
        .into_iter()
        .map(|raw| Example {
            name: raw.name.as_ref().map(scalar_text).unwrap_or_default(),
            value: raw.value.as_ref().map(scalar_text).unwrap_or_default(),
        })
        .collect();
    let values = block
        .values
        .iter()
        .map(scalar_text)
        .filter(|v| !v.is_empty())
        .collect();

    Annotation {
        summary,
        description,
        examples,
        values,
    }
}

fn first_line(text: &str) -> String {
    text.lines().next().unwrap_or_default().trim().to_string()
}

/// Render a YAML scalar as plain text; non-scalars fall back to their YAML form.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_comment_is_empty_annotation() {
        assert_eq!(parse("  \n"), Annotation::default());
    }

    #[test]
    fn single_line_prose() {
        let text = parse("InternalOptions contains internal configuration options for scheduler");
        assert_eq!(
            text.summary,
            "InternalOptions contains internal configuration options for scheduler"
        );
        assert_eq!(text.description, text.summary);
        assert!(text.examples.is_empty());
    }

    #[test]
    fn structured_block_with_examples() {
        let raw = "description: |\n  BulkSize is the number of items to process per node at once.\nexamples:\n  - name: BulkSize Example\n    value: \"10000\"\n";
        let text = parse(raw);
        assert_eq!(
            text.description,
            "BulkSize is the number of items to process per node at once."
        );
        assert_eq!(text.summary, text.description);
        assert_eq!(text.examples, vec![Example::new("BulkSize Example", "10000")]);
    }

    #[test]
    fn numeric_example_values_are_stringified() {
        let text = parse("description: size\nexamples:\n  - name: n\n    value: 10000\n");
        assert_eq!(text.examples[0].value, "10000");
    }

    #[test]
    fn multi_line_description_summary_is_first_line() {
        let text = parse("description: |\n  Providers contains a list of infrastructure providers\n  for the current scan.\n");
        assert_eq!(
            text.summary,
            "Providers contains a list of infrastructure providers"
        );
        assert_eq!(
            text.description,
            "Providers contains a list of infrastructure providers\nfor the current scan."
        );
    }

    #[test]
    fn prose_followed_by_block_keeps_summary_out_of_block() {
        let raw = "Mode selects the scan mode.\nvalues:\n  - fast\n  - slow\nexamples:\n  - name: Fast\n    value: \"\\\"fast\\\"\"\n";
        let text = parse(raw);
        assert_eq!(text.summary, "Mode selects the scan mode.");
        assert_eq!(text.description, "Mode selects the scan mode.");
        assert_eq!(text.values, vec!["fast".to_string(), "slow".to_string()]);
        assert_eq!(text.examples[0].value, "\"fast\"");
    }

    #[test]
    fn prose_followed_by_block_with_description() {
        let raw = "Short line.\ndescription: Longer explanation.\n";
        let text = parse(raw);
        assert_eq!(text.summary, "Short line.");
        assert_eq!(text.description, "Longer explanation.");
    }

    #[test]
    fn prose_that_looks_like_yaml_stays_prose() {
        let text = parse("Note: this is just a sentence");
        assert_eq!(text.description, "Note: this is just a sentence");
        assert_eq!(text.summary, "Note: this is just a sentence");
    }

    #[test]
    fn multi_paragraph_prose() {
        let raw = "Job is a single job to be executed by apollo.\n\nA job contains providers.";
        let text = parse(raw);
        assert_eq!(text.summary, "Job is a single job to be executed by apollo.");
        assert_eq!(text.description, raw);
    }
}
