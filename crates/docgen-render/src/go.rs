//! Go source output for the `yamldoc-go` encoder.
//!
//! The generated file declares one `encoder.Doc` variable per type, fills
//! them in `init()` and exposes a `Get<Name>Doc()` accessor returning the
//! whole `encoder.FileDoc`.

use std::fmt::Write;

use docgen_core::{DocumentSet, Example, FieldDoc, TypeDoc};

use crate::escape::escape;
use crate::{RenderError, Renderer};

const ENCODER_IMPORT: &str = "github.com/projectdiscovery/yamldoc-go/encoder";
const GENERATED_MARKER: &str = "// DO NOT EDIT: this file is automatically generated by docgen";

/// Renders Go source registering encoder documentation.
#[derive(Debug, Clone, Default)]
pub struct GoRenderer {
    /// Comment block placed above the generated marker; may be empty.
    banner: String,
}

impl GoRenderer {
    #[must_use]
    pub fn new(banner: impl Into<String>) -> Self {
        Self {
            banner: banner.into(),
        }
    }
}

impl Renderer for GoRenderer {
    fn render(&self, docs: &DocumentSet) -> Result<String, RenderError> {
        let mut out = String::new();
        let banner = self.banner.trim_end();
        if !banner.is_empty() {
            writeln!(out, "{banner}")?;
        }
        writeln!(out, "{GENERATED_MARKER}")?;
        writeln!(out)?;
        writeln!(out, "package {}", docs.package)?;
        writeln!(out)?;
        writeln!(out, "import (\n\t\"{ENCODER_IMPORT}\"\n)")?;
        writeln!(out)?;

        writeln!(out, "var (")?;
        for doc in &docs.types {
            writeln!(out, "\t{}Doc encoder.Doc", doc.escaped_name)?;
        }
        writeln!(out, ")")?;
        writeln!(out)?;

        writeln!(out, "func init() {{")?;
        for (i, doc) in docs.types.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            write_type(&mut out, doc)?;
        }
        writeln!(out, "}}")?;
        writeln!(out)?;

        writeln!(
            out,
            "// Get{name}Doc returns documentation for the file {file}.",
            name = docs.name,
            file = docs.file
        )?;
        writeln!(out, "func Get{}Doc() *encoder.FileDoc {{", docs.name)?;
        writeln!(out, "\treturn &encoder.FileDoc{{")?;
        writeln!(out, "\t\tName:        \"{}\",", escape(&docs.name))?;
        writeln!(out, "\t\tDescription: \"{}\",", escape(&docs.header))?;
        writeln!(out, "\t\tStructs: []*encoder.Doc{{")?;
        for doc in &docs.types {
            writeln!(out, "\t\t\t&{}Doc,", doc.escaped_name)?;
        }
        writeln!(out, "\t\t}},")?;
        writeln!(out, "\t}}")?;
        writeln!(out, "}}")?;

        tracing::debug!(types = docs.types.len(), bytes = out.len(), "rendered go source");
        Ok(out)
    }
}

fn write_type(out: &mut String, doc: &TypeDoc) -> Result<(), RenderError> {
    let var = format!("{}Doc", doc.escaped_name);
    writeln!(out, "\t{var}.Type = \"{}\"", escape(&doc.name))?;
    writeln!(
        out,
        "\t{var}.Comments[encoder.LineComment] = \"{}\"",
        escape(&doc.summary)
    )?;
    writeln!(out, "\t{var}.Description = \"{}\"", escape(&doc.description))?;
    write_examples(out, &var, &doc.examples)?;

    if !doc.appears_in.is_empty() {
        writeln!(out, "\t{var}.AppearsIn = []encoder.Appearance{{")?;
        for appearance in &doc.appears_in {
            writeln!(out, "\t\t{{")?;
            writeln!(out, "\t\t\tTypeName:  \"{}\",", escape(&appearance.type_name))?;
            writeln!(out, "\t\t\tFieldName: \"{}\",", escape(&appearance.field_name))?;
            writeln!(out, "\t\t}},")?;
        }
        writeln!(out, "\t}}")?;
    }

    if !doc.part_definitions.is_empty() {
        writeln!(out, "\t{var}.PartDefinitions = []encoder.KeyValue{{")?;
        for part in &doc.part_definitions {
            writeln!(out, "\t\t{{")?;
            writeln!(out, "\t\t\tKey:   \"{}\",", escape(&part.name))?;
            writeln!(out, "\t\t\tValue: \"{}\",", escape(&part.value))?;
            writeln!(out, "\t\t}},")?;
        }
        writeln!(out, "\t}}")?;
    }

    writeln!(out, "\t{var}.Fields = make([]encoder.Doc, {})", doc.fields.len())?;
    for (index, field) in doc.fields.iter().enumerate() {
        write_field(out, &format!("{var}.Fields[{index}]"), field)?;
    }
    Ok(())
}

fn write_field(out: &mut String, target: &str, field: &FieldDoc) -> Result<(), RenderError> {
    writeln!(out, "\t{target}.Name = \"{}\"", escape(&field.name))?;
    writeln!(out, "\t{target}.Type = \"{}\"", escape(&field.type_signature))?;
    writeln!(out, "\t{target}.Note = \"\"")?;
    writeln!(out, "\t{target}.Description = \"{}\"", escape(&field.description))?;
    writeln!(
        out,
        "\t{target}.Comments[encoder.LineComment] = \"{}\"",
        escape(&field.summary)
    )?;
    write_string_list(out, &format!("{target}.EnumFields"), &field.enum_values)?;
    write_examples(out, target, &field.examples)?;
    write_string_list(out, &format!("{target}.Values"), &field.values)?;
    Ok(())
}

/// Example values are Go expressions and are emitted as written.
fn write_examples(out: &mut String, target: &str, examples: &[Example]) -> Result<(), RenderError> {
    for example in examples {
        let value = example.value.trim();
        if value.is_empty() {
            continue;
        }
        writeln!(
            out,
            "\t{target}.AddExample(\"{}\", {value})",
            escape(&example.name)
        )?;
    }
    Ok(())
}

fn write_string_list(out: &mut String, target: &str, values: &[String]) -> Result<(), RenderError> {
    if values.is_empty() {
        return Ok(());
    }
    writeln!(out, "\t{target} = []string{{")?;
    for value in values {
        writeln!(out, "\t\t\"{}\",", escape(value))?;
    }
    writeln!(out, "\t}}")?;
    Ok(())
}
