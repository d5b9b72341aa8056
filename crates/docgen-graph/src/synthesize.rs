//! Documentation synthesis over a completed [`ResolvedSet`].

use docgen_core::{Appearance, DocumentSet, Example, Field, FieldDoc, ResolvedSet, TypeDoc};
use indexmap::IndexMap;

use crate::options::DocumentOptions;

/// Build one [`TypeDoc`] per discovered type.
///
/// Examples given at a reference site are appended to the referenced type,
/// and the referenced type's own examples are appended to every field that
/// points at it. Appearances are recorded per (parent, field) in discovery
/// order. Fields without a type reference take part in neither.
#[must_use]
pub fn synthesize(set: &ResolvedSet, options: &DocumentOptions) -> DocumentSet {
    let mut inherited: IndexMap<&str, Vec<Example>> = IndexMap::new();
    let mut appears_in: IndexMap<&str, Vec<Appearance>> = IndexMap::new();

    for decl in set.iter() {
        let owner = decl.qualified_name();
        for field in &decl.fields {
            let Some(target) = field.reference().filter(|r| set.contains(r)) else {
                continue;
            };
            let examples = inherited.entry(target).or_default();
            for example in &field.text.examples {
                push_unique(examples, example);
            }
            let appearance = Appearance::new(owner.clone(), field.name.clone());
            let list = appears_in.entry(target).or_default();
            if !list.contains(&appearance) {
                list.push(appearance);
            }
        }
    }

    let types = set
        .iter()
        .map(|decl| {
            let name = decl.qualified_name();
            let mut examples = decl.text.examples.clone();
            for example in inherited.get(name.as_str()).into_iter().flatten() {
                push_unique(&mut examples, example);
            }
            TypeDoc {
                escaped_name: decl.escaped_name(),
                summary: decl.text.summary.clone(),
                description: decl.text.description.clone(),
                examples,
                values: decl.text.values.clone(),
                part_definitions: decl.part_definitions.clone(),
                fields: decl.fields.iter().map(|f| field_doc(set, f)).collect(),
                appears_in: appears_in.get(name.as_str()).cloned().unwrap_or_default(),
                name,
            }
        })
        .collect();

    tracing::debug!(types = set.len(), "synthesized documentation");
    DocumentSet {
        package: options.package.clone(),
        name: options.name.clone(),
        file: options.file.clone(),
        header: options.header.clone(),
        types,
    }
}

fn field_doc(set: &ResolvedSet, field: &Field) -> FieldDoc {
    let mut examples = field.text.examples.clone();
    if let Some(target) = field.reference().and_then(|r| set.get(r)) {
        for example in &target.text.examples {
            push_unique(&mut examples, example);
        }
    }
    FieldDoc {
        name: field.name.clone(),
        type_signature: field.type_signature.clone(),
        summary: field.text.summary.clone(),
        description: field.text.description.clone(),
        examples,
        values: field.text.values.clone(),
        enum_values: field.enum_values.clone(),
    }
}

fn push_unique(examples: &mut Vec<Example>, example: &Example) {
    if !examples.contains(example) {
        examples.push(example.clone());
    }
}
