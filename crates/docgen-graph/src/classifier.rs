//! Per-field inclusion rules.
//!
//! A raw struct field is either skipped, spliced into its owner (embedded
//! structs), or becomes a documentation candidate. Rules apply in order:
//!
//! 1. no serialization tag: skip, unless the field carries a discriminator tag
//! 2. ignored serialization key (`-`, or empty without options): skip
//! 3. no-doc directive in the comment: skip
//! 4. no comment: skip with a diagnostic (embedded and discriminator fields exempt)
//! 5. embedded field: splice the referenced struct's fields into the owner,
//!    whatever key or options its tag carries
//! 6. unexported identifier: skip
//! 7. discriminator field: candidate whose values come from a constant group

use docgen_config::TagsConfig;
use docgen_core::Annotation;
use docgen_core::annotation;
use docgen_parser::tag::TagValue;
use docgen_parser::{RawField, StructTag, TypeSignature};

/// Why a field produced no documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoTag,
    Ignored,
    NoDoc,
    /// The only reason that is reported.
    MissingDocumentation,
    Unexported,
    /// Embedded field whose type is neither named nor qualified.
    UnsupportedEmbed,
}

/// A field accepted for documentation, before its type is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub ident: String,
    /// Exposed (tag) name.
    pub name: String,
    pub signature: TypeSignature,
    pub annotation: Annotation,
    /// Carries the discriminator tag; allowed values come from a constant group.
    pub discriminator: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Skip(SkipReason),
    /// Embedded struct to flatten into the owner; the pointer, if any, is removed.
    Inline(TypeSignature),
    Field(Candidate),
}

/// Decide what happens to `field`.
#[must_use]
pub fn classify(field: &RawField, rules: &TagsConfig) -> Classification {
    let tag = field.tag.as_deref().map(StructTag::new);
    let discriminator = tag
        .and_then(|t| t.lookup(&rules.mapping))
        .is_some_and(|value| !value.is_empty());

    let value = match tag.and_then(|t| t.value(&rules.serialization)) {
        None if !discriminator => return Classification::Skip(SkipReason::NoTag),
        None => TagValue::default(),
        Some(value) => {
            let ignored = value.name == "-" || value.name.is_empty();
            if ignored && !value.has_separator() && !discriminator {
                return Classification::Skip(SkipReason::Ignored);
            }
            value
        }
    };

    if !rules.nodoc_directive.is_empty() && field.doc.contains(&rules.nodoc_directive) {
        return Classification::Skip(SkipReason::NoDoc);
    }
    if field.doc.trim().is_empty() && !discriminator && !field.is_embedded() {
        return Classification::Skip(SkipReason::MissingDocumentation);
    }

    let Some(ident) = field.ident.as_deref() else {
        return match field.signature.pointee() {
            signature @ (TypeSignature::Named(_) | TypeSignature::Qualified { .. }) => {
                Classification::Inline(signature.clone())
            }
            _ => Classification::Skip(SkipReason::UnsupportedEmbed),
        };
    };
    if !ident.starts_with(char::is_uppercase) {
        return Classification::Skip(SkipReason::Unexported);
    }

    let key = value.name.as_str();
    let name = if key.is_empty() || key == "-" { ident } else { key };
    let name = if rules.lowercase_names {
        name.to_lowercase()
    } else {
        name.to_string()
    };

    Classification::Field(Candidate {
        ident: ident.to_string(),
        name,
        signature: field.signature.clone(),
        annotation: annotation::parse(&field.doc),
        discriminator,
    })
}
