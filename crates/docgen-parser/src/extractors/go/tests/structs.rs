use pretty_assertions::assert_eq;

use super::*;

#[test]
fn struct_declarations_in_source_order() {
    let file = parse_and_extract(FIXTURE);
    let names: Vec<&str> = file.structs.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Job", "InternalOptions", "Common"]);
}

#[test]
fn function_local_types_are_ignored() {
    let file = parse_and_extract(FIXTURE);
    assert!(file.structs.iter().all(|s| s.name != "Hidden"));
}

#[test]
fn non_struct_types_are_not_structs() {
    let file = parse_and_extract(FIXTURE);
    assert!(
        file.structs
            .iter()
            .all(|s| !["Mode", "Key", "Alias"].contains(&s.name.as_str()))
    );
}

#[test]
fn fields_keep_declaration_order() {
    let file = parse_and_extract(FIXTURE);
    let job = find_struct(&file, "Job");
    let idents: Vec<Option<&str>> = job.fields.iter().map(|f| f.ident.as_deref()).collect();
    assert_eq!(
        idents,
        vec![
            Some("Name"),
            Some("Providers"),
            Some("InternalOptions"),
            Some("Timeout"),
            Some("Network"),
            Some("Tags"),
            None,
            None,
            Some("counter"),
        ]
    );
}

#[test]
fn tags_are_unwrapped() {
    let file = parse_and_extract(FIXTURE);
    let job = find_struct(&file, "Job");
    assert_eq!(
        find_field(job, "Name").tag.as_deref(),
        Some(r#"yaml:"name" json:"name""#)
    );
    assert_eq!(find_field(job, "counter").tag, None);
}

#[test]
fn embedded_fields_have_no_ident() {
    let file = parse_and_extract(FIXTURE);
    let job = find_struct(&file, "Job");
    let embedded: Vec<&RawField> = job.fields.iter().filter(|f| f.is_embedded()).collect();
    assert_eq!(embedded.len(), 2);
    assert_eq!(embedded[0].signature, TypeSignature::Named("Common".into()));
    assert_eq!(embedded[0].tag.as_deref(), Some(r#"yaml:",inline""#));
    assert_eq!(
        embedded[1].signature,
        TypeSignature::Pointer(Box::new(TypeSignature::Qualified {
            package: "protocols".into(),
            name: "Base".into(),
        }))
    );
}

#[test]
fn interpreted_string_tags_are_decoded() {
    let file = parse_and_extract("package p\n\ntype T struct {\n\tA string \"yaml:\\\"a\\\"\"\n}\n");
    let t = find_struct(&file, "T");
    assert_eq!(find_field(t, "A").tag.as_deref(), Some(r#"yaml:"a""#));
}

#[test]
fn exported_detection() {
    let file = parse_and_extract("package p\n\ntype public struct{}\ntype Public struct{}\n");
    assert!(!find_struct(&file, "public").is_exported());
    assert!(find_struct(&file, "Public").is_exported());
}
