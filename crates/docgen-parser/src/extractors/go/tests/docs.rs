use pretty_assertions::assert_eq;

use super::*;

#[test]
fn struct_doc_keeps_paragraphs() {
    let file = parse_and_extract(FIXTURE);
    assert_eq!(
        find_struct(&file, "Job").doc,
        "Job is a single job to be executed by apollo.\n\nA job is just an input and is immutable."
    );
}

#[test]
fn yaml_indentation_survives_uncommenting() {
    let file = parse_and_extract(FIXTURE);
    let name = find_field(find_struct(&file, "Job"), "Name");
    assert_eq!(
        name.doc,
        "description: |\n  Name of the Job\nexamples:\n  - name: Name Example\n    value: \"\\\"443-httpx-internet-wide\\\"\""
    );
}

#[test]
fn trailing_comment_does_not_leak_into_next_field() {
    let file = parse_and_extract(FIXTURE);
    let ty = find_field(find_struct(&file, "InternalOptions"), "Type");
    assert_eq!(ty.doc, "Type is the type of request.");
}

#[test]
fn grouped_type_spec_uses_own_comment() {
    let file = parse_and_extract(FIXTURE);
    assert_eq!(find_struct(&file, "Common").doc, "Common holds shared fields.");
}

#[test]
fn blank_line_separates_comment_from_declaration() {
    let file = parse_and_extract("package p\n\n// Detached.\n\ntype T struct{}\n");
    assert_eq!(find_struct(&file, "T").doc, "");
}

#[test]
fn block_comments_are_uncommented() {
    let file = parse_and_extract("package p\n\n/* T is\n a block. */\ntype T struct{}\n");
    assert_eq!(find_struct(&file, "T").doc, "T is\na block.");
}

#[test]
fn undocumented_field_has_empty_doc() {
    let file = parse_and_extract(FIXTURE);
    let counter = find_field(find_struct(&file, "Job"), "counter");
    assert_eq!(counter.doc, "");
}

#[test]
fn trailing_comment_is_not_next_field_doc() {
    let file = parse_and_extract(
        "package p\n\ntype T struct {\n\t// Name of the job.\n\tName string `yaml:\"name\"` // note on name\n\tRetries int `yaml:\"retries\"`\n}\n",
    );
    let ty = find_struct(&file, "T");
    assert_eq!(find_field(ty, "Name").doc, "Name of the job.");
    assert_eq!(find_field(ty, "Retries").doc, "");
}

#[test]
fn trailing_comment_after_brace_is_not_field_doc() {
    let file = parse_and_extract(
        "package p\n\ntype T struct { // fields follow\n\tName string `yaml:\"name\"`\n}\n",
    );
    assert_eq!(find_field(find_struct(&file, "T"), "Name").doc, "");
}

#[test]
fn trailing_comment_on_previous_declaration_is_not_type_doc() {
    let file = parse_and_extract("package p\n\nvar x = 1 // counter\ntype T struct{}\n");
    assert_eq!(find_struct(&file, "T").doc, "");
}
