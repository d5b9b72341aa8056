//! Discovery and synthesis over a Go module loaded from disk.

use std::fs;
use std::path::Path;

use docgen_core::{Appearance, DiagnosticKind, Example};
use docgen_graph::{DiscoverOptions, DocumentOptions, GraphError, discover, synthesize};
use docgen_parser::{LoadOptions, ModuleSet};
use pretty_assertions::assert_eq;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("parent")).expect("create dirs");
    fs::write(path, content).expect("write file");
}

fn scanner_module() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path();
    write(root, "go.mod", "module example.com/scanner\n\ngo 1.22\n");
    write(root, "job.go", include_str!("fixtures/job.go"));
    write(
        root,
        "pkg/network/options.go",
        "package network\n\n// Options configures the network stack.\ntype Options struct {\n\t// Port to dial.\n\tPort int `yaml:\"port\"`\n}\n",
    );
    dir
}

fn load(dir: &tempfile::TempDir) -> ModuleSet {
    ModuleSet::load(dir.path(), &LoadOptions::default()).expect("load module")
}

fn document_options() -> DocumentOptions {
    DocumentOptions {
        package: "main".to_string(),
        name: "Job".to_string(),
        file: "job_doc.go".to_string(),
        header: String::new(),
    }
}

#[test]
fn discovers_types_in_pre_order() {
    let dir = scanner_module();
    let modules = load(&dir);
    let set = discover(&modules, "Job", &DiscoverOptions::default()).expect("discover");

    let names: Vec<String> = set.iter().map(docgen_core::TypeDecl::qualified_name).collect();
    assert_eq!(names, vec!["Job", "InternalOptions", "network.Options", "Common"]);
    assert_eq!(set.root_name(), "Job");
}

#[test]
fn embedded_fields_are_flattened_in_place() {
    let dir = scanner_module();
    let modules = load(&dir);
    let set = discover(&modules, "Job", &DiscoverOptions::default()).expect("discover");

    let fields: Vec<&str> = set.root().fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(fields, vec!["name", "internal-options", "timeout", "networks", "id"]);
    let networks = set.root().fields.iter().find(|f| f.name == "networks").expect("networks");
    assert_eq!(networks.type_signature, "[]network.Options");
}

#[test]
fn diagnostics_cover_undocumented_and_unresolved_fields() {
    let dir = scanner_module();
    let modules = load(&dir);
    let set = discover(&modules, "Job", &DiscoverOptions::default()).expect("discover");

    let kinds: Vec<(DiagnosticKind, Option<&str>)> = set
        .diagnostics()
        .iter()
        .map(|d| (d.kind, d.field.as_deref()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (DiagnosticKind::UnresolvedImport, Some("timeout")),
            (DiagnosticKind::MissingDocumentation, Some("Retries")),
        ]
    );
}

#[test]
fn synthesized_documents_carry_examples_and_back_references() {
    let dir = scanner_module();
    let modules = load(&dir);
    let set = discover(&modules, "Job", &DiscoverOptions::default()).expect("discover");
    let docs = synthesize(&set, &document_options());

    let job = docs.get("Job").expect("job");
    assert_eq!(job.summary, "Job is a single job to be executed by apollo.");
    let field = job.field("internal-options").expect("internal-options");
    assert_eq!(field.type_signature, "*InternalOptions");
    assert_eq!(
        field.examples,
        vec![
            Example::new("Options Example", "exampleInternalOptions"),
            Example::new("Defaults", "defaultInternalOptions"),
        ]
    );

    let options = docs.get("InternalOptions").expect("internal options");
    assert_eq!(
        options.examples,
        vec![
            Example::new("Defaults", "defaultInternalOptions"),
            Example::new("Options Example", "exampleInternalOptions"),
        ]
    );
    assert_eq!(
        options.field("bulk-size").expect("bulk-size").examples,
        vec![Example::new("BulkSize Example", "10000")]
    );
    assert_eq!(
        options.appears_in,
        vec![Appearance::new("Job", "internal-options")]
    );
    assert_eq!(
        options.field("type").expect("type").enum_values,
        vec!["DNS".to_string(), "HTTP".to_string()]
    );

    let network = docs.get("network.Options").expect("network options");
    assert_eq!(network.escaped_name, "NETWORKOptions");
    assert_eq!(network.appears_in, vec![Appearance::new("Job", "networks")]);
}

#[test]
fn unknown_root_is_an_error() {
    let dir = scanner_module();
    let modules = load(&dir);
    let err = discover(&modules, "Missing", &DiscoverOptions::default()).expect_err("no root");
    assert!(matches!(err, GraphError::RootNotFound(name) if name == "Missing"));
}
