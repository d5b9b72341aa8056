//! Loading, discovery, synthesis and rendering of a small Go module.

use std::fs;

use docgen_config::DocgenConfig;
use docgen_graph::{DiscoverOptions, DocumentOptions, discover, synthesize};
use docgen_parser::{LoadOptions, ModuleSet};
use docgen_render::{GoRenderer, JsonRenderer, Renderer};

const SOURCE: &str = r#"package scheduler

// Job is a single job.
type Job struct {
	// InternalOptions contains internal configuration options for scheduler
	InternalOptions *InternalOptions `yaml:"internal-options"`
}

// InternalOptions contains internal configuration options for scheduler
// examples:
//   - name: Defaults
//     value: defaultInternalOptions
type InternalOptions struct {
	// description: |
	//   BulkSize is the number of items to process per node at once.
	// examples:
	//   - name: BulkSize Example
	//     value: "10000"
	BulkSize int `yaml:"bulk-size"`
}
"#;

fn render_with(renderer: &dyn Renderer) -> String {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("go.mod"), "module example.com/scheduler\n").expect("go.mod");
    fs::write(dir.path().join("job.go"), SOURCE).expect("job.go");

    let modules = ModuleSet::load(dir.path(), &LoadOptions::default()).expect("load");
    let config = DocgenConfig::default();
    let set = discover(&modules, "Job", &DiscoverOptions::from(&config)).expect("discover");
    let docs = synthesize(
        &set,
        &DocumentOptions {
            package: config.output.package.clone(),
            name: "Job".to_string(),
            file: "job_doc.go".to_string(),
            header: String::new(),
        },
    );
    renderer.render(&docs).expect("render")
}

#[test]
fn go_output_wires_examples_and_appearances() {
    let out = render_with(&GoRenderer::new(docgen_config::DEFAULT_BANNER));

    assert!(out.starts_with("// This Source Code Form"));
    assert!(out.contains("\tJobDoc.Fields[0].Type = \"*InternalOptions\""));
    assert!(out.contains("\tJobDoc.Fields[0].AddExample(\"Defaults\", defaultInternalOptions)"));
    assert!(out.contains("\tInternalOptionsDoc.Fields[0].AddExample(\"BulkSize Example\", 10000)"));
    assert!(out.contains("\t\t\tTypeName:  \"Job\",\n\t\t\tFieldName: \"internal-options\","));
    assert!(out.contains("\tInternalOptionsDoc.Fields[0].Name = \"bulk-size\""));

    let job = out.find("\t\t\t&JobDoc,").expect("job listed");
    let options = out.find("\t\t\t&InternalOptionsDoc,").expect("options listed");
    assert!(job < options);
}

#[test]
fn json_output_lists_types_in_discovery_order() {
    let out = render_with(&JsonRenderer);
    let value: serde_json::Value = serde_json::from_str(&out).expect("json");
    assert_eq!(value["types"][0]["name"], "Job");
    assert_eq!(value["types"][1]["name"], "InternalOptions");
    assert_eq!(value["types"][1]["appears_in"][0]["field_name"], "internal-options");
}
