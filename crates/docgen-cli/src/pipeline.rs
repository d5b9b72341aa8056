//! load config → load modules → discover → synthesize → render → write

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use docgen_config::DocgenConfig;
use docgen_graph::{DiscoverOptions, DocumentOptions, discover, synthesize};
use docgen_parser::{LoadOptions, ModuleSet};

use crate::cli::Cli;

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = DocgenConfig::load().context("failed to load docgen configuration")?;
    cli.apply(&mut config.output);

    let modules = ModuleSet::load(
        &cli.path,
        &LoadOptions {
            skip_vendor: config.loader.skip_vendor,
        },
    )
    .with_context(|| format!("failed to load Go packages from {}", cli.path.display()))?;
    tracing::debug!(modules = modules.len(), "loaded packages");

    let set = discover(&modules, &cli.structure, &DiscoverOptions::from(&config))
        .with_context(|| format!("failed to document type {}", cli.structure))?;
    if !set.diagnostics().is_empty() {
        tracing::warn!(count = set.diagnostics().len(), "documentation is incomplete");
    }

    let docs = synthesize(
        &set,
        &DocumentOptions {
            package: config.output.package.clone(),
            name: set.root().name.clone(),
            file: output_file_name(&cli.output),
            header: config.output.header.clone(),
        },
    );

    let rendered = docgen_render::for_output(&config.output)
        .render(&docs)
        .context("failed to render documentation")?;
    write_output(cli, &rendered)?;

    tracing::info!(types = docs.types.len(), output = %cli.output, "documentation generated");
    Ok(())
}

/// File name recorded in the generated accessor's comment.
fn output_file_name(output: &str) -> String {
    Path::new(output)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(output)
        .to_string()
}

fn write_output(cli: &Cli, rendered: &str) -> anyhow::Result<()> {
    if cli.writes_to_stdout() {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(rendered.as_bytes())
            .context("failed to write to stdout")?;
        return Ok(());
    }

    let path = Path::new(&cli.output);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, rendered)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
