use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use docgen_config::{OutputConfig, OutputFormat};

/// Output format accepted on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum FormatArg {
    Go,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Go => Self::Go,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Top-level CLI parser for the `docgen` binary.
#[derive(Debug, Parser)]
#[command(
    name = "docgen",
    version,
    about = "Generate yamldoc-go documentation for Go configuration structs"
)]
pub struct Cli {
    /// Directory of the Go package declaring the root struct
    #[arg(long)]
    pub path: PathBuf,

    /// Name of the root struct
    #[arg(long)]
    pub structure: String,

    /// Output file (`-` writes to stdout)
    #[arg(short, long)]
    pub output: String,

    /// Package clause of the generated file (defaults to config, `main`)
    #[arg(long)]
    pub package: Option<String>,

    /// Output format: go, json
    #[arg(short, long)]
    pub format: Option<FormatArg>,

    /// Description of the generated file
    #[arg(long)]
    pub header: Option<String>,

    /// Verbose mode (debug logging)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Apply flag overrides on top of the loaded output configuration.
    pub fn apply(&self, output: &mut OutputConfig) {
        if let Some(package) = &self.package {
            output.package.clone_from(package);
        }
        if let Some(format) = self.format {
            output.format = format.into();
        }
        if let Some(header) = &self.header {
            output.header.clone_from(header);
        }
    }

    #[must_use]
    pub fn writes_to_stdout(&self) -> bool {
        self.output == "-"
    }
}
