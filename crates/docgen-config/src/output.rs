//! Generated output settings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Banner placed at the top of generated Go sources.
pub const DEFAULT_BANNER: &str = "\
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.";

fn default_package() -> String {
    "main".to_string()
}

fn default_banner() -> String {
    DEFAULT_BANNER.to_string()
}

/// Output artifact kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Go source registering `encoder.Doc` values.
    #[default]
    Go,
    /// Pretty-printed JSON of the document set.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Go => f.write_str("go"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "go" => Ok(Self::Go),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}' (expected go or json)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Package clause of generated Go sources.
    #[serde(default = "default_package")]
    pub package: String,

    /// Free-text description of the generated file.
    #[serde(default)]
    pub header: String,

    /// Comment block emitted before the `DO NOT EDIT` marker; empty disables it.
    #[serde(default = "default_banner")]
    pub banner: String,

    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            package: default_package(),
            header: String::new(),
            banner: default_banner(),
            format: OutputFormat::Go,
        }
    }
}
