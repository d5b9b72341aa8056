//! # docgen-config
//!
//! Layered configuration loading for docgen using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DOCGEN_*` prefix, `__` as separator)
//! 2. Project-level `.docgen/config.toml`
//! 3. User-level `~/.config/docgen/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DOCGEN_TAGS__SERIALIZATION` -> `tags.serialization`,
//! `DOCGEN_OUTPUT__PACKAGE` -> `output.package`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use docgen_config::DocgenConfig;
//!
//! let config = DocgenConfig::load().expect("config");
//! println!("tag key: {}", config.tags.serialization);
//! ```

mod enums;
mod error;
mod loader;
mod output;
mod tags;

pub use enums::EnumsConfig;
pub use error::ConfigError;
pub use loader::LoaderConfig;
pub use output::{DEFAULT_BANNER, OutputConfig, OutputFormat};
pub use tags::TagsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DocgenConfig {
    #[serde(default)]
    pub tags: TagsConfig,
    #[serde(default)]
    pub enums: EnumsConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub loader: LoaderConfig,
}

impl DocgenConfig {
    /// Load and validate configuration from all sources.
    ///
    /// # Errors
    /// Returns `ConfigError::Figment` if a source cannot be read or does not
    /// match the schema, and `ConfigError::InvalidValue` if validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".docgen/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("DOCGEN_").split("__"))
    }

    /// # Errors
    /// Returns `ConfigError::InvalidValue` for the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tags.validate()?;
        if self.enums.marker_prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "enums.marker_prefix".to_string(),
                reason: "marker prefix must not be empty".to_string(),
            });
        }
        if self.output.package.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output.package".to_string(),
                reason: "package name must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("docgen").join("config.toml"))
    }
}
