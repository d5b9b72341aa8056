//! Options for the discovery and synthesis phases.

use docgen_config::{DocgenConfig, EnumsConfig, TagsConfig};

/// Rules applied while discovering types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoverOptions {
    pub tags: TagsConfig,
    pub enums: EnumsConfig,
}

impl From<&DocgenConfig> for DiscoverOptions {
    fn from(config: &DocgenConfig) -> Self {
        Self {
            tags: config.tags.clone(),
            enums: config.enums.clone(),
        }
    }
}

/// File-level attributes of a synthesized document set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Package of the generated code.
    pub package: String,
    /// Declared name of the root type.
    pub name: String,
    /// Output file name.
    pub file: String,
    pub header: String,
}
