//! Struct tag keys and field naming rules.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_serialization() -> String {
    "yaml".to_string()
}

fn default_mapping() -> String {
    "mapping".to_string()
}

fn default_nodoc_directive() -> String {
    "docgen:nodoc".to_string()
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TagsConfig {
    /// Tag key holding the exposed field name.
    #[serde(default = "default_serialization")]
    pub serialization: String,

    /// Tag key marking discriminator fields whose values come from a constant group.
    #[serde(default = "default_mapping")]
    pub mapping: String,

    /// Token that excludes a field when present in its comment.
    #[serde(default = "default_nodoc_directive")]
    pub nodoc_directive: String,

    /// Lower-case exposed names.
    #[serde(default = "default_true")]
    pub lowercase_names: bool,
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            serialization: default_serialization(),
            mapping: default_mapping(),
            nodoc_directive: default_nodoc_directive(),
            lowercase_names: true,
        }
    }
}

impl TagsConfig {
    /// # Errors
    /// Returns `ConfigError::InvalidValue` for empty or malformed tag keys.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, key) in [
            ("tags.serialization", &self.serialization),
            ("tags.mapping", &self.mapping),
        ] {
            if key.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "tag key must not be empty".to_string(),
                });
            }
            if key.contains(|c: char| c.is_whitespace() || c == ':' || c == '"') {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: format!("'{key}' is not a valid struct tag key"),
                });
            }
        }
        if self.serialization == self.mapping {
            return Err(ConfigError::InvalidValue {
                field: "tags.mapping".to_string(),
                reason: "must differ from tags.serialization".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = TagsConfig::default();
        assert_eq!(config.serialization, "yaml");
        assert_eq!(config.mapping, "mapping");
        assert_eq!(config.nodoc_directive, "docgen:nodoc");
        assert!(config.lowercase_names);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_serialization_key_is_rejected() {
        let config = TagsConfig {
            serialization: String::new(),
            ..TagsConfig::default()
        };
        let err = config.validate().expect_err("empty key");
        assert!(matches!(err, ConfigError::InvalidValue { field, .. } if field == "tags.serialization"));
    }

    #[test]
    fn tag_key_with_colon_is_rejected() {
        let config = TagsConfig {
            mapping: "map:ping".to_string(),
            ..TagsConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn identical_keys_are_rejected() {
        let config = TagsConfig {
            mapping: "yaml".to_string(),
            ..TagsConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
