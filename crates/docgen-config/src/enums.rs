//! Enum group discovery settings.

use serde::{Deserialize, Serialize};

fn default_marker_prefix() -> String {
    "name:".to_string()
}

fn default_excluded() -> Vec<String> {
    vec!["limit".to_string()]
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EnumsConfig {
    /// Prefix of the marker comment naming the type of a constant group (`name:Key`).
    #[serde(default = "default_marker_prefix")]
    pub marker_prefix: String,

    /// Constant identifiers never listed as values (sentinels such as `limit`).
    #[serde(default = "default_excluded")]
    pub excluded: Vec<String>,
}

impl Default for EnumsConfig {
    fn default() -> Self {
        Self {
            marker_prefix: default_marker_prefix(),
            excluded: default_excluded(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = EnumsConfig::default();
        assert_eq!(config.marker_prefix, "name:");
        assert_eq!(config.excluded, vec!["limit".to_string()]);
    }
}
