//! Source loading settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoaderConfig {
    /// Do not load packages under `vendor/`.
    #[serde(default)]
    pub skip_vendor: bool,
}
