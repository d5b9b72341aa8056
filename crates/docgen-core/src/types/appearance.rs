use serde::{Deserialize, Serialize};

/// A back-reference: `type_name` uses the documented type through `field_name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Appearance {
    /// Qualified name of the parent type.
    pub type_name: String,
    /// Exposed (tag) name of the parent's field.
    pub field_name: String,
}

impl Appearance {
    #[must_use]
    pub fn new(type_name: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            field_name: field_name.into(),
        }
    }
}
