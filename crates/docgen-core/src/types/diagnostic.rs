use serde::{Deserialize, Serialize};

/// Category of a recoverable, per-field problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A tagged field has no leading comment and was left out.
    MissingDocumentation,
    /// An import path could not be matched to a loaded module.
    UnresolvedImport,
    /// An embedded type could not be located for inlining.
    UnresolvedEmbed,
    /// An embedded type embeds itself (directly or transitively).
    CyclicEmbedding,
    /// Two packages with the same short name declare a type of the same name.
    NameCollision,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::MissingDocumentation => "missing documentation",
            Self::UnresolvedImport => "unresolved import",
            Self::UnresolvedEmbed => "unresolved embed",
            Self::CyclicEmbedding => "cyclic embedding",
            Self::NameCollision => "name collision",
        };
        write!(f, "{s}")
    }
}

/// A recoverable problem recorded during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Qualified name of the type being resolved.
    pub type_name: String,
    /// Source identifier of the offending field, if any.
    pub field: Option<String>,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.field {
            Some(field) => write!(
                f,
                "{}: {}.{}: {}",
                self.kind, self.type_name, field, self.message
            ),
            None => write!(f, "{}: {}: {}", self.kind, self.type_name, self.message),
        }
    }
}
