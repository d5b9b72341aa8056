use std::fmt;

/// Structured shape of a field's declared type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeSignature {
    /// A bare identifier: a local type or a predeclared one (`string`, `Job`).
    Named(String),
    /// A type from another package (`scheduler.Options`).
    Qualified { package: String, name: String },
    /// `*T`.
    Pointer(Box<TypeSignature>),
    /// `[]T` and `[N]T`.
    Array(Box<TypeSignature>),
    /// `map[K]V`.
    Map {
        key: Box<TypeSignature>,
        value: Box<TypeSignature>,
    },
    /// An anonymous `struct { ... }`.
    Struct,
    /// Any `interface { ... }`.
    Interface,
    /// Channels, functions, generic instantiations: kept as source text.
    Other(String),
}

impl TypeSignature {
    /// Strip every level of pointer indirection.
    #[must_use]
    pub fn pointee(&self) -> &Self {
        match self {
            Self::Pointer(inner) => inner.pointee(),
            other => other,
        }
    }
}

impl fmt::Display for TypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::Qualified { package, name } => write!(f, "{package}.{name}"),
            Self::Pointer(inner) => write!(f, "*{inner}"),
            Self::Array(elem) => write!(f, "[]{elem}"),
            Self::Map { key, value } => write!(f, "map[{key}]{value}"),
            Self::Struct => write!(f, "struct"),
            Self::Interface => write!(f, "interface{{}}"),
            Self::Other(text) => write!(f, "{text}"),
        }
    }
}
