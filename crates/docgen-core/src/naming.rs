//! Qualified and escaped type names.

/// Join a module prefix and a local type name (`prefix.Name`).
///
/// Types of the root module carry an empty prefix and keep their bare name.
///
/// ```
/// use docgen_core::naming::qualify;
/// assert_eq!(qualify("", "Job"), "Job");
/// assert_eq!(qualify("scheduler", "Options"), "scheduler.Options");
/// ```
#[must_use]
pub fn qualify(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

/// Identifier-safe form of a qualified name (`PREFIXName`).
///
/// ```
/// use docgen_core::naming::escape;
/// assert_eq!(escape("", "Job"), "Job");
/// assert_eq!(escape("scheduler", "Options"), "SCHEDULEROptions");
/// ```
#[must_use]
pub fn escape(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}{name}", prefix.to_uppercase())
    }
}

/// Last segment of a slash-separated import path.
///
/// ```
/// use docgen_core::naming::path_base;
/// assert_eq!(path_base("github.com/acme/tools/scheduler"), "scheduler");
/// assert_eq!(path_base("scheduler"), "scheduler");
/// ```
#[must_use]
pub fn path_base(import_path: &str) -> &str {
    import_path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(import_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualify_keeps_root_names_bare() {
        assert_eq!(qualify("", "InternalOptions"), "InternalOptions");
    }

    #[test]
    fn escape_uppercases_prefix_only() {
        assert_eq!(escape("net", "Dialer"), "NETDialer");
    }

    #[test]
    fn path_base_ignores_trailing_slash() {
        assert_eq!(path_base("example.com/mod/pkg/"), "pkg");
    }
}
