//! `go.mod` discovery.

use std::path::{Path, PathBuf};

use crate::error::ParserError;

pub const GO_MOD: &str = "go.mod";

/// The `go.mod` governing a directory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoMod {
    /// Directory containing `go.mod`.
    pub dir: PathBuf,
    /// Value of the `module` directive.
    pub module_path: String,
}

/// Walk up from `start` to the nearest `go.mod`.
///
/// # Errors
/// Returns `ParserError::Io` if a found `go.mod` cannot be read, or
/// `ParserError::MalformedGoMod` if it has no `module` directive.
pub fn find(start: &Path) -> Result<Option<GoMod>, ParserError> {
    for dir in start.ancestors() {
        let candidate = dir.join(GO_MOD);
        if !candidate.is_file() {
            continue;
        }
        let content = std::fs::read_to_string(&candidate)?;
        let module_path =
            parse_module_path(&content).ok_or_else(|| ParserError::MalformedGoMod {
                path: candidate.clone(),
                message: "missing module directive".to_string(),
            })?;
        return Ok(Some(GoMod {
            dir: dir.to_path_buf(),
            module_path,
        }));
    }
    Ok(None)
}

/// Extract the module path from `go.mod` contents.
///
/// ```
/// use docgen_parser::gomod::parse_module_path;
/// let content = "// comment\nmodule github.com/acme/scanner // trailing\n\ngo 1.22\n";
/// assert_eq!(parse_module_path(content).as_deref(), Some("github.com/acme/scanner"));
/// ```
#[must_use]
pub fn parse_module_path(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let line = line.split("//").next().unwrap_or_default().trim();
        let rest = line.strip_prefix("module")?;
        if !rest.starts_with([' ', '\t', '"']) {
            return None;
        }
        let path = rest.trim().trim_matches('"');
        (!path.is_empty()).then(|| path.to_string())
    })
}
