use super::TypeSignature;

/// One entry of a file's import table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    /// Explicit package alias (`yaml "gopkg.in/yaml.v2"`), if any.
    pub alias: Option<String>,
    pub path: String,
}

/// A raw struct field, before any inclusion rule is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawField {
    /// First declared identifier; `None` for embedded fields.
    pub ident: Option<String>,
    pub signature: TypeSignature,
    /// Tag contents without the surrounding quotes.
    pub tag: Option<String>,
    /// Leading comment text.
    pub doc: String,
}

impl RawField {
    #[must_use]
    pub const fn is_embedded(&self) -> bool {
        self.ident.is_none()
    }
}

/// A struct type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDecl {
    pub name: String,
    pub doc: String,
    pub fields: Vec<RawField>,
    /// Index of the declaring file within its module (selects the import table).
    pub file: usize,
}

impl StructDecl {
    #[must_use]
    pub fn is_exported(&self) -> bool {
        self.name.starts_with(char::is_uppercase)
    }
}

/// A single constant inside a `const` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstSpec {
    pub name: String,
    pub doc: String,
}

/// A `const` declaration with its leading comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstGroup {
    pub doc: String,
    pub specs: Vec<ConstSpec>,
}

impl ConstGroup {
    /// Last line of the leading comment, trimmed; marker comments live here.
    #[must_use]
    pub fn marker(&self) -> &str {
        last_line(&self.doc)
    }
}

impl ConstSpec {
    /// Last line of the constant's own comment, trimmed.
    #[must_use]
    pub fn marker(&self) -> &str {
        last_line(&self.doc)
    }
}

fn last_line(text: &str) -> &str {
    text.lines().last().unwrap_or_default().trim()
}

/// Everything docgen needs from one Go source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoFile {
    pub package: String,
    pub imports: Vec<ImportSpec>,
    pub structs: Vec<StructDecl>,
    pub const_groups: Vec<ConstGroup>,
    /// Entries of `var RequestPartDefinitions = map[string]string{...}`.
    pub part_definitions: Vec<(String, String)>,
    /// tree-sitter reported syntax errors; extraction was best effort.
    pub has_errors: bool,
}
