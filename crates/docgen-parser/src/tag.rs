//! Go struct tag decoding.
//!
//! Tags use the conventional `key:"value" key2:"value2"` format; lookup
//! follows the rules of Go's `reflect.StructTag.Lookup`, including stopping
//! at the first malformed pair.

/// A raw struct tag (without the surrounding backquotes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructTag<'a>(&'a str);

/// A decoded tag value split into its primary key and options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagValue {
    /// Text before the first comma (`bulk-size` in `bulk-size,omitempty`).
    pub name: String,
    pub options: Vec<String>,
    separator: bool,
}

impl TagValue {
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let mut parts = value.split(',');
        let name = parts.next().unwrap_or_default().to_string();
        let options = parts
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(ToString::to_string)
            .collect();
        Self {
            name,
            options,
            separator: value.contains(','),
        }
    }

    /// Whether the value had a comma at all, even with no options after it.
    #[must_use]
    pub const fn has_separator(&self) -> bool {
        self.separator
    }

    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

impl<'a> StructTag<'a> {
    #[must_use]
    pub const fn new(raw: &'a str) -> Self {
        Self(raw)
    }

    /// Value associated with `key`, or `None` when the key is absent.
    ///
    /// ```
    /// use docgen_parser::StructTag;
    /// let tag = StructTag::new(r#"yaml:"bulk-size" json:"bulk-size,omitempty""#);
    /// assert_eq!(tag.lookup("json").as_deref(), Some("bulk-size,omitempty"));
    /// assert_eq!(tag.lookup("mapping"), None);
    /// ```
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<String> {
        let mut rest = self.0.as_bytes();
        loop {
            let start = rest.iter().position(|b| *b != b' ')?;
            rest = &rest[start..];

            let name_len = rest
                .iter()
                .position(|b| *b <= b' ' || *b == b':' || *b == b'"' || *b == 0x7f)
                .unwrap_or(rest.len());
            if name_len == 0
                || name_len + 1 >= rest.len()
                || rest[name_len] != b':'
                || rest[name_len + 1] != b'"'
            {
                return None;
            }
            let name = &rest[..name_len];
            rest = &rest[name_len + 1..];

            let mut i = 1;
            while i < rest.len() && rest[i] != b'"' {
                if rest[i] == b'\\' {
                    i += 1;
                }
                i += 1;
            }
            if i >= rest.len() {
                return None;
            }
            let quoted = &rest[..=i];
            rest = &rest[i + 1..];

            if name == key.as_bytes() {
                return unquote(quoted);
            }
        }
    }

    /// Decoded value for `key`, split into name and options.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<TagValue> {
        self.lookup(key).map(|v| TagValue::parse(&v))
    }
}

fn unquote(quoted: &[u8]) -> Option<String> {
    let inner = std::str::from_utf8(quoted.get(1..quoted.len() - 1)?).ok()?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            '"' => out.push('"'),
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            _ => return None,
        }
    }
    Some(out)
}
