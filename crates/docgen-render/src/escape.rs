/// Make free text safe inside a Go interpreted string literal.
///
/// Surrounding whitespace is trimmed; backslashes, double quotes and line
/// breaks are escaped.
///
/// ```
/// assert_eq!(docgen_render::escape(" say \"hi\"\nnow "), r#"say \"hi\"\nnow"#);
/// ```
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.trim().chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}
