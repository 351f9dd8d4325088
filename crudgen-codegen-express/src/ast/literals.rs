//! Literal escaping.
//!
//! Schema identifiers are interpolated verbatim into SQL, but the SQL itself
//! still has to survive being embedded in a JavaScript literal.

use std::fmt::Write;

/// Render `text` as a double-quoted string literal.
///
/// The output is valid both as JavaScript and as JSON.
pub fn string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Escape `text` for use as literal text inside a template literal.
pub fn template_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}
