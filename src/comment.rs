//! One-line documentation comments showing an entry's raw value.

use serde_json::Value;

use crate::literal::to_text;

/// Longest value shown in a comment, in characters.
pub const MAX_COMMENT_LENGTH: usize = 64;

const EMPTY_PLACEHOLDER: &str = "(empty)";
const ELLIPSIS: &str = "...";

/// Builds the `    /// <value>` line placed above a declaration.
///
/// Only an empty string shows as `(empty)`; other values that print as
/// nothing (an empty array) leave the comment blank.
pub fn synthesize(value: &Value) -> String {
    let summary = match value {
        Value::String(s) if s.is_empty() => EMPTY_PLACEHOLDER.to_string(),
        other => summarize(&to_text(other)),
    };
    format!("    /// {}", summary)
}

/// Escapes, collapses and truncates `text` to fit on one comment line.
pub fn summarize(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for c in text.chars() {
        let escaped = match c {
            '\r' => Some("\\r"),
            '\n' => Some("\\n"),
            '\t' => Some("\\t"),
            _ => None,
        };
        if let Some(escaped) = escaped {
            collapsed.push_str(escaped);
            in_whitespace = false;
        } else if c.is_whitespace() {
            if !in_whitespace {
                collapsed.push(' ');
            }
            in_whitespace = true;
        } else {
            collapsed.push(c);
            in_whitespace = false;
        }
    }

    match collapsed.char_indices().nth(MAX_COMMENT_LENGTH) {
        Some((cut, _)) => format!("{}{}", &collapsed[..cut], ELLIPSIS),
        None => collapsed,
    }
}
