//! Swift literals for raw resource values.
//!
//! Raw values arrive as loosely typed JSON. The helpers at the top decide how a
//! value prints, whether it counts as empty and how a dimension such as `16dp`
//! reads as a number; the category encoders build on them.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Number, Value};

use crate::{color, options::GenerateOptions, types::Category};

lazy_static! {
    static ref FLOAT_PREFIX_REGEX: Regex =
        Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)").unwrap();
}

/// Text form of a value. Arrays print their items comma-joined.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// `false` for `null`, `false`, `0`, `""`; `true` for everything else.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Parses the longest leading decimal literal of `text`, or NaN.
pub fn parse_float(text: &str) -> f64 {
    FLOAT_PREFIX_REGEX
        .find(text.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Shortest text that reads back as `value`: `16`, `0.502`, `1e+21`, `NaN`, `Infinity`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }
    value.to_string()
}

fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        format_number(n.as_f64().unwrap_or(f64::NAN))
    }
}

/// Quoted string literal. Backslashes in the source text are kept single.
pub fn string_literal(value: &Value) -> String {
    let quoted = Value::String(to_text(value)).to_string();
    quoted.replace("\\\\", "\\")
}

/// Integers and booleans are trusted to already be literal text.
pub fn verbatim_literal(value: &Value) -> String {
    to_text(value)
}

/// The whole value as a compact JSON array literal.
///
/// Numbers print the same way as everywhere else, so `1.0` is written `1`.
pub fn array_literal(value: &Value) -> String {
    compact_json(value)
}

fn compact_json(value: &Value) -> String {
    match value {
        Value::Number(n) => number_text(n),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(compact_json).collect();
            format!("[{}]", items.join(","))
        }
        Value::Object(map) => {
            let fields: Vec<String> = map
                .iter()
                .map(|(key, item)| format!("{}:{}", Value::String(key.clone()), compact_json(item)))
                .collect();
            format!("{{{}}}", fields.join(","))
        }
        other => other.to_string(),
    }
}

/// A `CGFloat` literal, or `None` for a falsy value.
pub fn dimen_literal(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    Some(format_number(parse_float(&to_text(value))))
}

impl Category {
    /// Text placed between the member name and its literal.
    pub fn separator(&self) -> &'static str {
        match self {
            Category::Dimen => ": CGFloat = ",
            _ => " = ",
        }
    }

    /// Encodes `value` as a Swift literal for this category.
    ///
    /// Returns `None` when the entry must be left out of the output, which only
    /// happens for falsy colors and dimensions.
    pub fn encode(&self, value: &Value, options: &GenerateOptions) -> Option<String> {
        match self {
            Category::Array => Some(array_literal(value)),
            Category::Bool | Category::Integer => Some(verbatim_literal(value)),
            Category::Color => color::encode(value, options.color_type()),
            Category::Dimen => dimen_literal(value),
            Category::String => Some(string_literal(value)),
        }
    }
}
