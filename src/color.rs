//! Color literals.
//!
//! Hex colors in Android notation (`#RGB`, `#ARGB`, `#RRGGBB`, `#AARRGGBB`)
//! become `UIColor`/`NSColor` initializers; anything else is passed through as
//! a string literal.
//!
//! Every initializer argument is written as `label: value`, including
//! `blue: 0`, so the output never contains `blue:0`.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use crate::literal::{format_number, is_truthy, to_text};

lazy_static! {
    static ref SHORTHAND_HEX_REGEX: Regex = Regex::new(r"^#[0-9A-Fa-f]{3,4}$").unwrap();
    static ref FULL_HEX_REGEX: Regex =
        Regex::new(r"^#(?:[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$").unwrap();
}

/// Channels of a parsed hex color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Rgba {
    /// Parses `#RGB`, `#ARGB`, `#RRGGBB` or `#AARRGGBB`.
    ///
    /// Alpha comes first in the 4 and 8 digit forms and defaults to 255.
    pub fn parse(text: &str) -> Option<Rgba> {
        let expanded = expand_shorthand(text);
        if !FULL_HEX_REGEX.is_match(&expanded) {
            return None;
        }

        let digits = &expanded[1..];
        let mut rgb = u32::from_str_radix(digits, 16).ok()?;
        let blue = (rgb & 0xFF) as u8;
        rgb >>= 8;
        let green = (rgb & 0xFF) as u8;
        rgb >>= 8;
        let red = (rgb & 0xFF) as u8;
        rgb >>= 8;
        let alpha = if digits.len() == 8 {
            (rgb & 0xFF) as u8
        } else {
            0xFF
        };

        Some(Rgba {
            red,
            green,
            blue,
            alpha,
        })
    }

    /// The channels as `[red, green, blue, alpha]` fractions.
    pub fn fractions(&self) -> [f64; 4] {
        [
            fraction(self.red),
            fraction(self.green),
            fraction(self.blue),
            fraction(self.alpha),
        ]
    }

    /// Initializer call for `color_type`, e.g. `UIColor(red: 1, ...)`.
    pub fn to_swift(&self, color_type: &str) -> String {
        let [red, green, blue, alpha] = self.fractions().map(format_number);
        format!(
            "{}(red: {}, green: {}, blue: {}, alpha: {})",
            color_type, red, green, blue, alpha
        )
    }
}

/// `#RGB` → `#RRGGBB`, `#ARGB` → `#AARRGGBB`; other input is returned unchanged.
pub fn expand_shorthand(text: &str) -> String {
    if !SHORTHAND_HEX_REGEX.is_match(text) {
        return text.to_string();
    }
    let mut expanded = String::with_capacity(text.len() * 2 - 1);
    expanded.push('#');
    for c in text[1..].chars() {
        expanded.push(c);
        expanded.push(c);
    }
    expanded
}

/// A channel as a fraction of 255, rounded to three decimals.
pub fn fraction(channel: u8) -> f64 {
    (f64::from(channel) / 255.0 * 1000.0).round() / 1000.0
}

/// Encodes a raw color value, or `None` for a falsy value.
pub fn encode(value: &Value, color_type: &str) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    let text = to_text(value);
    Some(match Rgba::parse(&text) {
        Some(rgba) => rgba.to_swift(color_type),
        None => Value::String(text).to_string(),
    })
}
