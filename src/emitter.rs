//! One `extension <Type>.<category>` block per resource category.

use tracing::debug;

use crate::{
    comment,
    identifier,
    options::GenerateOptions,
    types::{Category, CategoryMap},
};

/// Emits the declarations of one category.
///
/// Every entry contributes a comment line and a `static let` line, in map
/// order. Nothing is emitted when no entry survives, so there are no empty
/// extensions.
pub fn emit_category(
    category: Category,
    entries: &CategoryMap,
    options: &GenerateOptions,
) -> Vec<String> {
    let mut rows = Vec::with_capacity(entries.len() * 2 + 3);

    for (key, value) in entries {
        let Some(literal) = category.encode(value, options) else {
            debug!(%category, key = key.as_str(), "skipping entry with empty value");
            continue;
        };
        rows.push(comment::synthesize(value));
        rows.push(format!(
            "{}{}{}",
            identifier::declaration(key),
            category.separator(),
            literal
        ));
    }

    if rows.is_empty() {
        return rows;
    }

    debug!(%category, declarations = rows.len() / 2, "emitted category block");
    rows.insert(
        0,
        format!("extension {}.{} {{", options.class_name(), category),
    );
    rows.push("}".to_string());
    rows.push(String::new());
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn map(value: Value) -> CategoryMap {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_string_block() {
        let entries = map(json!({"app_name": "Example", "greeting": "Hi"}));
        let rows = emit_category(Category::String, &entries, &GenerateOptions::default());
        assert_eq!(
            rows,
            [
                "extension R.string {",
                "    /// Example",
                r#"    static let app_name = "Example""#,
                "    /// Hi",
                r#"    static let greeting = "Hi""#,
                "}",
                "",
            ]
        );
    }

    #[test]
    fn test_dimen_block_uses_cgfloat() {
        let entries = map(json!({"margin": "16dp"}));
        let rows = emit_category(Category::Dimen, &entries, &GenerateOptions::default());
        assert_eq!(rows[2], "    static let margin: CGFloat = 16");
    }

    #[test]
    fn test_custom_class_name_scopes_extension() {
        let entries = map(json!({"enabled": true}));
        let options = GenerateOptions::new().with_class("Res");
        let rows = emit_category(Category::Bool, &entries, &options);
        assert_eq!(rows[0], "extension Res.bool {");
    }

    #[test]
    fn test_empty_map_emits_nothing() {
        let rows = emit_category(Category::Array, &CategoryMap::new(), &GenerateOptions::default());
        assert!(rows.is_empty());
    }

    #[test]
    fn test_all_skipped_entries_emit_nothing() {
        let entries = map(json!({"a": "", "b": 0, "c": null, "d": false}));
        let options = GenerateOptions::default();
        assert!(emit_category(Category::Color, &entries, &options).is_empty());
        assert!(emit_category(Category::Dimen, &entries, &options).is_empty());
    }

    #[test]
    fn test_skipped_entry_does_not_drop_following_entries() {
        let entries = map(json!({"none": "", "primary": "#000"}));
        let rows = emit_category(Category::Color, &entries, &GenerateOptions::default());
        assert_eq!(
            rows,
            [
                "extension R.color {",
                "    /// #000",
                "    static let primary = UIColor(red: 0, green: 0, blue: 0, alpha: 1)",
                "}",
                "",
            ]
        );
    }

    #[test]
    fn test_falsy_integers_are_kept() {
        let entries = map(json!({"zero": 0}));
        let rows = emit_category(Category::Integer, &entries, &GenerateOptions::default());
        assert_eq!(rows[2], "    static let zero = 0");
    }
}
