//! Assembles the complete Swift source file.

use tracing::trace;

use crate::{
    emitter::emit_category,
    options::GenerateOptions,
    types::{Category, ResourceTree},
};

/// First line of every file generated with `header` enabled.
pub const BANNER: &str = "// Generated by rdotswift <https://github.com/kawanet/rdotswift>";

/// Generates Swift source for `tree`.
///
/// The layout is, in order: banner, `#if`, platform import, the root
/// `final class` with one nested class per category, the `// source` comment,
/// one extension per non-empty category and finally `#endif`. Each part is
/// followed by a blank line and can be switched off through `options`.
///
/// ```rust
/// use rdotswift::{Category, GenerateOptions, ResourceTree, generate};
///
/// let mut tree = ResourceTree::new();
/// tree.insert(Category::String, "title", "Hello");
/// let swift = generate(&tree, &GenerateOptions::new().with_header(false).with_extension(true));
/// assert_eq!(swift, "extension R.string {\n    /// Hello\n    static let title = \"Hello\"\n}\n");
/// ```
pub fn generate(tree: &ResourceTree, options: &GenerateOptions) -> String {
    let mut out: Vec<String> = Vec::new();

    if options.header {
        out.push(BANNER.to_string());
        out.push(String::new());
    }

    if let Some(condition) = options.condition() {
        out.push(format!("#if {}", condition));
        out.push(String::new());
    }

    if options.header {
        out.push(format!("import {}", options.framework()));
        out.push(String::new());
    }

    if !options.extension {
        out.extend(scaffold(options.class_name()));
    }

    if let Some(source) = options.source() {
        out.push(format!("// {}", source));
        out.push(String::new());
    }

    for category in Category::ALL {
        out.extend(emit_category(category, tree.category(category), options));
    }

    if options.closes_condition() {
        out.push("#endif".to_string());
        out.push(String::new());
    }

    trace!(lines = out.len(), entries = tree.len(), "assembled swift source");
    out.join("\n")
}

/// Root class with one empty nested class per category.
fn scaffold(class_name: &str) -> Vec<String> {
    let mut rows = vec![format!("final class {} {{", class_name)];
    for (idx, category) in Category::ALL.iter().enumerate() {
        if idx > 0 {
            rows.push(String::new());
        }
        rows.push(format!("    final class {} {{", category));
        rows.push("    }".to_string());
    }
    rows.push("}".to_string());
    rows.push(String::new());
    rows
}
