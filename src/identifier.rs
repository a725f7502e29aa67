//! Swift-safe member names from arbitrary resource keys.
//!
//! Follows the identifier grammar of The Swift Programming Language: a name
//! starts with an *identifier-head* and continues with *identifier-characters*.
//! Anything else is replaced with `_`, and reserved words are escaped with
//! backticks.

/// Code point ranges allowed as the first character of an identifier.
const IDENTIFIER_HEAD: &[(u32, u32)] = &[
    (0x41, 0x5A),
    (0x5F, 0x5F),
    (0x61, 0x7A),
    (0xA8, 0xA8),
    (0xAA, 0xAA),
    (0xAD, 0xAD),
    (0xAF, 0xAF),
    (0xB2, 0xB5),
    (0xB7, 0xBA),
    (0xBC, 0xBE),
    (0xC0, 0xD6),
    (0xD8, 0xF6),
    (0xF8, 0xFF),
    (0x100, 0x2FF),
    (0x370, 0x167F),
    (0x1681, 0x180D),
    (0x180F, 0x1DBF),
    (0x1E00, 0x1FFF),
    (0x200B, 0x200D),
    (0x202A, 0x202E),
    (0x203F, 0x2040),
    (0x2054, 0x2054),
    (0x2060, 0x206F),
    (0x2070, 0x20CF),
    (0x2100, 0x218F),
    (0x2460, 0x24FF),
    (0x2776, 0x2793),
    (0x2C00, 0x2DFF),
    (0x2E80, 0x2FFF),
    (0x3004, 0x3007),
    (0x3021, 0x302F),
    (0x3031, 0x303F),
    (0x3040, 0xD7FF),
    (0xF900, 0xFD3D),
    (0xFD40, 0xFDCF),
    (0xFDF0, 0xFE1F),
    (0xFE30, 0xFE44),
    (0xFE47, 0xFFFD),
    (0x10000, 0x1FFFD),
    (0x20000, 0x2FFFD),
    (0x30000, 0x3FFFD),
    (0x40000, 0x4FFFD),
    (0x50000, 0x5FFFD),
    (0x60000, 0x6FFFD),
    (0x70000, 0x7FFFD),
    (0x80000, 0x8FFFD),
    (0x90000, 0x9FFFD),
    (0xA0000, 0xAFFFD),
    (0xB0000, 0xBFFFD),
    (0xC0000, 0xCFFFD),
    (0xD0000, 0xDFFFD),
    (0xE0000, 0xEFFFD),
];

/// Additional ranges allowed after the first character (digits and combining marks).
const IDENTIFIER_CONTINUATION: &[(u32, u32)] = &[
    (0x30, 0x39),
    (0x300, 0x36F),
    (0x1DC0, 0x1DFF),
    (0x20D0, 0x20FF),
    (0xFE20, 0xFE2F),
];

/// Words that need backticks to be used as a member name.
const RESERVED_WORDS: &[&str] = &[
    // declarations
    "associatedtype",
    "class",
    "deinit",
    "enum",
    "extension",
    "fileprivate",
    "func",
    "import",
    "init",
    "inout",
    "internal",
    "let",
    "open",
    "operator",
    "private",
    "precedencegroup",
    "protocol",
    "public",
    "rethrows",
    "static",
    "struct",
    "subscript",
    "typealias",
    "var",
    // statements
    "break",
    "case",
    "catch",
    "continue",
    "default",
    "defer",
    "do",
    "else",
    "fallthrough",
    "for",
    "guard",
    "if",
    "in",
    "repeat",
    "return",
    "throw",
    "switch",
    "where",
    "while",
    // expressions and types
    "Any",
    "as",
    "await",
    "false",
    "is",
    "nil",
    "self",
    "Self",
    "super",
    "throws",
    "true",
    "try",
];

/// Replacement for characters that are not valid in a member name.
const PLACEHOLDER: char = '_';

fn in_ranges(ranges: &[(u32, u32)], c: char) -> bool {
    let cp = c as u32;
    ranges.iter().any(|&(lo, hi)| lo <= cp && cp <= hi)
}

/// Whether `c` may start a Swift identifier.
pub fn is_identifier_head(c: char) -> bool {
    in_ranges(IDENTIFIER_HEAD, c)
}

/// Whether `c` may appear after the first character of a Swift identifier.
pub fn is_identifier_character(c: char) -> bool {
    is_identifier_head(c) || in_ranges(IDENTIFIER_CONTINUATION, c)
}

/// Whether `name` must be escaped with backticks.
pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Maps an arbitrary key to a valid Swift member name.
///
/// ```rust
/// use rdotswift::identifier::sanitize;
/// assert_eq!(sanitize("foo-bar"), "foo_bar");
/// assert_eq!(sanitize("class"), "`class`");
/// assert_eq!(sanitize("2x"), "_2x");
/// ```
pub fn sanitize(key: &str) -> String {
    let mut name = String::with_capacity(key.len() + 2);
    let mut chars = key.chars();

    match chars.next() {
        None => name.push(PLACEHOLDER),
        Some(c) if is_identifier_head(c) => name.push(c),
        // Keep leading digits and marks visible behind an underscore.
        Some(c) if is_identifier_character(c) => {
            name.push(PLACEHOLDER);
            name.push(c);
        }
        Some(_) => name.push(PLACEHOLDER),
    }

    name.extend(chars.map(|c| {
        if is_identifier_character(c) {
            c
        } else {
            PLACEHOLDER
        }
    }));

    if is_reserved(&name) {
        format!("`{}`", name)
    } else {
        name
    }
}

/// The declaration prefix for an entry, e.g. `    static let title`.
pub fn declaration(key: &str) -> String {
    format!("    static let {}", sanitize(key))
}
