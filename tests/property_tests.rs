use proptest::prelude::*;
use rdotswift::color::{Rgba, fraction};
use rdotswift::identifier::{is_identifier_character, is_identifier_head, is_reserved, sanitize};
use rdotswift::{Category, GenerateOptions, ResourceTree, generate};

fn options_strategy() -> impl Strategy<Value = GenerateOptions> {
    (
        proptest::option::of("[A-Z][A-Za-z]{0,6}"),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        proptest::option::of("[A-Z]{1,8}"),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(class, extension, header, appkit, condition, endif)| GenerateOptions {
            class,
            extension,
            header,
            appkit,
            condition,
            endif,
            source: None,
        })
}

fn key_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_-]{0,10}").expect("valid key regex")
}

fn text_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ -~]{0,40}").expect("valid text regex")
}

fn tree_strategy() -> impl Strategy<Value = ResourceTree> {
    (
        prop::collection::vec((key_strategy(), text_strategy()), 0..6),
        prop::collection::vec((key_strategy(), 0u32..=0xFFFFFF), 0..6),
        prop::collection::vec((key_strategy(), any::<i32>()), 0..6),
    )
        .prop_map(|(strings, colors, integers)| {
            let mut tree = ResourceTree::new();
            for (k, v) in strings {
                tree.insert(Category::String, k, v);
            }
            for (k, rgb) in colors {
                tree.insert(Category::Color, k, format!("#{:06x}", rgb));
            }
            for (k, v) in integers {
                tree.insert(Category::Integer, k, v);
            }
            tree
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn six_digit_colors_round_trip_within_a_thousandth(rgb in 0u32..=0xFFFFFF) {
        let rgba = Rgba::parse(&format!("#{:06X}", rgb)).expect("six hex digits parse");
        let channels = [(rgb >> 16) & 0xFF, (rgb >> 8) & 0xFF, rgb & 0xFF];
        let [red, green, blue, alpha] = rgba.fractions();

        for (normalized, original) in [red, green, blue].into_iter().zip(channels) {
            let exact = f64::from(original) / 255.0;
            prop_assert!((normalized - exact).abs() <= 0.0005 + f64::EPSILON);
            prop_assert!(((normalized * 255.0).round() as u32).abs_diff(original) <= 1);
        }
        prop_assert_eq!(alpha, 1.0);
    }

    #[test]
    fn shorthand_matches_doubled_digits(digits in "[0-9a-fA-F]{3,4}") {
        let doubled: String = digits.chars().flat_map(|c| [c, c]).collect();
        prop_assert_eq!(
            Rgba::parse(&format!("#{}", digits)),
            Rgba::parse(&format!("#{}", doubled))
        );
    }

    #[test]
    fn fractions_stay_in_unit_range(channel in any::<u8>()) {
        let f = fraction(channel);
        prop_assert!((0.0..=1.0).contains(&f));
        prop_assert_eq!((f * 1000.0).round() / 1000.0, f);
    }

    #[test]
    fn sanitized_keys_are_valid_identifiers(key in "\\PC{0,16}") {
        let name = sanitize(&key);
        let bare = name.trim_matches('`');
        let mut chars = bare.chars();
        let head = chars.next().expect("never empty");
        prop_assert!(is_identifier_head(head));
        prop_assert!(chars.all(is_identifier_character));
        prop_assert_eq!(name.starts_with('`'), is_reserved(bare));
    }

    #[test]
    fn generation_is_deterministic(tree in tree_strategy(), options in options_strategy()) {
        prop_assert_eq!(generate(&tree, &options), generate(&tree, &options));
    }

    #[test]
    fn every_entry_gets_a_comment_and_a_declaration(tree in tree_strategy()) {
        let swift = generate(&tree, &GenerateOptions::new().with_extension(true).with_header(false));
        let declarations = swift.lines().filter(|l| l.starts_with("    static let ")).count();
        let comments = swift.lines().filter(|l| l.starts_with("    /// ")).count();
        prop_assert_eq!(declarations, tree.len());
        prop_assert_eq!(comments, tree.len());
    }
}
