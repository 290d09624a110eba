//! Property-based tests for layout guarantees that must hold for any input.

use gorepr::{append_with_config, reflect_struct, to_string, to_string_with_config, Config};
use proptest::prelude::*;

pub struct Pair {
    left: i32,
    right: i32,
}

reflect_struct!("main", Pair {
    Left: left,
    Right: right,
});

fn hex_tokens(output: &str) -> Vec<&str> {
    output
        .split(|c: char| c == ',' || c == '{' || c == '}' || c.is_whitespace())
        .filter(|token| token.starts_with("0x"))
        .collect()
}

proptest! {
    #[test]
    fn prop_bytes_are_two_digit_lowercase_hex(bytes in prop::collection::vec(any::<u8>(), 0..100)) {
        let output = to_string(&bytes).unwrap();
        let tokens = hex_tokens(&output);

        prop_assert_eq!(tokens.len(), bytes.len());
        for (token, byte) in tokens.iter().zip(&bytes) {
            prop_assert_eq!(token.len(), 4);
            prop_assert_eq!(*token, format!("0x{:02x}", byte));
        }
    }

    #[test]
    fn prop_byte_rows_hold_at_most_eight(bytes in prop::collection::vec(any::<u8>(), 9..100)) {
        let output = to_string(&bytes).unwrap();
        let rows: Vec<&str> = output.lines().filter(|line| line.starts_with('\t')).collect();

        prop_assert_eq!(rows.len(), (bytes.len() + 7) / 8);
        for row in rows {
            prop_assert!(hex_tokens(row).len() <= 8);
        }
    }

    #[test]
    fn prop_short_numeric_lists_stay_inline(items in prop::collection::vec(any::<i32>(), 0..=48)) {
        let output = to_string(&items).unwrap();
        prop_assert!(!output.contains('\n'));
    }

    #[test]
    fn prop_long_numeric_lists_put_one_element_per_line(items in prop::collection::vec(any::<i32>(), 49..120)) {
        let output = to_string(&items).unwrap();
        prop_assert_eq!(output.lines().count(), items.len() + 2);
    }

    #[test]
    fn prop_single_line_never_breaks(
        words in prop::collection::vec(".*", 0..10),
        nested in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..20), 0..5),
    ) {
        let config = Config::single_line();
        prop_assert!(!to_string_with_config(&words, &config).unwrap().contains('\n'));
        prop_assert!(!to_string_with_config(&nested, &config).unwrap().contains('\n'));
    }

    #[test]
    fn prop_zero_fields_omitted(left in -3i32..3, right in -3i32..3) {
        let output = to_string_with_config(&Pair { left, right }, &Config::single_line()).unwrap();

        prop_assert_eq!(output.contains("Left:"), left != 0);
        prop_assert_eq!(output.contains("Right:"), right != 0);
    }

    #[test]
    fn prop_zero_fields_kept_when_disabled(left in any::<i32>(), right in any::<i32>()) {
        let config = Config::single_line().with_omit_zero_fields(false);
        let output = to_string_with_config(&Pair { left, right }, &config).unwrap();

        prop_assert_eq!(output, format!("Pair{{Left: {}, Right: {}}}", left, right));
    }

    #[test]
    fn prop_quoted_strings_have_no_raw_controls(s in ".*") {
        let output = to_string(&s).unwrap();

        prop_assert!(output.starts_with('"'));
        prop_assert!(output.ends_with('"'));
        prop_assert!(!output.chars().any(char::is_control));
    }

    #[test]
    fn prop_rendering_is_deterministic(items in prop::collection::vec(any::<i64>(), 0..80)) {
        prop_assert_eq!(to_string(&items).unwrap(), to_string(&items).unwrap());
    }

    #[test]
    fn prop_append_extends_prefix(prefix in "[a-z ]{0,10}", n in any::<u16>()) {
        let config = Config::new();
        let mut out = prefix.clone();
        append_with_config(&mut out, &n, &config).unwrap();

        prop_assert_eq!(out, format!("{}{}", prefix, n));
    }
}
