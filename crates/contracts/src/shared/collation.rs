//! Locale-aware string ordering for table sorting.
//!
//! Mirrors what the browser's `localeCompare` does for Latin text: letters
//! compare case-insensitively first, and only when two strings are otherwise
//! equal does case decide, lowercase before uppercase.
//!
//! The result is a total order: strings that differ in any code point never
//! compare equal, so it is safe to hand to `sort_by`.

use std::cmp::Ordering;

pub fn locale_compare(a: &str, b: &str) -> Ordering {
    fold(a)
        .cmp(fold(b))
        .then_with(|| case_ranks(a).cmp(case_ranks(b)))
        .then_with(|| a.cmp(b))
}

fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

/// Lowercase < uncased or titlecase < uppercase, per character.
fn case_ranks(s: &str) -> impl Iterator<Item = u8> + '_ {
    s.chars().map(|c| {
        if c.is_lowercase() {
            0
        } else if c.is_uppercase() {
            2
        } else {
            1
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_primary_order() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("Zenith", "acme"), Ordering::Greater);
        assert_eq!(locale_compare("brake pad", "Brake Pad"), Ordering::Less);
    }

    #[test]
    fn test_lowercase_before_uppercase_on_tie() {
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("A", "a"), Ordering::Greater);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_titlecase_keeps_order_transitive() {
        // U+01C6 lower, U+01C5 titlecase, U+01C4 upper: same letter when folded
        let (lower, title, upper) = ("\u{1C6}", "\u{1C5}", "\u{1C4}");
        assert_eq!(locale_compare(lower, title), Ordering::Less);
        assert_eq!(locale_compare(title, upper), Ordering::Less);
        assert_eq!(locale_compare(lower, upper), Ordering::Less);

        let mut words = vec!["x\u{1C4}", "X\u{1C5}", "x\u{1C6}", "X\u{1C6}"];
        words.sort_by(|a, b| locale_compare(a, b));
        assert_eq!(words, ["x\u{1C6}", "x\u{1C4}", "X\u{1C6}", "X\u{1C5}"]);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(locale_compare("", "a"), Ordering::Less);
        assert_eq!(locale_compare("Oil", "Oil Filter"), Ordering::Less);
    }
}
