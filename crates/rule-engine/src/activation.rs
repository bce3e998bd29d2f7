//! Overdue Day Extraction from Free-Text Activation Status

use regex::Regex;
use std::sync::LazyLock;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit run pattern is valid"));

/// Marker that an activation is late (case-sensitive)
pub const OVERDUE_MARKER: &str = "Overdue";

/// Days overdue embedded in an activation status text.
///
/// Returns `None` when the text does not contain `Overdue`. Otherwise the
/// first run of ASCII digits is the day count, or 0 when there is none.
/// Runs too long for `u64` saturate.
pub fn overdue_days(text: &str) -> Option<u64> {
    if !text.contains(OVERDUE_MARKER) {
        return None;
    }

    let days = DIGIT_RUN
        .find(text)
        .map(|run| run.as_str().parse::<u64>().unwrap_or(u64::MAX))
        .unwrap_or(0);
    Some(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overdue_with_days() {
        assert_eq!(overdue_days("Overdue 45 days"), Some(45));
        assert_eq!(overdue_days("Overdue 5 days"), Some(5));
        assert_eq!(overdue_days("12 days Overdue"), Some(12));
    }

    #[test]
    fn test_not_overdue() {
        assert_eq!(overdue_days("On Track"), None);
        assert_eq!(overdue_days("overdue 45 days"), None);
        assert_eq!(overdue_days(""), None);
    }

    #[test]
    fn test_overdue_without_number_is_zero() {
        assert_eq!(overdue_days("Overdue"), Some(0));
    }

    #[test]
    fn test_first_digit_run_wins() {
        assert_eq!(overdue_days("Overdue 5 days (target 60)"), Some(5));
        assert_eq!(overdue_days("Overdue 031 days"), Some(31));
    }

    #[test]
    fn test_only_ascii_digits_count() {
        assert_eq!(overdue_days("Overdue \u{664}\u{665} days"), Some(0));
        assert_eq!(overdue_days("Overdue \u{664}\u{665} days, 40 total"), Some(40));
    }

    #[test]
    fn test_huge_run_saturates() {
        assert_eq!(
            overdue_days("Overdue 99999999999999999999999 days"),
            Some(u64::MAX)
        );
    }

    proptest! {
        #[test]
        fn extracts_embedded_day_count(days in 0u64..100_000, suffix in "[a-z ]{0,12}") {
            let text = format!("Overdue {} days{}", days, suffix);
            prop_assert_eq!(overdue_days(&text), Some(days));
        }

        #[test]
        fn text_without_marker_never_matches(text in "[a-z0-9 ]{0,40}") {
            prop_assert_eq!(overdue_days(&text), None);
        }
    }
}
