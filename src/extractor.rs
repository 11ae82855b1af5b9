//! Extraction of decimal numbers from free text.

use anyhow::{Context, Result};
use regex::Regex;
use std::sync::LazyLock;

/// One or more ASCII digits, optionally followed by a period and more digits.
static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.?[0-9]*").expect("number pattern is valid"));

/// Iterate over the numeric substrings of `text`, left to right and non-overlapping.
pub fn find_numeric_substrings(text: &str) -> impl Iterator<Item = &str> {
    NUMBER_PATTERN.find_iter(text).map(|m| m.as_str())
}

/// Extract every numeric substring of `text` and convert it to `f64`.
///
/// Order of appearance is kept and duplicates are preserved.
///
/// # Errors
/// Returns an error if a matched substring is rejected by the `f64` parser.
pub fn extract_numbers(text: &str) -> Result<Vec<f64>> {
    find_numeric_substrings(text)
        .map(|num_str| {
            log::debug!("matched {num_str:?}");
            num_str
                .parse::<f64>()
                .with_context(|| format!("failed to parse {num_str:?} as a number"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_text() {
        let nums = extract_numbers("a1 b22.5 c3").unwrap();
        assert_eq!(nums, vec![1.0, 22.5, 3.0]);
    }

    #[test]
    fn adjacent_numbers() {
        let matches: Vec<_> = find_numeric_substrings("1.5.2").collect();
        assert_eq!(matches, vec!["1.5", "2"]);
        assert_eq!(extract_numbers("1.5.2").unwrap(), vec![1.5, 2.0]);
    }

    #[test]
    fn trailing_period() {
        let matches: Vec<_> = find_numeric_substrings("total: 5.").collect();
        assert_eq!(matches, vec!["5."]);
        assert_eq!(extract_numbers("total: 5.").unwrap(), vec![5.0]);
    }

    #[test]
    fn no_numbers() {
        assert!(extract_numbers("no numbers here").unwrap().is_empty());
        assert!(extract_numbers("").unwrap().is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        assert_eq!(extract_numbers("7 7 7").unwrap(), vec![7.0, 7.0, 7.0]);
    }

    #[test]
    fn unsupported_formats_split() {
        assert_eq!(extract_numbers("-3").unwrap(), vec![3.0]);
        assert_eq!(extract_numbers("1e5").unwrap(), vec![1.0, 5.0]);
        assert_eq!(extract_numbers("1,000").unwrap(), vec![1.0, 0.0]);
        assert_eq!(extract_numbers(".25").unwrap(), vec![25.0]);
    }

    #[test]
    fn ascii_digits_only() {
        assert!(extract_numbers("٣ ۴ ५").unwrap().is_empty());
        assert_eq!(extract_numbers("x٣2").unwrap(), vec![2.0]);
    }

    #[test]
    fn multiline_text() {
        let text = "run 1: 0.25\nrun 2: 0.75\n";
        assert_eq!(extract_numbers(text).unwrap(), vec![1.0, 0.25, 2.0, 0.75]);
    }
}
