//! Heuristic price extraction from listing titles and snippets.

use regex_lite::Regex;
use std::sync::LazyLock;

/// Optional `$`, then 1-5 integer digits and up to two decimals.
static PRICE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?\s*(\d{1,5}(?:\.\d{1,2})?)").unwrap());

/// Pulls a single price out of free text.
///
/// Implementations must be pure: same text, same answer.
pub trait PriceExtractor: Send + Sync {
    /// Returns the first plausible price in `text`, if any.
    fn extract(&self, text: &str) -> Option<f64>;
}

/// Default extractor: strips thousands separators and takes the first
/// dollar-ish number.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternPriceExtractor;

impl PriceExtractor for PatternPriceExtractor {
    fn extract(&self, text: &str) -> Option<f64> {
        extract_price(text)
    }
}

/// Extracts the first price-looking token from `text`.
///
/// `"$1,234.50 firm"` gives `1234.5`, `"Sofa 299"` gives `299.0`.
pub fn extract_price(text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }

    let cleaned = text.replace(',', "");
    let caps = PRICE_TOKEN.captures(&cleaned)?;
    caps.get(1)?.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_dollar_amount_with_separator() {
        assert_eq!(extract_price("$1,234.50 firm"), Some(1234.50));
    }

    #[test]
    fn test_extract_bare_number() {
        assert_eq!(extract_price("Sofa 299"), Some(299.0));
    }

    #[test]
    fn test_extract_no_price() {
        assert_eq!(extract_price("no price listed"), None);
        assert_eq!(extract_price(""), None);
    }

    #[test]
    fn test_extract_first_match_only() {
        assert_eq!(extract_price("Was $150, now $120"), Some(150.0));
    }

    #[test]
    fn test_extract_space_after_currency() {
        assert_eq!(extract_price("Asking $ 75"), Some(75.0));
    }

    #[test]
    fn test_extract_one_decimal() {
        assert_eq!(extract_price("Lamp $12.5"), Some(12.5));
    }

    #[test]
    fn test_extract_caps_integer_digits() {
        // six digits: the first five form the token
        assert_eq!(extract_price("SKU 123456"), Some(12345.0));
    }

    #[test]
    fn test_pattern_extractor_delegates() {
        let extractor = PatternPriceExtractor;
        assert_eq!(extractor.extract("Chair - $40"), Some(40.0));
        assert_eq!(extractor.extract("Chair"), None);
    }
}
