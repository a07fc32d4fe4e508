//! # Quantity Parser
//!
//! This module reads a numeric amount and an optional unit word out of the
//! free-text `quantity` field of a product ("6 eggs", "12 x 53g", "1L").
//!
//! ## Rules
//!
//! - The text is lowercased and the ligature "œ" is spelled "oe"
//! - The first amount followed by a unit word wins (single leftmost match),
//!   a comma is read as the decimal separator
//! - Trailing plural "s" characters are removed from the unit
//! - Without any unit word, the first run of digits is returned on its own
//!
//! ## Usage
//!
//! ```rust
//! use egg_count::quantity_parser::parse_quantity;
//!
//! let parsed = parse_quantity(Some("12 eggs")).unwrap();
//! assert_eq!(parsed.amount, 12.0);
//! assert_eq!(parsed.unit.as_deref(), Some("egg"));
//! ```

use crate::quantity_patterns::{QUANTITY_ONLY_REGEX, QUANTITY_WITH_UNIT_REGEX};
use log::{debug, trace};
use serde::Serialize;

/// Amount and unit extracted from a free-text quantity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedQuantity {
    /// The extracted amount; whole numbers from the digits-only path are exact
    pub amount: f64,
    /// Lowercase unit word without plural "s", if one followed the amount
    pub unit: Option<String>,
}

impl ParsedQuantity {
    pub fn new(amount: f64, unit: Option<String>) -> Self {
        Self { amount, unit }
    }

    pub fn has_unit(&self) -> bool {
        self.unit.is_some()
    }
}

/// Normalize a quantity string before unit matching
fn normalize(text: &str) -> String {
    text.to_lowercase().replace('œ', "oe")
}

/// Parse a free-text quantity into an amount and an optional unit
///
/// Returns `None` when the input is absent or contains no digits.
///
/// # Examples
///
/// ```rust
/// use egg_count::quantity_parser::parse_quantity;
///
/// let parsed = parse_quantity(Some("1L")).unwrap();
/// assert_eq!(parsed.amount, 1.0);
/// assert_eq!(parsed.unit.as_deref(), Some("l"));
///
/// let parsed = parse_quantity(Some("Boîte de 6")).unwrap();
/// assert_eq!(parsed.amount, 6.0);
/// assert_eq!(parsed.unit, None);
///
/// assert!(parse_quantity(Some("no digits here")).is_none());
/// assert!(parse_quantity(None).is_none());
/// ```
pub fn parse_quantity(text: Option<&str>) -> Option<ParsedQuantity> {
    let text = text?;
    let normalized = normalize(text);
    trace!("Parsing quantity '{}' (normalized '{}')", text, normalized);

    if let Some(captures) = QUANTITY_WITH_UNIT_REGEX.captures(&normalized) {
        let raw_amount = &captures[1];
        match raw_amount.replace(',', ".").parse::<f64>() {
            Ok(amount) => {
                let unit = captures[2].trim_end_matches('s').to_string();
                debug!("Extracted quantity {} with unit '{}' from '{}'", amount, unit, text);
                return Some(ParsedQuantity::new(amount, Some(unit)));
            }
            Err(_) => {
                debug!("Unreadable amount '{}' in '{}', trying digits only", raw_amount, text);
            }
        }
    }

    let captures = QUANTITY_ONLY_REGEX.captures(text)?;
    let amount = captures[1].parse::<f64>().ok()?;
    debug!("Extracted quantity {} without unit from '{}'", amount, text);
    Some(ParsedQuantity::new(amount, None))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_of(text: &str) -> Option<String> {
        parse_quantity(Some(text)).and_then(|p| p.unit)
    }

    #[test]
    fn test_parse_simple_quantity() {
        let parsed = parse_quantity(Some("12 eggs")).unwrap();
        assert_eq!(parsed, ParsedQuantity::new(12.0, Some("egg".to_string())));
    }

    #[test]
    fn test_parse_glued_unit() {
        let parsed = parse_quantity(Some("1L")).unwrap();
        assert_eq!(parsed, ParsedQuantity::new(1.0, Some("l".to_string())));
    }

    #[test]
    fn test_parse_absent_and_digitless() {
        assert_eq!(parse_quantity(None), None);
        assert_eq!(parse_quantity(Some("no digits here")), None);
        assert_eq!(parse_quantity(Some("")), None);
    }

    #[test]
    fn test_comma_decimal_separator() {
        let parsed = parse_quantity(Some("1,5 kg")).unwrap();
        assert_eq!(parsed.amount, 1.5);
        assert_eq!(parsed.unit.as_deref(), Some("kg"));

        let parsed = parse_quantity(Some("0.5 dozen")).unwrap();
        assert_eq!(parsed.amount, 0.5);
    }

    #[test]
    fn test_leftmost_unit_bearing_match() {
        let parsed = parse_quantity(Some("6x53g")).unwrap();
        assert_eq!(parsed.amount, 53.0);
        assert_eq!(parsed.unit.as_deref(), Some("g"));

        let parsed = parse_quantity(Some("12 x 53g")).unwrap();
        assert_eq!(parsed.amount, 12.0);
        assert_eq!(parsed.unit.as_deref(), Some("x"));
    }

    #[test]
    fn test_ligature_and_case() {
        assert_eq!(unit_of("10 Œufs").as_deref(), Some("oeuf"));
        assert_eq!(unit_of("6 EIER").as_deref(), Some("eier"));
        assert_eq!(unit_of("10 Stück").as_deref(), Some("stück"));
    }

    #[test]
    fn test_plural_stripping() {
        assert_eq!(unit_of("6 pcs").as_deref(), Some("pc"));
        assert_eq!(unit_of("2 dozens").as_deref(), Some("dozen"));
        assert_eq!(unit_of("30 unités").as_deref(), Some("unité"));
        // every trailing "s" goes, leaving a lone "s" unit empty
        assert_eq!(unit_of("4 ss").as_deref(), Some(""));
    }

    #[test]
    fn test_digits_only_fallback() {
        let parsed = parse_quantity(Some("x12")).unwrap();
        assert_eq!(parsed, ParsedQuantity::new(12.0, None));

        let parsed = parse_quantity(Some("Pack: 30")).unwrap();
        assert_eq!(parsed.amount, 30.0);
        assert!(!parsed.has_unit());
    }

    #[test]
    fn test_unreadable_amount_falls_back_to_digits() {
        let parsed = parse_quantity(Some("1,.5 kg")).unwrap();
        assert_eq!(parsed, ParsedQuantity::new(1.0, None));
    }
}
