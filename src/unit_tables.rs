//! # Unit Tables
//!
//! Static vocabularies used to bucket a parsed unit word, and the gram
//! conversion table for the units an egg product can be sold in.
//!
//! The vocabularies mix English, French, German, Italian, Spanish, Dutch,
//! Portuguese and a few Slavic packaging words. They are reproduced as-is,
//! including entries that look odd ("unknown", "l", "gal" are piece words).

use crate::estimation_errors::EstimationError;
use crate::estimator_config::AVERAGE_EGG_WEIGHT_G;
use log::debug;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Unit words meaning "twelve of"
pub static DOZEN_UNITS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["dzn", "dozen", "doz"].into_iter().collect());

/// Unit words meaning a number of individual eggs or packs
pub static PIECE_UNITS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "frische", "unknown", "pieze", "entre", "mixed", "pack", "portion", "p", "pk", "gro",
        "ud", "uova", "pz", "x", "moyen", "stuk", "st", "stück", "pc", "eier", "kpl", "n",
        "komada", "gal", "label", "szt", "stck", "egg", "unidade", "eieren", "unité", "stk",
        "oeuf", "u", "xl", "l", "m", "huevo", "lg", "large", "ovo", "kla", "unit", "pièce",
    ]
    .into_iter()
    .collect()
});

/// Unit words meaning a weight
pub static WEIGHT_UNITS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["lb", "kg", "oz", "à", "gram", "g", "gr"]
        .into_iter()
        .collect()
});

/// Grams per one unit, keyed by lowercase unit
static GRAMS_PER_UNIT: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Piece units, one average egg each
    map.insert("pcs", AVERAGE_EGG_WEIGHT_G);
    map.insert("sans", AVERAGE_EGG_WEIGHT_G);
    map.insert("unite", AVERAGE_EGG_WEIGHT_G);

    // Weight units
    map.insert("g", 1.0);
    map.insert("gr", 1.0);
    map.insert("gramm", 1.0);
    map.insert("oz", 28.35);
    map.insert("lbs", 453.59);

    // Volume units, egg product density
    map.insert("ml", 1.03);
    map.insert("l", 1030.0);
    map.insert("litres", 1030.0);

    map
});

/// Semantic bucket of a unit word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitClass {
    Dozen,
    Piece,
    Weight,
    Unknown,
}

/// Bucket a unit word by exact membership
///
/// The vocabularies are checked dozen first, then piece, then weight.
///
/// # Examples
///
/// ```rust
/// use egg_count::unit_tables::{classify_unit, UnitClass};
///
/// assert_eq!(classify_unit(Some("dozen")), UnitClass::Dozen);
/// assert_eq!(classify_unit(Some("oeuf")), UnitClass::Piece);
/// assert_eq!(classify_unit(Some("kg")), UnitClass::Weight);
/// assert_eq!(classify_unit(Some("cup")), UnitClass::Unknown);
/// assert_eq!(classify_unit(None), UnitClass::Unknown);
/// ```
pub fn classify_unit(unit: Option<&str>) -> UnitClass {
    let Some(unit) = unit else {
        return UnitClass::Unknown;
    };

    if DOZEN_UNITS.contains(unit) {
        UnitClass::Dozen
    } else if PIECE_UNITS.contains(unit) {
        UnitClass::Piece
    } else if WEIGHT_UNITS.contains(unit) {
        UnitClass::Weight
    } else {
        UnitClass::Unknown
    }
}

/// Convert an amount in the given unit into grams
///
/// # Errors
///
/// Returns `EstimationError::UnknownUnit` when the unit has no table entry and
/// `EstimationError::InvalidAmount` when the amount is not finite.
pub fn convert_to_grams(unit: &str, amount: f64) -> Result<f64, EstimationError> {
    let key = unit.trim().to_lowercase();
    let grams_per_unit = GRAMS_PER_UNIT
        .get(key.as_str())
        .ok_or_else(|| EstimationError::UnknownUnit(unit.to_string()))?;

    if !amount.is_finite() {
        return Err(EstimationError::InvalidAmount(amount.to_string()));
    }

    Ok(amount * grams_per_unit)
}

/// Weight in grams of a textual amount, or 0 when no conversion applies
///
/// # Examples
///
/// ```rust
/// use egg_count::unit_tables::egg_weight_from_quantity;
///
/// assert_eq!(egg_weight_from_quantity("6", "pcs"), 300.0);
/// assert_eq!(egg_weight_from_quantity("abc", "g"), 0.0);
/// assert_eq!(egg_weight_from_quantity("2", "cup"), 0.0);
/// ```
pub fn egg_weight_from_quantity(quantity: &str, unit: &str) -> f64 {
    let result = quantity
        .trim()
        .parse::<f64>()
        .map_err(|_| EstimationError::InvalidAmount(quantity.to_string()))
        .and_then(|amount| convert_to_grams(unit, amount));

    match result {
        Ok(grams) => grams,
        Err(err) => {
            debug!("No gram conversion for '{} {}': {}", quantity, unit, err);
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_vocabularies_are_disjoint() {
        assert!(DOZEN_UNITS.is_disjoint(&PIECE_UNITS));
        assert!(DOZEN_UNITS.is_disjoint(&WEIGHT_UNITS));
        assert!(PIECE_UNITS.is_disjoint(&WEIGHT_UNITS));
    }

    #[test]
    fn test_classify_is_exact_membership() {
        assert_eq!(classify_unit(Some("dozens")), UnitClass::Unknown);
        assert_eq!(classify_unit(Some("Dozen")), UnitClass::Unknown);
        assert_eq!(classify_unit(Some("eggs")), UnitClass::Unknown);
        assert_eq!(classify_unit(Some("egg")), UnitClass::Piece);
        assert_eq!(classify_unit(Some("")), UnitClass::Unknown);
    }

    #[test]
    fn test_classify_multilingual_units() {
        for unit in ["stück", "pièce", "unité", "huevo", "uova", "eieren", "szt", "komada"] {
            assert_eq!(classify_unit(Some(unit)), UnitClass::Piece, "unit '{}'", unit);
        }
        for unit in ["dzn", "doz"] {
            assert_eq!(classify_unit(Some(unit)), UnitClass::Dozen, "unit '{}'", unit);
        }
        for unit in ["lb", "oz", "à", "gram", "g", "gr"] {
            assert_eq!(classify_unit(Some(unit)), UnitClass::Weight, "unit '{}'", unit);
        }
    }

    #[test]
    fn test_odd_piece_words() {
        assert_eq!(classify_unit(Some("l")), UnitClass::Piece);
        assert_eq!(classify_unit(Some("gal")), UnitClass::Piece);
        assert_eq!(classify_unit(Some("unknown")), UnitClass::Piece);
    }

    #[test]
    fn test_convert_to_grams() {
        assert!(approx_eq(convert_to_grams("pcs", 6.0).unwrap(), 300.0));
        assert!(approx_eq(convert_to_grams("unite", 1.0).unwrap(), 50.0));
        assert!(approx_eq(convert_to_grams("gramm", 250.0).unwrap(), 250.0));
        assert!(approx_eq(convert_to_grams("oz", 2.0).unwrap(), 56.7));
        assert!(approx_eq(convert_to_grams("lbs", 1.0).unwrap(), 453.59));
        assert!(approx_eq(convert_to_grams("ml", 100.0).unwrap(), 103.0));
        assert!(approx_eq(convert_to_grams("litres", 0.5).unwrap(), 515.0));
    }

    #[test]
    fn test_convert_is_case_insensitive() {
        assert!(approx_eq(convert_to_grams("L", 1.0).unwrap(), 1030.0));
        assert!(approx_eq(convert_to_grams("ML", 10.0).unwrap(), 10.3));
        assert!(approx_eq(convert_to_grams("G", 12.0).unwrap(), 12.0));
    }

    #[test]
    fn test_convert_failures() {
        assert_eq!(
            convert_to_grams("cup", 1.0),
            Err(EstimationError::UnknownUnit("cup".to_string()))
        );
        assert!(matches!(
            convert_to_grams("g", f64::NAN),
            Err(EstimationError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_egg_weight_from_quantity_collapses_to_zero() {
        assert!(approx_eq(egg_weight_from_quantity("12", "oz"), 340.2));
        assert_eq!(egg_weight_from_quantity("", "g"), 0.0);
        assert_eq!(egg_weight_from_quantity("12", "dozen"), 0.0);
    }
}
