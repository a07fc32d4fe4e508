//! # Quantity Patterns Module
//!
//! This module contains the regex patterns used to read free-text quantities
//! and pack sizes out of product metadata.

use lazy_static::lazy_static;
use regex::Regex;

// Amount (one optional decimal digit after a comma or period), optional space,
// then a unit word. A trailing plural "s" is consumed outside the unit group.
pub const QUANTITY_WITH_UNIT_PATTERN: &str =
    r"([0-9]+,?\.?[0-9]?)\s*([a-zçàéèêëîïôöûüÿ]+)s?\b";

pub const QUANTITY_ONLY_PATTERN: &str = r"([0-9]+)";

pub const PACK_SIZE_PATTERN: &str = r"pack-of-([0-9]+)";

lazy_static! {
    pub static ref QUANTITY_WITH_UNIT_REGEX: Regex = Regex::new(QUANTITY_WITH_UNIT_PATTERN)
        .expect("Quantity with unit pattern should be valid");
    pub static ref QUANTITY_ONLY_REGEX: Regex =
        Regex::new(QUANTITY_ONLY_PATTERN).expect("Quantity only pattern should be valid");
    pub static ref PACK_SIZE_REGEX: Regex =
        Regex::new(PACK_SIZE_PATTERN).expect("Pack size pattern should be valid");
}
