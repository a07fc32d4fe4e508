//! # Product Record Model
//!
//! This module defines the product data consumed by the estimator, as
//! returned by the open food product database once validated.
//!
//! ## Usage
//!
//! ```rust
//! use egg_count::product_record::ProductRecord;
//!
//! let record = ProductRecord::new("Free range eggs")
//!     .with_categories(&["en:chicken-eggs", "en:free-range-chicken-eggs"])
//!     .with_quantity("6 eggs");
//!
//! assert_eq!(record.quantity.as_deref(), Some("6 eggs"));
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// Product metadata; every field but the name may be missing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Display name of the product (not used for estimation)
    #[serde(default)]
    pub product_name: String,

    /// Namespaced category tags (e.g., "en:chicken-eggs")
    #[serde(default)]
    pub categories_tags: Option<Vec<String>>,

    #[serde(default)]
    pub labels_tags: Option<Vec<String>>,

    #[serde(default)]
    pub ingredients_tags: Option<Vec<String>>,

    #[serde(default)]
    pub allergens_tags: Option<Vec<String>>,

    #[serde(default)]
    pub image_url: Option<String>,

    /// Free-text quantity as printed on the pack (e.g., "6 eggs", "12 x 53g")
    #[serde(default)]
    pub quantity: Option<String>,

    /// Structured quantity; the database sends it as a string or a number
    #[serde(default, deserialize_with = "deserialize_product_quantity")]
    pub product_quantity: Option<String>,

    /// Unit of the structured quantity, "g" or a volume unit
    #[serde(default)]
    pub product_quantity_unit: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

fn deserialize_product_quantity<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(value.map(|value| match value {
        StringOrNumber::String(text) => text,
        StringOrNumber::Number(number) => number.to_string(),
    }))
}

impl ProductRecord {
    /// Create a record with just a product name
    pub fn new(product_name: &str) -> Self {
        Self {
            product_name: product_name.to_string(),
            ..Default::default()
        }
    }

    /// Set the category tags
    pub fn with_categories(mut self, tags: &[&str]) -> Self {
        self.categories_tags = Some(tags.iter().map(|tag| tag.to_string()).collect());
        self
    }

    /// Set the free-text quantity
    pub fn with_quantity(mut self, quantity: &str) -> Self {
        self.quantity = Some(quantity.to_string());
        self
    }

    /// Set the structured quantity and its unit
    pub fn with_product_quantity(mut self, quantity: &str, unit: &str) -> Self {
        self.product_quantity = Some(quantity.to_string());
        self.product_quantity_unit = Some(unit.to_string());
        self
    }

    /// Numeric value of the structured quantity
    ///
    /// Empty or non-numeric text counts as absent.
    pub fn structured_quantity(&self) -> Option<f64> {
        let text = self.product_quantity.as_deref()?.trim();
        if text.is_empty() {
            return None;
        }
        text.parse::<f64>().ok().filter(|value| value.is_finite())
    }

    /// Unit of the structured quantity; an empty unit counts as absent
    pub fn structured_unit(&self) -> Option<&str> {
        self.product_quantity_unit
            .as_deref()
            .filter(|unit| !unit.is_empty())
    }
}
