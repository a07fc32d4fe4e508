//! # Egg Count Module
//!
//! This module decides how many eggs a product contains. The decision tree
//! tries, in order:
//!
//! 1. For egg packs with a quantity text only, the free-text quantity: a
//!    count, a number of dozens, or (for weight words) the structured gram
//!    quantity divided by the average egg weight
//! 2. Otherwise the weight estimate (structured quantity or category tags)
//!    divided by the average egg weight
//!
//! Every result carries the [`InferenceReason`] naming the rule that produced
//! it. The reason is diagnostic only.
//!
//! ## Usage
//!
//! ```rust
//! use egg_count::egg_count::{calculate_egg_number_with_reason, InferenceReason};
//! use egg_count::product_record::ProductRecord;
//!
//! let record = ProductRecord::new("Eggs")
//!     .with_categories(&["en:chicken-eggs"])
//!     .with_quantity("1 dozen");
//!
//! let result = calculate_egg_number_with_reason(&record);
//! assert_eq!(result.value, Some(12.0));
//! assert_eq!(result.reason, InferenceReason::DozenUnit);
//! ```

use crate::category_tags::is_egg_pack;
use crate::estimation_errors::EstimationError;
use crate::estimator_config::EstimatorConfig;
use crate::product_record::ProductRecord;
use crate::quantity_parser::parse_quantity;
use crate::unit_tables::{classify_unit, UnitClass};
use crate::weight_estimate::weight_estimate;
use log::{debug, info};
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Engine with the default configuration, shared by the free functions
static DEFAULT_ENGINE: LazyLock<EggCountEngine> = LazyLock::new(EggCountEngine::new);

/// Rule of the decision tree that produced an estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InferenceReason {
    /// Quantity text present but without any digits
    #[serde(rename = "no_extracted_quantity")]
    NoExtractedQuantity,
    /// Digits found with no unit word after them
    #[serde(rename = "no_extracted_unit")]
    NoExtractedUnit,
    #[serde(rename = "dozen_unit")]
    DozenUnit,
    #[serde(rename = "piecewise_unit")]
    PiecewiseUnit,
    /// Structured gram quantity over the average egg weight
    #[serde(rename = "product_quantity_over_avg_weight")]
    ProductQuantityOverAvgWeight,
    #[serde(rename = "quantity_unit_g")]
    QuantityUnitG,
    #[serde(rename = "quantity_unit_mL")]
    QuantityUnitMl,
    /// Weight class times pack size, both read from category tags
    #[serde(rename = "from_category_tags")]
    FromCategoryTags,
}

impl InferenceReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            InferenceReason::NoExtractedQuantity => "no_extracted_quantity",
            InferenceReason::NoExtractedUnit => "no_extracted_unit",
            InferenceReason::DozenUnit => "dozen_unit",
            InferenceReason::PiecewiseUnit => "piecewise_unit",
            InferenceReason::ProductQuantityOverAvgWeight => "product_quantity_over_avg_weight",
            InferenceReason::QuantityUnitG => "quantity_unit_g",
            InferenceReason::QuantityUnitMl => "quantity_unit_mL",
            InferenceReason::FromCategoryTags => "from_category_tags",
        }
    }
}

impl fmt::Display for InferenceReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An egg count estimate and the rule behind it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InferenceResult {
    /// Egg count, or `None` when the quantity text held no number
    pub value: Option<f64>,
    pub reason: InferenceReason,
}

impl InferenceResult {
    pub fn new(value: Option<f64>, reason: InferenceReason) -> Self {
        Self { value, reason }
    }

    fn counted(value: f64, reason: InferenceReason) -> Self {
        Self::new(Some(value), reason)
    }

    /// The estimate with a missing value read as zero
    pub fn value_or_zero(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }
}

/// Egg count decision procedure
#[derive(Debug, Clone)]
pub struct EggCountEngine {
    config: EstimatorConfig,
}

impl EggCountEngine {
    /// Create an engine with the default configuration
    ///
    /// # Examples
    ///
    /// ```rust
    /// use egg_count::egg_count::EggCountEngine;
    ///
    /// let engine = EggCountEngine::new();
    /// assert_eq!(engine.config().average_egg_weight_g, 50.0);
    /// ```
    pub fn new() -> Self {
        Self {
            config: EstimatorConfig::default(),
        }
    }

    /// Create an engine with a custom configuration
    ///
    /// # Errors
    ///
    /// Returns `EstimationError::InvalidConfig` if the configuration fails
    /// validation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use egg_count::egg_count::EggCountEngine;
    /// use egg_count::estimator_config::EstimatorConfig;
    ///
    /// let config = EstimatorConfig {
    ///     average_egg_weight_g: 60.0,
    ///     ..Default::default()
    /// };
    /// let engine = EggCountEngine::with_config(config)?;
    /// # Ok::<(), egg_count::estimation_errors::EstimationError>(())
    /// ```
    pub fn with_config(config: EstimatorConfig) -> Result<Self, EstimationError> {
        config.validate()?;
        info!(
            "Creating EggCountEngine: average_egg_weight={}g, egg_pack_tag={}, density={}",
            config.average_egg_weight_g, config.egg_pack_tag, config.millilitre_density
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Check whether the tags mark the product as a pack of whole eggs
    pub fn classify_egg_pack<S: AsRef<str>>(&self, tags: Option<&[S]>) -> bool {
        is_egg_pack(tags, &self.config.egg_pack_tag)
    }

    /// Run the decision tree on a product
    pub fn estimate(&self, record: &ProductRecord) -> InferenceResult {
        if self.classify_egg_pack(record.categories_tags.as_deref()) {
            if let Some(result) = self.estimate_from_quantity_text(record) {
                debug!(
                    "Egg count {:?} for '{}' ({})",
                    result.value, record.product_name, result.reason
                );
                return result;
            }
        }

        let (weight, reason) = self.egg_weight_with_reason(record);
        let count = weight / self.config.average_egg_weight_g;
        debug!(
            "Egg count {} from {} g for '{}' ({})",
            count, weight, record.product_name, reason
        );
        InferenceResult::counted(count, reason)
    }

    /// Free-text rules for egg packs; `None` hands over to the weight rules
    fn estimate_from_quantity_text(&self, record: &ProductRecord) -> Option<InferenceResult> {
        // without any quantity text the weight rules decide
        let text = record.quantity.as_deref()?;
        let Some(parsed) = parse_quantity(Some(text)) else {
            return Some(InferenceResult::new(None, InferenceReason::NoExtractedQuantity));
        };

        let Some(unit) = parsed.unit.as_deref() else {
            return Some(InferenceResult::counted(
                parsed.amount,
                InferenceReason::NoExtractedUnit,
            ));
        };

        match classify_unit(Some(unit)) {
            UnitClass::Dozen => Some(InferenceResult::counted(
                parsed.amount * 12.0,
                InferenceReason::DozenUnit,
            )),
            UnitClass::Piece => Some(InferenceResult::counted(
                parsed.amount,
                InferenceReason::PiecewiseUnit,
            )),
            UnitClass::Weight => {
                // the free-text unit only gates this rule, the number comes from the gram field
                if record.product_quantity_unit.as_deref() != Some("g") {
                    return None;
                }
                let grams = record.structured_quantity()?;
                Some(InferenceResult::counted(
                    (grams / self.config.average_egg_weight_g).floor(),
                    InferenceReason::ProductQuantityOverAvgWeight,
                ))
            }
            UnitClass::Unknown => {
                debug!("Unrecognized unit '{}' for '{}'", unit, record.product_name);
                None
            }
        }
    }

    /// Egg weight in grams and the rule that produced it
    pub fn egg_weight_with_reason(&self, record: &ProductRecord) -> (f64, InferenceReason) {
        weight_estimate(record, &self.config)
    }

    /// Egg weight in grams
    pub fn egg_weight(&self, record: &ProductRecord) -> f64 {
        self.egg_weight_with_reason(record).0
    }

    /// Egg count, with a missing value read as zero
    pub fn egg_number(&self, record: &ProductRecord) -> f64 {
        self.estimate(record).value_or_zero()
    }
}

impl Default for EggCountEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Check whether the tags mark the product as a pack of whole eggs
pub fn classify_egg_pack<S: AsRef<str>>(tags: Option<&[S]>) -> bool {
    DEFAULT_ENGINE.classify_egg_pack(tags)
}

/// Number of eggs in a product; 0 when nothing can be inferred
///
/// # Examples
///
/// ```rust
/// use egg_count::egg_count::calculate_egg_number;
/// use egg_count::product_record::ProductRecord;
///
/// let record = ProductRecord::new("Eggs")
///     .with_categories(&["en:chicken-eggs"])
///     .with_quantity("6 eggs");
/// assert_eq!(calculate_egg_number(&record), 6.0);
///
/// assert_eq!(calculate_egg_number(&ProductRecord::new("Unknown")), 0.0);
/// ```
pub fn calculate_egg_number(record: &ProductRecord) -> f64 {
    DEFAULT_ENGINE.egg_number(record)
}

/// Number of eggs in a product with the rule that produced it
pub fn calculate_egg_number_with_reason(record: &ProductRecord) -> InferenceResult {
    DEFAULT_ENGINE.estimate(record)
}

/// Egg weight of a product in grams; 0 when nothing can be inferred
pub fn calculate_egg_weight(record: &ProductRecord) -> f64 {
    DEFAULT_ENGINE.egg_weight(record)
}
