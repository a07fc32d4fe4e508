//! # Weight Estimate Module
//!
//! Total egg weight of a product in grams, read from the structured
//! quantity fields when both are present and from the category tags
//! otherwise.

use crate::category_tags::total_weight_from_tags;
use crate::egg_count::InferenceReason;
use crate::estimator_config::EstimatorConfig;
use crate::product_record::ProductRecord;
use log::debug;

/// Estimate the egg weight of a product along with the rule that produced it
///
/// A structured unit of exactly "g" is taken verbatim; any other unit is read
/// as millilitres and scaled by the configured density. The broader gram
/// conversion table is deliberately not consulted here.
///
/// # Examples
///
/// ```rust
/// use egg_count::estimator_config::EstimatorConfig;
/// use egg_count::egg_count::InferenceReason;
/// use egg_count::product_record::ProductRecord;
/// use egg_count::weight_estimate::weight_estimate;
///
/// let record = ProductRecord::new("Liquid egg whites").with_product_quantity("500", "ml");
/// let (weight, reason) = weight_estimate(&record, &EstimatorConfig::default());
///
/// assert!((weight - 515.0).abs() < 1e-9);
/// assert_eq!(reason, InferenceReason::QuantityUnitMl);
/// ```
pub fn weight_estimate(record: &ProductRecord, config: &EstimatorConfig) -> (f64, InferenceReason) {
    if let (Some(quantity), Some(unit)) = (record.structured_quantity(), record.structured_unit()) {
        if unit == "g" {
            debug!("Egg weight {} g from structured quantity", quantity);
            return (quantity, InferenceReason::QuantityUnitG);
        }

        let weight = quantity * config.millilitre_density;
        debug!(
            "Egg weight {} g from structured quantity {} {}",
            weight, quantity, unit
        );
        return (weight, InferenceReason::QuantityUnitMl);
    }

    let tags = record.categories_tags.as_deref().unwrap_or_default();
    let weight = total_weight_from_tags(tags);
    debug!("Egg weight {} g from {} category tags", weight, tags.len());
    (weight, InferenceReason::FromCategoryTags)
}
