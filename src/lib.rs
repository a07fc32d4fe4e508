//! # Egg Count
//!
//! Infers how many eggs, or what weight of egg product, a packaged item
//! contains from loosely structured open food product metadata: free-text
//! quantities ("6 eggs", "12 x 53g"), structured quantity fields and
//! category tags.

pub mod category_tags;
pub mod egg_count;
pub mod estimation_errors;
pub mod estimator_config;
pub mod logging;
pub mod product_record;
pub mod quantity_parser;
pub mod quantity_patterns;
pub mod unit_tables;
pub mod weight_estimate;

pub use egg_count::{
    calculate_egg_number, calculate_egg_number_with_reason, calculate_egg_weight,
    classify_egg_pack, EggCountEngine, InferenceReason, InferenceResult,
};
pub use product_record::ProductRecord;
