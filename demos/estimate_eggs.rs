//! # Egg Estimation Example
//!
//! Reads product records as JSON (a single object or an array) from the file
//! given as first argument, or from a built-in sample, and prints the egg
//! count and weight inferred for each.
//!
//! ```text
//! RUST_LOG=debug cargo run --example estimate_eggs -- products.json
//! ```

use anyhow::{Context, Result};
use egg_count::{calculate_egg_number_with_reason, calculate_egg_weight, ProductRecord};
use std::env;
use std::fs;

const SAMPLE_PRODUCTS: &str = r#"[
    {"product_name": "Free range eggs", "categories_tags": ["en:chicken-eggs"], "quantity": "6 eggs"},
    {"product_name": "Oeufs frais", "categories_tags": ["en:chicken-eggs"], "quantity": "1 douzaine"},
    {"product_name": "Large eggs", "categories_tags": ["en:chicken-eggs"], "quantity": "1 dozen"},
    {"product_name": "Eggs by weight", "categories_tags": ["en:chicken-eggs"], "product_quantity": "300", "product_quantity_unit": "g"},
    {"product_name": "Liquid egg whites", "categories_tags": ["en:egg-whites"], "product_quantity": 500, "product_quantity_unit": "ml"},
    {"product_name": "Gros oeufs", "categories_tags": ["en:chicken-eggs", "gros-oeufs", "pack-of-12"], "quantity": "boîte"},
    {"product_name": "Mystery product"}
]"#;

fn load_records(path: Option<&str>) -> Result<Vec<ProductRecord>> {
    let content = match path {
        Some(path) => fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?,
        None => SAMPLE_PRODUCTS.to_string(),
    };

    let value: serde_json::Value =
        serde_json::from_str(&content).context("Product data is not valid JSON")?;
    let records = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        vec![serde_json::from_value(value)?]
    };
    Ok(records)
}

fn main() -> Result<()> {
    egg_count::logging::init();

    let path = env::args().nth(1);
    let records = load_records(path.as_deref())?;

    println!("🥚 Estimating eggs for {} products...\n", records.len());

    for record in &records {
        let result = calculate_egg_number_with_reason(record);
        let weight = calculate_egg_weight(record);

        println!("{}", record.product_name);
        println!("   quantity: {:?}", record.quantity);
        match result.value {
            Some(count) => println!("   eggs:     {count:.2} ({})", result.reason),
            None => println!("   eggs:     unknown ({})", result.reason),
        }
        println!("   weight:   {weight:.1} g");
    }

    Ok(())
}
