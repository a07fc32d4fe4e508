//! # Estimator Configuration Module
//!
//! This module defines the tunable parameters of the egg count engine.
//! The defaults reproduce the reference behaviour exactly; the static
//! vocabularies and weight tables are not configurable.

use crate::estimation_errors::EstimationError;

// Constants for estimator configuration
pub const AVERAGE_EGG_WEIGHT_G: f64 = 50.0;
pub const EGG_PACK_TAG: &str = "en:chicken-eggs";
pub const MILLILITRE_DENSITY: f64 = 1.03; // egg products are slightly denser than water

/// Configuration options for egg count estimation
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorConfig {
    /// Weight of one average egg, used to turn grams into a count
    pub average_egg_weight_g: f64,
    /// Category tag marking a product as a pack of whole eggs
    pub egg_pack_tag: String,
    /// Grams per millilitre applied to structured volume quantities
    pub millilitre_density: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            average_egg_weight_g: AVERAGE_EGG_WEIGHT_G,
            egg_pack_tag: EGG_PACK_TAG.to_string(),
            millilitre_density: MILLILITRE_DENSITY,
        }
    }
}

impl EstimatorConfig {
    /// Check that every parameter can be used as a divisor or multiplier
    ///
    /// # Examples
    ///
    /// ```rust
    /// use egg_count::estimator_config::EstimatorConfig;
    ///
    /// let config = EstimatorConfig {
    ///     average_egg_weight_g: 0.0,
    ///     ..Default::default()
    /// };
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), EstimationError> {
        if !self.average_egg_weight_g.is_finite() || self.average_egg_weight_g <= 0.0 {
            return Err(EstimationError::InvalidConfig(format!(
                "average egg weight must be positive, got {}",
                self.average_egg_weight_g
            )));
        }
        if !self.millilitre_density.is_finite() || self.millilitre_density <= 0.0 {
            return Err(EstimationError::InvalidConfig(format!(
                "millilitre density must be positive, got {}",
                self.millilitre_density
            )));
        }
        if self.egg_pack_tag.trim().is_empty() {
            return Err(EstimationError::InvalidConfig(
                "egg pack tag must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
