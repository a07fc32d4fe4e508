//! # Estimation Error Types Module
//!
//! This module defines the error type used by the fallible building blocks of
//! the estimator. The public estimation entry points never surface these
//! errors: they degrade to a zero value and a reason tag instead.

/// Errors raised while converting quantities or building an engine
#[derive(Debug, Clone, PartialEq)]
pub enum EstimationError {
    /// Unit token has no entry in the gram conversion table
    UnknownUnit(String),
    /// Amount could not be read as a finite number
    InvalidAmount(String),
    /// Estimator configuration rejected by validation
    InvalidConfig(String),
}

impl std::fmt::Display for EstimationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EstimationError::UnknownUnit(unit) => write!(f, "Unknown unit: {unit}"),
            EstimationError::InvalidAmount(amount) => write!(f, "Invalid amount: {amount}"),
            EstimationError::InvalidConfig(msg) => write!(f, "Invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for EstimationError {}
