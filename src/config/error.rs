//! Configuration error types.

use crate::payments::PaymentError;
use crate::products::ProductId;
use thiserror::Error;

/// A single problem found while validating a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("Denomination value {value} is not valid")]
    InvalidDenomination { value: u64 },

    #[error("Denomination value {value} is listed more than once")]
    DuplicateDenomination { value: u64 },

    #[error("Initial inventory holds {value}, which is not a supported denomination")]
    UnsupportedInventory { value: u64 },

    #[error("Product {product_id} has a zero price")]
    ZeroPrice { product_id: ProductId },
}

/// Errors that can occur when loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Every violation found, not just the first.
    #[error("Configuration is invalid ({} violations)", .0.len())]
    Invalid(Vec<ConfigViolation>),

    #[error(transparent)]
    Payment(#[from] PaymentError),
}
