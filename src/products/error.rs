//! Stock error types.

use super::product::ProductId;
use thiserror::Error;

/// Errors raised by stock lookups and dequeues.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StockError {
    /// No queued unit was left to hand out.
    #[error("No units of product {product_id} left in stock")]
    Underflow { product_id: ProductId },

    #[error("No catalogue entry for product {product_id}")]
    MissingCatalogueEntry { product_id: ProductId },
}
