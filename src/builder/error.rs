//! Build errors for the machine builder.

use thiserror::Error;

/// Errors that can occur when building a vending machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Stock not specified. Call .stock(stock) before .build()")]
    MissingStock,

    #[error("Monetary inventory not specified. Call .inventory(inventory) before .build()")]
    MissingInventory,
}
