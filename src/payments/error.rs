//! Payment error types.

use super::denomination::Denomination;
use thiserror::Error;

/// Errors raised by denomination construction and inventory mutation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PaymentError {
    #[error("Denomination with value {value} is not supported")]
    InvalidDenomination { value: u64 },

    #[error("{0} is not accepted by this machine")]
    UnsupportedDenomination(Denomination),

    /// The caller asked for more units than the inventory holds. This means
    /// change was removed without first being computed against the inventory.
    #[error("Asked to remove {requested} x {denomination}, but only {available} in the inventory")]
    InventoryUnderflow {
        denomination: Denomination,
        requested: u32,
        available: u32,
    },

    #[error("Adding to {denomination} would overflow its count")]
    CountOverflow { denomination: Denomination },

    #[error("Customer balance would overflow")]
    BalanceOverflow,
}
