//! Money handling: denominations, the machine's cash inventory and the
//! change search that runs against it.
//!
//! Amounts are integer minor units throughout.

mod change;
mod denomination;
mod error;
mod inventory;

pub use change::{find_optimal_change, ChangeConfiguration};
pub use denomination::Denomination;
pub use error::PaymentError;
pub use inventory::{MonetaryInventory, DEFAULT_DENOMINATIONS};
