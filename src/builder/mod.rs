//! Builder API for assembling a vending machine from its parts.

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::VendingMachineBuilder;
