//! Dispenser: control logic for an automated retail dispenser
//!
//! Dispenser follows a "pure core, imperative shell" layout. The core
//! decides which transitions are legal and how change should be made; the
//! shell owns the inventories and drives the delivery hardware.
//!
//! # Core Concepts
//!
//! - **States and triggers**: a closed set of states and a static transition
//!   table (`core`, `machine`)
//! - **Guards**: pure predicates over balance, price and cash inventory
//! - **Change search**: depth-first search for the fewest, largest units
//!   (`payments`)
//! - **Stock**: catalogue plus FIFO queues of physical units (`products`)
//!
//! # Example
//!
//! ```rust
//! use dispenser::builder::VendingMachineBuilder;
//! use dispenser::core::VendingState;
//! use dispenser::machine::RecordingDelivery;
//! use dispenser::payments::{Denomination, MonetaryInventory};
//! use dispenser::products::{Catalogue, Product, ProductInfo, Stock};
//!
//! let d = |v| Denomination::new(v).unwrap();
//! let catalogue: Catalogue = [(2, ProductInfo::new("Water", 100))].into_iter().collect();
//!
//! let mut machine = VendingMachineBuilder::new()
//!     .stock(Stock::with_units(catalogue, [Product::new(2)]))
//!     .inventory(MonetaryInventory::with_default_denominations([(d(100), 5)]).unwrap())
//!     .delivery(RecordingDelivery::default())
//!     .build()
//!     .unwrap();
//!
//! machine.start().unwrap();
//! machine.select(2).unwrap();
//! machine.insert(d(200)).unwrap();
//!
//! assert_eq!(machine.checkout().unwrap(), VendingState::Idle);
//! assert_eq!(machine.delivery().dispatched, vec![Product::new(2)]);
//! assert_eq!(machine.delivery().cash[0].total_value(), 100);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;
pub mod payments;
pub mod products;

// Re-export commonly used types
pub use crate::core::{Trigger, VendingState};
pub use builder::VendingMachineBuilder;
pub use machine::{Delivery, TransitionError, VendingMachine};
pub use payments::{find_optimal_change, ChangeConfiguration, Denomination, MonetaryInventory};
pub use products::{Product, ProductInfo, Stock};
