//! The transaction controller and its collaborators.
//!
//! This is the imperative shell around [`crate::core`]: it owns the
//! inventories, runs transition actions and talks to the delivery hardware.

mod controller;
mod delivery;
mod observer;
mod transition;

pub use controller::VendingMachine;
pub use delivery::{Delivery, LoggingDelivery, RecordingDelivery};
pub use observer::{TracingObserver, TransitionObserver};
pub use transition::{candidates, resolve, Candidate, Resolved, TransitionError};
