//! Core state machine types and logic.
//!
//! This module contains the pure part of the controller:
//! - the closed set of states and triggers
//! - guard predicates evaluated before a transition fires
//! - bounded history of transitions taken
//!
//! Nothing here performs I/O or touches the delivery collaborator.

mod guard;
mod history;
mod state;
mod trigger;

pub use guard::{Guard, GuardContext};
pub use history::{StateHistory, StateTransition, DEFAULT_HISTORY_LIMIT};
pub use state::VendingState;
pub use trigger::Trigger;
