//! States of the transaction controller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of the machine in its purchase/maintenance cycle.
///
/// The machine starts in [`VendingState::Idle`] and has no terminal state.
///
/// ```text
/// Idle ──► MaintenanceMode ──► Idle
/// Idle ──► ProductSelection ──► CollectingPayment ──┬──► DispatchingProduct
///                                                   └──► ConfirmSmallerChange
/// ConfirmSmallerChange ──► DispatchingProduct
/// DispatchingProduct ──► ReturningChange ──► Idle
/// ```
///
/// `DispatchingProduct` and `ReturningChange` are transient: entering them
/// runs their action and immediately advances, so a caller never observes
/// the machine resting in either.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VendingState {
    #[default]
    Idle,
    MaintenanceMode,
    ProductSelection,
    CollectingPayment,
    ConfirmSmallerChange,
    DispatchingProduct,
    ReturningChange,
}

impl VendingState {
    /// All states, in declaration order.
    pub const ALL: [VendingState; 7] = [
        VendingState::Idle,
        VendingState::MaintenanceMode,
        VendingState::ProductSelection,
        VendingState::CollectingPayment,
        VendingState::ConfirmSmallerChange,
        VendingState::DispatchingProduct,
        VendingState::ReturningChange,
    ];

    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::MaintenanceMode => "MAINTENANCE_MODE",
            Self::ProductSelection => "PRODUCT_SELECTION",
            Self::CollectingPayment => "COLLECTING_PAYMENT",
            Self::ConfirmSmallerChange => "CONFIRM_SMALLER_CHANGE",
            Self::DispatchingProduct => "DISPATCHING_PRODUCT",
            Self::ReturningChange => "RETURNING_CHANGE",
        }
    }

    /// Transient states advance on their own as soon as they are entered.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::DispatchingProduct | Self::ReturningChange)
    }

    /// A customer transaction is in flight.
    pub fn in_transaction(&self) -> bool {
        !matches!(self, Self::Idle | Self::MaintenanceMode)
    }
}

impl fmt::Display for VendingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_idle() {
        assert_eq!(VendingState::default(), VendingState::Idle);
    }

    #[test]
    fn only_dispatch_and_change_return_are_transient() {
        let transient: Vec<VendingState> = VendingState::ALL
            .into_iter()
            .filter(VendingState::is_transient)
            .collect();

        assert_eq!(
            transient,
            vec![
                VendingState::DispatchingProduct,
                VendingState::ReturningChange
            ]
        );
    }

    #[test]
    fn idle_and_maintenance_are_outside_transactions() {
        assert!(!VendingState::Idle.in_transaction());
        assert!(!VendingState::MaintenanceMode.in_transaction());
        assert!(VendingState::CollectingPayment.in_transaction());
        assert!(VendingState::ConfirmSmallerChange.in_transaction());
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(
            VendingState::ConfirmSmallerChange.to_string(),
            "CONFIRM_SMALLER_CHANGE"
        );
    }

    #[test]
    fn state_serializes_correctly() {
        let state = VendingState::CollectingPayment;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: VendingState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
