//! Builder for constructing vending machines.

use crate::builder::error::BuildError;
use crate::core::{StateHistory, DEFAULT_HISTORY_LIMIT};
use crate::machine::{
    Delivery, LoggingDelivery, TracingObserver, TransitionObserver, VendingMachine,
};
use crate::payments::MonetaryInventory;
use crate::products::Stock;

/// Builder for constructing vending machines with a fluent API.
///
/// Stock and inventory are required. Delivery defaults to
/// [`LoggingDelivery`]; when no observer is added a [`TracingObserver`] is
/// installed.
///
/// # Example
///
/// ```rust
/// use dispenser::builder::VendingMachineBuilder;
/// use dispenser::core::VendingState;
/// use dispenser::payments::MonetaryInventory;
/// use dispenser::products::{Catalogue, Stock};
///
/// let machine = VendingMachineBuilder::new()
///     .stock(Stock::new(Catalogue::new()))
///     .inventory(MonetaryInventory::with_default_denominations([]).unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.state(), VendingState::Idle);
/// ```
pub struct VendingMachineBuilder<D: Delivery = LoggingDelivery> {
    stock: Option<Stock>,
    inventory: Option<MonetaryInventory>,
    delivery: D,
    observers: Vec<Box<dyn TransitionObserver + Send>>,
    history_limit: usize,
}

impl VendingMachineBuilder<LoggingDelivery> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            stock: None,
            inventory: None,
            delivery: LoggingDelivery,
            observers: Vec::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl<D: Delivery> VendingMachineBuilder<D> {
    /// Set the product stock (required).
    pub fn stock(mut self, stock: Stock) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Set the cash inventory (required).
    pub fn inventory(mut self, inventory: MonetaryInventory) -> Self {
        self.inventory = Some(inventory);
        self
    }

    /// Replace the delivery collaborator.
    pub fn delivery<D2: Delivery>(self, delivery: D2) -> VendingMachineBuilder<D2> {
        VendingMachineBuilder {
            stock: self.stock,
            inventory: self.inventory,
            delivery,
            observers: self.observers,
            history_limit: self.history_limit,
        }
    }

    /// Add a transition observer.
    pub fn observer<O>(mut self, observer: O) -> Self
    where
        O: TransitionObserver + Send + 'static,
    {
        self.observers.push(Box::new(observer));
        self
    }

    /// Number of transitions kept in the machine history.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Build the machine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<VendingMachine<D>, BuildError> {
        let stock = self.stock.ok_or(BuildError::MissingStock)?;
        let inventory = self.inventory.ok_or(BuildError::MissingInventory)?;

        let mut observers = self.observers;
        if observers.is_empty() {
            observers.push(Box::new(TracingObserver));
        }

        Ok(VendingMachine::new(
            stock,
            inventory,
            self.delivery,
            observers,
            StateHistory::with_limit(self.history_limit),
        ))
    }
}

impl Default for VendingMachineBuilder<LoggingDelivery> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{StateTransition, Trigger, VendingState};
    use crate::machine::RecordingDelivery;
    use crate::products::Catalogue;
    use std::sync::{Arc, Mutex};

    fn inventory() -> MonetaryInventory {
        MonetaryInventory::with_default_denominations([]).unwrap()
    }

    #[test]
    fn builder_requires_stock() {
        let result = VendingMachineBuilder::new().inventory(inventory()).build();
        assert!(matches!(result, Err(BuildError::MissingStock)));
    }

    #[test]
    fn builder_requires_inventory() {
        let result = VendingMachineBuilder::new()
            .stock(Stock::new(Catalogue::new()))
            .build();
        assert!(matches!(result, Err(BuildError::MissingInventory)));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = VendingMachineBuilder::new()
            .stock(Stock::new(Catalogue::new()))
            .inventory(inventory())
            .delivery(RecordingDelivery::default())
            .build()
            .unwrap();

        assert_eq!(machine.state(), VendingState::Idle);
        assert_eq!(machine.customer_balance(), 0);
        assert!(machine.delivery().dispatched.is_empty());
    }

    #[test]
    fn observers_see_every_transition() {
        let seen: Arc<Mutex<Vec<Trigger>>> = Arc::default();
        let sink = Arc::clone(&seen);

        let mut machine = VendingMachineBuilder::new()
            .stock(Stock::new(Catalogue::new()))
            .inventory(inventory())
            .observer(move |t: &StateTransition| sink.lock().unwrap().push(t.trigger))
            .build()
            .unwrap();

        machine.start_maintenance().unwrap();
        machine.end_maintenance().unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![Trigger::StartMaintenance, Trigger::EndMaintenance]
        );
    }

    #[test]
    fn history_limit_is_applied() {
        let mut machine = VendingMachineBuilder::new()
            .stock(Stock::new(Catalogue::new()))
            .inventory(inventory())
            .history_limit(1)
            .build()
            .unwrap();

        machine.start().unwrap();
        machine.cancel().unwrap();

        assert_eq!(machine.history().len(), 1);
        let last = machine.history().last().map(|t| t.trigger);
        assert_eq!(last, Some(Trigger::Cancel));
    }
}
