//! Transaction controller.

use super::delivery::{Delivery, LoggingDelivery};
use super::observer::TransitionObserver;
use super::transition::{self, Resolved, TransitionError};
use crate::core::{GuardContext, StateHistory, StateTransition, Trigger, VendingState};
use crate::payments::{find_optimal_change, Denomination, MonetaryInventory, PaymentError};
use crate::products::{Catalogue, Product, ProductId, Stock, StockError};

/// The vending machine: current state, the open transaction and the
/// inventories it works against.
///
/// Every public trigger either completes, returning the state the machine
/// rests in, or fails with a [`TransitionError`] and changes nothing.
/// Transient states are driven through inside the trigger that enters them,
/// so `checkout`, `accept` and `cancel` come back in a resting state.
///
/// Build one with [`crate::builder::VendingMachineBuilder`].
pub struct VendingMachine<D: Delivery = LoggingDelivery> {
    state: VendingState,
    selected_product: Option<ProductId>,
    customer_balance: u64,
    stock: Stock,
    inventory: MonetaryInventory,
    delivery: D,
    observers: Vec<Box<dyn TransitionObserver + Send>>,
    history: StateHistory,
}

impl<D: Delivery> VendingMachine<D> {
    pub(crate) fn new(
        stock: Stock,
        inventory: MonetaryInventory,
        delivery: D,
        observers: Vec<Box<dyn TransitionObserver + Send>>,
        history: StateHistory,
    ) -> Self {
        Self {
            state: VendingState::Idle,
            selected_product: None,
            customer_balance: 0,
            stock,
            inventory,
            delivery,
            observers,
            history,
        }
    }

    pub fn state(&self) -> VendingState {
        self.state
    }

    pub fn selected_product(&self) -> Option<ProductId> {
        self.selected_product
    }

    /// Money inserted and not yet spent or returned, in minor units.
    ///
    /// After change has been returned this holds whatever could not be
    /// covered by the inventory, until the next transaction starts.
    pub fn customer_balance(&self) -> u64 {
        self.customer_balance
    }

    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    pub fn inventory(&self) -> &MonetaryInventory {
        &self.inventory
    }

    pub fn delivery(&self) -> &D {
        &self.delivery
    }

    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Products that can currently be bought.
    pub fn offer(&self) -> Catalogue {
        self.stock.current_offer()
    }

    // Maintenance

    pub fn start_maintenance(&mut self) -> Result<VendingState, TransitionError> {
        let resolved = self.plan(Trigger::StartMaintenance)?;
        self.commit(resolved, Trigger::StartMaintenance);
        Ok(self.state)
    }

    /// Add a cash supply to the inventory. Denominations new to the
    /// inventory are added as long as they are supported.
    pub fn reload_change<I>(&mut self, supply: I) -> Result<VendingState, TransitionError>
    where
        I: IntoIterator<Item = (Denomination, u32)>,
    {
        let resolved = self.plan(Trigger::ReloadChange)?;
        self.inventory.add_bulk(supply)?;
        self.commit(resolved, Trigger::ReloadChange);
        Ok(self.state)
    }

    pub fn add_products<I>(&mut self, products: I) -> Result<VendingState, TransitionError>
    where
        I: IntoIterator<Item = Product>,
    {
        let resolved = self.plan(Trigger::AddProducts)?;
        self.stock.add_units(products);
        self.commit(resolved, Trigger::AddProducts);
        Ok(self.state)
    }

    /// Replace the catalogue. Entries for products still in stock survive
    /// unless `catalogue` overrides them.
    pub fn update_catalogue(
        &mut self,
        catalogue: Catalogue,
    ) -> Result<VendingState, TransitionError> {
        let resolved = self.plan(Trigger::UpdateCatalogue)?;
        self.stock.replace_catalogue(catalogue);
        self.commit(resolved, Trigger::UpdateCatalogue);
        Ok(self.state)
    }

    pub fn end_maintenance(&mut self) -> Result<VendingState, TransitionError> {
        let resolved = self.plan(Trigger::EndMaintenance)?;
        self.commit(resolved, Trigger::EndMaintenance);
        Ok(self.state)
    }

    // Transaction

    /// Open a new transaction, clearing the previous session.
    pub fn start(&mut self) -> Result<VendingState, TransitionError> {
        let resolved = self.plan(Trigger::Start)?;
        self.selected_product = None;
        self.customer_balance = 0;
        self.commit(resolved, Trigger::Start);
        Ok(self.state)
    }

    pub fn select(&mut self, product_id: ProductId) -> Result<VendingState, TransitionError> {
        let resolved = self.plan(Trigger::Select)?;
        self.selected_product = Some(product_id);
        self.commit(resolved, Trigger::Select);
        Ok(self.state)
    }

    /// Accept a coin or note from the customer.
    pub fn insert(&mut self, denomination: Denomination) -> Result<VendingState, TransitionError> {
        let resolved = self.plan(Trigger::Insert)?;
        let balance = self
            .customer_balance
            .checked_add(denomination.value())
            .ok_or(PaymentError::BalanceOverflow)?;
        self.inventory.add_unit(denomination)?;
        self.customer_balance = balance;
        self.commit(resolved, Trigger::Insert);
        Ok(self.state)
    }

    /// Try to complete the purchase.
    ///
    /// Stays in `CollectingPayment` while the price is not covered, sells
    /// straight away when exact change can be given, and otherwise asks the
    /// customer to accept smaller change. A sold-out selection is refused
    /// before any of that, so no sale is offered that cannot be completed.
    pub fn checkout(&mut self) -> Result<VendingState, TransitionError> {
        transition::ensure_allowed(self.state, Trigger::Checkout)?;
        let product_id = self.require_selection(Trigger::Checkout)?;
        let price = self.stock.price_of(product_id)?;
        self.ensure_in_stock(product_id)?;

        let ctx = GuardContext {
            state: self.state,
            balance: self.customer_balance,
            price,
            inventory: &self.inventory,
        };
        let resolved = transition::resolve(self.state, Trigger::Checkout, Some(&ctx))?;

        if resolved.to == VendingState::DispatchingProduct {
            self.charge(price);
        }
        self.commit(resolved, Trigger::Checkout);
        self.settle()?;
        Ok(self.state)
    }

    /// Buy the product even though the change will be short.
    pub fn accept(&mut self) -> Result<VendingState, TransitionError> {
        let resolved = self.plan(Trigger::Accept)?;
        let product_id = self.require_selection(Trigger::Accept)?;
        let price = self.stock.price_of(product_id)?;
        self.ensure_in_stock(product_id)?;

        self.charge(price);
        self.commit(resolved, Trigger::Accept);
        self.settle()?;
        Ok(self.state)
    }

    /// Abandon the transaction. Once money has been inserted it is returned
    /// on the way back to `Idle`.
    pub fn cancel(&mut self) -> Result<VendingState, TransitionError> {
        let resolved = self.plan(Trigger::Cancel)?;
        self.commit(resolved, Trigger::Cancel);
        self.settle()?;
        Ok(self.state)
    }

    // Internals

    fn plan(&self, trigger: Trigger) -> Result<Resolved, TransitionError> {
        transition::resolve(self.state, trigger, None)
    }

    fn require_selection(&self, trigger: Trigger) -> Result<ProductId, TransitionError> {
        self.selected_product.ok_or(TransitionError::InvalidTransition {
            state: self.state,
            trigger,
        })
    }

    fn ensure_in_stock(&self, product_id: ProductId) -> Result<(), TransitionError> {
        if self.stock.units_of(product_id) == 0 {
            return Err(StockError::Underflow { product_id }.into());
        }
        Ok(())
    }

    fn charge(&mut self, price: u64) {
        self.customer_balance = self.customer_balance.saturating_sub(price);
    }

    fn commit(&mut self, resolved: Resolved, trigger: Trigger) {
        let from = self.state;
        self.state = resolved.to;
        if self.state == VendingState::Idle {
            self.selected_product = None;
        }

        let record = StateTransition::new(from, resolved.to, trigger, resolved.guards);
        for observer in &mut self.observers {
            observer.on_transition(&record);
        }
        self.history.record(record);
    }

    /// Run the on-enter actions of transient states until the machine
    /// rests.
    fn settle(&mut self) -> Result<(), TransitionError> {
        while self.state.is_transient() {
            match self.state {
                VendingState::DispatchingProduct => self.dispatch_product()?,
                VendingState::ReturningChange => self.return_change()?,
                _ => {}
            }
            let resolved = self.plan(Trigger::Advance)?;
            self.commit(resolved, Trigger::Advance);
        }
        Ok(())
    }

    fn dispatch_product(&mut self) -> Result<(), TransitionError> {
        let product_id = self.require_selection(Trigger::Advance)?;
        let product = self.stock.get_unit(product_id)?;
        self.selected_product = None;
        self.delivery.dispatch(&product);
        Ok(())
    }

    fn return_change(&mut self) -> Result<(), TransitionError> {
        if self.customer_balance == 0 {
            return Ok(());
        }

        let change = find_optimal_change(self.customer_balance, &self.inventory);
        if change.is_empty() {
            tracing::warn!(
                owed = self.customer_balance,
                "no change available to return"
            );
            return Ok(());
        }

        self.inventory.remove(&change.configuration)?;
        self.customer_balance = change.owed;
        if !change.is_exact() {
            tracing::warn!(owed = change.owed, "returned change is short");
        }
        self.delivery.send_cash(&change);
        Ok(())
    }
}

impl<D: Delivery> std::fmt::Debug for VendingMachine<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VendingMachine")
            .field("state", &self.state)
            .field("selected_product", &self.selected_product)
            .field("customer_balance", &self.customer_balance)
            .field("inventory", &self.inventory)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
