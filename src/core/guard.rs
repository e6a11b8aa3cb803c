//! Guard predicates for controlling state transitions.
//!
//! Guards are pure functions of the values a transition depends on. They
//! never capture or mutate machine state, so evaluating a guard that fails
//! leaves everything as it was.

use super::state::VendingState;
use crate::payments::{find_optimal_change, MonetaryInventory};
use std::fmt;

/// Inputs a guard may inspect.
#[derive(Clone, Copy, Debug)]
pub struct GuardContext<'a> {
    pub state: VendingState,
    /// Money inserted by the customer, in minor units.
    pub balance: u64,
    /// Price of the selected product, in minor units.
    pub price: u64,
    pub inventory: &'a MonetaryInventory,
}

/// Named pure predicate that decides whether a transition may fire.
///
/// # Example
///
/// ```rust
/// use dispenser::core::{Guard, GuardContext, VendingState};
/// use dispenser::payments::MonetaryInventory;
///
/// let inventory = MonetaryInventory::with_default_denominations([]).unwrap();
/// let ctx = GuardContext {
///     state: VendingState::CollectingPayment,
///     balance: 50,
///     price: 120,
///     inventory: &inventory,
/// };
///
/// assert!(Guard::NOT_ENOUGH_MONEY.check(&ctx));
/// assert!(!Guard::CAN_RETURN_EXACT_CHANGE.check(&ctx));
/// ```
#[derive(Clone, Copy)]
pub struct Guard {
    name: &'static str,
    predicate: fn(&GuardContext<'_>) -> bool,
}

impl Guard {
    /// The customer has not yet covered the price.
    pub const NOT_ENOUGH_MONEY: Guard = Guard::new("not_enough_money", not_enough_money);

    /// The surplus over the price can be handed back exactly.
    pub const CAN_RETURN_EXACT_CHANGE: Guard =
        Guard::new("can_return_exact_change", can_return_exact_change);

    pub const fn new(name: &'static str, predicate: fn(&GuardContext<'_>) -> bool) -> Self {
        Self { name, predicate }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Evaluate the predicate (pure).
    pub fn check(&self, ctx: &GuardContext<'_>) -> bool {
        (self.predicate)(ctx)
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Guard").field(&self.name).finish()
    }
}

fn not_enough_money(ctx: &GuardContext<'_>) -> bool {
    ctx.balance < ctx.price
}

fn can_return_exact_change(ctx: &GuardContext<'_>) -> bool {
    ctx.balance
        .checked_sub(ctx.price)
        .is_some_and(|owed| find_optimal_change(owed, ctx.inventory).is_exact())
}
