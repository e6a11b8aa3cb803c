//! Static transition table.
//!
//! Every `(state, trigger)` pair maps to an ordered list of candidate
//! transitions. Candidates are tried in order and the first whose guard
//! passes wins; an empty list means the trigger is not allowed.

use crate::core::{Guard, GuardContext, Trigger, VendingState};
use crate::payments::PaymentError;
use crate::products::StockError;

/// Errors that can occur when firing a trigger.
///
/// Whenever one of these is returned, the machine state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("Trigger '{trigger}' is not allowed in state '{state}'")]
    InvalidTransition {
        state: VendingState,
        trigger: Trigger,
    },

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Stock(#[from] StockError),
}

/// One possible outcome of a trigger.
#[derive(Clone, Copy, Debug)]
pub struct Candidate {
    pub to: VendingState,
    pub guard: Option<Guard>,
}

impl Candidate {
    const fn to(to: VendingState) -> Self {
        Self { to, guard: None }
    }

    const fn guarded(to: VendingState, guard: Guard) -> Self {
        Self {
            to,
            guard: Some(guard),
        }
    }
}

/// Outcome chosen from the table for a trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved {
    pub to: VendingState,
    /// Guard names evaluated while choosing, in order.
    pub guards: Vec<&'static str>,
}

use VendingState::*;

const TO_IDLE: &[Candidate] = &[Candidate::to(Idle)];
const TO_MAINTENANCE: &[Candidate] = &[Candidate::to(MaintenanceMode)];
const TO_PRODUCT_SELECTION: &[Candidate] = &[Candidate::to(ProductSelection)];
const TO_COLLECTING_PAYMENT: &[Candidate] = &[Candidate::to(CollectingPayment)];
const TO_DISPATCHING: &[Candidate] = &[Candidate::to(DispatchingProduct)];
const TO_RETURNING_CHANGE: &[Candidate] = &[Candidate::to(ReturningChange)];
const CHECKOUT: &[Candidate] = &[
    Candidate::guarded(CollectingPayment, Guard::NOT_ENOUGH_MONEY),
    Candidate::guarded(DispatchingProduct, Guard::CAN_RETURN_EXACT_CHANGE),
    Candidate::to(ConfirmSmallerChange),
];
const NONE: &[Candidate] = &[];

/// Candidates for `trigger` fired from `from`, in evaluation order.
pub fn candidates(from: VendingState, trigger: Trigger) -> &'static [Candidate] {
    match from {
        Idle => match trigger {
            Trigger::StartMaintenance => TO_MAINTENANCE,
            Trigger::Start => TO_PRODUCT_SELECTION,
            _ => NONE,
        },
        MaintenanceMode => match trigger {
            Trigger::ReloadChange | Trigger::AddProducts | Trigger::UpdateCatalogue => {
                TO_MAINTENANCE
            }
            Trigger::EndMaintenance => TO_IDLE,
            _ => NONE,
        },
        ProductSelection => match trigger {
            Trigger::Cancel => TO_IDLE,
            Trigger::Select => TO_COLLECTING_PAYMENT,
            _ => NONE,
        },
        CollectingPayment => match trigger {
            Trigger::Insert => TO_COLLECTING_PAYMENT,
            Trigger::Checkout => CHECKOUT,
            Trigger::Cancel => TO_RETURNING_CHANGE,
            _ => NONE,
        },
        ConfirmSmallerChange => match trigger {
            Trigger::Accept => TO_DISPATCHING,
            Trigger::Cancel => TO_RETURNING_CHANGE,
            _ => NONE,
        },
        DispatchingProduct => match trigger {
            Trigger::Advance => TO_RETURNING_CHANGE,
            _ => NONE,
        },
        ReturningChange => match trigger {
            Trigger::Advance => TO_IDLE,
            _ => NONE,
        },
    }
}

/// Check that `trigger` has at least one candidate from `from`.
pub fn ensure_allowed(from: VendingState, trigger: Trigger) -> Result<(), TransitionError> {
    if candidates(from, trigger).is_empty() {
        Err(TransitionError::InvalidTransition {
            state: from,
            trigger,
        })
    } else {
        Ok(())
    }
}

/// Pick the first candidate whose guard passes (pure).
///
/// A guarded candidate never passes without a context.
pub fn resolve(
    from: VendingState,
    trigger: Trigger,
    ctx: Option<&GuardContext<'_>>,
) -> Result<Resolved, TransitionError> {
    let mut guards = Vec::new();
    for candidate in candidates(from, trigger) {
        let passes = match (candidate.guard, ctx) {
            (None, _) => true,
            (Some(guard), Some(ctx)) => {
                guards.push(guard.name());
                guard.check(ctx)
            }
            (Some(_), None) => false,
        };
        if passes {
            return Ok(Resolved {
                to: candidate.to,
                guards,
            });
        }
    }
    Err(TransitionError::InvalidTransition {
        state: from,
        trigger,
    })
}
