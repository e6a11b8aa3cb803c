//! State transition history tracking.
//!
//! Keeps a bounded, ordered record of the transitions the controller has
//! taken, for inspection by callers and tests.

use super::state::VendingState;
use super::trigger::Trigger;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;

/// Number of records kept when no limit is configured.
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

/// Record of a single state transition.
///
/// `guards` lists the guard names evaluated while choosing the transition,
/// in evaluation order, including guards that failed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StateTransition {
    /// The state being transitioned from
    pub from: VendingState,
    /// The state being transitioned to
    pub to: VendingState,
    pub trigger: Trigger,
    pub guards: Vec<&'static str>,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl StateTransition {
    pub fn new(
        from: VendingState,
        to: VendingState,
        trigger: Trigger,
        guards: Vec<&'static str>,
    ) -> Self {
        Self {
            from,
            to,
            trigger,
            guards,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of state transitions, oldest dropped first once the
/// limit is reached.
///
/// # Example
///
/// ```rust
/// use dispenser::core::{StateHistory, StateTransition, Trigger, VendingState};
///
/// let mut history = StateHistory::with_limit(2);
/// history.record(StateTransition::new(
///     VendingState::Idle,
///     VendingState::ProductSelection,
///     Trigger::Start,
///     vec![],
/// ));
/// history.record(StateTransition::new(
///     VendingState::ProductSelection,
///     VendingState::Idle,
///     Trigger::Cancel,
///     vec![],
/// ));
///
/// assert_eq!(
///     history.get_path(),
///     vec![VendingState::Idle, VendingState::ProductSelection, VendingState::Idle]
/// );
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct StateHistory {
    limit: usize,
    transitions: VecDeque<StateTransition>,
}

impl Default for StateHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl StateHistory {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create a history keeping at most `limit` records (at least one).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            transitions: VecDeque::new(),
        }
    }

    pub fn record(&mut self, transition: StateTransition) {
        if self.transitions.len() == self.limit {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the source of the oldest kept transition followed by the
    /// destination of every kept transition.
    pub fn get_path(&self) -> Vec<VendingState> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition> {
        self.transitions.iter()
    }

    pub fn last(&self) -> Option<&StateTransition> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
