//! Transition notifications.

use crate::core::StateTransition;

/// Receives every transition the controller takes, including the automatic
/// ones out of transient states. Observers cannot influence control flow.
pub trait TransitionObserver {
    fn on_transition(&mut self, transition: &StateTransition);
}

impl<F> TransitionObserver for F
where
    F: FnMut(&StateTransition),
{
    fn on_transition(&mut self, transition: &StateTransition) {
        self(transition)
    }
}

/// Observer that logs each transition as structured `tracing` fields.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl TransitionObserver for TracingObserver {
    fn on_transition(&mut self, transition: &StateTransition) {
        tracing::info!(
            source = %transition.from,
            dest = %transition.to,
            trigger = %transition.trigger,
            guards = ?transition.guards,
            "state changed"
        );
    }
}
