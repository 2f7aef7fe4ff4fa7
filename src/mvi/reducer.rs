//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Result of one reducer step: the successor state plus the ordered batch
/// of effects the controller must perform (issue a fetch, emit a one-shot
/// navigation event).
#[derive(Debug)]
pub struct Step<S, E> {
    pub state: S,
    pub effects: Vec<E>,
}

impl<S, E> Step<S, E> {
    /// A transition with no effects.
    pub fn state(state: S) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    /// A transition with a single effect.
    pub fn with(state: S, effect: E) -> Self {
        Self {
            state,
            effects: vec![effect],
        }
    }

    /// A transition with an ordered batch of effects.
    pub fn effects(state: S, effects: Vec<E>) -> Self {
        Self { state, effects }
    }
}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> Step. All I/O (issuing
/// fetches, pushing to output streams) happens in the controller around
/// the dispatch call.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// The effect type emitted alongside state transitions.
    type Effect: Send + 'static;

    /// Process an intent and return the new state with its effect batch.
    fn reduce(state: Self::State, intent: Self::Intent) -> Step<Self::State, Self::Effect>;
}
