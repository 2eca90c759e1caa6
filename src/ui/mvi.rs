//! Unidirectional data flow primitives for the screens.
//!
//! Every screen keeps its state in a plain value, turns key presses and
//! service responses into intents, and folds them through a pure
//! reducer. Side effects (requests, narration, navigation) happen in
//! the app layer after the fold, never inside a reducer.

/// Marker for screen state values: plain, comparable, replaceable.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker for intents: user actions and system events a screen reacts to.
pub trait Intent: Send + 'static {}

/// Pure state transition: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
