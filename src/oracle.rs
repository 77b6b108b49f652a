//! Contract for the external move-generating state machine.
//!
//! The encoder consumes exactly two behaviors from a rules engine: enumerate
//! the moves currently available in a fixed deterministic order, and apply a
//! chosen move to produce the next state. Any engine satisfying this contract
//! can drive the codec. The decoder never consults it.

pub trait MoveOracle {
    /// Position handed back and forth between the driver and the engine.
    type State;
    /// One available transition out of a state.
    type Move;

    /// Canonical starting state. Must be identical on every call.
    fn initial_state(&self) -> Self::State;

    /// All moves available from `state`, in an order that is stable across
    /// repeated calls for the same state. Empty means the state is terminal.
    fn options(&self, state: &Self::State) -> Vec<Self::Move>;

    /// Apply `mv` to `state`, producing the successor state.
    fn apply(&self, state: &Self::State, mv: &Self::Move) -> Self::State;

    /// Stable human-readable identifier for `mv`, recorded in session logs.
    fn label(&self, mv: &Self::Move) -> String;
}
