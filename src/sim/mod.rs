//! The facade through which agents observe and simulate the host game.
//!
//! Agents never see a game's internal representation. They hold states as
//! opaque immutable values and drive them through the operations below. The
//! one deliberately fallible operation is [`Simulation::successor`]: the
//! facade may meter a per-decision simulation budget, and once it is spent
//! every further call returns `None`. That `None` is an expected control-flow
//! signal, not an error; the search loops are bounded by it.

use std::fmt::Debug;

/// External game-simulation collaborator.
///
/// `legal_actions` is what can actually be executed in a concrete state;
/// `possible_actions` is the broader universe used to seed search candidates
/// (it may contain actions a given state cannot execute literally).
pub trait Simulation {
    /// Opaque immutable snapshot of the game.
    type State: Clone;
    /// Opaque action symbol drawn from a finite universe.
    type Action: Copy + PartialEq + Debug;

    /// Actions valid for literal execution in this concrete state.
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Broader action universe used to seed search candidates.
    fn possible_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Terminal win test. Mutually exclusive with [`Simulation::is_lose`].
    fn is_win(&self, state: &Self::State) -> bool;

    /// Terminal loss test.
    fn is_lose(&self, state: &Self::State) -> bool;

    /// Simulate one action. Returns `None` when the simulation budget is
    /// exhausted or the transition cannot continue.
    fn successor(&mut self, state: &Self::State, action: Self::Action) -> Option<Self::State>;

    /// Heuristic fitness of `reached` measured as progress from `root`.
    /// Higher is better; no bound is assumed.
    fn evaluate(&self, root: &Self::State, reached: &Self::State) -> f64;

    /// The neutral no-op action. Seeds fresh plans and serves as the safe
    /// default when a search must bail out before scoring anything.
    fn idle_action(&self) -> Self::Action;
}
