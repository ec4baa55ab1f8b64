use crate::sim::Simulation;

/// Universal interface for all agents: one action per simulated frame.
pub trait Agent<S: Simulation> {
    /// Called once when a game starts, before the first frame.
    fn on_game_start(&mut self, _sim: &S, _state: &S::State) {}

    /// Choose one action for the current state. Search agents may consume
    /// the sim's entire successor budget for this decision step.
    fn choose_action(&mut self, sim: &mut S, state: &S::State) -> S::Action;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
