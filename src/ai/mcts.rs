use crate::sim::Simulation;

use super::agent::Agent;

/// Monte-Carlo tree search agent, declared but not yet implemented: it
/// always plays the idle action.
///
/// TODO: implement selection/expansion/rollout/backpropagation over the
/// budgeted successor facade.
pub struct MctsAgent;

impl MctsAgent {
    pub fn new() -> Self {
        MctsAgent
    }
}

impl Default for MctsAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Simulation> Agent<S> for MctsAgent {
    fn choose_action(&mut self, sim: &mut S, _state: &S::State) -> S::Action {
        sim.idle_action()
    }

    fn name(&self) -> &str {
        "Mcts"
    }
}
