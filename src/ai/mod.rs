//! Agent interface and the agents themselves: random baselines, the
//! hill-climbing and genetic sequence searches, and the MCTS stub.

mod agent;
mod genetic;
mod hill_climber;
mod mcts;
mod random;
pub mod rollout;

pub use agent::Agent;
pub use genetic::GeneticAgent;
pub use hill_climber::HillClimberAgent;
pub use mcts::MctsAgent;
pub use random::{RandomAgent, RandomSequenceAgent};
