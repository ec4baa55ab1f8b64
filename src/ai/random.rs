use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::config::RandomSequenceConfig;
use crate::sim::Simulation;

use super::agent::Agent;
use super::rollout::roll_sequence;

/// An agent that selects uniformly at random from legal actions.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Simulation> Agent<S> for RandomAgent {
    fn choose_action(&mut self, sim: &mut S, state: &S::State) -> S::Action {
        let actions = sim.legal_actions(state);
        if actions.is_empty() {
            return sim.idle_action();
        }
        actions[self.rng.random_range(0..actions.len())]
    }

    fn name(&self) -> &str {
        "Random"
    }
}

/// Baseline that re-randomizes a fixed-length plan every frame, rolls it
/// forward once, and returns its first action regardless of how the roll
/// ended.
pub struct RandomSequenceAgent {
    config: RandomSequenceConfig,
    rng: StdRng,
}

impl RandomSequenceAgent {
    pub fn new(config: RandomSequenceConfig) -> Self {
        RandomSequenceAgent {
            config,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(config: RandomSequenceConfig, seed: u64) -> Self {
        RandomSequenceAgent {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<S: Simulation> Agent<S> for RandomSequenceAgent {
    fn choose_action(&mut self, sim: &mut S, state: &S::State) -> S::Action {
        let possible = sim.possible_actions(state);
        if possible.is_empty() {
            return sim.idle_action();
        }
        let plan: Vec<S::Action> = (0..self.config.sequence_length)
            .map(|_| possible[self.rng.random_range(0..possible.len())])
            .collect();
        // The rollout outcome is deliberately ignored; this baseline commits
        // to its first action no matter what.
        let _ = roll_sequence(sim, state, &plan);
        plan[0]
    }

    fn name(&self) -> &str {
        "RandomSequence"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Maze, MazeSim};

    const LAYOUT: &str = "\
#####
#P..#
#   #
#####";

    fn sim(budget: u32) -> MazeSim {
        MazeSim::new(Maze::parse(LAYOUT).unwrap(), budget)
    }

    #[test]
    fn test_random_agent_selects_legal_action() {
        let mut agent = RandomAgent::seeded(7);
        let mut sim = sim(100);
        let state = sim.initial_state();
        let legal = sim.legal_actions(&state);

        for _ in 0..100 {
            let action = agent.choose_action(&mut sim, &state);
            assert!(legal.contains(&action), "Action {action:?} is not legal");
        }
    }

    #[test]
    fn test_random_agent_idles_on_terminal_state() {
        let mut agent = RandomAgent::seeded(7);
        let mut sim = sim(100);
        let mut state = sim.initial_state();
        state = sim.advance(&state, crate::game::Move::Right);
        state = sim.advance(&state, crate::game::Move::Right);
        assert!(state.is_win());
        assert_eq!(agent.choose_action(&mut sim, &state), sim.idle_action());
    }

    #[test]
    fn test_random_sequence_agent_returns_possible_action() {
        let mut agent = RandomSequenceAgent::seeded(RandomSequenceConfig::default(), 11);
        let mut sim = sim(100);
        let state = sim.initial_state();
        let possible = sim.possible_actions(&state);

        for _ in 0..50 {
            sim.begin_decision();
            let action = agent.choose_action(&mut sim, &state);
            assert!(possible.contains(&action));
        }
    }

    #[test]
    fn test_random_sequence_agent_survives_zero_budget() {
        let mut agent = RandomSequenceAgent::seeded(RandomSequenceConfig::default(), 11);
        let mut sim = sim(0);
        let state = sim.initial_state();
        // Rollout fails on the first successor call; the agent still commits.
        let action = agent.choose_action(&mut sim, &state);
        assert!(sim.possible_actions(&state).contains(&action));
    }

    #[test]
    fn test_random_sequence_rolls_at_most_sequence_length() {
        let mut agent = RandomSequenceAgent::seeded(RandomSequenceConfig::default(), 3);
        let mut sim = sim(1000);
        let state = sim.initial_state();
        sim.begin_decision();
        let _ = agent.choose_action(&mut sim, &state);
        assert!(sim.successors_used() <= RandomSequenceConfig::default().sequence_length as u32);
    }

    #[test]
    fn test_names() {
        let a = RandomAgent::new();
        assert_eq!(Agent::<MazeSim>::name(&a), "Random");
        let b = RandomSequenceAgent::new(RandomSequenceConfig::default());
        assert_eq!(Agent::<MazeSim>::name(&b), "RandomSequence");
    }
}
