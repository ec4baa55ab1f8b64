use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::config::HillClimberConfig;
use crate::sim::Simulation;

use super::agent::Agent;
use super::rollout::{roll_sequence, Rollout};

/// Stochastic hill climber over fixed-length action plans.
///
/// Keeps one plan across decision steps. Each step starts over from a fresh
/// uniform-random plan, then repeatedly perturbs the incumbent (each
/// position independently resampled with `resample_probability`) and keeps
/// the perturbed plan whenever it scores at least as well, so ties drift
/// toward the newer candidate. The loop has no intrinsic termination: the
/// simulation's successor budget is what cuts it short, at which point the
/// first action of the incumbent plan is returned.
pub struct HillClimberAgent<S: Simulation> {
    config: HillClimberConfig,
    plan: Vec<S::Action>,
    rng: StdRng,
}

impl<S: Simulation> HillClimberAgent<S> {
    pub fn new(config: HillClimberConfig, sim: &S) -> Self {
        let plan = vec![sim.idle_action(); config.sequence_length];
        HillClimberAgent {
            config,
            plan,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(config: HillClimberConfig, sim: &S, seed: u64) -> Self {
        let mut agent = Self::new(config, sim);
        agent.rng = StdRng::seed_from_u64(seed);
        agent
    }

    /// The incumbent plan.
    pub fn plan(&self) -> &[S::Action] {
        &self.plan
    }

    fn random_plan(&mut self, possible: &[S::Action]) -> Vec<S::Action> {
        (0..self.config.sequence_length)
            .map(|_| possible[self.rng.random_range(0..possible.len())])
            .collect()
    }

    /// Copy of the incumbent with each position independently resampled
    /// with `resample_probability`.
    fn perturbed(&mut self, possible: &[S::Action]) -> Vec<S::Action> {
        let mut candidate = self.plan.clone();
        for gene in candidate.iter_mut() {
            if self.rng.random_bool(self.config.resample_probability) {
                *gene = possible[self.rng.random_range(0..possible.len())];
            }
        }
        candidate
    }
}

impl<S: Simulation> Agent<S> for HillClimberAgent<S> {
    fn on_game_start(&mut self, sim: &S, _state: &S::State) {
        self.plan = vec![sim.idle_action(); self.config.sequence_length];
    }

    fn choose_action(&mut self, sim: &mut S, state: &S::State) -> S::Action {
        let possible = sim.possible_actions(state);
        if possible.is_empty() {
            return sim.idle_action();
        }

        // Fresh random restart. The retained plan is only replaced once the
        // fresh sequence actually scores, so the pre-restart plan backs the
        // out-of-budget fallback below.
        let fresh = self.random_plan(&possible);
        let mut best_fitness = match roll_sequence(sim, state, &fresh) {
            Rollout::Win => return fresh[0],
            Rollout::OutOfBudget => return self.plan[0],
            Rollout::Lost(f) | Rollout::Completed(f) => f,
        };
        self.plan = fresh;

        loop {
            let candidate = self.perturbed(&possible);
            match roll_sequence(sim, state, &candidate) {
                // A win seen while probing a perturbation commits to the
                // incumbent, not the candidate.
                Rollout::Win => return self.plan[0],
                Rollout::OutOfBudget => return self.plan[0],
                // A candidate that walks into a loss is abandoned unscored.
                Rollout::Lost(_) => continue,
                Rollout::Completed(fitness) => {
                    if fitness >= best_fitness {
                        self.plan = candidate;
                        best_fitness = fitness;
                    }
                }
            }
        }
    }

    fn name(&self) -> &str {
        "HillClimber"
    }
}
