//! Shared sequence evaluator: roll a fixed-length action sequence forward
//! from a root state and report how it ended.

use crate::sim::Simulation;

/// Outcome of rolling one action sequence forward from a root state.
///
/// Fitness is always `evaluate(root, reached)` — progress from the root,
/// not an absolute state value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rollout {
    /// A win state was reached before the sequence ran out. The sequence is
    /// immediately decisive; callers commit to its first action.
    Win,
    /// The simulation could not continue (successor budget exhausted).
    /// Callers fall back to the best action they already know.
    OutOfBudget,
    /// A loss state cut the roll short; fitness of the state reached so far.
    Lost(f64),
    /// Every action applied cleanly; fitness of the final state.
    Completed(f64),
}

impl Rollout {
    /// Fitness under the standard evaluator rule, where a truncated-by-loss
    /// roll still scores the state it reached.
    pub fn fitness(self) -> Option<f64> {
        match self {
            Rollout::Lost(f) | Rollout::Completed(f) => Some(f),
            Rollout::Win | Rollout::OutOfBudget => None,
        }
    }
}

/// Roll `seq` forward from `root`, one action at a time.
///
/// Before each action the current state is checked: a win stops everything,
/// a loss stops the roll and scores what was reached. Applying an action
/// that yields no successor stops with [`Rollout::OutOfBudget`]. At most
/// `seq.len()` actions are ever applied, and nothing is applied after a
/// terminal or failure signal.
pub fn roll_sequence<S: Simulation>(sim: &mut S, root: &S::State, seq: &[S::Action]) -> Rollout {
    let mut current = root.clone();
    for &action in seq {
        if sim.is_win(&current) {
            return Rollout::Win;
        }
        if sim.is_lose(&current) {
            return Rollout::Lost(sim.evaluate(root, &current));
        }
        match sim.successor(&current, action) {
            Some(next) => current = next,
            None => return Rollout::OutOfBudget,
        }
    }
    Rollout::Completed(sim.evaluate(root, &current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Simulation;

    /// Scripted simulation: a state is a step counter, and the script names
    /// the step at which a win, loss, or budget failure fires. Counts every
    /// successor application.
    struct ScriptedSim {
        win_at: Option<u32>,
        lose_at: Option<u32>,
        fail_at: Option<u32>,
        applied: u32,
    }

    impl ScriptedSim {
        fn new() -> Self {
            ScriptedSim {
                win_at: None,
                lose_at: None,
                fail_at: None,
                applied: 0,
            }
        }
    }

    impl Simulation for ScriptedSim {
        type State = u32;
        type Action = u8;

        fn legal_actions(&self, _state: &u32) -> Vec<u8> {
            vec![0, 1]
        }

        fn possible_actions(&self, _state: &u32) -> Vec<u8> {
            vec![0, 1, 2]
        }

        fn is_win(&self, state: &u32) -> bool {
            self.win_at == Some(*state)
        }

        fn is_lose(&self, state: &u32) -> bool {
            self.lose_at == Some(*state)
        }

        fn successor(&mut self, state: &u32, _action: u8) -> Option<u32> {
            if self.fail_at == Some(*state) {
                return None;
            }
            self.applied += 1;
            Some(state + 1)
        }

        fn evaluate(&self, root: &u32, reached: &u32) -> f64 {
            (reached - root) as f64
        }

        fn idle_action(&self) -> u8 {
            0
        }
    }

    #[test]
    fn test_completed_roll_applies_every_action() {
        let mut sim = ScriptedSim::new();
        let result = roll_sequence(&mut sim, &0, &[1, 1, 1, 1, 1]);
        assert_eq!(result, Rollout::Completed(5.0));
        assert_eq!(sim.applied, 5);
    }

    #[test]
    fn test_win_stops_immediately() {
        let mut sim = ScriptedSim::new();
        sim.win_at = Some(2);
        let result = roll_sequence(&mut sim, &0, &[1, 1, 1, 1, 1]);
        assert_eq!(result, Rollout::Win);
        assert_eq!(sim.applied, 2, "no action may be applied after a win");
    }

    #[test]
    fn test_win_at_root_applies_nothing() {
        let mut sim = ScriptedSim::new();
        sim.win_at = Some(0);
        let result = roll_sequence(&mut sim, &0, &[1, 1, 1]);
        assert_eq!(result, Rollout::Win);
        assert_eq!(sim.applied, 0);
    }

    #[test]
    fn test_loss_truncates_and_scores() {
        let mut sim = ScriptedSim::new();
        sim.lose_at = Some(3);
        let result = roll_sequence(&mut sim, &0, &[1, 1, 1, 1, 1]);
        assert_eq!(result, Rollout::Lost(3.0));
        assert_eq!(sim.applied, 3, "no action may be applied after a loss");
    }

    #[test]
    fn test_failed_successor_reports_out_of_budget() {
        let mut sim = ScriptedSim::new();
        sim.fail_at = Some(2);
        let result = roll_sequence(&mut sim, &0, &[1, 1, 1, 1, 1]);
        assert_eq!(result, Rollout::OutOfBudget);
        assert_eq!(sim.applied, 2);
    }

    #[test]
    fn test_never_applies_more_than_sequence_length() {
        let mut sim = ScriptedSim::new();
        for len in 0..6 {
            sim.applied = 0;
            let seq = vec![0u8; len];
            roll_sequence(&mut sim, &0, &seq);
            assert!(sim.applied as usize <= len);
        }
    }

    #[test]
    fn test_empty_sequence_scores_the_root() {
        let mut sim = ScriptedSim::new();
        let result = roll_sequence(&mut sim, &0, &[]);
        assert_eq!(result, Rollout::Completed(0.0));
        assert_eq!(sim.applied, 0);
    }

    #[test]
    fn test_fitness_accessor() {
        assert_eq!(Rollout::Completed(2.5).fitness(), Some(2.5));
        assert_eq!(Rollout::Lost(-1.0).fitness(), Some(-1.0));
        assert_eq!(Rollout::Win.fitness(), None);
        assert_eq!(Rollout::OutOfBudget.fitness(), None);
    }
}
