use crate::sim::Simulation;

use super::maze::Maze;
use super::state::{ChaseState, Move};

/// Weight of each pellet collected since the root state.
const PELLET_WEIGHT: f64 = 10.0;
/// Bonus for reaching a win, penalty for getting caught.
const WIN_BONUS: f64 = 500.0;
const LOSE_PENALTY: f64 = 500.0;
/// Tiebreak pulling the player toward the nearest remaining pellet.
const DISTANCE_WEIGHT: f64 = 0.5;

/// `Simulation` facade over a [`Maze`], metering a per-decision successor
/// budget the way the host engine the agents were written for does.
///
/// Call [`MazeSim::begin_decision`] once per frame before handing the state
/// to an agent; once the budget is spent, [`Simulation::successor`] returns
/// `None` until the next frame.
#[derive(Debug, Clone)]
pub struct MazeSim {
    maze: Maze,
    budget: u32,
    used: u32,
}

impl MazeSim {
    pub fn new(maze: Maze, successor_budget: u32) -> Self {
        MazeSim {
            maze,
            budget: successor_budget,
            used: 0,
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Initial state for this sim's maze.
    pub fn initial_state(&self) -> ChaseState {
        ChaseState::initial(&self.maze)
    }

    /// Reset the successor budget for a new decision step.
    pub fn begin_decision(&mut self) {
        self.used = 0;
    }

    /// Successor calls consumed since the last [`MazeSim::begin_decision`].
    pub fn successors_used(&self) -> u32 {
        self.used
    }

    /// Advance the real game by one chosen action, outside the budget.
    pub fn advance(&self, state: &ChaseState, action: Move) -> ChaseState {
        state.apply(&self.maze, action)
    }
}

impl Simulation for MazeSim {
    type State = ChaseState;
    type Action = Move;

    fn legal_actions(&self, state: &ChaseState) -> Vec<Move> {
        if state.is_terminal() {
            return Vec::new();
        }
        Move::ALL
            .into_iter()
            .filter(|&mv| mv == Move::Stop || self.maze.step(state.player(), mv) != state.player())
            .collect()
    }

    fn possible_actions(&self, _state: &ChaseState) -> Vec<Move> {
        Move::ALL.to_vec()
    }

    fn is_win(&self, state: &ChaseState) -> bool {
        state.is_win()
    }

    fn is_lose(&self, state: &ChaseState) -> bool {
        state.is_lose()
    }

    fn successor(&mut self, state: &ChaseState, action: Move) -> Option<ChaseState> {
        if self.used >= self.budget || state.is_terminal() {
            return None;
        }
        self.used += 1;
        Some(state.apply(&self.maze, action))
    }

    fn evaluate(&self, root: &ChaseState, reached: &ChaseState) -> f64 {
        let eaten = root.pellets_left().saturating_sub(reached.pellets_left()) as f64;
        let mut score = eaten * PELLET_WEIGHT;
        if reached.is_win() {
            score += WIN_BONUS;
        }
        if reached.is_lose() {
            score -= LOSE_PENALTY;
        }
        if let Some(dist) = reached.nearest_pellet_distance(&self.maze) {
            score -= DISTANCE_WEIGHT * dist as f64;
        }
        score
    }

    fn idle_action(&self) -> Move {
        Move::Stop
    }
}
