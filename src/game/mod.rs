//! A small self-contained maze-chase game: a player collects pellets while a
//! ghost patrols. Exists to exercise the agents end to end; immutable state
//! transitions, no rendering.

mod maze;
mod sim;
mod state;

pub use maze::{Maze, Pos};
pub use sim::MazeSim;
pub use state::{ChaseState, Ghost, Move};
