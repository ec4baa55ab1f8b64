use super::maze::{Maze, Pos};

/// One player action. `Stop` is the neutral no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
    Stop,
}

impl Move {
    /// All moves, the possible-action universe.
    pub const ALL: [Move; 5] = [Move::Up, Move::Down, Move::Left, Move::Right, Move::Stop];

    /// Grid offset, x growing right and y growing down.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Move::Up => (0, -1),
            Move::Down => (0, 1),
            Move::Left => (-1, 0),
            Move::Right => (1, 0),
            Move::Stop => (0, 0),
        }
    }

    pub fn reversed(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
            Move::Stop => Move::Stop,
        }
    }
}

/// Patrolling ghost: walks in a straight line, reversing at walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ghost {
    pub pos: Pos,
    pub dir: Move,
}

impl Ghost {
    fn advance(self, maze: &Maze) -> Ghost {
        let ahead = maze.step(self.pos, self.dir);
        if ahead != self.pos {
            return Ghost {
                pos: ahead,
                dir: self.dir,
            };
        }
        let dir = self.dir.reversed();
        Ghost {
            pos: maze.step(self.pos, dir),
            dir,
        }
    }
}

/// Immutable game snapshot: player position, remaining pellets, ghost.
#[derive(Debug, Clone, PartialEq)]
pub struct ChaseState {
    player: Pos,
    pellets: Vec<bool>,
    pellets_left: usize,
    ghost: Option<Ghost>,
    caught: bool,
}

impl ChaseState {
    /// Initial state for a maze: player and ghost at their spawns, all
    /// pellets present.
    pub fn initial(maze: &Maze) -> Self {
        ChaseState {
            player: maze.player_spawn(),
            pellets: maze.initial_pellets(),
            pellets_left: maze.pellet_count(),
            ghost: maze.ghost_spawn().map(|pos| Ghost {
                pos,
                dir: Move::Left,
            }),
            caught: false,
        }
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    pub fn ghost(&self) -> Option<Ghost> {
        self.ghost
    }

    pub fn pellets_left(&self) -> usize {
        self.pellets_left
    }

    /// All pellets collected.
    pub fn is_win(&self) -> bool {
        !self.caught && self.pellets_left == 0
    }

    /// Player caught by the ghost.
    pub fn is_lose(&self) -> bool {
        self.caught
    }

    pub fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }

    pub fn has_pellet(&self, maze: &Maze, pos: Pos) -> bool {
        pos.x < maze.width() && pos.y < maze.height() && self.pellets[pos.y * maze.width() + pos.x]
    }

    /// Manhattan distance from the player to the nearest remaining pellet.
    /// `None` when no pellets remain.
    pub fn nearest_pellet_distance(&self, maze: &Maze) -> Option<usize> {
        let mut best = None;
        for y in 0..maze.height() {
            for x in 0..maze.width() {
                if self.pellets[y * maze.width() + x] {
                    let d = self.player.distance(Pos::new(x, y));
                    best = Some(best.map_or(d, |b: usize| b.min(d)));
                }
            }
        }
        best
    }

    /// Apply one move and return the new state. Blocked moves act as `Stop`,
    /// so any member of the possible-action universe is accepted. The ghost
    /// takes one patrol step afterwards; collision at either point loses.
    pub fn apply(&self, maze: &Maze, mv: Move) -> ChaseState {
        let mut next = self.clone();
        next.player = maze.step(self.player, mv);

        if let Some(ghost) = next.ghost {
            if ghost.pos == next.player {
                next.caught = true;
                return next;
            }
        }

        if next.has_pellet(maze, next.player) {
            next.pellets[next.player.y * maze.width() + next.player.x] = false;
            next.pellets_left -= 1;
        }

        if let Some(ghost) = next.ghost {
            let moved = ghost.advance(maze);
            next.ghost = Some(moved);
            if moved.pos == next.player {
                next.caught = true;
            }
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GHOSTLESS: &str = "\
#####
#P..#
#####";

    const CORRIDOR: &str = "\
#######
#P..G.#
#######";

    #[test]
    fn test_initial_state() {
        let maze = Maze::parse(GHOSTLESS).unwrap();
        let state = ChaseState::initial(&maze);
        assert_eq!(state.player(), Pos::new(1, 1));
        assert_eq!(state.pellets_left(), 2);
        assert!(state.ghost().is_none());
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_eating_pellets_wins() {
        let maze = Maze::parse(GHOSTLESS).unwrap();
        let state = ChaseState::initial(&maze);
        let state = state.apply(&maze, Move::Right);
        assert_eq!(state.pellets_left(), 1);
        assert!(!state.is_terminal());
        let state = state.apply(&maze, Move::Right);
        assert_eq!(state.pellets_left(), 0);
        assert!(state.is_win());
        assert!(!state.is_lose());
    }

    #[test]
    fn test_apply_is_immutable() {
        let maze = Maze::parse(GHOSTLESS).unwrap();
        let state = ChaseState::initial(&maze);
        let _ = state.apply(&maze, Move::Right);
        assert_eq!(state.player(), Pos::new(1, 1));
        assert_eq!(state.pellets_left(), 2);
    }

    #[test]
    fn test_blocked_move_acts_as_stop() {
        let maze = Maze::parse(GHOSTLESS).unwrap();
        let state = ChaseState::initial(&maze);
        let next = state.apply(&maze, Move::Up);
        assert_eq!(next.player(), state.player());
    }

    #[test]
    fn test_ghost_patrols_and_bounces() {
        let maze = Maze::parse(CORRIDOR).unwrap();
        let mut state = ChaseState::initial(&maze);
        let start = state.ghost().unwrap();
        assert_eq!(start.pos, Pos::new(4, 1));
        assert_eq!(start.dir, Move::Left);

        // Player idles far enough away; ghost walks left toward it.
        state = state.apply(&maze, Move::Stop);
        assert_eq!(state.ghost().unwrap().pos, Pos::new(3, 1));
    }

    #[test]
    fn test_walking_into_ghost_loses() {
        let maze = Maze::parse(CORRIDOR).unwrap();
        let mut state = ChaseState::initial(&maze);
        // Ghost approaches from the right; keep walking right to meet it.
        for _ in 0..4 {
            state = state.apply(&maze, Move::Right);
            if state.is_terminal() {
                break;
            }
        }
        assert!(state.is_lose());
        assert!(!state.is_win());
    }

    #[test]
    fn test_nearest_pellet_distance() {
        let maze = Maze::parse(GHOSTLESS).unwrap();
        let state = ChaseState::initial(&maze);
        assert_eq!(state.nearest_pellet_distance(&maze), Some(1));
        let state = state.apply(&maze, Move::Right);
        assert_eq!(state.nearest_pellet_distance(&maze), Some(1));
        let state = state.apply(&maze, Move::Right);
        assert_eq!(state.nearest_pellet_distance(&maze), None);
    }
}
