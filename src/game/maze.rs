use crate::error::LayoutError;

use super::state::Move;

/// Grid coordinate, x growing right and y growing down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub fn new(x: usize, y: usize) -> Self {
        Pos { x, y }
    }

    /// Manhattan distance to another position.
    pub fn distance(self, other: Pos) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Static maze layout: walls, pellet spawns, player and ghost spawns.
///
/// Parsed from an ASCII map: `#` wall, `.` pellet, `P` player spawn,
/// `G` ghost spawn, space open floor.
#[derive(Debug, Clone)]
pub struct Maze {
    width: usize,
    height: usize,
    walls: Vec<bool>,
    pellets: Vec<bool>,
    player_spawn: Pos,
    ghost_spawn: Option<Pos>,
}

impl Maze {
    /// Parse a maze from an ASCII layout.
    pub fn parse(layout: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = layout
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(LayoutError::Empty);
        }

        let width = rows[0].chars().count();
        let height = rows.len();
        let mut walls = vec![false; width * height];
        let mut pellets = vec![false; width * height];
        let mut player_spawn = None;
        let mut ghost_spawn = None;

        for (y, row) in rows.iter().enumerate() {
            let row_width = row.chars().count();
            if row_width != width {
                return Err(LayoutError::Ragged {
                    row: y,
                    got: row_width,
                    expected: width,
                });
            }
            for (x, tile) in row.chars().enumerate() {
                let idx = y * width + x;
                match tile {
                    '#' => walls[idx] = true,
                    '.' => pellets[idx] = true,
                    'P' => {
                        if player_spawn.is_some() {
                            return Err(LayoutError::MultiplePlayerSpawns);
                        }
                        player_spawn = Some(Pos::new(x, y));
                    }
                    'G' => ghost_spawn = Some(Pos::new(x, y)),
                    ' ' => {}
                    other => return Err(LayoutError::UnknownTile(other)),
                }
            }
        }

        let player_spawn = player_spawn.ok_or(LayoutError::NoPlayerSpawn)?;
        if !pellets.iter().any(|&p| p) {
            return Err(LayoutError::NoPellets);
        }

        Ok(Maze {
            width,
            height,
            walls,
            pellets,
            player_spawn,
            ghost_spawn,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn player_spawn(&self) -> Pos {
        self.player_spawn
    }

    pub fn ghost_spawn(&self) -> Option<Pos> {
        self.ghost_spawn
    }

    /// Whether the cell at `pos` is a wall. Out-of-bounds counts as wall.
    pub fn is_wall(&self, pos: Pos) -> bool {
        if pos.x >= self.width || pos.y >= self.height {
            return true;
        }
        self.walls[pos.y * self.width + pos.x]
    }

    /// Initial pellet map, indexed `y * width + x`.
    pub fn initial_pellets(&self) -> Vec<bool> {
        self.pellets.clone()
    }

    pub fn pellet_count(&self) -> usize {
        self.pellets.iter().filter(|&&p| p).count()
    }

    /// The cell reached by taking `mv` from `pos`, or `pos` itself when the
    /// move is blocked by a wall or the maze edge.
    pub fn step(&self, pos: Pos, mv: Move) -> Pos {
        let (dx, dy) = mv.delta();
        let nx = pos.x as isize + dx;
        let ny = pos.y as isize + dy;
        if nx < 0 || ny < 0 {
            return pos;
        }
        let next = Pos::new(nx as usize, ny as usize);
        if self.is_wall(next) {
            pos
        } else {
            next
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: &str = "\
#####
#P..#
# # #
#.G.#
#####";

    #[test]
    fn test_parse_layout() {
        let maze = Maze::parse(LAYOUT).unwrap();
        assert_eq!(maze.width(), 5);
        assert_eq!(maze.height(), 5);
        assert_eq!(maze.player_spawn(), Pos::new(1, 1));
        assert_eq!(maze.ghost_spawn(), Some(Pos::new(2, 3)));
        assert_eq!(maze.pellet_count(), 4);
        assert!(maze.is_wall(Pos::new(0, 0)));
        assert!(maze.is_wall(Pos::new(2, 2)));
        assert!(!maze.is_wall(Pos::new(1, 1)));
    }

    #[test]
    fn test_out_of_bounds_is_wall() {
        let maze = Maze::parse(LAYOUT).unwrap();
        assert!(maze.is_wall(Pos::new(99, 1)));
        assert!(maze.is_wall(Pos::new(1, 99)));
    }

    #[test]
    fn test_step_blocked_by_wall() {
        let maze = Maze::parse(LAYOUT).unwrap();
        let spawn = maze.player_spawn();
        assert_eq!(maze.step(spawn, Move::Up), spawn);
        assert_eq!(maze.step(spawn, Move::Left), spawn);
        assert_eq!(maze.step(spawn, Move::Right), Pos::new(2, 1));
        assert_eq!(maze.step(spawn, Move::Stop), spawn);
    }

    #[test]
    fn test_empty_layout_rejected() {
        assert!(matches!(Maze::parse(""), Err(LayoutError::Empty)));
    }

    #[test]
    fn test_ragged_layout_rejected() {
        let err = Maze::parse("###\n##").unwrap_err();
        assert!(matches!(err, LayoutError::Ragged { row: 1, .. }));
    }

    #[test]
    fn test_missing_player_rejected() {
        let err = Maze::parse("###\n#.#\n###").unwrap_err();
        assert!(matches!(err, LayoutError::NoPlayerSpawn));
    }

    #[test]
    fn test_no_pellets_rejected() {
        let err = Maze::parse("###\n#P#\n###").unwrap_err();
        assert!(matches!(err, LayoutError::NoPellets));
    }

    #[test]
    fn test_unknown_tile_rejected() {
        let err = Maze::parse("###\n#X#\n###").unwrap_err();
        assert!(matches!(err, LayoutError::UnknownTile('X')));
    }
}
