//! Player state and movement against a generated maze.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::generate::{self, ENTRY};
use crate::grid::{Cell, Coord, Grid};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }
}

pub struct Game {
    pub grid: Grid,
    pub player: Coord,
    pub goal: Coord,
    pub seed: u64,
}

impl Game {
    /// Generate a fresh maze. Same seed and dimensions, same maze and goal:
    /// the generator draws from a ChaCha8 stream seeded once here.
    pub fn new(seed: u64, width: i32, height: i32) -> Game {
        let mut grid = Grid::new(width, height);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let carved = generate::generate(&mut grid, &mut rng);
        Game {
            grid,
            player: ENTRY,
            goal: carved.goal,
            seed,
        }
    }

    /// Apply one directional command. A move into a wall (or off the grid,
    /// which reads as wall) is rejected with no side effects. An accepted
    /// move marks the vacated cell: `GoalTrail` when stepping onto the
    /// goal, plain `Trail` otherwise.
    ///
    /// Reaching the goal is not terminal; the player may keep moving.
    pub fn move_player(&mut self, dir: Dir) -> bool {
        let (dx, dy) = dir.delta();
        let candidate = self.player.offset(dx, dy);
        if self.grid.is_wall(candidate) {
            return false;
        }
        let mark = if candidate == self.goal {
            Cell::GoalTrail
        } else {
            Cell::Trail
        };
        self.grid.set(self.player, mark);
        self.player = candidate;
        true
    }
}
