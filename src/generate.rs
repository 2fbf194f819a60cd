//! Maze generation: randomized depth-first carving (recursive backtracker).
//!
//! Carving starts at the fixed entry and knocks down the wall between the
//! current room and each unvisited neighbor two cells away, so every carved
//! room is connected to the entry by exactly one path. The cell reached at
//! the greatest recursion depth becomes the goal.

use rand::Rng;

use crate::grid::{Cell, Coord, Grid};

/// The player's starting room. Fixed; the goal is derived from it.
pub const ENTRY: Coord = Coord { x: 1, y: 1 };

/// Neighbor deltas in fixed north, south, east, west order. Only the
/// starting index into this table is randomized, then the sweep is one
/// full cycle.
const CARVE_DIRS: [(i32, i32); 4] = [(0, -2), (0, 2), (2, 0), (-2, 0)];

#[derive(Clone, Copy, Debug)]
pub struct Carved {
    /// Deepest-reached room; first reached wins on depth ties.
    pub goal: Coord,
    pub max_depth: u32,
}

/// Carve a perfect maze into `grid`, which must be all wall with odd
/// dimensions of at least 3. Deterministic for a given RNG state.
///
/// Recursion depth is bounded by the room count, which is small at the
/// supported grid sizes.
pub fn generate(grid: &mut Grid, rng: &mut impl Rng) -> Carved {
    let mut carved = Carved {
        goal: ENTRY,
        max_depth: 0,
    };
    carve(grid, rng, ENTRY, 1, &mut carved);
    carved
}

fn carve(grid: &mut Grid, rng: &mut impl Rng, cur: Coord, depth: u32, carved: &mut Carved) {
    if depth > carved.max_depth {
        carved.max_depth = depth;
        carved.goal = cur;
    }

    grid.set(cur, Cell::Room);

    let start = rng.gen_range(0..4);
    for i in 0..4 {
        let (dx, dy) = CARVE_DIRS[(start + i) % 4];
        let next = cur.offset(dx, dy);
        if visited(grid, next) {
            continue;
        }
        // Knock down the wall midway between the two rooms.
        let wall = Coord::new((cur.x + next.x) / 2, (cur.y + next.y) / 2);
        grid.set(wall, Cell::Room);
        carve(grid, rng, next, depth + 1, carved);
    }
}

/// Out-of-bounds counts as visited, so border-adjacent rooms never carve
/// outward.
fn visited(grid: &Grid, c: Coord) -> bool {
    !grid.in_bounds(c) || grid.get(c) != Cell::Wall
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::VecDeque;

    fn carve_with_seed(width: i32, height: i32, seed: u64) -> (Grid, Carved) {
        let mut grid = Grid::new(width, height);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let carved = generate(&mut grid, &mut rng);
        (grid, carved)
    }

    fn open_cells(grid: &Grid) -> Vec<Coord> {
        let mut cells = Vec::new();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let c = Coord::new(x, y);
                if grid.get(c) != Cell::Wall {
                    cells.push(c);
                }
            }
        }
        cells
    }

    fn reachable_from_entry(grid: &Grid) -> Vec<Coord> {
        let mut seen = vec![ENTRY];
        let mut queue = VecDeque::from([ENTRY]);
        while let Some(c) = queue.pop_front() {
            for (dx, dy) in [(0, -1), (0, 1), (1, 0), (-1, 0)] {
                let next = c.offset(dx, dy);
                if !grid.is_wall(next) && !seen.contains(&next) {
                    seen.push(next);
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    #[test]
    fn same_seed_same_maze_and_goal() {
        let (grid_a, carved_a) = carve_with_seed(21, 13, 12345);
        let (grid_b, carved_b) = carve_with_seed(21, 13, 12345);
        assert_eq!(grid_a, grid_b);
        assert_eq!(carved_a.goal, carved_b.goal);
        assert_eq!(carved_a.max_depth, carved_b.max_depth);
    }

    #[test]
    fn different_seeds_diverge() {
        // Not guaranteed for every seed pair in principle, but these do.
        let (grid_a, _) = carve_with_seed(21, 13, 1);
        let (grid_b, _) = carve_with_seed(21, 13, 2);
        assert_ne!(grid_a, grid_b);
    }

    #[test]
    fn border_stays_wall() {
        let (grid, _) = carve_with_seed(21, 13, 7);
        for x in 0..grid.width() {
            assert!(grid.is_wall(Coord::new(x, 0)));
            assert!(grid.is_wall(Coord::new(x, grid.height() - 1)));
        }
        for y in 0..grid.height() {
            assert!(grid.is_wall(Coord::new(0, y)));
            assert!(grid.is_wall(Coord::new(grid.width() - 1, y)));
        }
    }

    #[test]
    fn carved_maze_is_a_spanning_tree() {
        for seed in [0, 3, 99, 4096] {
            let (grid, _) = carve_with_seed(21, 13, seed);
            let open = open_cells(&grid);
            let reached = reachable_from_entry(&grid);
            assert_eq!(reached.len(), open.len(), "maze not connected, seed {seed}");

            // Count undirected adjacencies between open cells; a connected
            // graph is acyclic iff edges == nodes - 1.
            let mut edges = 0;
            for c in &open {
                for (dx, dy) in [(1, 0), (0, 1)] {
                    if !grid.is_wall(c.offset(dx, dy)) {
                        edges += 1;
                    }
                }
            }
            assert_eq!(edges, open.len() - 1, "maze has a cycle, seed {seed}");
        }
    }

    #[test]
    fn every_interior_room_slot_is_carved() {
        // The backtracker visits every room coordinate (odd, odd), so none
        // stay walled off.
        let (grid, _) = carve_with_seed(21, 13, 11);
        for y in (1..grid.height()).step_by(2) {
            for x in (1..grid.width()).step_by(2) {
                assert_eq!(grid.get(Coord::new(x, y)), Cell::Room);
            }
        }
    }

    #[test]
    fn goal_is_a_reachable_room_away_from_entry() {
        let (grid, carved) = carve_with_seed(79, 23, 42);
        assert_eq!(grid.get(carved.goal), Cell::Room);
        assert_ne!(carved.goal, ENTRY);
        assert!(carved.max_depth > 1);
        assert!(reachable_from_entry(&grid).contains(&carved.goal));
    }

    #[test]
    fn minimal_five_by_five_carves_all_four_rooms() {
        let (grid, carved) = carve_with_seed(5, 5, 1);
        for c in [
            Coord::new(1, 1),
            Coord::new(3, 1),
            Coord::new(1, 3),
            Coord::new(3, 3),
        ] {
            assert_eq!(grid.get(c), Cell::Room);
        }
        let reached = reachable_from_entry(&grid);
        assert_eq!(reached.len(), open_cells(&grid).len());
        assert!(reached.contains(&carved.goal));
    }
}
