//! Maze grid: a rectangular array of cells, all walls until carved.

/// A grid position or an axis-aligned offset between two positions.
///
/// Signed so that out-of-range candidates (including negative ones) are
/// representable and can be rejected by `Grid::is_wall`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Wall,
    Room,
    /// A room the player has already passed through.
    Trail,
    /// The cell the player stood on when stepping onto the goal.
    GoalTrail,
}

/// Row-major cell storage. Both dimensions must be odd and at least 3 so
/// that the outer border stays wall; callers validate this before
/// construction, the grid itself does not.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Wall; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Row 0 and column 0 are out of bounds by construction, which keeps
    /// the border wall permanent without a special case.
    pub fn in_bounds(&self, c: Coord) -> bool {
        c.x >= 1 && c.x < self.width && c.y >= 1 && c.y < self.height
    }

    /// Out-of-bounds coordinates count as walls. Carving and movement both
    /// rely on this merged predicate at the edges.
    pub fn is_wall(&self, c: Coord) -> bool {
        !self.in_bounds(c) || self.get(c) == Cell::Wall
    }

    pub fn get(&self, c: Coord) -> Cell {
        self.cells[self.idx(c)]
    }

    pub fn set(&mut self, c: Coord, cell: Cell) {
        let idx = self.idx(c);
        self.cells[idx] = cell;
    }

    fn idx(&self, c: Coord) -> usize {
        debug_assert!(c.x >= 0 && c.x < self.width && c.y >= 0 && c.y < self.height);
        (c.y * self.width + c.x) as usize
    }
}
