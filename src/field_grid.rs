use core::fmt;

use log::info;
use rand::Rng;
use smallvec::SmallVec;

use crate::position::Position;

/// State of a single grid tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileState {
    /// Walkable ground that is not a destination.
    Open,
    /// Walkable ground marked as a goal/destination.
    Tilled,
    /// An obstacle; blocks traversal and search expansion.
    Fenced,
}

/// A rectangular board of [TileState] values addressed by `(row, col)`.
///
/// Dimensions are fixed at construction; [clear](FieldGrid::clear) resets
/// content but never shape. All accessors treat out-of-bounds coordinates as
/// a well-defined miss (`false`/[None]) rather than a panic, so callers can
/// probe candidate positions freely.
#[derive(Clone, Debug)]
pub struct FieldGrid {
    columns: usize,
    rows: usize,
    tiles: Vec<TileState>,
}

impl FieldGrid {
    /// Creates a `columns x rows` grid with every tile [TileState::Open].
    pub fn new(columns: usize, rows: usize) -> FieldGrid {
        FieldGrid {
            columns,
            rows,
            tiles: vec![TileState::Open; columns * rows],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    fn index(&self, row: i32, col: i32) -> usize {
        row as usize * self.columns + col as usize
    }

    /// Checks whether `(row, col)` lies on the grid.
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.columns
    }

    /// Overwrites the tile at `(row, col)` unconditionally, including
    /// replacing goals or fences. Returns `false` without mutating anything
    /// if the position is out of bounds.
    pub fn set_tile(&mut self, row: i32, col: i32, state: TileState) -> bool {
        if !self.in_bounds(row, col) {
            return false;
        }
        let ix = self.index(row, col);
        self.tiles[ix] = state;
        true
    }

    /// The tile at `(row, col)`, or [None] if the position is out of bounds.
    pub fn get_tile(&self, row: i32, col: i32) -> Option<TileState> {
        if !self.in_bounds(row, col) {
            return None;
        }
        Some(self.tiles[self.index(row, col)])
    }

    /// Whether an agent can stand on `(row, col)`: in bounds and not
    /// [TileState::Fenced]. Goal tiles are walkable.
    pub fn is_walkable(&self, row: i32, col: i32) -> bool {
        match self.get_tile(row, col) {
            Some(state) => state != TileState::Fenced,
            None => false,
        }
    }

    /// Marks `(row, col)` as a goal tile. Equivalent to
    /// `set_tile(row, col, TileState::Tilled)`.
    pub fn place_goal(&mut self, row: i32, col: i32) -> bool {
        self.set_tile(row, col, TileState::Tilled)
    }

    /// All goal tiles in row-major ascending order. The order is load-bearing:
    /// nearest-goal queries use it as the tie-break among equally distant
    /// goals.
    pub fn find_goal_tiles(&self) -> Vec<Position> {
        let mut goals = Vec::new();
        for row in 0..self.rows as i32 {
            for col in 0..self.columns as i32 {
                if self.tiles[self.index(row, col)] == TileState::Tilled {
                    goals.push(Position::new(row, col));
                }
            }
        }
        goals
    }

    /// Scatters fences across the grid. Performs `floor(rows * columns *
    /// density)` independent uniform placements; a tile may be drawn more than
    /// once and goal tiles are left untouched, so the realized fence count is
    /// generally below the nominal count. A non-positive count is a no-op.
    ///
    /// The random source is explicit so that grids can be replayed from a
    /// seed.
    pub fn generate_random_obstacles<R: Rng>(&mut self, density: f64, rng: &mut R) {
        let count = (self.rows as f64 * self.columns as f64 * density) as i64;
        if count <= 0 {
            return;
        }
        let mut placed = 0usize;
        for _ in 0..count {
            let row = rng.gen_range(0..self.rows);
            let col = rng.gen_range(0..self.columns);
            let ix = row * self.columns + col;
            if self.tiles[ix] == TileState::Open {
                self.tiles[ix] = TileState::Fenced;
                placed += 1;
            }
        }
        info!("placed {} fences over {} attempts", placed, count);
    }

    /// The 4-directional neighbor candidates of `(row, col)` that lie on the
    /// grid, in fixed up, down, left, right order. Walkability is not checked
    /// here; searches filter fenced tiles themselves.
    pub fn get_neighbors(&self, row: i32, col: i32) -> SmallVec<[Position; 4]> {
        let origin = Position::new(row, col);
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .map(|(d_row, d_col)| origin.offset(d_row, d_col))
            .filter(|p| self.in_bounds(p.row, p.col))
            .collect()
    }

    /// Resets every tile to [TileState::Open], keeping the dimensions.
    pub fn clear(&mut self) {
        self.tiles.fill(TileState::Open);
    }

    /// Number of tiles currently in `state`.
    pub fn count_tiles(&self, state: TileState) -> usize {
        self.tiles.iter().filter(|&&tile| tile == state).count()
    }
}

impl fmt::Display for FieldGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows as i32 {
            for col in 0..self.columns as i32 {
                let glyph = match self.tiles[self.index(row, col)] {
                    TileState::Open => '.',
                    TileState::Tilled => 'T',
                    TileState::Fenced => '#',
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
