use super::geometry::Aabb;

pub const BRICK_ROWS: usize = 6;
pub const BRICK_COLS: usize = 11;
pub const BRICK_WIDTH: f32 = 100.0;
pub const BRICK_HEIGHT: f32 = 25.0;
/// Points for destroying one brick
pub const BRICK_POINTS: u32 = 50;

/// Columns that hold bricks after a reset; 0 and 1 stay empty.
const FILLED_COLS: std::ops::Range<usize> = 2..BRICK_COLS;
/// Live bricks in a freshly reset grid
pub const FULL_GRID: usize = BRICK_ROWS * (BRICK_COLS - 2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrickColor {
    #[default]
    Dead,
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
}

/// Row colours from top to bottom
const ROW_COLORS: [BrickColor; BRICK_ROWS] = [
    BrickColor::Red,
    BrickColor::Green,
    BrickColor::Blue,
    BrickColor::Yellow,
    BrickColor::Purple,
    BrickColor::Orange,
];

impl BrickColor {
    pub fn is_live(self) -> bool {
        self != BrickColor::Dead
    }
}

/// Fixed brick matrix with a running count of live cells
#[derive(Debug, Clone)]
pub struct BrickGrid {
    cells: [[BrickColor; BRICK_COLS]; BRICK_ROWS],
    remaining: usize,
}

impl BrickGrid {
    /// A freshly filled grid
    pub fn new() -> Self {
        let mut grid = Self {
            cells: [[BrickColor::Dead; BRICK_COLS]; BRICK_ROWS],
            remaining: 0,
        };
        grid.reset();
        grid
    }

    pub fn reset(&mut self) {
        self.remaining = 0;
        for (row, cells) in self.cells.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = if FILLED_COLS.contains(&col) {
                    self.remaining += 1;
                    ROW_COLORS[row]
                } else {
                    BrickColor::Dead
                };
            }
        }
    }

    /// Kill the brick at `(row, col)`, returning the points it was worth.
    /// Dead cells are left alone and award nothing.
    pub fn destroy(&mut self, row: usize, col: usize) -> u32 {
        let cell = &mut self.cells[row][col];
        if !cell.is_live() {
            return 0;
        }
        *cell = BrickColor::Dead;
        self.remaining -= 1;
        BRICK_POINTS
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn color(&self, row: usize, col: usize) -> BrickColor {
        self.cells[row][col]
    }

    pub fn is_live(&self, row: usize, col: usize) -> bool {
        self.cells[row][col].is_live()
    }

    /// World rectangle covered by a cell
    pub fn cell_rect(row: usize, col: usize) -> Aabb {
        Aabb::from_origin_size(
            col as f32 * BRICK_WIDTH,
            row as f32 * BRICK_HEIGHT,
            BRICK_WIDTH,
            BRICK_HEIGHT,
        )
    }

    /// Every cell position in row-major order
    pub fn positions() -> impl Iterator<Item = (usize, usize)> {
        (0..BRICK_ROWS).flat_map(|row| (0..BRICK_COLS).map(move |col| (row, col)))
    }

    /// Live bricks with their colours, row-major
    pub fn live_bricks(&self) -> impl Iterator<Item = (usize, usize, BrickColor)> + '_ {
        Self::positions()
            .map(|(row, col)| (row, col, self.cells[row][col]))
            .filter(|(_, _, color)| color.is_live())
    }
}

impl Default for BrickGrid {
    fn default() -> Self {
        Self::new()
    }
}
