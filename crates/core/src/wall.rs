//! Wall-stripe pattern.
//!
//! Not a maze algorithm: an open field with a solid border and a lattice of
//! two-cell wall stubs on even coordinates. It can leave pockets that are
//! cut off from the rest; that is expected. Useful for quick previews.

use crate::generator::{MazeGenerator, DIRECTIONS};
use crate::rng::MazeRng;
use crate::types::{Cell, Grid};

#[derive(Debug, Clone, Copy, Default)]
pub struct WallStripe;

impl MazeGenerator for WallStripe {
    fn name(&self) -> &'static str {
        "wall"
    }

    fn generate(&self, width: usize, height: usize, rng: &mut MazeRng) -> Grid {
        let mut grid = Grid::filled(width, height, Cell::Open);
        let (right, bottom) = (width.saturating_sub(1), height.saturating_sub(1));

        for y in 0..height {
            grid.set(0, y, Cell::Wall);
            grid.set(right, y, Cell::Wall);
        }
        for x in 0..width {
            grid.set(x, 0, Cell::Wall);
            grid.set(x, bottom, Cell::Wall);
        }

        for y in (2..height.saturating_sub(2)).step_by(2) {
            for x in (2..width.saturating_sub(2)).step_by(2) {
                grid.set(x, y, Cell::Wall);
                let (dx, dy) = DIRECTIONS[rng.index(DIRECTIONS.len())];
                grid.set(x.wrapping_add_signed(dx), y.wrapping_add_signed(dy), Cell::Wall);
            }
        }
        grid
    }
}
