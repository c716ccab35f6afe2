//! Randomized depth-first carve ("recursive backtracker").
//!
//! Starts from a random odd cell, then repeatedly jumps two cells in a
//! shuffled direction to an uncarved cell, opening the wall in between.
//! Backtracking uses an explicit stack so large terminals can't overflow the
//! call stack; each stack frame keeps its own direction order, so the visiting
//! order is exactly that of the recursive formulation.
//!
//! With odd width and height the result is a perfect maze.

use crate::generator::{carve_passage, has_interior, is_interior, jump, MazeGenerator, DIRECTIONS};
use crate::rng::MazeRng;
use crate::types::{Cell, Grid};

#[derive(Debug, Clone, Copy, Default)]
pub struct DfsCarve;

struct Frame {
    x: usize,
    y: usize,
    dirs: [(isize, isize); 4],
    next: usize,
}

impl Frame {
    fn new(x: usize, y: usize, rng: &mut MazeRng) -> Self {
        let mut dirs = DIRECTIONS;
        rng.shuffle(&mut dirs);
        Self { x, y, dirs, next: 0 }
    }
}

impl DfsCarve {
    /// Carve from a fixed start cell.
    ///
    /// A start outside the interior yields an all-wall grid.
    pub fn carve_from(
        width: usize,
        height: usize,
        start: (usize, usize),
        rng: &mut MazeRng,
    ) -> Grid {
        let mut grid = Grid::filled(width, height, Cell::Wall);
        if !is_interior(start.0, start.1, width, height) {
            return grid;
        }

        grid.set(start.0, start.1, Cell::Open);
        let mut stack = vec![Frame::new(start.0, start.1, rng)];

        while let Some(frame) = stack.last_mut() {
            let Some(&dir) = frame.dirs.get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;
            let here = (frame.x, frame.y);

            if let Some(next) = jump(here.0, here.1, dir, width, height) {
                if grid.is_wall(next.0, next.1) {
                    carve_passage(&mut grid, here, next);
                    stack.push(Frame::new(next.0, next.1, rng));
                }
            }
        }

        grid
    }
}

impl MazeGenerator for DfsCarve {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn generate(&self, width: usize, height: usize, rng: &mut MazeRng) -> Grid {
        if !has_interior(width, height) {
            return Grid::filled(width, height, Cell::Wall);
        }
        // Odd interior coordinates: 1, 3, ..., up to width-2.
        let start_x = 1 + 2 * rng.index((width - 1) / 2);
        let start_y = 1 + 2 * rng.index((height - 1) / 2);
        Self::carve_from(width, height, (start_x, start_y), rng)
    }
}
