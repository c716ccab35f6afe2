//! Hunt-and-Kill.
//!
//! Random-walks from `(1, 1)` until stuck, then hunts: scans the odd cells
//! in reading order for the first uncarved cell next to a carved one, joins
//! it to a random carved neighbor and walks again from there. The fixed scan
//! order is what gives this generator its long, low-branching corridors.

use crate::generator::{carve_passage, has_interior, neighbors_in_state, MazeGenerator};
use crate::rng::MazeRng;
use crate::types::{Cell, Grid};

#[derive(Debug, Clone, Copy, Default)]
pub struct HuntAndKill;

impl MazeGenerator for HuntAndKill {
    fn name(&self) -> &'static str {
        "hunt-and-kill"
    }

    fn generate(&self, width: usize, height: usize, rng: &mut MazeRng) -> Grid {
        let mut grid = Grid::filled(width, height, Cell::Wall);
        if !has_interior(width, height) {
            return grid;
        }

        let mut hunter = Hunter { scan_row: 1 };
        let mut at = Some((1, 1));
        while let Some(start) = at {
            walk(&mut grid, start, rng);
            at = hunter.hunt(&mut grid, rng);
        }
        grid
    }
}

fn walk(grid: &mut Grid, start: (usize, usize), rng: &mut MazeRng) {
    grid.set(start.0, start.1, Cell::Open);
    let mut here = start;
    loop {
        let unvisited = neighbors_in_state(grid, here.0, here.1, Cell::Wall);
        let Some(&next) = rng.choose(&unvisited) else {
            break;
        };
        carve_passage(grid, here, next);
        here = next;
    }
}

struct Hunter {
    /// Every odd row above this one is fully carved.
    scan_row: usize,
}

impl Hunter {
    /// Find, connect and return the next walk start, or `None` when done.
    fn hunt(&mut self, grid: &mut Grid, rng: &mut MazeRng) -> Option<(usize, usize)> {
        let (width, height) = (grid.width(), grid.height());
        let mut rows_done = true;

        for y in (self.scan_row..height - 1).step_by(2) {
            let mut row_done = true;
            for x in (1..width - 1).step_by(2) {
                if !grid.is_wall(x, y) {
                    continue;
                }
                row_done = false;
                let visited = neighbors_in_state(grid, x, y, Cell::Open);
                if let Some(&carved) = rng.choose(&visited) {
                    grid.set(x, y, Cell::Open);
                    carve_passage(grid, (x, y), carved);
                    return Some((x, y));
                }
            }
            rows_done &= row_done;
            if rows_done {
                self.scan_row = y + 2;
            }
        }
        None
    }
}
