//! Randomized Prim's.
//!
//! Grows the maze from `(1, 1)` by repeatedly pulling a random cell off the
//! frontier and joining every still-uncarved neighbor to it. Growth happens
//! all around the tree at once, so branching is even and corridors are short.

use crate::generator::{between, carve_passage, has_interior, jump, MazeGenerator, DIRECTIONS};
use crate::rng::MazeRng;
use crate::types::{Cell, Grid};

#[derive(Debug, Clone, Copy, Default)]
pub struct Prim;

impl MazeGenerator for Prim {
    fn name(&self) -> &'static str {
        "prim"
    }

    fn generate(&self, width: usize, height: usize, rng: &mut MazeRng) -> Grid {
        let mut grid = Grid::filled(width, height, Cell::Wall);
        if !has_interior(width, height) {
            return grid;
        }

        grid.set(1, 1, Cell::Open);
        let mut frontier = vec![(1, 1)];
        let mut dirs = DIRECTIONS;

        while !frontier.is_empty() {
            let here = frontier.swap_remove(rng.index(frontier.len()));
            rng.shuffle(&mut dirs);

            for &dir in &dirs {
                let Some(next) = jump(here.0, here.1, dir, width, height) else {
                    continue;
                };
                let (mx, my) = between(here, next);
                if grid.is_wall(next.0, next.1) && grid.is_wall(mx, my) {
                    carve_passage(&mut grid, here, next);
                    frontier.push(next);
                }
            }
        }
        grid
    }
}
