//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use amaze::types::{Cell, Grid};

/// Odd-coordinate cells (the maze "rooms") that are open.
pub fn open_rooms(grid: &Grid) -> Vec<(usize, usize)> {
    let mut rooms = Vec::new();
    for y in (1..grid.height()).step_by(2) {
        for x in (1..grid.width()).step_by(2) {
            if grid.is_open(x, y) {
                rooms.push((x, y));
            }
        }
    }
    rooms
}

/// Flood fill over open cells from `start`, 4-connected.
pub fn reachable_from(grid: &Grid, start: (usize, usize)) -> Vec<Vec<bool>> {
    let mut seen = vec![vec![false; grid.width()]; grid.height()];
    if !grid.is_open(start.0, start.1) {
        return seen;
    }
    let mut queue = VecDeque::from([start]);
    seen[start.1][start.0] = true;
    while let Some((x, y)) = queue.pop_front() {
        let candidates = [
            (x.wrapping_sub(1), y),
            (x + 1, y),
            (x, y.wrapping_sub(1)),
            (x, y + 1),
        ];
        for (nx, ny) in candidates {
            if grid.get(nx, ny) == Some(Cell::Open) && !seen[ny][nx] {
                seen[ny][nx] = true;
                queue.push_back((nx, ny));
            }
        }
    }
    seen
}

/// True when every open room can reach every other.
pub fn rooms_connected(grid: &Grid) -> bool {
    let rooms = open_rooms(grid);
    let Some(&first) = rooms.first() else {
        return true;
    };
    let seen = reachable_from(grid, first);
    rooms.iter().all(|&(x, y)| seen[y][x])
}

/// Render a grid as `#`/`.` lines for readable assertion failures.
pub fn ascii(grid: &Grid) -> String {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|c| if c.is_wall() { '#' } else { '.' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
