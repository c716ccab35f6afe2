//! The shared generator contract and the built-in algorithm set.

use arrayvec::ArrayVec;

use crate::dfs::DfsCarve;
use crate::hunt_kill::HuntAndKill;
use crate::prim::Prim;
use crate::rng::MazeRng;
use crate::types::{Cell, Grid};
use crate::wall::WallStripe;

/// Anything that can fill a `width x height` grid with a maze.
///
/// Implementations must return a grid of exactly the requested size and must
/// not panic for any dimensions, including 0 and 1. All randomness comes from
/// `rng`, so equal seeds give equal grids.
pub trait MazeGenerator {
    /// Short identifier, used in logs.
    fn name(&self) -> &'static str;

    fn generate(&self, width: usize, height: usize, rng: &mut MazeRng) -> Grid;
}

impl<G: MazeGenerator + ?Sized> MazeGenerator for Box<G> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn generate(&self, width: usize, height: usize, rng: &mut MazeRng) -> Grid {
        (**self).generate(width, height, rng)
    }
}

/// Built-in generator algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GeneratorKind {
    /// Randomized depth-first carve.
    #[default]
    DfsCarve,
    HuntAndKill,
    /// Randomized Prim's.
    Prim,
    /// Decorative wall stubs; not a perfect maze.
    WallStripe,
}

impl GeneratorKind {
    pub const ALL: [GeneratorKind; 4] = [
        GeneratorKind::DfsCarve,
        GeneratorKind::HuntAndKill,
        GeneratorKind::Prim,
        GeneratorKind::WallStripe,
    ];

    /// Parse generator name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dfs" => Some(GeneratorKind::DfsCarve),
            "hunt-and-kill" | "hnk" => Some(GeneratorKind::HuntAndKill),
            "prim" => Some(GeneratorKind::Prim),
            "wall" => Some(GeneratorKind::WallStripe),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorKind::DfsCarve => "dfs",
            GeneratorKind::HuntAndKill => "hunt-and-kill",
            GeneratorKind::Prim => "prim",
            GeneratorKind::WallStripe => "wall",
        }
    }
}

impl MazeGenerator for GeneratorKind {
    fn name(&self) -> &'static str {
        self.as_str()
    }

    fn generate(&self, width: usize, height: usize, rng: &mut MazeRng) -> Grid {
        let grid = match self {
            GeneratorKind::DfsCarve => DfsCarve.generate(width, height, rng),
            GeneratorKind::HuntAndKill => HuntAndKill.generate(width, height, rng),
            GeneratorKind::Prim => Prim.generate(width, height, rng),
            GeneratorKind::WallStripe => WallStripe.generate(width, height, rng),
        };
        log::debug!(
            "{} generated {}x{} grid, {} open cells",
            self.as_str(),
            width,
            height,
            grid.count(Cell::Open)
        );
        grid
    }
}

/// Axis directions as unit (dx, dy) steps: north, east, south, west.
pub(crate) const DIRECTIONS: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// True when the grid has at least one odd interior cell to carve from.
pub(crate) fn has_interior(width: usize, height: usize) -> bool {
    width >= 3 && height >= 3
}

/// Whether `(x, y)` lies strictly inside the border.
pub(crate) fn is_interior(x: usize, y: usize, width: usize, height: usize) -> bool {
    x >= 1 && y >= 1 && x + 1 < width && y + 1 < height
}

/// Neighbor two cells away in `dir`, if it is an interior cell.
///
/// Keeping carving off the border means even widths/heights never open the
/// last row or column. Every generator shares this clipping on purpose, so an
/// even-sized grid ends in a two-cell-thick wall on the right and bottom.
pub(crate) fn jump(
    x: usize,
    y: usize,
    dir: (isize, isize),
    width: usize,
    height: usize,
) -> Option<(usize, usize)> {
    let nx = x.checked_add_signed(dir.0 * 2)?;
    let ny = y.checked_add_signed(dir.1 * 2)?;
    is_interior(nx, ny, width, height).then_some((nx, ny))
}

/// The wall cell between two cells that are two apart.
pub(crate) fn between(a: (usize, usize), b: (usize, usize)) -> (usize, usize) {
    ((a.0 + b.0) / 2, (a.1 + b.1) / 2)
}

/// Jump neighbors of `(x, y)` currently in state `cell`, in direction order.
pub(crate) fn neighbors_in_state(
    grid: &Grid,
    x: usize,
    y: usize,
    cell: Cell,
) -> ArrayVec<(usize, usize), 4> {
    DIRECTIONS
        .iter()
        .filter_map(|&dir| jump(x, y, dir, grid.width(), grid.height()))
        .filter(|&(nx, ny)| grid.get(nx, ny) == Some(cell))
        .collect()
}

/// Open `to` and the wall between it and `from`.
pub(crate) fn carve_passage(grid: &mut Grid, from: (usize, usize), to: (usize, usize)) {
    let (mx, my) = between(from, to);
    grid.set(mx, my, Cell::Open);
    grid.set(to.0, to.1, Cell::Open);
}
