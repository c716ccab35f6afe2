//! Maze generation - pure, deterministic, and testable
//!
//! This crate contains the maze generator family. It has **zero dependencies**
//! on terminals or I/O, which makes it:
//!
//! - **Deterministic**: Same seed produces an identical grid
//! - **Testable**: Connectivity and shape properties are checked in unit tests
//! - **Portable**: Grids can be rendered anywhere, not just in a terminal
//!
//! # Module Structure
//!
//! - [`generator`]: the [`MazeGenerator`] contract and the [`GeneratorKind`] set
//! - [`dfs`]: randomized depth-first carve
//! - [`hunt_kill`]: Hunt-and-Kill with a row-major hunt
//! - [`prim`]: randomized Prim's
//! - [`wall`]: decorative wall-stripe pattern
//! - [`rng`]: seedable randomness source passed into every call
//!
//! # Example
//!
//! ```
//! use amaze_core::{GeneratorKind, MazeGenerator, MazeRng};
//! use amaze_types::Cell;
//!
//! let mut rng = MazeRng::new(12345);
//! let grid = GeneratorKind::DfsCarve.generate(21, 11, &mut rng);
//!
//! assert_eq!(grid.width(), 21);
//! assert_eq!(grid.height(), 11);
//! assert_eq!(grid.get(0, 0), Some(Cell::Wall));
//! ```

pub mod dfs;
pub mod generator;
pub mod hunt_kill;
pub mod prim;
pub mod rng;
pub mod wall;

pub use amaze_types as types;

// Re-export commonly used types for convenience
pub use dfs::DfsCarve;
pub use generator::{GeneratorKind, MazeGenerator};
pub use hunt_kill::HuntAndKill;
pub use prim::Prim;
pub use rng::MazeRng;
pub use wall::WallStripe;
