//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (maze generation, rendering, the CLI adapter).
//!
//! # Grid Conventions
//!
//! - Storage is row-major: `height` rows of `width` cells
//! - Coordinate `(x, y)` means column `x`, row `y`
//! - Carving algorithms keep passages on odd coordinates and the walls
//!   between them on even coordinates
//!
//! # Display Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_RATE` | 5 | Live-mode frames per second |
//! | `DEFAULT_WALL_GLYPHS` | `"███"` | Glyph set for walls |
//! | `DEFAULT_SPACE_GLYPHS` | `" "` | Glyph set for passages |
//!
//! # Examples
//!
//! ```
//! use amaze_types::{Cell, Grid, PaletteColor};
//!
//! let mut grid = Grid::filled(5, 3, Cell::Wall);
//! assert!(grid.set(1, 1, Cell::Open));
//! assert_eq!(grid.get(1, 1), Some(Cell::Open));
//! assert_eq!(grid.get(5, 0), None);
//!
//! assert_eq!(PaletteColor::from_str("red"), Some(PaletteColor::Indexed(1)));
//! assert_eq!(PaletteColor::from_str("-1"), Some(PaletteColor::Default));
//! ```

/// Live-mode refresh rate in frames per second.
pub const DEFAULT_RATE: u32 = 5;

/// Glyph set drawn for wall cells.
pub const DEFAULT_WALL_GLYPHS: &str = "███";

/// Glyph set drawn for open cells.
pub const DEFAULT_SPACE_GLYPHS: &str = " ";

/// Terminal size (columns, rows) assumed when the real size cannot be queried.
pub const FALLBACK_TERMINAL_SIZE: (u16, u16) = (80, 24);

/// A single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Wall,
    Open,
}

impl Cell {
    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }

    pub fn is_open(self) -> bool {
        self == Cell::Open
    }
}

/// Fixed-size 2D maze grid.
///
/// Dimensions are set at construction and never change. Generators build a
/// grid with [`Grid::set`]; everything downstream only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell set to `cell`.
    pub fn filled(width: usize, height: usize, cell: Cell) -> Self {
        Self {
            width,
            height,
            cells: vec![cell; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Get the cell at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Set the cell at `(x, y)`.
    ///
    /// Returns `false` (and changes nothing) when out of bounds.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        match self.idx(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Out-of-bounds positions count as neither wall nor open.
    pub fn is_wall(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == Some(Cell::Wall)
    }

    pub fn is_open(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == Some(Cell::Open)
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // chunks() panics on zero; an empty grid simply has no rows.
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells in the given state.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

/// Terminal color used for the maze foreground or background.
///
/// `Default` is the terminal's own color (transparent background).
/// `Indexed` is an ANSI/256-color palette index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaletteColor {
    #[default]
    Default,
    Indexed(u8),
}

impl PaletteColor {
    pub const BLACK: Self = PaletteColor::Indexed(0);
    pub const RED: Self = PaletteColor::Indexed(1);
    pub const GREEN: Self = PaletteColor::Indexed(2);
    pub const YELLOW: Self = PaletteColor::Indexed(3);
    pub const BLUE: Self = PaletteColor::Indexed(4);
    pub const MAGENTA: Self = PaletteColor::Indexed(5);
    pub const CYAN: Self = PaletteColor::Indexed(6);
    pub const WHITE: Self = PaletteColor::Indexed(7);

    /// Parse a color name or numeric code (case-insensitive)
    ///
    /// Accepts the eight basic color names, `-1` for the terminal default,
    /// or a palette index `0..=255`.
    ///
    /// # Examples
    ///
    /// ```
    /// use amaze_types::PaletteColor;
    ///
    /// assert_eq!(PaletteColor::from_str("White"), Some(PaletteColor::WHITE));
    /// assert_eq!(PaletteColor::from_str("208"), Some(PaletteColor::Indexed(208)));
    /// assert_eq!(PaletteColor::from_str("256"), None);
    /// assert_eq!(PaletteColor::from_str("mauve"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "black" => Some(Self::BLACK),
            "red" => Some(Self::RED),
            "green" => Some(Self::GREEN),
            "yellow" => Some(Self::YELLOW),
            "blue" => Some(Self::BLUE),
            "magenta" => Some(Self::MAGENTA),
            "cyan" => Some(Self::CYAN),
            "white" => Some(Self::WHITE),
            "-1" | "default" => Some(PaletteColor::Default),
            other => other.parse::<u8>().ok().map(PaletteColor::Indexed),
        }
    }
}

/// How a grid is drawn.
///
/// Built once at startup and read-only for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Glyph set for wall cells.
    pub wall_glyphs: String,
    /// Glyph set for open cells.
    pub space_glyphs: String,
    pub wall_color: PaletteColor,
    pub bg_color: PaletteColor,
    /// Draw every cell two columns wide.
    pub solid: bool,
    /// Sample one glyph per position from the set instead of drawing it verbatim.
    pub shuffle: bool,
    pub live: bool,
    /// Frames per second in live mode.
    pub rate: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            wall_glyphs: DEFAULT_WALL_GLYPHS.to_string(),
            space_glyphs: DEFAULT_SPACE_GLYPHS.to_string(),
            wall_color: PaletteColor::WHITE,
            bg_color: PaletteColor::Default,
            solid: false,
            shuffle: false,
            live: false,
            rate: DEFAULT_RATE,
        }
    }
}

impl DisplayConfig {
    /// Glyph set for a cell state.
    pub fn glyphs_for(&self, cell: Cell) -> &str {
        match cell {
            Cell::Wall => &self.wall_glyphs,
            Cell::Open => &self.space_glyphs,
        }
    }

    /// Terminal columns occupied by one grid cell.
    pub fn cell_width(&self) -> u16 {
        if self.solid {
            2
        } else {
            1
        }
    }
}
