//! MazeView: maps a maze `Grid` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::MazeRng;
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::{DisplayConfig, Grid};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Grid size (columns, rows) that fills this viewport under `config`.
    pub fn grid_size(&self, config: &DisplayConfig) -> (usize, usize) {
        (
            (self.width / config.cell_width()) as usize,
            self.height as usize,
        )
    }
}

/// Draws grids using one display configuration.
#[derive(Debug, Clone, Copy)]
pub struct MazeView<'a> {
    config: &'a DisplayConfig,
}

impl<'a> MazeView<'a> {
    pub fn new(config: &'a DisplayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a DisplayConfig {
        self.config
    }

    /// One color pair for walls, spaces and background alike.
    pub fn style(&self) -> CellStyle {
        CellStyle::new(self.config.wall_color, self.config.bg_color)
    }

    /// Blank cell used to clear the screen behind the maze.
    pub fn background(&self) -> Cell {
        self.style().into_cell(' ')
    }

    /// Render `grid` into an existing framebuffer.
    ///
    /// Only cells that fit in `viewport` are drawn: rows up to the viewport
    /// height, columns up to the viewport width (halved in solid mode).
    /// Everything outside the drawn area is left as it was, and glyphs that
    /// run past the right edge are clipped.
    pub fn render_into(
        &self,
        grid: &Grid,
        viewport: Viewport,
        fb: &mut FrameBuffer,
        rng: &mut MazeRng,
    ) {
        fb.resize(viewport.width, viewport.height);

        let (cols, rows) = viewport.grid_size(self.config);
        let cols = cols.min(grid.width());
        let rows = rows.min(grid.height());
        let step = self.config.cell_width();
        let style = self.style();
        let mut glyph = String::with_capacity(8);

        for (y, row) in grid.rows().take(rows).enumerate() {
            for (x, &cell) in row.iter().take(cols).enumerate() {
                self.compose_glyph(&mut glyph, self.config.glyphs_for(cell), rng);
                fb.put_str(x as u16 * step, y as u16, &glyph, style);
            }
        }
    }

    /// Convenience helper that allocates a cleared framebuffer.
    pub fn render(&self, grid: &Grid, viewport: Viewport, rng: &mut MazeRng) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(self.background());
        self.render_into(grid, viewport, &mut fb, rng);
        fb
    }

    fn compose_glyph(&self, out: &mut String, set: &str, rng: &mut MazeRng) {
        out.clear();
        for _ in 0..self.config.cell_width() {
            if self.config.shuffle {
                if let Some(ch) = sample_char(set, rng) {
                    out.push(ch);
                }
            } else {
                out.push_str(set);
            }
        }
    }
}

fn sample_char(set: &str, rng: &mut MazeRng) -> Option<char> {
    let n = set.chars().count();
    if n == 0 {
        return None;
    }
    set.chars().nth(rng.index(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell as MazeCell;

    fn config(wall: &str, space: &str) -> DisplayConfig {
        DisplayConfig {
            wall_glyphs: wall.to_string(),
            space_glyphs: space.to_string(),
            ..DisplayConfig::default()
        }
    }

    #[test]
    fn viewport_grid_size_halves_width_in_solid_mode() {
        let mut cfg = DisplayConfig::default();
        assert_eq!(Viewport::new(81, 24).grid_size(&cfg), (81, 24));
        cfg.solid = true;
        assert_eq!(Viewport::new(81, 24).grid_size(&cfg), (40, 24));
    }

    #[test]
    fn draws_one_glyph_per_cell() {
        let mut grid = Grid::filled(3, 1, MazeCell::Wall);
        grid.set(1, 0, MazeCell::Open);
        let cfg = config("#", ".");
        let fb = MazeView::new(&cfg).render(&grid, Viewport::new(3, 1), &mut MazeRng::new(1));
        assert_eq!(fb.row_text(0), "#.#");
    }

    #[test]
    fn multi_char_set_is_drawn_verbatim_and_overwritten() {
        // Each cell writes the whole set; the next cell overwrites the tail.
        let grid = Grid::filled(2, 1, MazeCell::Wall);
        let cfg = config("ab", ".");
        let fb = MazeView::new(&cfg).render(&grid, Viewport::new(4, 1), &mut MazeRng::new(1));
        assert_eq!(fb.row_text(0), "aab ");
    }

    #[test]
    fn shuffle_samples_from_set() {
        let grid = Grid::filled(40, 1, MazeCell::Wall);
        let mut cfg = config("xyz", " ");
        cfg.shuffle = true;
        let fb = MazeView::new(&cfg).render(&grid, Viewport::new(40, 1), &mut MazeRng::new(9));
        let row = fb.row_text(0);
        assert!(row.chars().all(|c| "xyz".contains(c)));
        assert!(row.contains('x') && row.contains('y') && row.contains('z'));
    }

    #[test]
    fn solid_mode_doubles_each_cell() {
        let mut grid = Grid::filled(2, 1, MazeCell::Wall);
        grid.set(1, 0, MazeCell::Open);
        let mut cfg = config("#", ".");
        cfg.solid = true;
        let fb = MazeView::new(&cfg).render(&grid, Viewport::new(4, 1), &mut MazeRng::new(1));
        assert_eq!(fb.row_text(0), "##..");
    }

    #[test]
    fn cells_use_configured_colors() {
        let grid = Grid::filled(1, 1, MazeCell::Wall);
        let mut cfg = config("#", ".");
        cfg.wall_color = crate::types::PaletteColor::GREEN;
        cfg.bg_color = crate::types::PaletteColor::Indexed(236);
        let fb = MazeView::new(&cfg).render(&grid, Viewport::new(1, 1), &mut MazeRng::new(1));
        let cell = fb.get(0, 0).unwrap();
        assert_eq!(cell.style.fg, crate::types::PaletteColor::GREEN);
        assert_eq!(cell.style.bg, crate::types::PaletteColor::Indexed(236));
    }
}
