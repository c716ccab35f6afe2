//! Renderer tests - grid to framebuffer mapping, clipping, and the frame loop

use std::time::Duration;

use anyhow::Result;

use amaze::app;
use amaze::core::{GeneratorKind, MazeGenerator, MazeRng};
use amaze::term::{
    encode_full_into, CellStyle, FrameBuffer, LivePhase, MazeView, RenderSession, Screen, Signal,
    Viewport,
};
use amaze::types::{Cell, DisplayConfig, Grid};

/// In-memory screen that keeps a copy of every presented frame.
struct RecordingScreen {
    viewport: Viewport,
    frames: Vec<FrameBuffer>,
    invalidations: usize,
}

impl RecordingScreen {
    fn new(width: u16, height: u16) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            frames: Vec::new(),
            invalidations: 0,
        }
    }
}

impl Screen for RecordingScreen {
    fn size(&self) -> Result<Viewport> {
        Ok(self.viewport)
    }

    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.frames.push(fb.clone());
        Ok(())
    }

    fn invalidate(&mut self) {
        self.invalidations += 1;
    }
}

fn hash_config() -> DisplayConfig {
    DisplayConfig {
        wall_glyphs: "#".to_string(),
        space_glyphs: ".".to_string(),
        ..DisplayConfig::default()
    }
}

#[test]
fn test_solid_mode_single_open_cell() {
    let grid = Grid::filled(1, 1, Cell::Open);
    let mut cfg = hash_config();
    cfg.solid = true;

    let fb = MazeView::new(&cfg).render(&grid, Viewport::new(10, 3), &mut MazeRng::new(1));
    assert_eq!(fb.get(0, 0).unwrap().ch, '.');
    assert_eq!(fb.get(1, 0).unwrap().ch, '.');
    assert_eq!(fb.get(2, 0).unwrap().ch, ' ');
    assert_eq!(fb.row_text(1).trim(), "");
}

#[test]
fn test_render_is_idempotent_without_shuffle() {
    let grid = GeneratorKind::DfsCarve.generate(21, 11, &mut MazeRng::new(4));
    let cfg = DisplayConfig::default();
    let view = MazeView::new(&cfg);
    let vp = Viewport::new(30, 12);

    let a = view.render(&grid, vp, &mut MazeRng::new(1));
    let b = view.render(&grid, vp, &mut MazeRng::new(999));
    assert_eq!(a, b);

    let mut out_a = Vec::new();
    let mut out_b = Vec::new();
    encode_full_into(&a, &mut out_a).unwrap();
    encode_full_into(&b, &mut out_b).unwrap();
    assert_eq!(out_a, out_b);
}

#[test]
fn test_shuffle_changes_frames_but_not_the_maze() {
    let grid = GeneratorKind::Prim.generate(31, 11, &mut MazeRng::new(4));
    let mut cfg = hash_config();
    cfg.wall_glyphs = "#%@".to_string();
    cfg.shuffle = true;
    let view = MazeView::new(&cfg);
    let vp = Viewport::new(31, 11);
    let mut rng = MazeRng::new(10);

    let a = view.render(&grid, vp, &mut rng);
    let b = view.render(&grid, vp, &mut rng);
    assert_ne!(a, b);

    // Wall/open layout is the same in both frames.
    for y in 0..11u16 {
        for x in 0..31u16 {
            let open_a = a.get(x, y).unwrap().ch == '.';
            let open_b = b.get(x, y).unwrap().ch == '.';
            assert_eq!(open_a, open_b);
            assert_eq!(open_a, grid.is_open(x as usize, y as usize));
        }
    }
}

#[test]
fn test_grid_larger_than_terminal_is_clipped() {
    let grid = Grid::filled(50, 40, Cell::Wall);
    let cfg = hash_config();
    let fb = MazeView::new(&cfg).render(&grid, Viewport::new(8, 3), &mut MazeRng::new(1));
    assert_eq!((fb.width(), fb.height()), (8, 3));
    for y in 0..3 {
        assert_eq!(fb.row_text(y), "########");
    }
}

#[test]
fn test_solid_mode_clips_to_half_width() {
    let grid = Grid::filled(10, 1, Cell::Wall);
    let mut cfg = hash_config();
    cfg.solid = true;
    // 7 columns fit 3 whole cells.
    let fb = MazeView::new(&cfg).render(&grid, Viewport::new(7, 1), &mut MazeRng::new(1));
    assert_eq!(fb.row_text(0), "###### ");
}

#[test]
fn test_long_glyphs_clip_at_right_edge() {
    let grid = Grid::filled(3, 1, Cell::Wall);
    let mut cfg = hash_config();
    cfg.wall_glyphs = "███".to_string();
    let fb = MazeView::new(&cfg).render(&grid, Viewport::new(3, 1), &mut MazeRng::new(1));
    assert_eq!(fb.row_text(0), "███");
}

#[test]
fn test_grid_smaller_than_terminal_leaves_remainder_untouched() {
    let grid = Grid::filled(3, 2, Cell::Open);
    let cfg = hash_config();
    let marker = CellStyle::default().into_cell('~');
    let mut fb = FrameBuffer::new(6, 4);
    fb.clear(marker);

    MazeView::new(&cfg).render_into(&grid, Viewport::new(6, 4), &mut fb, &mut MazeRng::new(1));

    assert_eq!(fb.row_text(0), "...~~~");
    assert_eq!(fb.row_text(1), "...~~~");
    assert_eq!(fb.row_text(2), "~~~~~~");
    assert_eq!(fb.row_text(3), "~~~~~~");
}

#[test]
fn test_empty_grid_renders_background_only() {
    let grid = Grid::filled(0, 0, Cell::Wall);
    let cfg = hash_config();
    let fb = MazeView::new(&cfg).render(&grid, Viewport::new(4, 2), &mut MazeRng::new(1));
    assert!(fb.cells().iter().all(|c| c.ch == ' '));
}

#[test]
fn test_live_session_repeats_the_same_frame() {
    let grid = GeneratorKind::HuntAndKill.generate(15, 9, &mut MazeRng::new(3));
    let mut cfg = hash_config();
    cfg.live = true;
    let mut session = RenderSession::new(&grid, &cfg, MazeRng::new(1));
    let mut screen = RecordingScreen::new(15, 9);

    for _ in 0..6 {
        session.advance(&mut screen).unwrap();
    }
    assert_eq!(session.phase(), LivePhase::Waiting);
    assert_eq!(screen.frames.len(), 3);
    assert!(screen.frames.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_session_follows_terminal_resize() {
    let grid = Grid::filled(20, 10, Cell::Wall);
    let cfg = hash_config();
    let mut session = RenderSession::new(&grid, &cfg, MazeRng::new(1));
    let mut screen = RecordingScreen::new(20, 10);

    session.draw_frame(&mut screen).unwrap();
    screen.viewport = Viewport::new(5, 2);
    session.draw_frame(&mut screen).unwrap();

    let last = screen.frames.last().unwrap();
    assert_eq!((last.width(), last.height()), (5, 2));
    assert_eq!(last.row_text(1), "#####");
}

#[test]
fn test_generate_for_fills_viewport() {
    let mut cfg = DisplayConfig::default();
    let vp = Viewport::new(81, 25);
    let grid = app::generate_for(&GeneratorKind::DfsCarve, vp, &cfg, &mut MazeRng::new(1));
    assert_eq!((grid.width(), grid.height()), (81, 25));

    cfg.solid = true;
    let grid = app::generate_for(&GeneratorKind::Prim, vp, &cfg, &mut MazeRng::new(1));
    assert_eq!((grid.width(), grid.height()), (40, 25));
}

#[test]
fn test_static_run_draws_once_and_redraws_on_resize() {
    let grid = Grid::filled(4, 2, Cell::Wall);
    let cfg = hash_config();
    let mut screen = RecordingScreen::new(4, 2);
    let mut script = vec![Signal::Timeout, Signal::Resize, Signal::Timeout, Signal::Quit].into_iter();
    let mut waits = Vec::new();

    app::run(&mut screen, &grid, &cfg, MazeRng::new(1), |d| {
        waits.push(d);
        Ok(script.next().unwrap_or(Signal::Quit))
    })
    .unwrap();

    assert_eq!(screen.frames.len(), 2);
    assert_eq!(screen.invalidations, 1);
    assert!(waits.iter().all(|&d| d == app::IDLE_POLL));
}

#[test]
fn test_live_run_waits_one_interval_per_frame() {
    let grid = Grid::filled(4, 2, Cell::Wall);
    let mut cfg = hash_config();
    cfg.live = true;
    cfg.rate = 20;
    let mut screen = RecordingScreen::new(4, 2);
    let mut waits = Vec::new();

    app::run(&mut screen, &grid, &cfg, MazeRng::new(1), |d| {
        waits.push(d);
        Ok(if waits.len() == 4 { Signal::Quit } else { Signal::Timeout })
    })
    .unwrap();

    assert_eq!(screen.frames.len(), 4);
    assert_eq!(waits, vec![Duration::from_millis(50); 4]);
}
