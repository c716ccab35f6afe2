//! Render session and the live-mode frame loop.
//!
//! A session owns the framebuffer and the glyph RNG for one grid. Static mode
//! draws a single frame; live mode cycles
//! `Idle -> Rendering -> Waiting -> Rendering -> ...` forever, redrawing the
//! same grid every `1000 / rate` milliseconds. Only the glyphs can change
//! between frames (when shuffle is on); the maze itself never does.

use std::time::Duration;

use anyhow::Result;

use crate::core::MazeRng;
use crate::fb::FrameBuffer;
use crate::maze_view::MazeView;
use crate::screen::Screen;
use crate::types::{DisplayConfig, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LivePhase {
    Idle,
    Rendering,
    Waiting,
}

pub struct RenderSession<'a> {
    grid: &'a Grid,
    view: MazeView<'a>,
    fb: FrameBuffer,
    rng: MazeRng,
    phase: LivePhase,
    frames: u64,
}

impl<'a> RenderSession<'a> {
    pub fn new(grid: &'a Grid, config: &'a DisplayConfig, rng: MazeRng) -> Self {
        Self {
            grid,
            view: MazeView::new(config),
            fb: FrameBuffer::new(0, 0),
            rng,
            phase: LivePhase::Idle,
            frames: 0,
        }
    }

    pub fn phase(&self) -> LivePhase {
        self.phase
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Delay between live frames, never shorter than 1 ms.
    pub fn frame_interval(&self) -> Duration {
        let rate = self.view.config().rate.max(1);
        Duration::from_millis((1000 / rate as u64).max(1))
    }

    /// Render the grid at the screen's current size and present it.
    pub fn draw_frame<S: Screen + ?Sized>(&mut self, screen: &mut S) -> Result<()> {
        let viewport = screen.size()?;
        self.fb.resize(viewport.width, viewport.height);
        self.fb.clear(self.view.background());
        self.view
            .render_into(self.grid, viewport, &mut self.fb, &mut self.rng);
        screen.present(&mut self.fb)?;
        self.frames += 1;
        log::trace!(
            "frame {} presented at {}x{}",
            self.frames,
            viewport.width,
            viewport.height
        );
        Ok(())
    }

    /// Step the live-mode state machine once and return the new phase.
    ///
    /// Entering `Waiting` means a frame was just presented; the caller waits
    /// [`Self::frame_interval`] before advancing again.
    pub fn advance<S: Screen + ?Sized>(&mut self, screen: &mut S) -> Result<LivePhase> {
        self.phase = match self.phase {
            LivePhase::Idle => LivePhase::Rendering,
            LivePhase::Rendering => {
                self.draw_frame(screen)?;
                LivePhase::Waiting
            }
            LivePhase::Waiting => LivePhase::Rendering,
        };
        Ok(self.phase)
    }

    /// Run live mode until `wait` reports an interrupt.
    ///
    /// `wait` is handed the frame interval each time the loop enters
    /// `Waiting`; it blocks for that long and returns `false` to stop.
    pub fn run_live<S, W>(&mut self, screen: &mut S, mut wait: W) -> Result<()>
    where
        S: Screen + ?Sized,
        W: FnMut(Duration) -> Result<bool>,
    {
        let interval = self.frame_interval();
        loop {
            if self.advance(screen)? == LivePhase::Waiting && !wait(interval)? {
                return Ok(());
            }
        }
    }
}
