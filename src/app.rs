//! The driver: size a grid to the screen, then show it once or live.

use std::time::Duration;

use anyhow::Result;

use crate::core::{MazeGenerator, MazeRng};
use crate::term::{RenderSession, Screen, Signal, Viewport};
use crate::types::{DisplayConfig, Grid};

/// How long a static display waits between event checks.
pub const IDLE_POLL: Duration = Duration::from_millis(250);

/// Generate a grid that exactly fills `viewport` under `config`.
pub fn generate_for<G: MazeGenerator + ?Sized>(
    generator: &G,
    viewport: Viewport,
    config: &DisplayConfig,
    rng: &mut MazeRng,
) -> Grid {
    let (width, height) = viewport.grid_size(config);
    log::info!(
        "generating {}x{} maze with {} (seed {})",
        width,
        height,
        generator.name(),
        rng.seed()
    );
    generator.generate(width, height, rng)
}

/// Show `grid` until `wait` reports [`Signal::Quit`].
///
/// `wait` blocks for at most the given duration. Static mode draws once and
/// redraws only on resize; live mode redraws every frame interval.
pub fn run<S, W>(
    screen: &mut S,
    grid: &Grid,
    config: &DisplayConfig,
    rng: MazeRng,
    mut wait: W,
) -> Result<()>
where
    S: Screen + ?Sized,
    W: FnMut(Duration) -> Result<Signal>,
{
    let mut session = RenderSession::new(grid, config, rng);

    if config.live {
        return session.run_live(screen, |interval| Ok(wait(interval)? != Signal::Quit));
    }

    session.draw_frame(screen)?;
    loop {
        match wait(IDLE_POLL)? {
            Signal::Quit => return Ok(()),
            Signal::Resize => {
                screen.invalidate();
                session.draw_frame(screen)?;
            }
            Signal::Timeout => {}
        }
    }
}
