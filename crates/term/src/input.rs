//! Terminal events that matter while a maze is on screen.
//!
//! Raw mode turns Ctrl-C into a key press instead of SIGINT, so quitting is
//! detected here, while waiting between frames.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The wait ran its full length.
    Timeout,
    /// The terminal was resized; the current frame is stale.
    Resize,
    Quit,
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Block for up to `timeout`, returning early on quit or resize.
pub fn wait_for(timeout: Duration) -> Result<Signal> {
    wait_on(timeout, |remaining| {
        if event::poll(remaining)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    })
}

/// Drain `next_event` until the deadline passes or a quit/resize arrives.
///
/// The source is always consulted at least once, so a zero timeout still
/// sees a pending quit key.
pub fn wait_on<F>(timeout: Duration, mut next_event: F) -> Result<Signal>
where
    F: FnMut(Duration) -> Result<Option<Event>>,
{
    let deadline = Instant::now() + timeout;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match next_event(remaining)? {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press && should_quit(key) => {
                return Ok(Signal::Quit);
            }
            Some(Event::Resize(w, h)) => {
                log::debug!("terminal resized to {}x{}", w, h);
                return Ok(Signal::Resize);
            }
            Some(_) if !remaining.is_zero() => {}
            _ => return Ok(Signal::Timeout),
        }
    }
}
