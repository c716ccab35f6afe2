//! The terminal capability the render loop draws through.

use anyhow::Result;

use crate::fb::FrameBuffer;
use crate::maze_view::Viewport;

/// Somewhere frames can be shown.
///
/// [`crate::TerminalRenderer`] is the real implementation; tests substitute an
/// in-memory one.
pub trait Screen {
    /// Current size in columns and rows.
    fn size(&self) -> Result<Viewport>;

    /// Show a complete frame.
    ///
    /// Implementations may swap the buffer's contents with an older frame, so
    /// callers must redraw it fully before presenting again.
    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()>;

    /// Forget any cached frame so the next `present` repaints everything.
    fn invalidate(&mut self) {}
}
