//! Terminal maze renderer.
//!
//! This is a small rendering layer for drawing mazes in a terminal. It
//! renders into a simple framebuffer that is then flushed to a terminal
//! backend in one write per frame.
//!
//! Goals:
//! - Keep the grid-to-cells mapping pure and testable
//! - Clip silently to whatever the terminal currently is
//! - Allow 2-column cells to compensate for terminal glyph aspect ratio

pub mod fb;
pub mod input;
pub mod live;
pub mod maze_view;
pub mod renderer;
pub mod screen;

pub use amaze_core as core;
pub use amaze_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use input::{should_quit, wait_for, wait_on, Signal};
pub use live::{LivePhase, RenderSession};
pub use maze_view::{MazeView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::Screen;
