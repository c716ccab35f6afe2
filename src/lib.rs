//! amaze (workspace facade crate).
//!
//! Re-exports the member crates under `amaze::{core,term,types}` and hosts the
//! thin CLI adapter and driver used by the `amaze` binary.

pub use amaze_core as core;
pub use amaze_term as term;
pub use amaze_types as types;

pub mod app;
pub mod cli;
