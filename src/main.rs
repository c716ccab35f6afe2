//! Terminal maze display (default binary).
//!
//! Generates one maze sized to the terminal and draws it with crossterm,
//! either once or repeatedly in live mode, until q/Esc/Ctrl-C.

use anyhow::Result;
use clap::Parser;
use log::{error, warn};

use amaze::app;
use amaze::cli::Args;
use amaze::core::MazeRng;
use amaze::term::{wait_for, Screen, TerminalRenderer};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    let args = Args::parse();
    let config = args.display_config().inspect_err(|err| {
        error!("invalid configuration: {err:#}");
    })?;

    let mut rng = args.seed.map(MazeRng::new).unwrap_or_else(MazeRng::from_entropy);
    let mut term = TerminalRenderer::new();
    let grid = app::generate_for(&args.generator, term.size()?, &config, &mut rng);

    term.enter()?;
    let result = app::run(&mut term, &grid, &config, rng, wait_for);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!("failed to restore terminal: {err:#}");
    }
    result
}
