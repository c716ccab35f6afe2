//! Command-line options and their translation into a [`DisplayConfig`].

use anyhow::{bail, Result};
use clap::Parser;
use unicode_width::UnicodeWidthChar;

use crate::core::GeneratorKind;
use crate::types::{
    DisplayConfig, PaletteColor, DEFAULT_RATE, DEFAULT_SPACE_GLYPHS, DEFAULT_WALL_GLYPHS,
};

/// Generate a maze and display it in the terminal.
///
/// Press q, Esc or Ctrl-C to quit.
#[derive(Parser, Debug, Clone)]
#[command(name = "amaze", version, about)]
pub struct Args {
    /// Color of the walls (black, red, green, yellow, blue, magenta, cyan, white or 0-255)
    #[arg(short = 'c', long, default_value = "white", value_parser = parse_color)]
    pub wall_color: PaletteColor,

    /// Background color (same names as --wall-color, or -1 for the terminal default)
    #[arg(
        short = 'b',
        long,
        default_value = "-1",
        value_parser = parse_color,
        allow_hyphen_values = true
    )]
    pub bg_color: PaletteColor,

    /// Draw every cell two columns wide for a denser maze
    #[arg(long)]
    pub solid_mode: bool,

    /// Characters for walls
    #[arg(long, default_value = DEFAULT_WALL_GLYPHS)]
    pub wall: String,

    /// Characters for spaces
    #[arg(long, default_value = DEFAULT_SPACE_GLYPHS)]
    pub space: String,

    /// Pick a random character from --wall/--space for every position
    #[arg(long)]
    pub shuffle: bool,

    /// Keep redrawing the maze
    #[arg(long)]
    pub live: bool,

    /// Redraws per second (only with --live)
    #[arg(long, default_value_t = DEFAULT_RATE)]
    pub rate: u32,

    /// Maze generator: dfs, hunt-and-kill (hnk), prim or wall
    #[arg(short = 'g', long, default_value = "dfs", value_parser = parse_generator)]
    pub generator: GeneratorKind,

    /// Random seed, for reproducing a maze
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    /// Build the display configuration, rejecting unusable combinations.
    pub fn display_config(&self) -> Result<DisplayConfig> {
        let config = DisplayConfig {
            wall_glyphs: self.wall.clone(),
            space_glyphs: self.space.clone(),
            wall_color: self.wall_color,
            bg_color: self.bg_color,
            solid: self.solid_mode,
            shuffle: self.shuffle,
            live: self.live,
            rate: self.rate,
        };
        validate(&config)?;
        Ok(config)
    }
}

/// Check the invariants rendering relies on.
pub fn validate(config: &DisplayConfig) -> Result<()> {
    if config.live && config.rate == 0 {
        bail!("--rate must be a positive number of frames per second");
    }
    if config.wall_glyphs.is_empty() {
        bail!("wall characters must not be empty");
    }
    if config.space_glyphs.is_empty() {
        bail!("space characters must not be empty");
    }
    for (what, glyphs) in [("wall", &config.wall_glyphs), ("space", &config.space_glyphs)] {
        if let Some(ch) = glyphs.chars().find(|&ch| ch.width() != Some(1)) {
            bail!("{what} character {ch:?} is not one terminal column wide");
        }
    }
    Ok(())
}

fn parse_color(s: &str) -> Result<PaletteColor, String> {
    PaletteColor::from_str(s).ok_or_else(|| {
        format!("unknown color '{s}' (expected a color name, -1 or 0-255)")
    })
}

fn parse_generator(s: &str) -> Result<GeneratorKind, String> {
    GeneratorKind::from_str(s).ok_or_else(|| {
        format!("unknown generator '{s}' (expected dfs, hunt-and-kill, prim or wall)")
    })
}
