use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use ratatui::text::Span;
use thiserror::Error;

// Defaults for the board and its presentation.
pub const COLUMNS: usize = 45;
pub const ROWS: usize = 30;
pub const CELL_W: u16 = 2; // emoji glyphs are two terminal columns wide
pub const CELL_H: u16 = 1;
pub const BORDER: u16 = 0;
pub const INTERVAL_MS: u64 = 80;
pub const ALIVE_GLYPH: &str = "😼";
pub const DEAD_GLYPH: &str = "🙀";
pub const SOUP_DENSITY: f64 = 0.3;
// Width of the info/controls column beside the playfield.
pub const SIDEBAR_W: u16 = 26;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PatternChoice {
    GliderGun,
    Blinker,
    Glider,
    Random,
    Empty,
}

/// Command-line options. Every field has a default matching the constants
/// above.
#[derive(Debug, Parser)]
#[command(author, version, about = "Conway's Game of Life in the terminal", long_about = None)]
pub struct Cli {
    /// Number of grid columns.
    #[arg(long, default_value_t = COLUMNS)]
    pub columns: usize,
    /// Number of grid rows.
    #[arg(long, default_value_t = ROWS)]
    pub rows: usize,
    /// Terminal columns per cell.
    #[arg(long, default_value_t = CELL_W)]
    pub cell_width: u16,
    /// Terminal rows per cell.
    #[arg(long, default_value_t = CELL_H)]
    pub cell_height: u16,
    /// Width of the grid lines drawn between cells.
    #[arg(long, default_value_t = BORDER)]
    pub border: u16,
    /// Milliseconds between generations.
    #[arg(long, default_value_t = INTERVAL_MS)]
    pub interval_ms: u64,
    /// Start paused.
    #[arg(long)]
    pub paused: bool,
    /// Do not draw dead cells.
    #[arg(long)]
    pub hide_dead: bool,
    /// Starting pattern.
    #[arg(long, value_enum, default_value_t = PatternChoice::GliderGun)]
    pub pattern: PatternChoice,
    #[arg(long, default_value = ALIVE_GLYPH)]
    pub alive_glyph: String,
    #[arg(long, default_value = DEAD_GLYPH)]
    pub dead_glyph: String,
    /// Write logs here (level from RUST_LOG, default info).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid must have at least one column and one row (got {columns}x{rows})")]
    EmptyGrid { columns: usize, rows: usize },
    #[error("cell size must be non-zero (got {width}x{height})")]
    EmptyCell { width: u16, height: u16 },
    #[error("generation interval must be at least 1ms")]
    ZeroInterval,
    #[error("glyph {glyph:?} is {width} columns wide but cells are {cell_width}")]
    GlyphTooWide {
        glyph: String,
        width: usize,
        cell_width: u16,
    },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub columns: usize,
    pub rows: usize,
    pub cell_width: u16,
    pub cell_height: u16,
    pub border: u16,
    pub interval: Duration,
    pub paused: bool,
    pub show_dead: bool,
    pub pattern: PatternChoice,
    pub alive_glyph: String,
    pub dead_glyph: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: COLUMNS,
            rows: ROWS,
            cell_width: CELL_W,
            cell_height: CELL_H,
            border: BORDER,
            interval: Duration::from_millis(INTERVAL_MS),
            paused: false,
            show_dead: true,
            pattern: PatternChoice::GliderGun,
            alive_glyph: ALIVE_GLYPH.to_string(),
            dead_glyph: DEAD_GLYPH.to_string(),
            log_file: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ConfigError::EmptyGrid {
                columns: self.columns,
                rows: self.rows,
            });
        }
        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(ConfigError::EmptyCell {
                width: self.cell_width,
                height: self.cell_height,
            });
        }
        if self.interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        for glyph in [&self.alive_glyph, &self.dead_glyph] {
            let width = Span::raw(glyph.as_str()).width();
            if width > usize::from(self.cell_width) {
                return Err(ConfigError::GlyphTooWide {
                    glyph: glyph.clone(),
                    width,
                    cell_width: self.cell_width,
                });
            }
        }
        Ok(())
    }
}

impl TryFrom<Cli> for Config {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let config = Self {
            columns: cli.columns,
            rows: cli.rows,
            cell_width: cli.cell_width,
            cell_height: cli.cell_height,
            border: cli.border,
            interval: Duration::from_millis(cli.interval_ms),
            paused: cli.paused,
            show_dead: !cli.hide_dead,
            pattern: cli.pattern,
            alive_glyph: cli.alive_glyph,
            dead_glyph: cli.dead_glyph,
            log_file: cli.log_file,
        };
        config.validate()?;
        Ok(config)
    }
}
