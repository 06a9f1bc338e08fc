pub mod app;
pub mod config;
pub mod life;
pub mod ui;

pub use config::{Cli, Config, ConfigError, PatternChoice};
pub use life::{AutomatonSession, Cell, Grid, GridError, Metronome, Tick};
