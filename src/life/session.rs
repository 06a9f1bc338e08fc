use log::{debug, info};
use rand::Rng;

use super::grid::{Grid, GridError};
use super::patterns::{self, Pattern};
use super::rule::step;
use super::scheduler::Tick;
use crate::config::{Config, SOUP_DENSITY};

/// The running automaton: current generation plus the flags the renderer and
/// input handler work from.
pub struct AutomatonSession {
    grid: Grid,
    pub paused: bool,
    pub show_dead: bool,
    pub generation: u64,
}

impl AutomatonSession {
    pub fn new(config: &Config) -> Self {
        Self {
            grid: Grid::new(config.columns, config.rows),
            paused: config.paused,
            show_dead: config.show_dead,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn set_alive(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        self.grid.set_alive(x, y)
    }

    /// Pointer entry point: out-of-range cells are ignored.
    pub fn click(&mut self, x: usize, y: usize) {
        match self.set_alive(x, y) {
            Ok(()) => debug!("cell ({x}, {y}) set alive"),
            Err(err) => debug!("click ignored: {err}"),
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        info!("{}", if self.paused { "paused" } else { "resumed" });
    }

    pub fn toggle_show_dead(&mut self) {
        self.show_dead = !self.show_dead;
        debug!("show dead: {}", self.show_dead);
    }

    /// Advances one generation even when paused.
    pub fn step_once(&mut self) {
        self.grid = step(&self.grid);
        self.generation += 1;
    }

    pub fn clear(&mut self) {
        self.grid = Grid::new(self.grid.width(), self.grid.height());
        self.generation = 0;
    }

    pub fn load_pattern(&mut self, pattern: &Pattern) {
        self.clear();
        patterns::apply(pattern, &mut self.grid);
        info!("loaded {} ({} alive)", pattern.name, self.grid.population());
    }

    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.clear();
        patterns::random_soup(&mut self.grid, rng, SOUP_DENSITY);
        info!("random soup ({} alive)", self.grid.population());
    }
}

impl Tick for AutomatonSession {
    fn advance(&mut self) {
        if !self.paused {
            self.step_once();
        }
    }
}
