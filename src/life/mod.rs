pub mod grid;
pub mod patterns;
pub mod rule;
pub mod scheduler;
pub mod session;

pub use grid::{Cell, Grid, GridError};
pub use patterns::Pattern;
pub use rule::step;
pub use scheduler::{Metronome, Tick};
pub use session::AutomatonSession;
