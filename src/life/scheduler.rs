use std::time::{Duration, Instant};

/// Anything that can be advanced by one tick of a host loop.
pub trait Tick {
    fn advance(&mut self);
}

/// Fires at most once per `interval` of wall-clock time, independent of how
/// often the host loop polls it.
pub struct Metronome {
    interval: Duration,
    last: Instant,
}

impl Metronome {
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            last: start,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) >= self.interval {
            self.last = now;
            true
        } else {
            false
        }
    }
}
