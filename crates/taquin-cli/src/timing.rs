//! Wall-clock phase timing.

use std::time::{Duration, Instant};

/// Records elapsed wall-clock time for a sequence of named phases.
///
/// Each [`record`](Self::record) call closes the phase that started at the
/// previous call (or at [`start`](Self::start) for the first one). Purely
/// observational: nothing in the solving pipeline depends on the measured
/// values.
#[derive(Debug)]
pub struct PhaseTimer {
    started: Instant,
    last: Instant,
    phases: Vec<(&'static str, Duration)>,
}

impl PhaseTimer {
    /// Starts the timer.
    #[must_use]
    pub fn start() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last: now,
            phases: Vec::new(),
        }
    }

    /// Closes the current phase under the given name.
    pub fn record(&mut self, name: &'static str) {
        let now = Instant::now();
        self.phases.push((name, now - self.last));
        self.last = now;
    }

    /// Returns the recorded phases in order.
    #[must_use]
    pub fn phases(&self) -> &[(&'static str, Duration)] {
        &self.phases
    }

    /// Returns the time elapsed since the timer started.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.last - self.started
    }
}
