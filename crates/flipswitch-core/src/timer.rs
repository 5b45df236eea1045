//! Recurring timer driven by the host event loop.
//!
//! The timer never sleeps or spawns; the host feeds elapsed time through
//! [`Timer::advance`] and acts on the returned tick count.

/// A timer that fires at regular intervals.
#[derive(Debug, Clone)]
pub struct Timer {
    /// Interval in milliseconds
    interval_ms: u32,
    /// Elapsed time since last tick
    elapsed_ms: u32,
    /// Whether the timer is running
    running: bool,
}

impl Timer {
    /// Create a stopped timer with the given interval.
    #[must_use]
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0,
            running: false,
        }
    }

    /// Change the interval. Time already accumulated toward the next tick
    /// is kept.
    pub fn set_interval_ms(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms;
    }

    /// Start the timer from a clean slate.
    pub fn start(&mut self) {
        self.reset();
        self.running = true;
    }

    /// Stop the timer.
    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed_ms = 0;
    }

    /// Drop time accumulated toward the next tick.
    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }

    /// Check if the timer is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Advance the timer and return the number of ticks that occurred.
    pub fn advance(&mut self, delta_ms: u32) -> u32 {
        if !self.running || self.interval_ms == 0 {
            return 0;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
        let ticks = self.elapsed_ms / self.interval_ms;
        self.elapsed_ms %= self.interval_ms;
        ticks
    }
}
