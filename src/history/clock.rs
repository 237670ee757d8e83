//! Replay cadence
//!
//! The replay tracker plays one step per call; how often it is called is the
//! caller's policy. `ReplayClock` turns elapsed frame time into a number of
//! due steps at a fixed interval.

/// Default time between replay steps
pub const DEFAULT_REPLAY_INTERVAL: f64 = 0.05;

/// Fixed-interval step timer
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayClock {
    interval: f64,
    remaining: f64,
}

impl Default for ReplayClock {
    fn default() -> Self {
        Self::new(DEFAULT_REPLAY_INTERVAL)
    }
}

impl ReplayClock {
    /// Create a clock firing every `interval` time units
    ///
    /// The first step is due one full interval after start.
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            remaining: interval,
        }
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Time until the next step is due
    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    /// Advance by `delta` and return how many steps became due
    pub fn advance(&mut self, delta: f64) -> u32 {
        if !(self.interval > 0.0) || !delta.is_finite() || delta <= 0.0 {
            return 0;
        }

        self.remaining -= delta;
        if self.remaining > 0.0 {
            return 0;
        }

        let mut due = ((-self.remaining / self.interval).floor() + 1.0).min(u32::MAX as f64) as u32;
        self.remaining += due as f64 * self.interval;
        if self.remaining <= 0.0 && due < u32::MAX {
            // floor landed one short through rounding
            due += 1;
            self.remaining += self.interval;
        }
        if self.remaining <= 0.0 {
            // Backlog beyond u32::MAX steps is dropped
            self.remaining = self.interval;
        }
        due
    }

    /// Restart the countdown from a full interval
    pub fn reset(&mut self) {
        self.remaining = self.interval;
    }
}
