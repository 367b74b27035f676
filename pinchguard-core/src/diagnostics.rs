//! Counters collected by the [EventDispatcher](crate::dispatch::EventDispatcher).

/// Dispatch counters since creation or the last [DispatchStats::reset].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    /// Samples swallowed.
    pub consumed: u64,
    /// Samples handed to the downstream handlers.
    pub forwarded: u64,
    /// Scale gestures that were started and blocked.
    pub gestures_blocked: u64,
}

impl DispatchStats {
    /// Total number of samples seen.
    pub fn total(&self) -> u64 {
        self.consumed + self.forwarded
    }

    /// Share of samples that were consumed (0.0 to 1.0).
    pub fn consume_ratio(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.consumed as f64 / total as f64,
        }
    }

    /// Clear all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
