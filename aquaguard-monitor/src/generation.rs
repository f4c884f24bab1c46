//! Request generations for discarding stale responses

use std::sync::atomic::{AtomicU64, Ordering};

/// Token taken when a fetch starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    /// Raw counter value
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic counter identifying the most recent request
///
/// Each call to [`begin`](Self::begin) supersedes every earlier token.
#[derive(Debug, Default)]
pub struct RequestGenerations {
    latest: AtomicU64,
}

impl RequestGenerations {
    /// Counter with no request started
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, invalidating all earlier ones
    pub fn begin(&self) -> Generation {
        Generation(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether no request has started since `generation`
    pub fn is_current(&self, generation: Generation) -> bool {
        self.latest.load(Ordering::Acquire) == generation.0
    }

    /// Invalidate everything in flight without starting a new request
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::AcqRel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_generation_is_current() {
        let generations = RequestGenerations::new();
        let first = generations.begin();
        assert!(generations.is_current(first));

        let second = generations.begin();
        assert!(!generations.is_current(first));
        assert!(generations.is_current(second));
        assert!(second > first);
    }

    #[test]
    fn invalidate_drops_in_flight() {
        let generations = RequestGenerations::new();
        let token = generations.begin();
        generations.invalidate();
        assert!(!generations.is_current(token));
    }
}
