//! Politeness delay between requests to the source site.
//!
//! Every retrieval is followed by a pause drawn uniformly from a configured
//! millisecond range. This is a self-imposed rate limit, not a retry policy:
//! failed requests are never repeated.

use std::time::Duration;

use rand::Rng;

/// Randomized inter-request delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacer {
    min_ms: u64,
    max_ms: u64,
}

impl Pacer {
    /// Creates a pacer sleeping between `min_ms` and `max_ms` (inclusive).
    /// Reversed bounds are swapped.
    #[must_use]
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        if min_ms <= max_ms {
            Self { min_ms, max_ms }
        } else {
            Self {
                min_ms: max_ms,
                max_ms: min_ms,
            }
        }
    }

    /// A pacer that never sleeps.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(0, 0)
    }

    /// Draws the next delay.
    #[must_use]
    pub fn next_delay(&self) -> Duration {
        if self.max_ms == 0 {
            return Duration::ZERO;
        }
        let ms = rand::rng().random_range(self.min_ms..=self.max_ms);
        Duration::from_millis(ms)
    }

    /// Sleeps for a freshly drawn delay.
    pub async fn pause(&self) {
        let delay = self.next_delay();
        if delay.is_zero() {
            return;
        }
        tracing::debug!(
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            "politeness delay"
        );
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_stay_within_bounds() {
        let pacer = Pacer::new(1000, 3000);
        for _ in 0..500 {
            let delay = pacer.next_delay();
            assert!(delay >= Duration::from_millis(1000), "{delay:?} below min");
            assert!(delay <= Duration::from_millis(3000), "{delay:?} above max");
        }
    }

    #[test]
    fn reversed_bounds_are_swapped() {
        assert_eq!(Pacer::new(3000, 1000), Pacer::new(1000, 3000));
    }

    #[test]
    fn equal_bounds_give_fixed_delay() {
        let pacer = Pacer::new(250, 250);
        assert_eq!(pacer.next_delay(), Duration::from_millis(250));
    }

    #[test]
    fn disabled_pacer_has_zero_delay() {
        assert_eq!(Pacer::disabled().next_delay(), Duration::ZERO);
    }

    #[tokio::test]
    async fn disabled_pacer_returns_immediately() {
        let started = std::time::Instant::now();
        Pacer::disabled().pause().await;
        assert!(started.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn pause_sleeps_for_drawn_delay() {
        let started = tokio::time::Instant::now();
        Pacer::new(1000, 1000).pause().await;
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }
}
