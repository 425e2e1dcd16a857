//! Randomized pacing primitives.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// An inclusive millisecond range a pacing delay is drawn from.
///
/// A zero window (`0..=0`) samples to `Duration::ZERO`, which callers treat
/// as "do not sleep" - this is what makes timing injectable for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayWindow {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayWindow {
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    pub const fn zero() -> Self {
        Self::new(0, 0)
    }

    pub fn is_zero(&self) -> bool {
        self.min_ms == 0 && self.max_ms == 0
    }

    /// Draw a delay from the window. Degenerate windows (max <= min)
    /// collapse to the minimum.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.max_ms <= self.min_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(rng.gen_range(self.min_ms..=self.max_ms))
    }
}

/// Sleep for a duration drawn from the window. A zero sample returns
/// without suspending.
pub async fn pause<R: Rng + ?Sized>(window: DelayWindow, rng: &mut R) {
    let delay = window.sample(rng);
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn sample_stays_within_window() {
        let mut rng = StdRng::seed_from_u64(42);
        let window = DelayWindow::new(300, 1_000);

        for _ in 0..100 {
            let delay = window.sample(&mut rng);
            assert!(delay >= Duration::from_millis(300));
            assert!(delay <= Duration::from_millis(1_000));
        }
    }

    #[test]
    fn zero_window_never_sleeps() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(DelayWindow::zero().sample(&mut rng), Duration::ZERO);
        assert!(DelayWindow::zero().is_zero());
    }

    #[test]
    fn degenerate_window_collapses_to_min() {
        let mut rng = StdRng::seed_from_u64(42);
        let window = DelayWindow::new(500, 500);
        assert_eq!(window.sample(&mut rng), Duration::from_millis(500));

        let inverted = DelayWindow::new(800, 200);
        assert_eq!(inverted.sample(&mut rng), Duration::from_millis(800));
    }

    #[test]
    fn seeded_sampling_is_deterministic() {
        let window = DelayWindow::new(100, 900);
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            assert_eq!(window.sample(&mut a), window.sample(&mut b));
        }
    }
}
