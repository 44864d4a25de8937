//! Inter-page delay policy.
//!
//! The pause between page fetches is a deliberate politeness/rate-limiting
//! contract with the target site, not incidental latency. It is modeled as a
//! policy trait so the distribution bounds stay explicit and tests can inject
//! a zero-delay implementation instead of sleeping.

use std::time::Duration;

use rand::Rng;

use crate::config::{PAGE_DELAY_MAX, PAGE_DELAY_MIN};

/// Decides how long to pause before the next page fetch.
pub trait DelayPolicy: Send + Sync {
    /// Returns the pause to apply before the next request.
    fn next_delay(&self) -> Duration;
}

/// Uniformly distributed delay within a fixed window.
#[derive(Debug, Clone, Copy)]
pub struct UniformDelay {
    min: Duration,
    max: Duration,
}

impl UniformDelay {
    /// Creates a delay policy sampling uniformly from `[min, max]`.
    ///
    /// Inverted bounds are swapped; the sampler panics on an empty range.
    pub fn new(min: Duration, max: Duration) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self { min, max }
    }

    /// The fixed politeness window used for real runs (2-4 seconds).
    pub fn politeness_window() -> Self {
        Self::new(PAGE_DELAY_MIN, PAGE_DELAY_MAX)
    }
}

impl DelayPolicy for UniformDelay {
    fn next_delay(&self) -> Duration {
        rand::rng().random_range(self.min..=self.max)
    }
}

/// Zero-delay policy for tests and embedders that pace requests themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl DelayPolicy for NoDelay {
    fn next_delay(&self) -> Duration {
        Duration::ZERO
    }
}
