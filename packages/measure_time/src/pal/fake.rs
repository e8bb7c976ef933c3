//! Fake platform implementation for testing.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::pal::abstractions::Platform;

/// Fake implementation of the platform abstraction for testing.
///
/// Time only moves when a test moves it. Clones share the same clock, so a test can keep one
/// clone and advance time while a registry holds another.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    now: Arc<Mutex<Duration>>,
}

impl FakePlatform {
    /// Creates a new fake platform standing at the epoch.
    pub(crate) fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    /// Sets the current time, affecting all clones of this platform.
    pub(crate) fn set_now(&self, now: Duration) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = now;
    }

    /// Moves the current time forward by `delta`, affecting all clones of this platform.
    pub(crate) fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now = now.saturating_add(delta);
    }
}

impl Platform for FakePlatform {
    fn now(&self) -> Duration {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn initializes_at_epoch() {
        let platform = FakePlatform::new();
        assert_eq!(platform.now(), Duration::ZERO);
    }

    #[test]
    fn set_now_and_advance() {
        let platform = FakePlatform::new();
        platform.set_now(Duration::from_millis(150));
        platform.advance(Duration::from_millis(50));

        assert_eq!(platform.now(), Duration::from_millis(200));
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        platform1.advance(Duration::from_micros(3000));
        assert_eq!(platform2.now(), Duration::from_micros(3000));
    }
}
