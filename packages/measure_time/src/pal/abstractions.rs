//! Platform abstraction trait definitions.

use std::fmt::Debug;
use std::time::Duration;

/// Provides the current time for timers and interval tracking.
///
/// Timestamps are expressed as the time elapsed since a fixed epoch chosen by the platform
/// when it was created. They never decrease.
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Gets the time elapsed since the platform epoch.
    fn now(&self) -> Duration;
}
