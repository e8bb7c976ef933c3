use std::fmt;
use std::hash::Hash;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::pal::{Platform, PlatformFacade};
use crate::typed_maps::TypedMaps;
use crate::{Intervals, Microseconds, Precision, ScopeStats, ScopeTime, Sink, Ticks};

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Something that can name a timed scope or an interval.
///
/// Labels are printed between single quotes in reports and compared by value to find the
/// statistics or the pending interval they belong to. String literals, `String` and integers
/// all qualify.
pub trait Label: fmt::Display + Hash + Eq + Clone + Send + 'static {}

impl<T> Label for T where T: fmt::Display + Hash + Eq + Clone + Send + 'static {}

/// Holds the state shared by all timers: per-label statistics and pending intervals.
///
/// Most programs use the process-wide [`Registry::global()`] through the free functions and
/// macros of this package. Creating a dedicated registry keeps its statistics and intervals
/// separate from everything else, which is mostly useful in tests.
///
/// Statistics are kept separately per label type and precision. Pending intervals are kept
/// separately per key type and sink type, so the same key used with two different kinds of
/// sink is tracked independently.
///
/// # Threading
///
/// A registry can be shared between threads; its state is guarded by locks. Timing
/// the same label or key from several threads at once is allowed but the resulting reports
/// interleave in an unspecified order.
///
/// # Examples
///
/// ```
/// use measure_time::Registry;
///
/// let registry = Registry::new();
/// let mut output = String::new();
///
/// for _ in 0..3 {
///     let _scope = registry.scope("parse", &mut output);
///     // Work to measure.
/// }
///
/// let stats = registry
///     .scope_stats::<measure_time::Microseconds, _>(&"parse")
///     .unwrap();
/// assert_eq!(stats.count(), 3);
/// assert_eq!(output.lines().count(), 3);
/// ```
#[derive(Debug)]
pub struct Registry {
    platform: PlatformFacade,
    scopes: Mutex<TypedMaps>,
    intervals: Mutex<TypedMaps>,
}

impl Registry {
    /// Creates an empty registry with its own clock epoch.
    #[expect(
        clippy::new_without_default,
        reason = "a 'default registry' would be easily confused with the global registry"
    )]
    #[must_use]
    pub fn new() -> Self {
        Self::with_platform(PlatformFacade::real())
    }

    pub(crate) fn with_platform(platform: PlatformFacade) -> Self {
        Self {
            platform,
            scopes: Mutex::new(TypedMaps::default()),
            intervals: Mutex::new(TypedMaps::default()),
        }
    }

    /// The process-wide registry used by the free functions and macros of this package.
    ///
    /// It is created on first use and lives until the process exits.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Starts timing a scope at microsecond precision.
    ///
    /// The returned guard reports to `sink` when dropped. Use [`ScopeTime::new()`] to pick a
    /// different precision.
    ///
    /// # Examples
    ///
    /// ```
    /// use measure_time::Registry;
    ///
    /// let registry = Registry::new();
    /// let mut output = String::new();
    /// {
    ///     let _scope = registry.scope("render", &mut output);
    ///     // Work to measure.
    /// }
    /// assert!(output.starts_with("'render' "));
    /// assert!(output.contains(" [us] avg. "));
    /// ```
    pub fn scope<L: Label, S: Sink>(&self, label: L, sink: S) -> ScopeTime<'_, L, S> {
        ScopeTime::new(self, label, sink)
    }

    /// Returns the interval tracker of this registry at precision `P`.
    ///
    /// # Examples
    ///
    /// ```
    /// use measure_time::{Milliseconds, Registry};
    ///
    /// let registry = Registry::new();
    /// let mut output = String::new();
    ///
    /// let intervals = registry.intervals::<Milliseconds>();
    /// intervals.begin("download", &output);
    /// let elapsed = intervals.end("download", &mut output);
    ///
    /// assert_eq!(elapsed.unit(), "ms");
    /// assert_eq!(output, format!("'download' end: {} [ms]\n", elapsed.count()));
    /// ```
    #[must_use]
    pub fn intervals<P: Precision>(&self) -> Intervals<'_, P> {
        Intervals::new(self)
    }

    /// Starts (or restarts) the interval `key`, measured in microseconds.
    ///
    /// Shorthand for `self.intervals::<Microseconds>().begin(key, sink)`.
    pub fn begin<K: Label, S: Sink + 'static>(&self, key: K, sink: &S) -> Ticks<Microseconds> {
        self.intervals().begin(key, sink)
    }

    /// Reports the time since the interval `key` began, keeping the interval open.
    ///
    /// Shorthand for `self.intervals::<Microseconds>().log(key, sink)`.
    pub fn log<K: Label, S: Sink + 'static>(&self, key: K, sink: &mut S) -> Ticks<Microseconds> {
        self.intervals().log(key, sink)
    }

    /// Reports the time since the interval `key` began and closes the interval.
    ///
    /// Shorthand for `self.intervals::<Microseconds>().end(key, sink)`.
    pub fn end<K: Label, S: Sink + 'static>(&self, key: K, sink: &mut S) -> Ticks<Microseconds> {
        self.intervals().end(key, sink)
    }

    /// Returns a snapshot of the statistics of a scope label timed at precision `P`.
    ///
    /// Returns `None` if no scope with this label has finished yet.
    #[must_use]
    pub fn scope_stats<P: Precision, L: Label>(&self, label: &L) -> Option<ScopeStats> {
        lock(&self.scopes)
            .get::<L, ScopeStats, P>()
            .and_then(|stats| stats.get(label))
            .copied()
    }

    /// Whether the interval `key` has begun and not yet ended for sinks of type `S`.
    #[must_use]
    pub fn is_pending<K: Label, S: Sink + 'static>(&self, key: &K) -> bool {
        lock(&self.intervals)
            .get::<K, Duration, S>()
            .is_some_and(|pending| pending.contains_key(key))
    }

    /// Current time since the clock epoch of this registry.
    pub(crate) fn now(&self) -> Duration {
        self.platform.now()
    }

    /// Adds a sample to the statistics of `label` and returns the updated statistics.
    pub(crate) fn record_scope<P: Precision, L: Label>(&self, label: &L, sample: u128) -> ScopeStats {
        let mut scopes = lock(&self.scopes);
        let all_stats = scopes.get_or_create::<L, ScopeStats, P>();

        if let Some(stats) = all_stats.get_mut(label) {
            stats.record(sample);
            return *stats;
        }

        let mut stats = ScopeStats::default();
        stats.record(sample);
        all_stats.insert(label.clone(), stats);
        stats
    }

    /// Marks the interval `key` as started at `start`, replacing any earlier start.
    pub(crate) fn start_interval<K: Label, S: Sink + 'static>(&self, key: K, start: Duration) {
        lock(&self.intervals)
            .get_or_create::<K, Duration, S>()
            .insert(key, start);
    }

    /// Returns when the interval `key` started, if it is pending.
    pub(crate) fn interval_start<K: Label, S: Sink + 'static>(&self, key: &K) -> Option<Duration> {
        lock(&self.intervals)
            .get::<K, Duration, S>()
            .and_then(|pending| pending.get(key))
            .copied()
    }

    /// Closes the interval `key`, returning when it started if it was pending.
    pub(crate) fn finish_interval<K: Label, S: Sink + 'static>(&self, key: &K) -> Option<Duration> {
        lock(&self.intervals)
            .get_mut::<K, Duration, S>()
            .and_then(|pending| pending.remove(key))
    }
}

/// Instrumentation must keep working after a panic elsewhere, so poisoning is ignored. The
/// maps are never left half-updated because no user code runs while a lock is held.
fn lock(maps: &Mutex<TypedMaps>) -> MutexGuard<'_, TypedMaps> {
    maps.lock().unwrap_or_else(PoisonError::into_inner)
}
