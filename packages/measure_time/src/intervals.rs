//! Named intervals that begin and end at arbitrary points in the program.

use std::marker::PhantomData;

use crate::sink::write_report;
use crate::{Label, Microseconds, Precision, Registry, Sink, Ticks};

/// Tracks named intervals of a [`Registry`], measured at precision `P`.
///
/// An interval is identified by its key together with the type of the sink it is reported
/// to. [`begin()`](Self::begin) starts it, [`log()`](Self::log) reports a checkpoint without
/// stopping it and [`end()`](Self::end) reports and stops it. Calling `log()` or `end()` for
/// an interval that is not pending does nothing and returns zero.
///
/// The precision only affects how results are truncated and labeled; an interval begun at
/// one precision can be logged or ended at another.
///
/// # Examples
///
/// ```
/// use measure_time::Registry;
///
/// let registry = Registry::new();
/// let intervals = registry.intervals::<measure_time::Microseconds>();
/// let mut output = String::new();
///
/// intervals.begin("load", &output);
/// // Read the file.
/// intervals.log("load", &mut output);
/// // Parse the file.
/// intervals.end("load", &mut output);
///
/// let lines: Vec<&str> = output.lines().collect();
/// assert!(lines[0].starts_with("'load' log: "));
/// assert!(lines[1].starts_with("'load' end: "));
///
/// // The interval is gone, so this does nothing.
/// assert!(intervals.end("load", &mut output).is_zero());
/// assert_eq!(output.lines().count(), 2);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Intervals<'r, P: Precision = Microseconds> {
    registry: &'r Registry,

    _precision: PhantomData<fn() -> P>,
}

impl<'r, P: Precision> Intervals<'r, P> {
    pub(crate) fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            _precision: PhantomData,
        }
    }

    /// Starts the interval `key`, replacing any pending interval with the same key.
    ///
    /// Nothing is written to the sink; only its type is used to identify the interval.
    /// Returns the current timestamp, measured from the clock epoch of the registry.
    pub fn begin<K: Label, S: Sink + 'static>(&self, key: K, _sink: &S) -> Ticks<P> {
        let now = self.registry.now();
        self.registry.start_interval::<K, S>(key, now);
        Ticks::from_duration(now)
    }

    /// Reports `'<key>' log: <elapsed> [<unit>]` if the interval is pending.
    ///
    /// The interval stays pending, so every call measures from the same
    /// [`begin()`](Self::begin). Returns the elapsed time, or zero without writing anything
    /// if the interval is not pending.
    pub fn log<K: Label, S: Sink + 'static>(&self, key: K, sink: &mut S) -> Ticks<P> {
        let now = self.registry.now();

        let Some(start) = self.registry.interval_start::<K, S>(&key) else {
            return Ticks::ZERO;
        };

        let elapsed = Ticks::from_duration(now.saturating_sub(start));
        write_report(sink, format_args!("'{key}' log: {elapsed}"));
        elapsed
    }

    /// Reports `'<key>' end: <elapsed> [<unit>]` if the interval is pending, then stops it.
    ///
    /// Returns the elapsed time, or zero without writing anything if the interval is not
    /// pending.
    pub fn end<K: Label, S: Sink + 'static>(&self, key: K, sink: &mut S) -> Ticks<P> {
        let now = self.registry.now();

        let Some(start) = self.registry.finish_interval::<K, S>(&key) else {
            return Ticks::ZERO;
        };

        let elapsed = Ticks::from_duration(now.saturating_sub(start));
        write_report(sink, format_args!("'{key}' end: {elapsed}"));
        elapsed
    }
}
