//! Scope timing guards.

use std::fmt;
use std::marker::PhantomData;
use std::time::Duration;

use crate::scope_stats::Average;
use crate::sink::write_report;
use crate::{Label, Microseconds, Precision, Registry, Sink, Ticks};

/// Times a scope from creation until drop and reports the result to a sink.
///
/// When dropped, whether at the normal end of the scope or while unwinding from a panic,
/// the guard measures the elapsed time in precision `P`, folds it into the running statistics
/// of its label and writes a report:
///
/// ```text
/// '<label>' <elapsed> [<unit>] avg. <average> [<unit>] cnt. <count> ttl. <total> [<unit>]
/// ```
///
/// The report is followed by a newline if the sink is [line-oriented](Sink::LINE_ORIENTED).
///
/// # Examples
///
/// ```
/// use measure_time::{Milliseconds, Registry, ScopeTime};
///
/// let registry = Registry::new();
/// let mut output = String::new();
/// {
///     let _scope = ScopeTime::<_, _, Milliseconds>::new(&registry, "load_config", &mut output);
///     // Work to measure.
/// }
///
/// assert!(output.starts_with("'load_config' "));
/// assert!(output.contains(" cnt. 1 ttl. "));
/// assert!(output.ends_with(" [ms]\n"));
/// ```
#[must_use = "the scope is measured until the guard is dropped"]
pub struct ScopeTime<'r, L: Label, S: Sink, P: Precision = Microseconds> {
    registry: &'r Registry,
    label: L,
    sink: S,
    start: Duration,

    _precision: PhantomData<fn() -> P>,
}

impl<'r, L: Label, S: Sink, P: Precision> ScopeTime<'r, L, S, P> {
    /// Starts timing a scope.
    pub fn new(registry: &'r Registry, label: L, sink: S) -> Self {
        Self {
            registry,
            label,
            sink,
            start: registry.now(),
            _precision: PhantomData,
        }
    }

    /// The label that this scope reports under.
    #[must_use]
    pub fn label(&self) -> &L {
        &self.label
    }

    /// Time elapsed so far, without ending the measurement.
    #[must_use]
    pub fn elapsed(&self) -> Ticks<P> {
        Ticks::from_duration(self.registry.now().saturating_sub(self.start))
    }
}

impl<L: Label, S: Sink, P: Precision> Drop for ScopeTime<'_, L, S, P> {
    fn drop(&mut self) {
        let elapsed = self.elapsed();
        let stats = self
            .registry
            .record_scope::<P, L>(&self.label, elapsed.count());

        write_report(
            &mut self.sink,
            format_args!(
                "'{label}' {elapsed} avg. {average} [{unit}] cnt. {count} ttl. {total} [{unit}]",
                label = self.label,
                average = Average(stats.average()),
                count = stats.count(),
                total = stats.total(),
                unit = P::UNIT,
            ),
        );
    }
}

impl<L: Label, S: Sink, P: Precision> fmt::Debug for ScopeTime<'_, L, S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeTime")
            .field("label", &format_args!("{}", self.label))
            .field("start", &self.start)
            .field("unit", &P::UNIT)
            .finish_non_exhaustive()
    }
}
