//! Entry points bound to the process-wide registry.

use crate::{Label, Microseconds, Registry, ScopeTime, Sink, Ticks};

/// Starts timing a scope in the [global registry](Registry::global), at microsecond precision.
///
/// The returned guard is owned by the caller; dropping it writes the report to `sink`.
///
/// # Examples
///
/// ```
/// use measure_time::scope_time;
///
/// fn handle_request(output: &mut String) {
///     let _scope = scope_time("handle_request", output);
///     // Work to measure.
/// }
///
/// let mut output = String::new();
/// handle_request(&mut output);
/// assert!(output.starts_with("'handle_request' "));
/// ```
pub fn scope_time<L: Label, S: Sink>(label: L, sink: S) -> ScopeTime<'static, L, S> {
    Registry::global().scope(label, sink)
}

/// Starts the interval `key` in the [global registry](Registry::global).
///
/// See [`Intervals::begin()`](crate::Intervals::begin).
pub fn time_begin<K: Label, S: Sink + 'static>(key: K, sink: &S) -> Ticks<Microseconds> {
    Registry::global().begin(key, sink)
}

/// Reports a checkpoint of the interval `key` in the [global registry](Registry::global).
///
/// See [`Intervals::log()`](crate::Intervals::log).
pub fn time_log<K: Label, S: Sink + 'static>(key: K, sink: &mut S) -> Ticks<Microseconds> {
    Registry::global().log(key, sink)
}

/// Reports and stops the interval `key` in the [global registry](Registry::global).
///
/// See [`Intervals::end()`](crate::Intervals::end).
pub fn time_end<K: Label, S: Sink + 'static>(key: K, sink: &mut S) -> Ticks<Microseconds> {
    Registry::global().end(key, sink)
}
