#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Scope timers and named interval timers for development diagnostics.
//!
//! This package measures how long code takes and prints the result, with running statistics,
//! to an output sink of your choice:
//!
//! - [`ScopeTime`] - times a scope from creation until drop and reports the elapsed time
//!   together with the running average, call count and total of its label.
//! - [`Intervals`] - times named intervals that begin and end at arbitrary points, with
//!   optional checkpoints in between.
//! - [`Registry`] - holds the statistics and pending intervals. A process-wide instance is
//!   used by the free functions and macros.
//! - [`Sink`] - where reports go: strings, byte buffers, standard streams, any
//!   [`std::io::Write`] via [`IoSink`] and, with the `log` feature, `log` records via `LogLine`.
//!
//! This package is not meant for production metrics, serving only as a development tool.
//!
//! # Timing a scope
//!
//! ```
//! use measure_time::Registry;
//!
//! let registry = Registry::new();
//! let mut output = String::new();
//!
//! for _ in 0..2 {
//!     let _scope = registry.scope("compress", &mut output);
//!     // Work to measure.
//! }
//!
//! // 'compress' 12 [us] avg. 12 [us] cnt. 1 ttl. 12 [us]
//! // 'compress' 8 [us] avg. 10 [us] cnt. 2 ttl. 20 [us]
//! assert_eq!(output.lines().count(), 2);
//! assert!(output.lines().all(|line| line.starts_with("'compress' ")));
//! ```
//!
//! With the global registry and standard output as the sink, the same is a one-liner:
//!
//! ```
//! fn compress() {
//!     measure_time::time_scope!("compress");
//!     // Work to measure.
//! }
//! # compress();
//! ```
//!
//! # Timing an interval
//!
//! ```
//! use measure_time::Registry;
//!
//! let registry = Registry::new();
//! let mut output = String::new();
//!
//! registry.begin("load", &output);
//! // Read the file.
//! registry.log("load", &mut output); // 'load' log: 3000 [us]
//! // Parse the file.
//! registry.end("load", &mut output); // 'load' end: 5000 [us]
//!
//! // Ending an interval that is not pending writes nothing and returns zero.
//! assert!(registry.end("load", &mut output).is_zero());
//! ```
//!
//! # Precision
//!
//! Durations are truncated to microseconds unless another [`Precision`] is chosen, from
//! [`Nanoseconds`] to [`Hours`]:
//!
//! ```
//! use measure_time::{Milliseconds, Registry, ScopeTime};
//!
//! let registry = Registry::new();
//! let mut output = String::new();
//!
//! drop(ScopeTime::<_, _, Milliseconds>::new(&registry, "slow", &mut output));
//! registry.intervals::<Milliseconds>().begin("slower", &output);
//!
//! assert!(output.ends_with(" [ms]\n"));
//! ```
//!
//! # Threading
//!
//! A [`Registry`] guards its state with locks, so timers may be used from any thread. Reports
//! from different threads for the same label or key interleave in an unspecified order, so
//! single-threaded use gives the most readable output.
//!
//! # Features
//!
//! - `log` - adds the `LogLine` sink, which turns each report into one record of the
//!   [`log`](https://docs.rs/log) facade, and the `log_time_scope!`, `log_time_begin!`,
//!   `log_time_log!` and `log_time_end!` macros.

mod global;
mod intervals;
#[cfg(feature = "log")]
mod log_line;
mod macros;
mod pal;
mod precision;
mod registry;
mod scope_stats;
mod scope_time;
mod sink;
mod typed_maps;

pub use global::*;
pub use intervals::Intervals;
#[cfg(feature = "log")]
pub use log_line::LogLine;
pub use precision::*;
pub use registry::{Label, Registry};
pub use scope_stats::ScopeStats;
pub use scope_time::ScopeTime;
pub use sink::{IoSink, Sink};
