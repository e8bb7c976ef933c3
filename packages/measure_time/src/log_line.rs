//! Sink that turns each report into one record of the `log` facade.

use std::fmt::{self, Write as _};

use log::Level;

use crate::Sink;

const DEFAULT_TARGET: &str = "measure_time";

/// A per-call sink that emits everything appended to it as a single `log` record.
///
/// Create a new `LogLine` for every report. The record is emitted when the `LogLine` is
/// dropped, at the level given on creation. A `LogLine` that received no text emits
/// nothing, so an interval miss produces no record. The logger decides on line
/// termination, so no newline is appended to reports.
///
/// # Examples
///
/// ```
/// use log::Level;
/// use measure_time::{LogLine, Registry};
///
/// let registry = Registry::new();
///
/// registry.begin("sync", &LogLine::new(Level::Info));
/// // Work to measure.
/// registry.end("sync", &mut LogLine::new(Level::Info).with_target("my_app::timing"));
///
/// {
///     let _scope = registry.scope("flush", LogLine::new(Level::Debug));
///     // Work to measure.
/// }
/// ```
#[derive(Debug)]
pub struct LogLine {
    level: Level,
    target: &'static str,
    text: String,
}

impl LogLine {
    /// Creates an empty line that will be logged at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self {
            level,
            target: DEFAULT_TARGET,
            text: String::new(),
        }
    }

    /// Sets the target of the record. Defaults to `measure_time`.
    #[must_use]
    pub fn with_target(mut self, target: &'static str) -> Self {
        self.target = target;
        self
    }

    /// The text collected so far.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Sink for LogLine {
    const LINE_ORIENTED: bool = false;

    fn append(&mut self, text: fmt::Arguments<'_>) {
        _ = self.text.write_fmt(text);
    }
}

impl Drop for LogLine {
    fn drop(&mut self) {
        if self.text.is_empty() {
            return;
        }

        log::log!(target: self.target, self.level, "{}", self.text);
    }
}
