//! Output sinks that receive timing reports.

use std::fmt::{self, Write as _};
use std::io::{self, Write as _};

/// A destination for formatted timing reports.
///
/// Each report is handed to the sink in a single [`append()`](Self::append) call. Whether a
/// newline is added after the report is a static property of the sink type: plain text
/// streams want one, while sinks that manage their own line termination (e.g. a per-call
/// log record) do not.
///
/// # Examples
///
/// ```
/// use std::fmt;
///
/// use measure_time::{Registry, Sink};
///
/// #[derive(Debug, Default)]
/// struct Lines(Vec<String>);
///
/// impl Sink for Lines {
///     const LINE_ORIENTED: bool = false;
///
///     fn append(&mut self, text: fmt::Arguments<'_>) {
///         self.0.push(text.to_string());
///     }
/// }
///
/// let registry = Registry::new();
/// let mut lines = Lines::default();
///
/// registry.begin("load", &lines);
/// registry.end("load", &mut lines);
///
/// assert_eq!(lines.0.len(), 1);
/// assert!(lines.0[0].starts_with("'load' end: "));
/// ```
pub trait Sink {
    /// Whether each report must be followed by a newline.
    const LINE_ORIENTED: bool;

    /// Appends formatted text to the sink.
    ///
    /// Timing code never fails because of a sink, so this has no error channel. Sinks that
    /// can fail are expected to keep track of that themselves (see [`IoSink`]).
    fn append(&mut self, text: fmt::Arguments<'_>);
}

/// Writes one report to a sink, terminating the line if the sink type asks for it.
pub(crate) fn write_report<S: Sink + ?Sized>(sink: &mut S, report: fmt::Arguments<'_>) {
    if S::LINE_ORIENTED {
        sink.append(format_args!("{report}\n"));
    } else {
        sink.append(report);
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    const LINE_ORIENTED: bool = S::LINE_ORIENTED;

    fn append(&mut self, text: fmt::Arguments<'_>) {
        (**self).append(text);
    }
}

impl Sink for String {
    const LINE_ORIENTED: bool = true;

    fn append(&mut self, text: fmt::Arguments<'_>) {
        // Formatting into a String only fails if a Display impl reports an error.
        _ = self.write_fmt(text);
    }
}

impl Sink for Vec<u8> {
    const LINE_ORIENTED: bool = true;

    fn append(&mut self, text: fmt::Arguments<'_>) {
        _ = self.write_fmt(text);
    }
}

/// Standard output. Write failures are discarded; wrap the stream in [`IoSink`] to see them.
impl Sink for io::Stdout {
    const LINE_ORIENTED: bool = true;

    #[cfg_attr(test, mutants::skip)] // Too difficult to test standard stream output reliably - manually tested.
    fn append(&mut self, text: fmt::Arguments<'_>) {
        _ = self.write_fmt(text);
    }
}

/// Standard error. Write failures are discarded; wrap the stream in [`IoSink`] to see them.
impl Sink for io::Stderr {
    const LINE_ORIENTED: bool = true;

    #[cfg_attr(test, mutants::skip)] // Too difficult to test standard stream output reliably - manually tested.
    fn append(&mut self, text: fmt::Arguments<'_>) {
        _ = self.write_fmt(text);
    }
}

/// Adapts any [`io::Write`] as a line-oriented sink.
///
/// The first write error is kept so the owner can inspect it with
/// [`take_error()`](Self::take_error). Further reports are still attempted after an error.
///
/// # Examples
///
/// ```
/// use measure_time::{IoSink, Registry};
///
/// let registry = Registry::new();
/// let mut sink = IoSink::new(Vec::new());
///
/// drop(registry.scope("startup", &mut sink));
///
/// assert!(sink.take_error().is_none());
/// let text = String::from_utf8(sink.into_inner()).unwrap();
/// assert!(text.starts_with("'startup' "));
/// assert!(text.ends_with('\n'));
/// ```
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: io::Write> IoSink<W> {
    /// Wraps a writer.
    #[must_use]
    pub fn new(inner: W) -> Self {
        Self { inner, error: None }
    }

    /// Returns the first write error seen since the last call, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// A reference to the wrapped writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Unwraps the writer, discarding any recorded error.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    const LINE_ORIENTED: bool = true;

    fn append(&mut self, text: fmt::Arguments<'_>) {
        if let Err(e) = self.inner.write_fmt(text) {
            self.error.get_or_insert(e);
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Record(String);

    impl Sink for Record {
        const LINE_ORIENTED: bool = false;

        fn append(&mut self, text: fmt::Arguments<'_>) {
            _ = self.0.write_fmt(text);
        }
    }

    #[derive(Debug)]
    struct BrokenPipe;

    impl io::Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn line_oriented_sink_gets_newline() {
        let mut text = String::new();
        write_report(&mut text, format_args!("'a' end: {} [us]", 5));

        assert_eq!(text, "'a' end: 5 [us]\n");
    }

    #[test]
    fn self_terminating_sink_gets_no_newline() {
        let mut record = Record::default();
        write_report(&mut record, format_args!("'a' end: {} [us]", 5));

        assert_eq!(record.0, "'a' end: 5 [us]");
    }

    #[test]
    fn reference_forwards_line_orientation() {
        let mut record = Record::default();
        let mut reference = &mut record;
        write_report(&mut reference, format_args!("x"));

        assert_eq!(record.0, "x");
        const { assert!(!<&mut Record as Sink>::LINE_ORIENTED) };
        const { assert!(<&mut String as Sink>::LINE_ORIENTED) };
    }

    #[test]
    fn bytes_sink_collects_utf8() {
        let mut bytes = Vec::new();
        write_report(&mut bytes, format_args!("'k' log: {} [ms]", 12));

        assert_eq!(bytes, b"'k' log: 12 [ms]\n");
    }

    #[test]
    fn io_sink_keeps_first_error() {
        let mut sink = IoSink::new(BrokenPipe);
        write_report(&mut sink, format_args!("one"));
        write_report(&mut sink, format_args!("two"));

        let error = sink.take_error().expect("write to a broken pipe must fail");
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
        assert!(sink.take_error().is_none());
    }

    #[test]
    fn io_sink_passes_text_through() {
        let mut sink = IoSink::new(Vec::new());
        write_report(&mut sink, format_args!("hello"));

        assert!(sink.take_error().is_none());
        assert_eq!(sink.get_ref().as_slice(), b"hello\n");
    }
}
