//! Call-site shorthands that report to standard output through the global registry.

/// Times the rest of the enclosing scope and reports it to standard output.
///
/// The report is written when the enclosing block ends. Several invocations in the same
/// block are all kept alive until the end of the block.
///
/// # Examples
///
/// ```
/// fn rebuild_index() {
///     measure_time::time_scope!("rebuild_index");
///     // Work to measure.
/// }
///
/// rebuild_index();
/// ```
#[macro_export]
macro_rules! time_scope {
    ($label:expr) => {
        let _measure_time_scope = $crate::scope_time($label, ::std::io::stdout());
    };
}

/// Starts a named interval reported to standard output. Evaluates to the current timestamp.
///
/// # Examples
///
/// ```
/// measure_time::time_begin!("startup");
/// // Work to measure.
/// measure_time::time_log!("startup");
/// // More work to measure.
/// measure_time::time_end!("startup");
/// ```
#[macro_export]
macro_rules! time_begin {
    ($key:expr) => {
        $crate::time_begin($key, &::std::io::stdout())
    };
}

/// Reports a checkpoint of a named interval to standard output. Evaluates to the elapsed time.
#[macro_export]
macro_rules! time_log {
    ($key:expr) => {
        $crate::time_log($key, &mut ::std::io::stdout())
    };
}

/// Reports and stops a named interval on standard output. Evaluates to the elapsed time.
#[macro_export]
macro_rules! time_end {
    ($key:expr) => {
        $crate::time_end($key, &mut ::std::io::stdout())
    };
}

/// Times the rest of the enclosing scope and reports it as one `log` record.
///
/// Requires the `log` feature.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "log")]
/// fn rebuild_index() {
///     measure_time::log_time_scope!(log::Level::Debug, "rebuild_index");
///     // Work to measure.
/// }
/// ```
#[cfg(feature = "log")]
#[macro_export]
macro_rules! log_time_scope {
    (target: $target:expr, $level:expr, $label:expr) => {
        let _measure_time_scope = $crate::scope_time(
            $label,
            $crate::LogLine::new($level).with_target($target),
        );
    };
    ($level:expr, $label:expr) => {
        let _measure_time_scope = $crate::scope_time($label, $crate::LogLine::new($level));
    };
}

/// Starts a named interval whose reports go to `log` records. Evaluates to the current
/// timestamp.
///
/// Requires the `log` feature.
#[cfg(feature = "log")]
#[macro_export]
macro_rules! log_time_begin {
    (target: $target:expr, $level:expr, $key:expr) => {
        $crate::time_begin($key, &$crate::LogLine::new($level).with_target($target))
    };
    ($level:expr, $key:expr) => {
        $crate::time_begin($key, &$crate::LogLine::new($level))
    };
}

/// Reports a checkpoint of a named interval as one `log` record. Evaluates to the elapsed
/// time.
///
/// Requires the `log` feature.
#[cfg(feature = "log")]
#[macro_export]
macro_rules! log_time_log {
    (target: $target:expr, $level:expr, $key:expr) => {
        $crate::time_log($key, &mut $crate::LogLine::new($level).with_target($target))
    };
    ($level:expr, $key:expr) => {
        $crate::time_log($key, &mut $crate::LogLine::new($level))
    };
}

/// Reports and stops a named interval as one `log` record. Evaluates to the elapsed time.
///
/// Requires the `log` feature.
#[cfg(feature = "log")]
#[macro_export]
macro_rules! log_time_end {
    (target: $target:expr, $level:expr, $key:expr) => {
        $crate::time_end($key, &mut $crate::LogLine::new($level).with_target($target))
    };
    ($level:expr, $key:expr) => {
        $crate::time_end($key, &mut $crate::LogLine::new($level))
    };
}
