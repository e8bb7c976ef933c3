//! Tests for the call-site macros.
//!
//! The macros always use the global registry, so every test uses its own label or key.

use std::io::{Stderr, Stdout};

use measure_time::{Microseconds, Registry};

#[test]
fn time_scope_reports_when_block_ends() {
    const LABEL: &str = "macros::time_scope_reports_when_block_ends";

    for _ in 0..3 {
        measure_time::time_scope!(LABEL);
        assert!(
            Registry::global()
                .scope_stats::<Microseconds, _>(&LABEL)
                .is_none_or(|stats| stats.count() < 3)
        );
    }

    let stats = Registry::global()
        .scope_stats::<Microseconds, _>(&LABEL)
        .expect("three scopes finished above");
    assert_eq!(stats.count(), 3);
}

#[test]
fn time_scope_twice_in_one_block() {
    const FIRST: &str = "macros::time_scope_twice_in_one_block::first";
    const SECOND: &str = "macros::time_scope_twice_in_one_block::second";

    {
        measure_time::time_scope!(FIRST);
        measure_time::time_scope!(SECOND);
    }

    for label in [FIRST, SECOND] {
        let stats = Registry::global()
            .scope_stats::<Microseconds, _>(&label)
            .expect("both scopes finished above");
        assert_eq!(stats.count(), 1);
    }
}

#[test]
fn interval_macros_track_stdout_intervals() {
    const KEY: &str = "macros::interval_macros_track_stdout_intervals";

    measure_time::time_begin!(KEY);
    assert!(Registry::global().is_pending::<_, Stdout>(&KEY));
    assert!(!Registry::global().is_pending::<_, Stderr>(&KEY));
    assert!(!Registry::global().is_pending::<_, String>(&KEY));

    let checkpoint = measure_time::time_log!(KEY);
    assert!(Registry::global().is_pending::<_, Stdout>(&KEY));

    let total = measure_time::time_end!(KEY);
    assert!(checkpoint <= total);
    assert!(!Registry::global().is_pending::<_, Stdout>(&KEY));

    assert!(measure_time::time_end!(KEY).is_zero());
    assert!(measure_time::time_log!(KEY).is_zero());
}

#[test]
fn interval_macros_accept_owned_keys() {
    let key = format!("macros::owned_key::{}", 7);

    measure_time::time_begin!(key.clone());
    assert!(Registry::global().is_pending::<String, Stdout>(&key));

    measure_time::time_end!(key.clone());
    assert!(!Registry::global().is_pending::<String, Stdout>(&key));
}

#[cfg(feature = "log")]
mod log_macros {
    use std::sync::{Mutex, Once, PoisonError};

    use log::{Level, LevelFilter, Log, Metadata, Record};
    use measure_time::{LogLine, Microseconds, Registry};

    #[derive(Debug)]
    struct CapturingLogger {
        records: Mutex<Vec<(Level, String, String)>>,
    }

    impl Log for CapturingLogger {
        fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &Record<'_>) {
            self.records
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push((
                    record.level(),
                    record.target().to_owned(),
                    record.args().to_string(),
                ));
        }

        fn flush(&self) {}
    }

    static LOGGER: CapturingLogger = CapturingLogger {
        records: Mutex::new(Vec::new()),
    };

    static INSTALL: Once = Once::new();

    fn install_logger() {
        INSTALL.call_once(|| {
            log::set_logger(&LOGGER).expect("no other logger is installed in this test binary");
            log::set_max_level(LevelFilter::Trace);
        });
    }

    fn captured(target: &str) -> Vec<(Level, String)> {
        LOGGER
            .records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(_, record_target, _)| record_target == target)
            .map(|(level, _, message)| (*level, message.clone()))
            .collect()
    }

    #[test]
    fn log_time_scope_emits_one_record() {
        const TARGET: &str = "macros::log_time_scope_emits_one_record";
        const LABEL: &str = "macros::log_scope";
        install_logger();

        {
            measure_time::log_time_scope!(target: TARGET, Level::Debug, LABEL);
        }

        let records = captured(TARGET);
        assert_eq!(records.len(), 1);
        let (level, message) = &records[0];
        assert_eq!(*level, Level::Debug);
        assert!(message.starts_with(&format!("'{LABEL}' ")));
        assert!(message.contains(" cnt. 1 ttl. "));
        assert!(!message.ends_with('\n'));

        assert_eq!(
            Registry::global()
                .scope_stats::<Microseconds, _>(&LABEL)
                .map(|stats| stats.count()),
            Some(1)
        );
    }

    #[test]
    fn log_interval_macros_emit_checkpoint_and_end() {
        const TARGET: &str = "macros::log_interval_macros_emit_checkpoint_and_end";
        const KEY: &str = "macros::log_interval";
        install_logger();

        measure_time::log_time_begin!(target: TARGET, Level::Info, KEY);
        assert!(Registry::global().is_pending::<_, LogLine>(&KEY));

        measure_time::log_time_log!(target: TARGET, Level::Info, KEY);
        measure_time::log_time_end!(target: TARGET, Level::Info, KEY);
        assert!(measure_time::log_time_end!(target: TARGET, Level::Info, KEY).is_zero());

        let records = captured(TARGET);
        assert_eq!(records.len(), 2);
        assert!(records[0].1.starts_with(&format!("'{KEY}' log: ")));
        assert!(records[1].1.starts_with(&format!("'{KEY}' end: ")));
        assert!(records.iter().all(|(level, _)| *level == Level::Info));
    }

    #[test]
    fn log_macros_default_target() {
        const KEY: &str = "macros::log_macros_default_target";
        install_logger();

        measure_time::log_time_begin!(Level::Trace, KEY);
        measure_time::log_time_end!(Level::Trace, KEY);

        assert!(
            captured("measure_time")
                .iter()
                .any(|(level, message)| *level == Level::Trace
                    && message.starts_with(&format!("'{KEY}' end: ")))
        );
    }
}
