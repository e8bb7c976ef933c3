//! Demonstrates routing timing reports through the `log` facade.
//!
//! Run with: `RUST_LOG=debug cargo run --example measure_time_log --features log`.

use std::thread;
use std::time::Duration;

use log::Level;

fn load_assets() {
    measure_time::log_time_scope!(Level::Debug, "load_assets");
    thread::sleep(Duration::from_millis(5));
}

fn main() {
    env_logger::init();

    measure_time::log_time_begin!(target: "startup", Level::Info, "startup");

    for _ in 0..3 {
        load_assets();
    }
    measure_time::log_time_log!(target: "startup", Level::Info, "startup");

    thread::sleep(Duration::from_millis(10));
    measure_time::log_time_end!(target: "startup", Level::Info, "startup");

    // Nothing is pending any more, so this emits no record.
    measure_time::log_time_end!(Level::Warn, "startup");
}
