//! Demonstrates scope timers and named intervals reporting to standard output.
//!
//! Run with: `cargo run --example measure_time_basic`.

use std::io;
use std::thread;
use std::time::Duration;

use measure_time::{Milliseconds, Registry, ScopeTime};

fn parse_chunk(chunk: u64) {
    measure_time::time_scope!("parse_chunk");
    thread::sleep(Duration::from_millis(chunk));
}

fn main() {
    println!("=== Scope timers (global registry) ===");

    measure_time::time_begin!("all_chunks");
    for chunk in 1..=3 {
        parse_chunk(chunk);
        measure_time::time_log!("all_chunks");
    }
    measure_time::time_end!("all_chunks");

    println!();
    println!("=== Dedicated registry, millisecond precision ===");

    let registry = Registry::new();
    for _ in 0..2 {
        let _scope = ScopeTime::<_, _, Milliseconds>::new(&registry, "nap", io::stdout());
        thread::sleep(Duration::from_millis(15));
    }

    let stats = registry
        .scope_stats::<Milliseconds, _>(&"nap")
        .expect("two naps finished above");
    println!(
        "nap finished {} times, {} ms in total",
        stats.count(),
        stats.total()
    );
}
