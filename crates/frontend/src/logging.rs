//! Browser console logging

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Pretty;
use tracing_subscriber::prelude::*;
use tracing_web::{MakeWebConsoleWriter, performance_layer};

/// Route `tracing` output to the browser console and performance timeline.
///
/// A subscriber installed earlier by the host page is kept.
pub fn init_logging() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false) // Browser consoles do not render ANSI colors
        .without_time() // std::time is unavailable on wasm32
        .with_writer(MakeWebConsoleWriter::new());
    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());

    let _ = tracing_subscriber::registry()
        .with(level)
        .with(fmt_layer)
        .with(perf_layer)
        .try_init();
}
