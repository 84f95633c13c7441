use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the engine's tracing subscriber. Hosts embedding the engine call
/// this once at startup; tests use `test_bootstrap::logging` instead.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .json();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
