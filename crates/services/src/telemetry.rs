//! Tracing subscriber setup.
//!
//! `LOG_LEVEL` holds the filter directives (e.g. "debug" or
//! "info,services=debug,sqlx=warn"); when unset the caller's default is used.
//! `LOG_FORMAT=json` switches to structured JSON lines.

use tracing_subscriber::EnvFilter;

pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true);

    // A subscriber may already be installed, e.g. by a test harness.
    let _ = match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().try_init(),
        _ => builder.try_init(),
    };
}
