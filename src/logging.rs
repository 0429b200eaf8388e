//! Logging setup for the `hhc` binary using `tracing_subscriber`.
//!
//! The library itself only emits `tracing` events (at `debug` level, on
//! rejected input); installing a subscriber is left to the application.

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable, multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Install a global subscriber writing to stderr.
///
/// `RUST_LOG` overrides `directives` when set.
///
/// # Arguments
///
/// - `directives` - `EnvFilter` directives used when `RUST_LOG` is unset
/// - `format` - pretty or JSON output
pub fn setup_logging(directives: &str, format: LogFormat) {
    match format {
        LogFormat::Pretty => setup_logging_pretty(directives),
        LogFormat::Json => setup_logging_json(directives),
    }
}

fn env_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

fn setup_logging_json(directives: &str) {
    let main_layer = tracing_subscriber::fmt::layer()
        .json()
        .flatten_event(true)
        .with_target(false)
        .with_current_span(true)
        .with_span_list(true)
        .with_line_number(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .with_timer(UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(env_filter(directives))
        .with(main_layer)
        .init()
}

fn setup_logging_pretty(directives: &str) {
    let main_layer = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr)
        .with_timer(UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(env_filter(directives))
        .with(main_layer)
        .init()
}
