//! Logging initialization.
//!
//! `RUST_LOG` wins when set. Otherwise the level follows the verbosity
//! (`0` → warn, `1` → info, `2` → debug, `3+` → trace). Output goes to
//! stderr so stdout stays free for reports and NDJSON events.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a verbosity level
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `json` switches to one JSON object per
/// event. Calling it twice is harmless; the second call is ignored.
pub fn init(verbosity: u8, json: bool) {
    use tracing_subscriber::layer::SubscriberExt as _;
    use tracing_subscriber::util::SubscriberInitExt as _;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    let registry = tracing_subscriber::registry().with(filter);
    let result = if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .without_time(),
            )
            .try_init()
    };

    if let Err(e) = result {
        eprintln!("warning: logging already initialized: {e}");
    }
}
