//! Tracing setup for the `sonar-runner` binary.
//!
//! Library code only emits events (the encoding decision is logged at INFO on
//! every run); installing a subscriber is left to the binary.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `debug` forces the `debug` level. Otherwise reads `RUST_LOG` and defaults
/// to `info` if unset. Output: stderr, compact format, so stdout stays
/// reserved for launcher output.
///
/// # Example
/// ```bash
/// RUST_LOG=sonar_runner=debug sonar-runner -Dsonar.projectKey=demo
/// ```
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
