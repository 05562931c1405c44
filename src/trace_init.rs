//! Debug logging for `trace` builds.
//!
//! A conversion is a one-shot call, so spans go straight to stderr as
//! JSON; there is no long-lived process that would warrant a file
//! appender. Without the `trace` feature this compiles to nothing.

/// Install the stderr JSON subscriber. Safe to call repeatedly; only the
/// first call installs anything.
#[cfg(feature = "trace")]
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lacinka=debug"));

    tracing_subscriber::fmt()
        .json()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .with_env_filter(filter)
        .try_init()
        .ok();
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing() {}
