use contextutil_core::{Error, Result, CONTEXTUTIL_LOG_VAR, DEFAULT_LOG_FILTER};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing system
///
/// Reads the filter from `CONTEXTUTIL_LOG`, falling back to `info`, and
/// writes compact records to stderr. Fails if a global subscriber is
/// already installed.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_env(CONTEXTUTIL_LOG_VAR)
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .map_err(|e| Error::configuration(format!("invalid log filter: {e}")))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| Error::configuration(format!("failed to install tracing subscriber: {e}")))
}
