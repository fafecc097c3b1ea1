use msgbridge_core::{Error, Result, DEFAULT_LOG_FILTER, MSGBRIDGE_LOG_VAR};
use std::env;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing system
///
/// Reads filter directives from `MSGBRIDGE_LOG`, then `RUST_LOG`, and falls
/// back to `info`. Output goes to stderr so it never interleaves with what the
/// native library writes to stdout. ANSI colors are used only on a TTY.
///
/// Fails with [`Error::Configuration`] if the directives do not parse or a
/// global subscriber is already installed.
pub fn init() -> Result<()> {
    let directives = filter_directives();
    let filter = build_filter(directives.as_deref())?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(is_tty())
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| Error::configuration(format!("failed to install tracing subscriber: {e}")))?;

    ::tracing::debug!(
        filter = directives.as_deref().unwrap_or(DEFAULT_LOG_FILTER),
        "tracing initialized"
    );
    Ok(())
}

/// Returns the first non-empty filter from `MSGBRIDGE_LOG` or `RUST_LOG`
pub fn filter_directives() -> Option<String> {
    [MSGBRIDGE_LOG_VAR, EnvFilter::DEFAULT_ENV]
        .iter()
        .find_map(|var| env::var(var).ok().filter(|value| !value.trim().is_empty()))
}

/// Parses filter directives, defaulting to `info` when none are given
pub fn build_filter(directives: Option<&str>) -> Result<EnvFilter> {
    let directives = directives.unwrap_or(DEFAULT_LOG_FILTER);
    EnvFilter::try_new(directives)
        .map_err(|e| Error::configuration(format!("invalid log filter '{directives}': {e}")))
}

/// Check if we're running in a TTY environment
fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}
