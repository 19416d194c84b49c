use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable selecting the log line format (`text` or `json`).
pub const LOG_FORMAT_ENV: &str = "DOCVIEW_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match std::env::var(LOG_FORMAT_ENV) {
            Ok(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// Filter used while the terminal UI owns the screen: errors only.
pub const INTERACTIVE_DIRECTIVE: &str = "docview=error";

/// Filter used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "docview=debug" } else { "docview=info" }
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for results.
///
/// With `interactive` set only errors are kept, since anything written to
/// stderr would tear through the alternate screen.
pub fn init_tracing(verbose: bool, interactive: bool) {
    let filter = if interactive {
        EnvFilter::new(INTERACTIVE_DIRECTIVE)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive(verbose).into())
    };

    let registry = tracing_subscriber::registry().with(filter);
    let result = match LogFormat::from_env() {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init(),
    };
    // a subscriber installed earlier (tests, embedding) wins
    let _ = result;
}
