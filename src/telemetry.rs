//! Process-wide `tracing` setup for the `greeting_api` binary, shared by
//! the `serve` and `fetch` commands.

use std::sync::Once;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static TELEMETRY_INIT: Once = Once::new();

/// Used when `RUST_LOG` is unset or unparsable. Rocket's own `log` output is
/// bridged in through `tracing-log` and kept to warnings.
const DEFAULT_FILTER: &str = "greeting_api=info,rocket=warn,warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// `LOG_FORMAT=json` (any case) selects JSON lines; anything else is text.
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(std::env::var("LOG_FORMAT").ok().as_deref())
    }
}

pub fn init() {
    TELEMETRY_INIT.call_once(|| {
        if let Err(err) = tracing_log::LogTracer::init() {
            eprintln!("failed to bridge log records into tracing: {err}");
        }

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let format = LogFormat::from_env();

        let registry = tracing_subscriber::registry().with(env_filter);
        let init_result = match format {
            LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
            LogFormat::Text => registry.with(fmt::layer()).try_init(),
        };

        match init_result {
            Ok(()) => tracing::debug!(?format, "telemetry initialized"),
            Err(err) => eprintln!("failed to initialize tracing subscriber: {err}"),
        }
    });
}
