//! Tracing/logging initialization.
//!
//! Filtering follows `RUST_LOG` (default `info`). Output format follows
//! `PANTRY_LOG_FORMAT`: `json` (default), `pretty` or `compact`.

use core::str::FromStr;

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "PANTRY_LOG_FORMAT";

/// Log output format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

impl LogFormat {
    /// Resolve a raw setting: unset means JSON, anything unrecognised is an error.
    pub fn resolve(raw: Option<&str>) -> Result<Self, String> {
        raw.map_or(Ok(Self::default()), str::parse)
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops). An unrecognised
/// [`LOG_FORMAT_ENV`] falls back to JSON and is reported once logging is up.
pub fn init() {
    let raw = std::env::var(LOG_FORMAT_ENV).ok();
    match LogFormat::resolve(raw.as_deref()) {
        Ok(format) => init_with_format(format),
        Err(error) => {
            init_with_format(LogFormat::default());
            tracing::warn!(
                value = raw.as_deref().unwrap_or_default(),
                %error,
                "{LOG_FORMAT_ENV} is not a log format; using json"
            );
        }
    }
}

pub fn init_with_format(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so stdout stays clean for command output.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
}
