//! Subscriber setup for applications embedding modgraph.
//!
//! Only built with the `logging` feature. Libraries should install their own
//! subscriber and just consume modgraph's `tracing` events: grouping and
//! aggregation statistics at debug, the finished graph at info, and a warning
//! when cycle detection hits its limit.

use std::fmt;
use std::str::FromStr;
use std::sync::Once;

use modgraph_config::LoggingSettings;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt as layer_fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{Error, Result};

static INIT: Once = Once::new();

/// Verbosity of modgraph's own events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Silent,
    Error,
    Warn,
    /// Finished graph summaries (default)
    #[default]
    Info,
    /// Grouping and aggregation statistics
    Debug,
}

impl LogLevel {
    fn level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Silent => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
        }
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "silent" | "off" => Ok(LogLevel::Silent),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            _ => Err(Error::InvalidLogLevel {
                level: s.to_string(),
            }),
        }
    }
}

impl TryFrom<&LoggingSettings> for LogLevel {
    type Error = Error;

    fn try_from(settings: &LoggingSettings) -> Result<Self> {
        settings.level.parse()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::Silent => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        })
    }
}

/// Install a global subscriber at `level`; `RUST_LOG` directives refine it.
///
/// Only the first initialization in a process takes effect.
///
/// ```rust,no_run
/// use modgraph::logging::{init_logging, LogLevel};
///
/// init_logging(LogLevel::Debug);
/// ```
pub fn init_logging(level: LogLevel) {
    install(|| {
        EnvFilter::builder()
            .with_default_directive(level.level_filter().into())
            .from_env_lossy()
    });
}

/// Install a global subscriber at the level of the `[logging]` section.
pub fn init_logging_from_settings(settings: &LoggingSettings) -> Result<()> {
    init_logging(LogLevel::try_from(settings)?);
    Ok(())
}

/// Install a global subscriber driven by `RUST_LOG` alone, defaulting to info.
pub fn init_logging_from_env() {
    install(|| {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .parse_lossy("")
        })
    });
}

fn install(filter: impl FnOnce() -> EnvFilter) {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(filter())
            .with(layer_fmt::layer().compact().with_target(false).without_time())
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_level_names() {
        assert_eq!("info".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("off".parse::<LogLevel>().unwrap(), LogLevel::Silent);
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
    }

    #[test]
    fn unknown_level_is_a_crate_error() {
        let err = "verbose".parse::<LogLevel>().unwrap_err();
        assert!(matches!(err, Error::InvalidLogLevel { ref level } if level == "verbose"));
    }

    #[test]
    fn settings_convert_to_levels() {
        assert_eq!(
            LogLevel::try_from(&LoggingSettings::default()).unwrap(),
            LogLevel::Info
        );
        let invalid = LoggingSettings {
            level: "loud".to_string(),
        };
        assert!(init_logging_from_settings(&invalid).is_err());
    }

    #[test]
    fn displays_filter_names() {
        assert_eq!(LogLevel::Info.to_string(), "info");
        assert_eq!(LogLevel::Silent.to_string(), "off");
    }
}
