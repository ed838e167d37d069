//! Top-level configuration and its layered loading.

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::settings::{AggregationSettings, CycleSettings, LoggingSettings};

/// File looked up by [`ModgraphConfig::load`] in the working directory.
pub const CONFIG_FILE_NAME: &str = "modgraph.toml";

/// Prefix of environment overrides; `__` separates nested keys,
/// e.g. `MODGRAPH_CYCLES__MAX_NUMBER_TO_DETECT=20`.
pub const ENV_PREFIX: &str = "MODGRAPH_";

const LOG_LEVELS: &[&str] = &["off", "silent", "error", "warn", "warning", "info", "debug"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModgraphConfig {
    pub cycles: CycleSettings,
    pub aggregation: AggregationSettings,
    pub logging: LoggingSettings,
}

impl ModgraphConfig {
    /// Figment seeded with the default values only.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
    }

    /// Load configuration from multiple sources.
    /// Priority: environment variables > `modgraph.toml` > defaults
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE_NAME)
    }

    /// Like [`load`](Self::load) but reads the TOML layer from `path`.
    /// A missing file contributes nothing.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading modgraph config from {}", path.display());

        let figment = Self::figment()
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));
        Self::from_figment(figment)
    }

    /// Defaults overlaid with the given TOML document.
    ///
    /// # Example
    ///
    /// ```
    /// use modgraph_config::ModgraphConfig;
    ///
    /// let config = ModgraphConfig::from_toml_str("[cycles]\nmax_number_to_detect = 5").unwrap();
    /// assert_eq!(config.cycles.max_number_to_detect, 5);
    /// assert!(config.aggregation.parallel);
    /// ```
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Self::from_figment(Self::figment().merge(Toml::string(toml)))
    }

    /// Extract and validate a configuration from an arbitrary figment.
    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cycles.max_number_to_detect == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cycles.max_number_to_detect".to_string(),
                hint: "must be at least 1".to_string(),
            });
        }

        if self.aggregation.parallel_threshold == 0 {
            return Err(ConfigError::InvalidValue {
                field: "aggregation.parallel_threshold".to_string(),
                hint: "must be at least 1; set aggregation.parallel = false to disable".to_string(),
            });
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                hint: format!(
                    "unknown level '{}', expected one of {}",
                    self.logging.level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }

        Ok(())
    }
}
