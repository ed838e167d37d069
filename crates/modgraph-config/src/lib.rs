//! Configuration for modgraph.
//!
//! Settings are plain `serde` values with defaults, so library users can build
//! them in code. [`ModgraphConfig::load`] layers defaults, a `modgraph.toml`
//! file and `MODGRAPH_` environment variables through `figment`.

pub mod config;
pub mod error;
pub mod settings;

pub use config::{CONFIG_FILE_NAME, ENV_PREFIX, ModgraphConfig};
pub use error::{ConfigError, Result};
pub use settings::{AggregationSettings, CycleSettings, LoggingSettings};
