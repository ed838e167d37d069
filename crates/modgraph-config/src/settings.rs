//! Individual settings sections.

use serde::{Deserialize, Serialize};

/// Limits for cycle enumeration over module dependency graphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleSettings {
    /// Enumeration stops after this many cycles have been found.
    pub max_number_to_detect: usize,
}

impl Default for CycleSettings {
    fn default() -> Self {
        Self {
            max_number_to_detect: 100,
        }
    }
}

/// Controls how module dependencies are aggregated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationSettings {
    /// Bucket class dependencies on the rayon pool.
    pub parallel: bool,

    /// Minimum number of modules before the parallel path is taken.
    pub parallel_threshold: usize,
}

impl Default for AggregationSettings {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 64,
        }
    }
}

impl AggregationSettings {
    /// Settings that always aggregate on the calling thread.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Returns true if `module_count` modules should be aggregated in parallel.
    pub fn runs_parallel(&self, module_count: usize) -> bool {
        self.parallel && module_count >= self.parallel_threshold
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// One of `off`, `error`, `warn`, `info`, `debug`.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
