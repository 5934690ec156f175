//! Run configuration: a JSON file with every field defaulted.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use mrw_search::policy::SearchPolicyV1;

/// Typed failure loading a run configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Harness-level knobs: the search policy plus the wall-clock timeout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfigV1 {
    pub num_walks: u64,
    pub max_steps_per_walk: usize,
    pub seed: Option<u64>,
    pub heuristic_weight: f64,
    pub activation_interval: u64,
    pub dead_end_rate_threshold: f64,
    pub branching_threshold: u64,
    pub workers: usize,
    /// Wall-clock limit for the search; it returns the best plan so far.
    pub timeout_secs: u64,
}

impl Default for RunConfigV1 {
    fn default() -> Self {
        let policy = SearchPolicyV1::default();
        Self {
            num_walks: policy.num_walks,
            max_steps_per_walk: policy.max_steps_per_walk,
            seed: policy.seed,
            heuristic_weight: policy.heuristic_weight,
            activation_interval: policy.activation_interval,
            dead_end_rate_threshold: policy.dead_end_rate_threshold,
            branching_threshold: policy.branching_threshold,
            workers: policy.workers,
            timeout_secs: 900,
        }
    }
}

impl RunConfigV1 {
    /// Parse from JSON bytes. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed JSON or unknown fields.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Load from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if it is not a valid config.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let bytes = std::fs::read(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_bytes(&bytes)
    }

    /// The engine policy. Validation happens when the search starts.
    #[must_use]
    pub fn to_policy(&self) -> SearchPolicyV1 {
        SearchPolicyV1 {
            num_walks: self.num_walks,
            max_steps_per_walk: self.max_steps_per_walk,
            seed: self.seed,
            heuristic_weight: self.heuristic_weight,
            activation_interval: self.activation_interval,
            dead_end_rate_threshold: self.dead_end_rate_threshold,
            branching_threshold: self.branching_threshold,
            workers: self.workers,
        }
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
