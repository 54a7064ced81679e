//! # Configuration
//!
//! Runtime settings read from a TOML file:
//!
//! ```toml
//! [services]
//! profile_latency_ms = 500
//! dietary_latency_ms = 500
//! saved_latency_ms = 500
//! health_latency_ms = 800
//! buffer_size = 32
//!
//! [hooks]
//! stale_policy = "latest-issued-wins"
//!
//! [storage]
//! path = "nutri-store.json"
//! ```
//!
//! Every section and field is optional; missing values take their defaults.

use resource_hooks::StalePolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Upper bound for a simulated backend delay.
const MAX_LATENCY_MS: u64 = 60_000;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub services: ServiceConfig,
    pub hooks: HookConfig,
    pub storage: StorageConfig,
}

/// Simulated behaviour of the mock backends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub profile_latency_ms: u64,
    pub dietary_latency_ms: u64,
    pub saved_latency_ms: u64,
    pub health_latency_ms: u64,
    /// Request channel capacity of each backend.
    pub buffer_size: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            profile_latency_ms: 500,
            dietary_latency_ms: 500,
            saved_latency_ms: 500,
            health_latency_ms: 800,
            buffer_size: 32,
        }
    }
}

impl ServiceConfig {
    /// Backends that answer immediately.
    pub fn immediate() -> Self {
        Self {
            profile_latency_ms: 0,
            dietary_latency_ms: 0,
            saved_latency_ms: 0,
            health_latency_ms: 0,
            ..Self::default()
        }
    }

    pub fn profile_latency(&self) -> Duration {
        Duration::from_millis(self.profile_latency_ms)
    }

    pub fn dietary_latency(&self) -> Duration {
        Duration::from_millis(self.dietary_latency_ms)
    }

    pub fn saved_latency(&self) -> Duration {
        Duration::from_millis(self.saved_latency_ms)
    }

    pub fn health_latency(&self) -> Duration {
        Duration::from_millis(self.health_latency_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookConfig {
    pub stale_policy: StalePolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON file for persisted settings. In-memory storage when unset.
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `AppConfig::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks:
    /// - backend channels have room for at least one request
    /// - no simulated latency exceeds one minute
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.services.buffer_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "services.buffer_size must be at least 1".to_string(),
            });
        }

        let latencies = [
            ("profile_latency_ms", self.services.profile_latency_ms),
            ("dietary_latency_ms", self.services.dietary_latency_ms),
            ("saved_latency_ms", self.services.saved_latency_ms),
            ("health_latency_ms", self.services.health_latency_ms),
        ];
        if let Some((name, value)) = latencies.iter().find(|(_, ms)| *ms > MAX_LATENCY_MS) {
            return Err(ConfigError::ValidationError {
                message: format!("services.{name} = {value} exceeds {MAX_LATENCY_MS}"),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_file() {
        let config: AppConfig = toml::from_str(
            r#"
            [services]
            profile_latency_ms = 10
            buffer_size = 4

            [hooks]
            stale_policy = "latest-issued-wins"

            [storage]
            path = "/tmp/nutri.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.services.profile_latency_ms, 10);
        assert_eq!(config.services.dietary_latency_ms, 500);
        assert_eq!(config.services.buffer_size, 4);
        assert_eq!(config.hooks.stale_policy, StalePolicy::LatestIssuedWins);
        assert_eq!(config.storage.path, Some(PathBuf::from("/tmp/nutri.json")));
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.hooks.stale_policy, StalePolicy::LastSettledWins);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_zero_buffer_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[services]\nbuffer_size = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[hooks]\nstale_policy = \"whenever\"\n").unwrap();
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(ConfigError::ParseError { .. })
        ));
    }
}
