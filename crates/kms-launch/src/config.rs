//! Process-wide launch configuration.
//!
//! Resolved once at startup from built-in defaults, an optional
//! `kms-launch.toml`, the environment and command-line overrides, in that
//! order. The result is passed around by reference and never mutated.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use smol_str::SmolStr;

use crate::error::ClientError;

pub const CONFIG_FILE_NAME: &str = "kms-launch.toml";
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

pub const ENV_ENDPOINT: &str = "KMS_LAUNCH_ENDPOINT";
pub const ENV_LOG: &str = "KMS_LAUNCH_LOG";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Version shown in the footer and sent nowhere else.
    pub version: SmolStr,
    /// Base URL of the back-end, without a trailing slash.
    pub endpoint: SmolStr,
    pub log_level: SmolStr,
    pub timeout: Duration,
    /// File the values were read from, if any.
    pub source: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: SmolStr::new(env!("CARGO_PKG_VERSION")),
            endpoint: SmolStr::new(DEFAULT_ENDPOINT),
            log_level: SmolStr::new(DEFAULT_LOG_LEVEL),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            source: None,
        }
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config: Option<PathBuf>,
    pub endpoint: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigToml {
    launch: Option<LaunchSection>,
    log: Option<LogSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LaunchSection {
    endpoint: Option<String>,
    timeout_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LogSection {
    level: Option<String>,
}

impl AppConfig {
    /// Resolves the configuration against the real process environment.
    pub fn load(overrides: &ConfigOverrides) -> Result<Self, ClientError> {
        let cwd = std::env::current_dir().ok();
        Self::resolve(overrides, cwd.as_deref(), |key| std::env::var(key).ok())
    }

    /// Resolves the configuration with an injected environment lookup.
    ///
    /// `--config` must exist when given; otherwise `kms-launch.toml` in `cwd`
    /// is used when present.
    pub fn resolve(
        overrides: &ConfigOverrides,
        cwd: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ClientError> {
        let mut config = Self::default();

        let file = match (&overrides.config, cwd) {
            (Some(path), _) => Some(path.clone()),
            (None, Some(dir)) => Some(dir.join(CONFIG_FILE_NAME)).filter(|path| path.is_file()),
            (None, None) => None,
        };
        if let Some(path) = file {
            config.apply_file(&path)?;
            config.source = Some(path);
        }

        if let Some(endpoint) = env(ENV_ENDPOINT) {
            config.endpoint = SmolStr::new(endpoint);
        }
        if let Some(level) = env(ENV_LOG) {
            config.log_level = SmolStr::new(level);
        }

        if let Some(endpoint) = &overrides.endpoint {
            config.endpoint = SmolStr::new(endpoint);
        }
        if let Some(level) = &overrides.log_level {
            config.log_level = SmolStr::new(level);
        }

        config.validate()?;
        Ok(config)
    }

    fn apply_file(&mut self, path: &Path) -> Result<(), ClientError> {
        let text = std::fs::read_to_string(path).map_err(|err| {
            ClientError::InvalidConfig(format!("{}: {err}", path.display()).into())
        })?;
        let raw: ConfigToml = toml::from_str(&text).map_err(|err| {
            ClientError::InvalidConfig(format!("{}: {err}", path.display()).into())
        })?;
        if let Some(launch) = raw.launch {
            if let Some(endpoint) = launch.endpoint {
                self.endpoint = SmolStr::new(endpoint);
            }
            if let Some(timeout_ms) = launch.timeout_ms {
                self.timeout = Duration::from_millis(timeout_ms);
            }
        }
        if let Some(level) = raw.log.and_then(|log| log.level) {
            self.log_level = SmolStr::new(level);
        }
        Ok(())
    }

    fn validate(&mut self) -> Result<(), ClientError> {
        let endpoint = self.endpoint.trim().trim_end_matches('/');
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ClientError::InvalidConfig(
                format!("endpoint must start with http:// or https:// (got '{}')", self.endpoint)
                    .into(),
            ));
        }
        self.endpoint = SmolStr::new(endpoint);

        let level = self.log_level.trim().to_ascii_lowercase();
        if !LOG_LEVELS.iter().any(|known| *known == level) {
            return Err(ClientError::InvalidConfig(
                format!(
                    "log level must be one of {} (got '{}')",
                    LOG_LEVELS.join(", "),
                    self.log_level
                )
                .into(),
            ));
        }
        self.log_level = SmolStr::new(level);

        if self.timeout.is_zero() {
            return Err(ClientError::InvalidConfig("timeout_ms must be positive".into()));
        }
        Ok(())
    }
}
