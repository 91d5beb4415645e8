//! Runtime settings.
//!
//! Defaults, then `pizza-console.toml` (or the file given with `--config`), then
//! `APP__*` environment variables, then command-line flags.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// File read when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "pizza-console.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Where orders and pizzas live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// Resource actors inside this process; data is lost on exit.
    #[default]
    InMemory,
    /// The HTTP API at `api_base_url`.
    Rest,
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "in-memory" | "in_memory" | "memory" => Ok(Backend::InMemory),
            "rest" | "http" => Ok(Backend::Rest),
            _ => Err(ConfigError::InvalidValue {
                key: "backend",
                value: raw.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub backend: Backend,
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    /// Request queue length of each resource actor.
    pub actor_buffer: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend: Backend::InMemory,
            api_base_url: "http://localhost:8080".into(),
            request_timeout_secs: 10,
            actor_buffer: 32,
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or from [`DEFAULT_CONFIG_FILE`] if it exists,
    /// and applies environment overrides. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)?
                } else {
                    Self::default()
                }
            }
        };
        settings.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Applies `APP__BACKEND`, `APP__API_BASE_URL`, `APP__REQUEST_TIMEOUT_SECS` and
    /// `APP__ACTOR_BUFFER` as returned by `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(v) = lookup("APP__BACKEND") {
            self.backend = v.parse()?;
        }
        if let Some(v) = lookup("APP__API_BASE_URL") {
            self.api_base_url = v;
        }
        if let Some(v) = lookup("APP__REQUEST_TIMEOUT_SECS") {
            self.request_timeout_secs = parse_number("request_timeout_secs", v)?;
        }
        if let Some(v) = lookup("APP__ACTOR_BUFFER") {
            self.actor_buffer = parse_number("actor_buffer", v)?;
        }
        Ok(())
    }
}

fn parse_number<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = Settings::from_toml(
            r#"
            backend = "rest"
            api_base_url = "http://pizzeria.local:9000"
            "#,
        )
        .unwrap();
        assert_eq!(settings.backend, Backend::Rest);
        assert_eq!(settings.api_base_url, "http://pizzeria.local:9000");
        assert_eq!(settings.request_timeout_secs, 10);
        assert_eq!(settings.actor_buffer, 32);
    }

    #[test]
    fn test_env_overrides_file() {
        let env: HashMap<&str, &str> = [("APP__BACKEND", "in-memory"), ("APP__ACTOR_BUFFER", "4")].into();
        let mut settings = Settings::from_toml("backend = \"rest\"").unwrap();
        settings
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(settings.backend, Backend::InMemory);
        assert_eq!(settings.actor_buffer, 4);
    }

    #[test]
    fn test_bad_override_is_reported() {
        let mut settings = Settings::default();
        let err = settings
            .apply_overrides(|key| (key == "APP__REQUEST_TIMEOUT_SECS").then(|| "soon".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "request_timeout_secs", .. }));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = Settings::load(Some(Path::new("/nonexistent/pizza-console.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_unknown_backend_in_file() {
        assert!(Settings::from_toml("backend = \"carrier-pigeon\"").is_err());
    }
}
