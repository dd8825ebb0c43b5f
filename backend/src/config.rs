//! # Configuration
//!
//! Settings come from built-in defaults, then an optional YAML file named by
//! `GARDEN_CONFIG`, then individual environment variables.
//!
//! ```yaml
//! bind_addr: "127.0.0.1:3000"
//! database_url: "sqlite:garden.db"
//! frontend_origin: "http://localhost:8080"
//! max_active_plants: 2
//! static_dir: "../frontend/dist"
//! log_filter: "info,sqlx=warn"
//! ```

use serde::{Deserialize, Serialize};
use shared::DEFAULT_MAX_ACTIVE;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_PATH_VAR: &str = "GARDEN_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("max_active_plants must be at least 1")]
    NoActivePlantsAllowed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GardenConfig {
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,
    /// SQLite URL; the file is created on first start
    pub database_url: String,
    /// Origin allowed to call the API from a browser
    pub frontend_origin: String,
    /// How many plants may be active at once
    pub max_active_plants: usize,
    /// Built frontend to serve for non-API paths
    pub static_dir: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` wins when set
    pub log_filter: String,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            database_url: "sqlite:garden.db".to_string(),
            frontend_origin: "http://localhost:8080".to_string(),
            max_active_plants: DEFAULT_MAX_ACTIVE,
            static_dir: None,
            log_filter: "info".to_string(),
        }
    }
}

impl GardenConfig {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` in place of the environment
    pub fn load_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Some(value) = lookup("GARDEN_BIND_ADDR") {
            config.bind_addr = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "GARDEN_BIND_ADDR",
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup("GARDEN_DATABASE_URL") {
            config.database_url = value;
        }
        if let Some(value) = lookup("GARDEN_FRONTEND_ORIGIN") {
            config.frontend_origin = value;
        }
        if let Some(value) = lookup("GARDEN_MAX_ACTIVE") {
            config.max_active_plants = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "GARDEN_MAX_ACTIVE",
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup("GARDEN_STATIC_DIR") {
            config.static_dir = Some(PathBuf::from(value));
        }
        if let Some(value) = lookup("GARDEN_LOG") {
            config.log_filter = value;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_active_plants == 0 {
            return Err(ConfigError::NoActivePlantsAllowed);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GardenConfig::load_with(lookup_from(&[])).unwrap();
        assert_eq!(config, GardenConfig::default());
        assert_eq!(config.max_active_plants, 2);
        assert_eq!(config.bind_addr.port(), 3000);
    }

    #[test]
    fn test_env_overrides() {
        let config = GardenConfig::load_with(lookup_from(&[
            ("GARDEN_BIND_ADDR", "0.0.0.0:8000"),
            ("GARDEN_MAX_ACTIVE", "3"),
            ("GARDEN_DATABASE_URL", "sqlite:other.db"),
            ("GARDEN_STATIC_DIR", "dist"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:8000".parse().unwrap());
        assert_eq!(config.max_active_plants, 3);
        assert_eq!(config.database_url, "sqlite:other.db");
        assert_eq!(config.static_dir, Some(PathBuf::from("dist")));
    }

    #[test]
    fn test_invalid_env_value() {
        let result = GardenConfig::load_with(lookup_from(&[("GARDEN_MAX_ACTIVE", "many")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key: "GARDEN_MAX_ACTIVE", .. })
        ));
    }

    #[test]
    fn test_zero_cap_rejected() {
        let result = GardenConfig::load_with(lookup_from(&[("GARDEN_MAX_ACTIVE", "0")]));
        assert!(matches!(result, Err(ConfigError::NoActivePlantsAllowed)));
    }

    #[test]
    fn test_yaml_file_then_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_active_plants: 4").unwrap();
        writeln!(file, "frontend_origin: \"http://garden.local\"").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let config =
            GardenConfig::load_with(lookup_from(&[(CONFIG_PATH_VAR, path.as_str()), ("GARDEN_MAX_ACTIVE", "1")]))
                .unwrap();

        assert_eq!(config.frontend_origin, "http://garden.local");
        assert_eq!(config.max_active_plants, 1);
        // Unset keys keep their defaults
        assert_eq!(config.database_url, "sqlite:garden.db");
    }

    #[test]
    fn test_missing_file() {
        let result = GardenConfig::load_with(lookup_from(&[(CONFIG_PATH_VAR, "/nonexistent/garden.yaml")]));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_active_plants: [not, a, number]").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let result = GardenConfig::load_with(lookup_from(&[(CONFIG_PATH_VAR, path.as_str())]));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
