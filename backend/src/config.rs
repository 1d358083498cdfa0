//! Runtime configuration of the data service.
//!
//! Every setting comes from an environment variable with a default, so the
//! server runs out of the box from the repository root:
//!
//! | Variable   | Default     |
//! |------------|-------------|
//! | `APP_HOST` | `127.0.0.1` |
//! | `APP_PORT` | `5000`      |
//! | `DATA_DIR` | `data`      |
//!
//! Document locations are derived from `DATA_DIR`.

use common::store::MergePaths;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid APP_PORT '{0}': expected a number between 0 and 65535")]
    InvalidPort(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            data_dir: PathBuf::from("data"),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(host) = lookup("APP_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("APP_PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        if let Some(dir) = lookup("DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        Ok(config)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn instructors_path(&self) -> PathBuf {
        self.data_dir.join("raw").join("instructors.json")
    }

    pub fn classes_path(&self) -> PathBuf {
        self.data_dir.join("raw").join("classes.json")
    }

    pub fn ratings_path(&self) -> PathBuf {
        self.data_dir.join("raw").join("professors.json")
    }

    pub fn merged_path(&self) -> PathBuf {
        self.data_dir.join("processed").join("merged_professors.json")
    }

    pub fn merge_paths(&self) -> MergePaths {
        MergePaths {
            classes: self.classes_path(),
            ratings: self.ratings_path(),
            output: self.merged_path(),
        }
    }
}
