//! Configuration loading and validation.
//!
//! Uses serde_yaml to load the YAML configuration file. Properties listed in
//! the file, and `-Dkey=value` overrides from the command line, seed the
//! property store before any listener runs.

mod app;
mod duration;
mod error;
mod job;

pub use app::AppConfig;
pub use error::ConfigError;
pub use job::JobConfig;

use serde::Deserialize;
use std::{collections::BTreeMap, fs};

use crate::properties::SystemProperties;

/// Root configuration structure.
///
/// Required sections: app.
/// Optional sections: job, properties.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Application-level settings like name and environment.
    pub app: AppConfig,
    /// Connection check settings (optional).
    #[serde(default)]
    pub job: JobConfig,
    /// Properties set before the job starts. These are never overwritten
    /// by environment variables.
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl Config {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Loads environment variables from a `.env` file first, if one exists.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore error if not found)
        dotenvy::dotenv().ok();

        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;

        config.validate()?;

        Ok(config)
    }

    /// Merges command-line overrides into `properties`; later entries win.
    pub fn apply_overrides<I>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.properties.extend(overrides);
    }

    /// Builds the initial property store from `properties`.
    pub fn initial_properties(&self) -> SystemProperties {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.app.name.is_empty() {
            return Err(ConfigError::Validation("app.name is required".into()));
        }

        if !self.job.dry_run && self.job.connect_timeout.is_zero() {
            return Err(ConfigError::Validation(
                "job.connect_timeout must be positive".into(),
            ));
        }

        if let Some(key) = self.properties.keys().find(|k| k.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "property key {:?} is blank",
                key
            )));
        }

        Ok(())
    }
}

/// Parses a `-Dkey=value` command-line argument.
///
/// Returns `Ok(None)` for arguments that are not property overrides.
pub fn parse_property_override(arg: &str) -> Result<Option<(String, String)>, ConfigError> {
    let Some(rest) = arg.strip_prefix("-D") else {
        return Ok(None);
    };

    match rest.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok(Some((key.trim().to_string(), value.to_string())))
        }
        _ => Err(ConfigError::Override(arg.to_string())),
    }
}
