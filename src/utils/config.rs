use anyhow::{Context, Result};
use ::config::{Config, Environment, File};
use serde::Deserialize;

/// Prefix of the environment variables read by [`LoggerConfig::load`].
pub const ENV_PREFIX: &str = "URL_COMPOSER";

/// Configuration for the logging layer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Directory for log files; logs go to stderr when unset
    pub log_dir: Option<String>,

    /// Filter directive used when `RUST_LOG` is not set
    pub filter: String,

    /// Whether to emit ANSI colour codes
    pub ansi: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            filter: "info".to_string(),
            ansi: false,
        }
    }
}

impl LoggerConfig {
    /// Layers defaults, an optional config file and `URL_COMPOSER_*`
    /// environment variables, later sources winning.
    pub fn load(file: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(file) = file {
            builder = builder.add_source(File::with_name(file).required(false));
        }
        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .context("Failed to build logger configuration")?;

        settings
            .try_deserialize()
            .context("Failed to deserialize logger configuration")
    }
}
