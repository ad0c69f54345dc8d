//! Configuration management for hello
//!
//! Only the logging backend is configurable. Sources are layered as
//! defaults < `hello.{toml,json,...}` in the working directory < `HELLO_*`
//! environment variables.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use env_logger::WriteStyle;
use log::LevelFilter;
use serde::Deserialize;
use std::str::FromStr;

/// Base name of the optional configuration file
pub const CONFIG_NAME: &str = "hello";

/// Prefix for environment overrides, e.g. `HELLO_LOG_LEVEL`
pub const ENV_PREFIX: &str = "HELLO";

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_WRITE_STYLE: &str = "auto";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct HelloConfig {
    /// Maximum level written by the logging backend.
    /// Environment: HELLO_LOG_LEVEL
    pub log_level: String,

    /// Colour handling for the log output: auto, always or never.
    /// Environment: HELLO_WRITE_STYLE
    pub write_style: String,
}

impl Default for HelloConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            write_style: DEFAULT_WRITE_STYLE.to_string(),
        }
    }
}

impl HelloConfig {
    /// Load configuration from the working directory with environment overrides.
    ///
    /// Never fails: a source that cannot be read yields the defaults, and an
    /// invalid field is reset to its default while valid fields are kept.
    /// Every problem found is returned alongside the configuration.
    pub fn load() -> (Self, Vec<ConfigError>) {
        Self::from_builder_or_default(
            Config::builder()
                .add_source(File::with_name(CONFIG_NAME).required(false))
                .add_source(Environment::with_prefix(ENV_PREFIX)),
        )
    }

    /// Apply defaults and validation on top of the given sources
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config = Self::read(builder)?;
        config.validate()?;
        Ok(config)
    }

    /// Like `from_builder`, but falls back field by field instead of failing
    pub fn from_builder_or_default(
        builder: ConfigBuilder<DefaultState>,
    ) -> (Self, Vec<ConfigError>) {
        let mut config = match Self::read(builder) {
            Ok(config) => config,
            Err(e) => return (Self::default(), vec![e]),
        };

        let mut errors = Vec::new();
        if let Err(e) = config.level_filter() {
            errors.push(e);
            config.log_level = DEFAULT_LOG_LEVEL.to_string();
        }
        if let Err(e) = config.write_style() {
            errors.push(e);
            config.write_style = DEFAULT_WRITE_STYLE.to_string();
        }
        (config, errors)
    }

    fn read(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .set_default("write_style", DEFAULT_WRITE_STYLE)?
            .build()?
            .try_deserialize()
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(self.log_level.trim()).map_err(|_| {
            ConfigError::Message(format!("Unknown log_level: {}", self.log_level))
        })
    }

    pub fn write_style(&self) -> Result<WriteStyle, ConfigError> {
        match self.write_style.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(WriteStyle::Auto),
            "always" => Ok(WriteStyle::Always),
            "never" => Ok(WriteStyle::Never),
            _ => Err(ConfigError::Message(format!(
                "Unknown write_style: {} (expected auto, always or never)",
                self.write_style
            ))),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.level_filter()?;
        self.write_style()?;
        Ok(())
    }
}
