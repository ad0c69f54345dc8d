//! Logging
//!
//! Named logger handles plus installation of the `env_logger` backend.

use env_logger::{Builder, Env};
use log::Level;
use std::any::type_name;

use crate::config::HelloConfig;
use crate::error::HelloError;

/// A named handle for submitting log records through the `log` facade.
///
/// The name becomes the record target, so `env_logger` prints it next to the
/// level and `RUST_LOG` directives can filter on it.
#[derive(Debug, Clone)]
pub struct Logger {
    name: String,
}

impl Logger {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Handle named after the fully qualified path of `T`
    pub fn for_type<T: ?Sized>() -> Self {
        Self::new(type_name::<T>())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn log(&self, level: Level, message: &str) {
        log::log!(target: self.name.as_str(), level, "{}", message);
    }

    pub fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }
}

/// Backend builder from configuration alone; the environment is not consulted
pub fn builder(config: &HelloConfig) -> Result<Builder, HelloError> {
    let mut builder = Builder::new();
    builder
        .filter_level(config.level_filter()?)
        .write_style(config.write_style()?);
    Ok(builder)
}

/// Install `env_logger` as the global backend.
///
/// `RUST_LOG` and `RUST_LOG_STYLE` take precedence over the configuration.
pub fn setup_logging(config: &HelloConfig) -> Result<(), HelloError> {
    builder(config)?.parse_env(Env::default()).try_init()?;
    Ok(())
}
