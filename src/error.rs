//! Error types
//!
//! Errors raised while setting up the program's ambient services.

use std::fmt;

/// Errors raised before the greeting is written
#[derive(Debug)]
pub enum HelloError {
    Config(config::ConfigError),
    Logger(log::SetLoggerError),
}

impl fmt::Display for HelloError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HelloError::Config(e) => write!(f, "Configuration error: {}", e),
            HelloError::Logger(e) => write!(f, "Logger setup failed: {}", e),
        }
    }
}

impl std::error::Error for HelloError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HelloError::Config(e) => Some(e),
            HelloError::Logger(e) => Some(e),
        }
    }
}

impl From<config::ConfigError> for HelloError {
    fn from(error: config::ConfigError) -> Self {
        HelloError::Config(error)
    }
}

impl From<log::SetLoggerError> for HelloError {
    fn from(error: log::SetLoggerError) -> Self {
        HelloError::Logger(error)
    }
}
