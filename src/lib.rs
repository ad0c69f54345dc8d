pub mod config;
pub mod error;
pub mod greeting;
pub mod logging;

pub use config::HelloConfig;
pub use error::HelloError;
pub use greeting::{Hello, WELCOME_MESSAGE};
pub use logging::Logger;
