//! hello - Entry Point
//!
//! Installs the logging backend and writes one greeting. Arguments are ignored.

use hello::{Hello, HelloConfig, logging};
use log::warn;

fn main() {
    let (config, config_errors) = HelloConfig::load();

    // env_logger picks up RUST_LOG on top of the loaded configuration
    if let Err(e) = logging::setup_logging(&config) {
        eprintln!("hello: {}", e);
    }

    for e in config_errors {
        warn!("Falling back to default: {}", e);
    }

    Hello::main();
}
