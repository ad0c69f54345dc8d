//! The startup greeting

use crate::logging::Logger;

/// Message written once at startup
pub const WELCOME_MESSAGE: &str = "Hello and welcome!";

/// Owner of the program's logger identity
pub struct Hello;

impl Hello {
    /// Logger named after this type
    pub fn logger() -> Logger {
        Logger::for_type::<Hello>()
    }

    pub fn greet(logger: &Logger) {
        logger.info(WELCOME_MESSAGE);
    }

    pub fn main() {
        Self::greet(&Self::logger());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::tests::capture;
    use log::{Level, LevelFilter};

    #[test]
    fn test_logger_is_named_after_hello() {
        assert_eq!(Hello::logger().name(), "hello::greeting::Hello");
    }

    #[test]
    fn test_main_writes_single_info_record() {
        let (_guard, capture) = capture();

        Hello::main();

        let records = capture.take();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, Level::Info);
        assert_eq!(records[0].target, "hello::greeting::Hello");
        assert_eq!(records[0].message, "Hello and welcome!");
    }

    #[test]
    fn test_repeated_greetings_are_identical() {
        let (_guard, capture) = capture();
        let logger = Hello::logger();

        for _ in 0..3 {
            Hello::greet(&logger);
        }

        let records = capture.take();
        assert_eq!(records.len(), 3);
        assert!(records.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_greeting_suppressed_when_max_level_is_off() {
        let (_guard, capture) = capture();

        log::set_max_level(LevelFilter::Off);
        Hello::main();
        log::set_max_level(LevelFilter::Trace);

        assert!(capture.take().is_empty());
    }
}
