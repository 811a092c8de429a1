use std::{
    fmt,
    io::{self, Write as _},
    sync::{OnceLock, PoisonError, RwLock},
};

use log::{LevelFilter, Log, Metadata, Record};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    // default configuration
    const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

    LOGGER.get_or_init(|| AppLogger::new(DEFAULT_LEVEL))
}

/// Installs the logger. Calling it again only changes the minimal level.
pub fn init(level: LevelFilter) {
    let logger = get_logger();
    logger.set_min_level(level);

    if log::set_logger(logger).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub level: log::Level,
    pub message: String,
    pub source: String,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>5} {} -> {}", self.level, self.source, self.message)
    }
}

/// Writes records to stderr, so they never mix with the rendered mazes on stdout.
pub struct AppLogger {
    min_level: RwLock<LevelFilter>,
}

impl AppLogger {
    fn new(min_level: LevelFilter) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> LevelFilter {
        *self.min_level.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_min_level(&self, level: LevelFilter) {
        *self.min_level.write().unwrap_or_else(PoisonError::into_inner) = level;
    }

    pub fn switch_debug(&self) {
        if self.min_level() >= LevelFilter::Debug {
            self.set_min_level(LevelFilter::Warn);
        } else {
            self.set_min_level(LevelFilter::Debug);
        }
    }

    fn message(record: &Record) -> Message {
        Message {
            level: record.level(),
            message: record.args().to_string(),
            source: record.module_path().unwrap_or("unknown").to_string(),
        }
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(io::stderr(), "{}", Self::message(record));
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_format() {
        let message = Message {
            level: log::Level::Info,
            message: "Generated 3x3 maze".to_string(),
            source: "claby::algorithms".to_string(),
        };
        assert_eq!(
            message.to_string(),
            " INFO claby::algorithms -> Generated 3x3 maze"
        );
    }

    #[test]
    fn level_filtering() {
        let logger = AppLogger::new(LevelFilter::Warn);
        let warn = Metadata::builder().level(log::Level::Warn).build();
        let debug = Metadata::builder().level(log::Level::Debug).build();

        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&debug));

        logger.switch_debug();
        assert_eq!(logger.min_level(), LevelFilter::Debug);
        assert!(logger.enabled(&debug));

        logger.switch_debug();
        assert_eq!(logger.min_level(), LevelFilter::Warn);
    }

    #[test]
    fn record_to_message() {
        let message = AppLogger::message(
            &Record::builder()
                .args(format_args!("cell {} is open", 3))
                .level(log::Level::Error)
                .module_path(Some("tlaby::app"))
                .build(),
        );
        assert_eq!(message.level, log::Level::Error);
        assert_eq!(message.source, "tlaby::app");
        assert_eq!(message.message, "cell 3 is open");
    }
}
