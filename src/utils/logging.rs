//! Minimal logging capability.
//!
//! Parsing code reports through the [`Log`] trait instead of calling the
//! `log` macros directly, so callers decide where diagnostics end up.
//! `None` in place of a logger silences everything.

use std::cell::RefCell;

const TARGET: &str = "multirelease";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Debug = 2,
}

pub trait Log {
    fn debug(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);

    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Error => self.error(message),
            LogLevel::Warn => self.warn(message),
            LogLevel::Debug => self.debug(message),
        }
    }
}

/// Forwards to the `log` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFacade;

impl Log for LogFacade {
    fn debug(&self, message: &str) {
        log::debug!(target: TARGET, "{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!(target: TARGET, "{message}");
    }

    fn error(&self, message: &str) {
        log::error!(target: TARGET, "{message}");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLog;

impl Log for NoopLog {
    fn debug(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

/// Keeps every message in memory.
#[derive(Debug, Default)]
pub struct MemoryLog {
    records: RefCell<Vec<(LogLevel, String)>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<(LogLevel, String)> {
        self.records.borrow().clone()
    }

    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.records
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn has(&self, level: LogLevel) -> bool {
        self.records.borrow().iter().any(|(l, _)| *l == level)
    }

    fn push(&self, level: LogLevel, message: &str) {
        self.records.borrow_mut().push((level, message.to_string()));
    }
}

impl Log for MemoryLog {
    fn debug(&self, message: &str) {
        self.push(LogLevel::Debug, message);
    }

    fn warn(&self, message: &str) {
        self.push(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }
}

/// Picks `NoopLog` when no logger was supplied.
pub fn or_noop(log: Option<&dyn Log>) -> &dyn Log {
    static NOOP: NoopLog = NoopLog;
    log.unwrap_or(&NOOP)
}

/// Sets up `env_logger` from `RUST_LOG`, falling back to warnings only.
pub fn init_from_env() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_log_keeps_order_and_levels() {
        let log = MemoryLog::new();
        log.debug("one");
        log.error("two");
        log.log(LogLevel::Warn, "three");

        assert_eq!(
            log.records(),
            vec![
                (LogLevel::Debug, "one".to_string()),
                (LogLevel::Error, "two".to_string()),
                (LogLevel::Warn, "three".to_string()),
            ]
        );
        assert_eq!(log.messages(LogLevel::Error), vec!["two".to_string()]);
    }

    #[test]
    fn missing_logger_falls_back_to_noop() {
        or_noop(None).error("nobody hears this");

        let log = MemoryLog::new();
        or_noop(Some(&log)).error("heard");
        assert!(log.has(LogLevel::Error));
        assert!(!log.has(LogLevel::Warn));
    }
}
