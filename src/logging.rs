//! Logging collaborator for parse-time diagnostics.
//!
//! The parser and validators report problems as plain one-way messages; they
//! never inspect what the sink does with them. Applications normally use
//! [`StderrLog`]; tests use [`CaptureLog`] to assert on exact messages.

use colored::Colorize;
use std::cell::RefCell;

/// One-way message emission. No return value is ever consumed.
pub trait Log {
    fn error(&self, message: &str);
    fn info(&self, message: &str);
}

/// Default sink: errors to stderr with a colored prefix, info to stdout.
pub struct StderrLog;

impl Log for StderrLog {
    fn error(&self, message: &str) {
        eprintln!("{} {}", "error:".red().bold(), message);
    }

    fn info(&self, message: &str) {
        println!("{}", message);
    }
}

/// Sink that records messages in memory, for tests and embedding hosts that
/// surface diagnostics through their own channels.
#[derive(Debug, Default)]
pub struct CaptureLog {
    errors: RefCell<Vec<String>>,
    infos: RefCell<Vec<String>>,
}

impl CaptureLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.infos.borrow().clone()
    }
}

impl Log for CaptureLog {
    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn info(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_log_records_in_order() {
        let log = CaptureLog::new();
        log.error("first");
        log.error("second");
        log.info("note");
        assert_eq!(log.errors(), vec!["first", "second"]);
        assert_eq!(log.infos(), vec!["note"]);
    }
}
