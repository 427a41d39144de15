//! Unit tests for log.rs
//!
//! Tests LogSeverity, LogEntry, format_entry, and DefaultLogger filtering.

use crate::log::{format_entry, DefaultLogger, LogEntry, LogSeverity, Logger};
use std::time::SystemTime;

fn entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "acorn::ResourceManager".to_string(),
        message: "Loading texture 'albedo.png'".to_string(),
        file,
        line,
    }
}

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_labels_are_fixed_width() {
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        assert_eq!(severity.label().len(), 5);
    }
    assert_eq!(LogSeverity::Warn.label(), "WARN ");
}

// ============================================================================
// FORMAT TESTS
// ============================================================================

#[test]
fn test_format_entry_without_location() {
    let line = format_entry(&entry(LogSeverity::Info, None, None));
    assert!(line.contains("[INFO ]"));
    assert!(line.contains("[acorn::ResourceManager]"));
    assert!(line.ends_with("Loading texture 'albedo.png'"));
}

#[test]
fn test_format_entry_with_location() {
    let line = format_entry(&entry(LogSeverity::Error, Some("texture.rs"), Some(42)));
    assert!(line.contains("[ERROR]"));
    assert!(line.ends_with("(texture.rs:42)"));
}

#[test]
fn test_format_entry_ignores_partial_location() {
    let line = format_entry(&entry(LogSeverity::Warn, Some("texture.rs"), None));
    assert!(!line.contains("texture.rs"));
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_filters_below_minimum() {
    let logger = DefaultLogger::new(LogSeverity::Warn);
    assert_eq!(logger.min_severity(), LogSeverity::Warn);
    assert!(!logger.accepts(LogSeverity::Info));
    assert!(logger.accepts(LogSeverity::Warn));
    assert!(logger.accepts(LogSeverity::Error));
}

#[test]
fn test_default_logger_prints_every_severity() {
    let logger = DefaultLogger::new(LogSeverity::Trace);
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        logger.log(&entry(severity, None, None));
        logger.log(&entry(severity, Some("log_tests.rs"), Some(1)));
    }
}

#[test]
fn test_default_logger_default_is_not_trace() {
    assert!(!DefaultLogger::default().accepts(LogSeverity::Trace));
}

#[test]
fn test_logger_trait_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DefaultLogger>();
}
