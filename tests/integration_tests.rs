//! Integration tests for the logger
//!
//! These tests verify:
//! - Level filtering and runtime level changes
//! - Sink redirection, reset and file output
//! - Line layout in plain and color style
//! - Write failure accounting
//! - Configuration round trips

use slimlog::prelude::*;
use slimlog::sinks::{FileSink, MemorySink};
use slimlog::{error, info, location, warn};
use std::fs;
use std::io::{self, Write};
use tempfile::TempDir;

fn plain_logger(sink: &MemorySink) -> Logger {
    Logger::builder()
        .style(LineStyle::Plain)
        .sink(sink.clone())
        .build()
}

/// Splits a plain line into (date, time, level, location, message)
fn fields(line: &str) -> (&str, &str, &str, &str, &str) {
    let (loc, message) = line[26..].split_once(": ").expect("location separator");
    (&line[0..10], &line[11..19], line[20..25].trim_end(), loc, message)
}

#[test]
fn test_warn_threshold_scenario() {
    let sink = MemorySink::new();
    let mut logger = plain_logger(&sink);
    logger.set_level(LogLevel::Warn);

    info!(logger, "nothing to see");
    assert!(sink.is_empty(), "INFO must be filtered at WARN");

    let expected_line = line!() + 1;
    warn!(logger, "disk at {}%", 91);

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    let (date, time, level, loc, message) = fields(&lines[0]);
    assert_eq!(date.len(), 10);
    assert_eq!(time.len(), 8);
    assert_eq!(level, "WARN");
    assert_eq!(loc, format!("tests/integration_tests.rs:{}", expected_line));
    assert_eq!(message, "disk at 91%");
}

#[test]
fn test_default_configuration() {
    let logger = Logger::new();
    assert_eq!(logger.level(), slimlog::DEFAULT_LEVEL);
    assert!(!logger.has_custom_sink());
    assert!(logger.enabled(slimlog::DEFAULT_LEVEL));
    assert!(logger.enabled(LogLevel::Fatal));
}

#[test]
fn test_level_padding_is_five_columns() {
    let sink = MemorySink::new();
    let mut logger = plain_logger(&sink);
    logger.set_level(LogLevel::Trace);

    for level in LogLevel::ALL.iter().copied().filter(|l| *l != LogLevel::Fatal) {
        logger.log(level, location!(), format_args!("m"));
    }

    for line in sink.lines() {
        // "YYYY-MM-DD HH:MM:SS " is 20 columns, then 5 for the level and a space
        assert_eq!(&line[25..26], " ", "bad padding in {:?}", line);
        assert!(line[26..].starts_with("tests/integration_tests.rs:"));
    }
}

#[cfg(feature = "color")]
#[test]
fn test_color_layout_has_no_timestamp() {
    let sink = MemorySink::new();
    let mut logger = Logger::builder()
        .style(LineStyle::Color)
        .sink(sink.clone())
        .build();

    let line_no = line!() + 1;
    error!(logger, "code {}", 500);

    assert_eq!(
        sink.contents(),
        format!(
            "\x1b[31m ERROR \x1b[0mtests/integration_tests.rs:{}: code 500\n",
            line_no
        )
    );
}

#[test]
fn test_redirect_only_affects_later_records() {
    let first = MemorySink::new();
    let second = MemorySink::new();
    let mut logger = plain_logger(&first);

    info!(logger, "to first");
    logger.set_sink(Some(Box::new(second.clone())));
    info!(logger, "to second");
    logger.set_sink(None);

    assert_eq!(first.lines().len(), 1);
    assert!(first.contents().contains("to first"));
    assert_eq!(second.lines().len(), 1);
    assert!(second.contents().contains("to second"));
    assert!(!logger.has_custom_sink());
}

#[test]
fn test_file_sink_is_flushed_per_record() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.log");

    let mut logger = Logger::builder()
        .style(LineStyle::Plain)
        .sink(FileSink::create(&log_file).expect("Failed to create sink"))
        .build();

    for i in 0..3 {
        info!(logger, "record {}", i);
        // Visible to another reader before the logger is dropped
        let content = fs::read_to_string(&log_file).expect("Failed to read log file");
        assert_eq!(content.lines().count(), i + 1);
        assert!(content.ends_with(&format!("record {}\n", i)));
    }
}

#[test]
fn test_escaped_newlines_keep_one_line() {
    let sink = MemorySink::new();
    let mut logger = Logger::builder()
        .style(LineStyle::Plain)
        .escape_newlines(true)
        .sink(sink.clone())
        .build();

    let malicious = "User login\nERROR fake entry";
    info!(logger, "{}", malicious);

    assert_eq!(sink.lines().len(), 1);
    assert!(sink.contents().contains("User login\\nERROR fake entry"));
}

#[test]
fn test_write_errors_are_tracked() {
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let mut logger = Logger::builder().sink(ClosedPipe).build();
    for _ in 0..5 {
        error!(logger, "Test message");
    }

    assert_eq!(logger.metrics().write_failures(), 5);
    assert_eq!(logger.metrics().records_written(), 0);
    assert_eq!(logger.metrics().failure_rate(), 100.0);

    let err = logger
        .try_log(LogLevel::Error, location!(), format_args!("again"))
        .unwrap_err();
    assert!(matches!(err, LoggerError::IoError(_)));
}

#[test]
fn test_config_serde_roundtrip() {
    let config = LoggerConfig {
        min_level: LogLevel::Debug,
        style: LineStyle::Plain,
        timestamp_format: TimestampFormat::Custom("%H:%M:%S".to_string()),
        escape_newlines: true,
    };

    let json = serde_json::to_string(&config).expect("serialize");
    let parsed: LoggerConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, config);
}

#[test]
fn test_config_partial_json_uses_defaults() {
    let parsed: LoggerConfig =
        serde_json::from_str(r#"{"min_level":"WARN","style":"plain"}"#).expect("deserialize");
    assert_eq!(parsed.min_level, LogLevel::Warn);
    assert_eq!(parsed.style, LineStyle::Plain);
    assert_eq!(parsed.timestamp_format, TimestampFormat::Local);
    assert!(!parsed.escape_newlines);
}

#[test]
fn test_custom_timestamp_format() {
    let sink = MemorySink::new();
    let mut logger = Logger::builder()
        .style(LineStyle::Plain)
        .timestamp_format(TimestampFormat::Unix)
        .sink(sink.clone())
        .build();

    info!(logger, "epoch");
    let line = sink.lines().remove(0);
    let secs: i64 = line
        .split_whitespace()
        .next()
        .and_then(|s| s.parse().ok())
        .expect("numeric timestamp");
    assert!(secs > 1_700_000_000);
}
