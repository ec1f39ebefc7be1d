//! Line layout for log records
//!
//! Plain: `2025-01-08 10:30:45 INFO  src/main.rs:12: message`
//!
//! Color: `ESC[32m INFO  ESC[0msrc/main.rs:12: message`
//!
//! The color layout carries no timestamp.

use super::config::LineStyle;
use super::error::{LoggerError, Result};
use super::log_record::LogRecord;
use super::timestamp::TimestampFormat;
use std::fmt::{self, Write};

#[cfg(feature = "color")]
const ANSI_RESET: &str = "\x1b[0m";

/// Options consulted while rendering a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFormat {
    pub style: LineStyle,
    pub timestamp_format: TimestampFormat,
    pub escape_newlines: bool,
}

impl LineFormat {
    /// Append one complete line, including the trailing newline, to `out`.
    ///
    /// On error `out` may hold a partial line.
    pub fn write_line(&self, out: &mut String, record: &LogRecord<'_>) -> Result<()> {
        self.write_header(out, record)
            .and_then(|()| self.write_message(out, record))
            .map_err(|_| {
                LoggerError::formatter("text", "a formatting trait implementation returned an error")
            })?;
        out.push('\n');
        Ok(())
    }

    /// Render `record` into a fresh `String`
    pub fn render(&self, record: &LogRecord<'_>) -> Result<String> {
        let mut line = String::with_capacity(64);
        self.write_line(&mut line, record)?;
        Ok(line)
    }

    fn write_header(&self, out: &mut String, record: &LogRecord<'_>) -> fmt::Result {
        match self.style {
            #[cfg(feature = "color")]
            LineStyle::Color => write!(
                out,
                "{} {:<5} {}{}: ",
                record.level.ansi_start(),
                record.level,
                ANSI_RESET,
                record.location
            ),
            _ => write!(
                out,
                "{} {:<5} {}: ",
                self.timestamp_format.format(&record.timestamp),
                record.level,
                record.location
            ),
        }
    }

    fn write_message(&self, out: &mut String, record: &LogRecord<'_>) -> fmt::Result {
        if !self.escape_newlines {
            return out.write_fmt(record.args);
        }

        let mut escaper = Escaper { out };
        escaper.write_fmt(record.args)
    }
}

impl Default for LineFormat {
    fn default() -> Self {
        Self {
            style: LineStyle::default(),
            timestamp_format: TimestampFormat::default(),
            escape_newlines: false,
        }
    }
}

/// Escapes control characters that would break a record across lines
struct Escaper<'a> {
    out: &'a mut String,
}

impl Write for Escaper<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            match ch {
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                _ => self.out.push(ch),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogLevel, SourceLocation};
    use chrono::{DateTime, TimeZone, Utc};

    fn fixed() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).single().unwrap()
    }

    fn plain() -> LineFormat {
        LineFormat {
            style: LineStyle::Plain,
            timestamp_format: TimestampFormat::Utc,
            escape_newlines: false,
        }
    }

    fn render(format: &LineFormat, level: LogLevel, args: fmt::Arguments<'_>) -> Result<String> {
        let record = LogRecord::at(level, SourceLocation::new("src/disk.rs", 27), args, fixed());
        format.render(&record)
    }

    #[test]
    fn test_plain_layout() {
        let line = render(&plain(), LogLevel::Warn, format_args!("disk at {}%", 91)).unwrap();
        assert_eq!(line, "2025-01-08 10:30:45 WARN  src/disk.rs:27: disk at 91%\n");
    }

    #[test]
    fn test_plain_layout_full_width_level() {
        let line = render(&plain(), LogLevel::Error, format_args!("x")).unwrap();
        assert_eq!(line, "2025-01-08 10:30:45 ERROR src/disk.rs:27: x\n");
    }

    #[cfg(feature = "color")]
    #[test]
    fn test_color_layout() {
        let format = LineFormat {
            style: LineStyle::Color,
            ..plain()
        };
        let line = render(&format, LogLevel::Info, format_args!("Hello {}", "world")).unwrap();
        assert_eq!(line, "\x1b[32m INFO  \x1b[0msrc/disk.rs:27: Hello world\n");
    }

    #[test]
    fn test_empty_message() {
        let line = render(&plain(), LogLevel::Info, format_args!("")).unwrap();
        assert!(line.ends_with("src/disk.rs:27: \n"));
    }

    #[test]
    fn test_escape_newlines() {
        let format = LineFormat {
            escape_newlines: true,
            ..plain()
        };
        let line = render(&format, LogLevel::Info, format_args!("a\nb\tc{}", "\r")).unwrap();
        assert!(line.ends_with("a\\nb\\tc\\r\n"));
        assert_eq!(line.matches('\n').count(), 1);
    }

    #[test]
    fn test_unescaped_newlines_pass_through() {
        let line = render(&plain(), LogLevel::Info, format_args!("a\nb")).unwrap();
        assert!(line.ends_with("a\nb\n"));
    }

    #[test]
    fn test_failing_display_is_a_formatter_error() {
        struct Broken;
        impl fmt::Display for Broken {
            fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
                Err(fmt::Error)
            }
        }

        let err = render(&plain(), LogLevel::Info, format_args!("{}", Broken)).unwrap_err();
        assert!(matches!(err, LoggerError::FormatterError { .. }));
    }
}
