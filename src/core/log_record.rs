//! Log record structure

use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use std::fmt;

/// Call site of a log statement, usually built by [`location!`](crate::location).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
}

impl SourceLocation {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A single record, alive only for the duration of one emit call.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub level: LogLevel,
    pub location: SourceLocation,
    pub args: fmt::Arguments<'a>,
    pub timestamp: DateTime<Utc>,
}

impl<'a> LogRecord<'a> {
    /// Build a record stamped with the current wall-clock time
    pub fn capture(level: LogLevel, location: SourceLocation, args: fmt::Arguments<'a>) -> Self {
        Self::at(level, location, args, Utc::now())
    }

    pub fn at(
        level: LogLevel,
        location: SourceLocation,
        args: fmt::Arguments<'a>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            level,
            location,
            args,
            timestamp,
        }
    }
}
