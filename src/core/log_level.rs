//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default runtime minimum level, selected with the `default-level-*` features.
pub const DEFAULT_LEVEL: LogLevel = if cfg!(feature = "default-level-trace") {
    LogLevel::Trace
} else if cfg!(feature = "default-level-debug") {
    LogLevel::Debug
} else if cfg!(feature = "default-level-warn") {
    LogLevel::Warn
} else if cfg!(feature = "default-level-error") {
    LogLevel::Error
} else if cfg!(feature = "default-level-fatal") {
    LogLevel::Fatal
} else {
    LogLevel::Info
};

/// Compiled-in floor for the logging macros, selected with the `static-min-*`
/// features. Macro calls below it expand to nothing reachable.
pub const STATIC_MIN_LEVEL: LogLevel = if cfg!(feature = "static-min-fatal") {
    LogLevel::Fatal
} else if cfg!(feature = "static-min-error") {
    LogLevel::Error
} else if cfg!(feature = "static-min-warn") {
    LogLevel::Warn
} else if cfg!(feature = "static-min-info") {
    LogLevel::Info
} else if cfg!(feature = "static-min-debug") {
    LogLevel::Debug
} else {
    LogLevel::Trace
};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

impl LogLevel {
    /// Every level in ascending order
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    pub const fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Inverse of [`LogLevel::as_u8`]; out-of-range values saturate to `Fatal`.
    #[inline]
    pub const fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            _ => LogLevel::Fatal,
        }
    }

    /// Whether a record at `level` passes when `self` is the minimum.
    ///
    /// `Fatal` always passes: a fatal call terminates the process no matter
    /// how the minimum is configured.
    #[inline]
    pub const fn permits(self, level: LogLevel) -> bool {
        level as u8 >= self as u8 || level as u8 == LogLevel::Fatal as u8
    }

    #[cfg(feature = "color")]
    pub fn color(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Trace => BrightBlack,
            LogLevel::Debug => Cyan,
            LogLevel::Info => Green,
            LogLevel::Warn => Yellow,
            LogLevel::Error => Red,
            LogLevel::Fatal => Magenta,
        }
    }

    /// ANSI escape that switches the foreground to this level's color
    #[cfg(feature = "color")]
    pub fn ansi_start(&self) -> String {
        format!("\x1b[{}m", self.color().to_fg_str())
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}
