//! Logger configuration
//!
//! Options that the logger evaluates once at construction time. A config can
//! be built in code, deserialized with serde, or overlaid from environment
//! variables.

use super::error::{LoggerError, Result};
use super::log_level::{LogLevel, DEFAULT_LEVEL};
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

/// Environment variable holding the minimum level name
pub const ENV_LEVEL: &str = "SLIMLOG_LEVEL";
/// Environment variable selecting `color` or `plain` lines
pub const ENV_STYLE: &str = "SLIMLOG_STYLE";
/// Any non-empty value disables colored output (<https://no-color.org>)
pub const ENV_NO_COLOR: &str = "NO_COLOR";

/// Line layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// `ESC[<color>m LEVEL ESC[0m<file>:<line>: <message>`
    ///
    /// Renders as [`LineStyle::Plain`] when built without the `color` feature.
    Color,
    /// `<timestamp> LEVEL <file>:<line>: <message>`
    Plain,
}

impl LineStyle {
    pub const fn default_style() -> Self {
        if cfg!(feature = "color") {
            LineStyle::Color
        } else {
            LineStyle::Plain
        }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::default_style()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub min_level: LogLevel,
    pub style: LineStyle,
    pub timestamp_format: TimestampFormat,
    /// Escape `\n`, `\r` and `\t` in messages so a record never spans lines
    pub escape_newlines: bool,
}

impl LoggerConfig {
    pub const fn new() -> Self {
        Self {
            min_level: DEFAULT_LEVEL,
            style: LineStyle::default_style(),
            timestamp_format: TimestampFormat::Local,
            escape_newlines: false,
        }
    }

    /// Default configuration overlaid with `SLIMLOG_LEVEL`, `SLIMLOG_STYLE`
    /// and `NO_COLOR` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::new().with_env_lookup(|key| std::env::var(key).ok())
    }

    /// Overlay settings from an arbitrary key lookup.
    ///
    /// Unset keys leave the current value alone. `NO_COLOR` wins over
    /// `SLIMLOG_STYLE=color`.
    pub fn with_env_lookup<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LEVEL) {
            self.min_level = level.parse()?;
        }

        if let Some(style) = lookup(ENV_STYLE) {
            self.style = match style.trim().to_ascii_lowercase().as_str() {
                "color" | "colour" => LineStyle::Color,
                "plain" => LineStyle::Plain,
                other => {
                    return Err(LoggerError::config(
                        ENV_STYLE,
                        format!("expected 'color' or 'plain', got '{}'", other),
                    ))
                }
            };
        }

        if lookup(ENV_NO_COLOR).is_some_and(|v| !v.is_empty()) {
            self.style = LineStyle::Plain;
        }

        Ok(self)
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new()
    }
}
