//! Timestamp formatting for plain-style lines

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Layout used for the timestamp column: `YYYY-MM-DD HH:MM:SS`
pub const DEFAULT_TIMESTAMP_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use slimlog::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let ts = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::Utc.format(&ts), "2025-01-08 10:30:45");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampFormat {
    /// Local wall clock, second resolution: `2025-01-08 10:30:45`
    #[default]
    Local,

    /// Same layout as [`TimestampFormat::Local`], rendered in UTC
    Utc,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Custom strftime pattern, rendered in local time
    ///
    /// # Examples
    ///
    /// ```
    /// use slimlog::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%H:%M:%S".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Local => datetime
                .with_timezone(&Local)
                .format(DEFAULT_TIMESTAMP_PATTERN)
                .to_string(),
            TimestampFormat::Utc => datetime.format(DEFAULT_TIMESTAMP_PATTERN).to_string(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::Custom(pattern) => {
                datetime.with_timezone(&Local).format(pattern).to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::milliseconds(987)
    }

    #[test]
    fn test_utc_format_truncates_to_seconds() {
        assert_eq!(
            TimestampFormat::Utc.format(&fixed_datetime()),
            "2025-01-08 10:30:45"
        );
    }

    #[test]
    fn test_local_format_shape() {
        let result = TimestampFormat::Local.format(&fixed_datetime());
        assert_eq!(result.len(), 19);
        assert_eq!(&result[4..5], "-");
        assert_eq!(&result[10..11], " ");
        assert_eq!(&result[13..14], ":");
    }

    #[test]
    fn test_unix_format() {
        assert_eq!(TimestampFormat::Unix.format(&fixed_datetime()), "1736332245");
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y".to_string());
        let result = format.format(&fixed_datetime());
        assert!(result == "2025" || result == "2024" || result == "2026");
    }

    #[test]
    fn test_default_is_local() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::Local);
    }
}
