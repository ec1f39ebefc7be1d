//! Core logger types

pub mod config;
pub mod error;
pub mod format;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod shared;
pub mod timestamp;

pub use config::{LineStyle, LoggerConfig};
pub use error::{LoggerError, Result};
pub use format::LineFormat;
pub use log_level::{LogLevel, DEFAULT_LEVEL, STATIC_MIN_LEVEL};
pub use log_record::{LogRecord, SourceLocation};
pub use logger::{BoxedSink, Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use shared::{SharedLogger, SharedLoggerGuard};
pub use timestamp::TimestampFormat;
