//! # slimlog
//!
//! A small, embeddable logging facility: leveled, formatted, timestamped
//! lines written to a configurable sink.
//!
//! ## Features
//!
//! - **Cheap filtering**: a disabled call is a single comparison, and calls
//!   below [`STATIC_MIN_LEVEL`] are compiled out of the macros
//! - **Any sink**: standard error by default, or any `Write + Send` value
//! - **Opt-in locking**: [`Logger`] is single-owner; [`SharedLogger`] adds a
//!   mutex whose raw lock type the caller picks
//! - **Fatal means fatal**: a `FATAL` record is never filtered and aborts the
//!   process after it is written
//!
//! ```
//! use slimlog::prelude::*;
//! use slimlog::{info, sinks::MemorySink};
//!
//! let sink = MemorySink::new();
//! let mut logger = Logger::builder()
//!     .style(LineStyle::Plain)
//!     .sink(sink.clone())
//!     .build();
//!
//! info!(logger, "Hello {}", "world");
//! assert!(sink.contents().ends_with("Hello world\n"));
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        BoxedSink, LineStyle, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        LoggerMetrics, Result, SharedLogger, SourceLocation, TimestampFormat,
    };
}

pub use crate::core::{
    BoxedSink, LineFormat, LineStyle, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, LoggerMetrics, Result, SharedLogger, SharedLoggerGuard, SourceLocation,
    TimestampFormat, DEFAULT_LEVEL, STATIC_MIN_LEVEL,
};
pub use sinks::{FileSink, MemorySink};
