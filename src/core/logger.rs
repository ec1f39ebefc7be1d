//! Main logger implementation

use super::{
    config::{LineStyle, LoggerConfig},
    error::Result,
    format::LineFormat,
    log_level::{LogLevel, DEFAULT_LEVEL},
    log_record::{LogRecord, SourceLocation},
    metrics::LoggerMetrics,
    shared::SharedLogger,
    timestamp::TimestampFormat,
};
use std::fmt;
use std::io::{self, Write};

/// Owned output handle. `None` in [`Logger::set_sink`] means standard error.
pub type BoxedSink = Box<dyn Write + Send>;

/// A single-owner logger.
///
/// Every mutating call, including [`Logger::log`], takes `&mut self`, so a
/// `Logger` is never shared without a lock. Wrap it in a [`SharedLogger`] for
/// concurrent use.
///
/// # Example
///
/// ```
/// use slimlog::prelude::*;
/// use slimlog::{location, sinks::MemorySink};
///
/// let sink = MemorySink::new();
/// let mut logger = Logger::builder()
///     .min_level(LogLevel::Warn)
///     .style(LineStyle::Plain)
///     .sink(sink.clone())
///     .build();
///
/// logger.log(LogLevel::Info, location!(), format_args!("hidden"));
/// logger.log(LogLevel::Warn, location!(), format_args!("disk at {}%", 91));
///
/// assert_eq!(sink.lines().len(), 1);
/// assert!(sink.contents().contains("disk at 91%"));
/// ```
pub struct Logger {
    min_level: LogLevel,
    format: LineFormat,
    sink: Option<BoxedSink>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Logger with the compiled-in defaults, writing to standard error
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_level: DEFAULT_LEVEL,
            format: LineFormat {
                style: LineStyle::default_style(),
                timestamp_format: TimestampFormat::Local,
                escape_newlines: false,
            },
            sink: None,
            metrics: LoggerMetrics::new(),
        }
    }

    #[must_use]
    pub fn from_config(config: LoggerConfig) -> Self {
        Self {
            min_level: config.min_level,
            format: LineFormat {
                style: config.style,
                timestamp_format: config.timestamp_format,
                escape_newlines: config.escape_newlines,
            },
            sink: None,
            metrics: LoggerMetrics::new(),
        }
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }

    #[inline]
    pub const fn level(&self) -> LogLevel {
        self.min_level
    }

    /// Replace the output handle; `None` goes back to standard error.
    ///
    /// The previous handle is dropped. Nothing checks that the new one is
    /// usable: write failures show up only in [`Logger::metrics`] or
    /// [`Logger::try_log`].
    pub fn set_sink(&mut self, sink: Option<BoxedSink>) {
        self.sink = sink;
    }

    pub fn redirect<W: Write + Send + 'static>(&mut self, sink: W) {
        self.set_sink(Some(Box::new(sink)));
    }

    pub fn reset_sink(&mut self) {
        self.set_sink(None);
    }

    pub fn has_custom_sink(&self) -> bool {
        self.sink.is_some()
    }

    pub fn line_format(&self) -> &LineFormat {
        &self.format
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    #[inline]
    pub const fn enabled(&self, level: LogLevel) -> bool {
        self.min_level.permits(level)
    }

    /// Filter, format and write one record, then flush.
    ///
    /// Write errors are swallowed. A `Fatal` record aborts the process after
    /// the write attempt, whether or not it succeeded.
    pub fn log(&mut self, level: LogLevel, location: SourceLocation, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }

        let _ = self.emit(level, location, args);
    }

    /// Like [`Logger::log`] but reports format and I/O failures.
    pub fn try_log(
        &mut self,
        level: LogLevel,
        location: SourceLocation,
        args: fmt::Arguments<'_>,
    ) -> Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }

        self.emit(level, location, args)
    }

    #[inline]
    pub fn trace(&mut self, location: SourceLocation, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Trace, location, args);
    }

    #[inline]
    pub fn debug(&mut self, location: SourceLocation, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Debug, location, args);
    }

    #[inline]
    pub fn info(&mut self, location: SourceLocation, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, location, args);
    }

    #[inline]
    pub fn warn(&mut self, location: SourceLocation, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Warn, location, args);
    }

    #[inline]
    pub fn error(&mut self, location: SourceLocation, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, location, args);
    }

    pub fn fatal(&mut self, location: SourceLocation, args: fmt::Arguments<'_>) -> ! {
        let _ = self.emit(LogLevel::Fatal, location, args);
        abort_process()
    }

    fn emit(
        &mut self,
        level: LogLevel,
        location: SourceLocation,
        args: fmt::Arguments<'_>,
    ) -> Result<()> {
        // Armed before formatting so a panicking `Display` or sink still aborts
        let _fatal = (level == LogLevel::Fatal).then_some(AbortOnDrop);

        let record = LogRecord::capture(level, location, args);
        let result = self.write_record(&record);

        if result.is_ok() {
            self.metrics.record_written();
        } else {
            self.metrics.record_write_failure();
        }

        result
    }

    fn write_record(&mut self, record: &LogRecord<'_>) -> Result<()> {
        let line = self.format.render(record)?;

        match self.sink.as_mut() {
            Some(sink) => write_and_flush(sink.as_mut(), &line),
            None => write_and_flush(&mut io::stderr().lock(), &line),
        }
    }
}

fn write_and_flush<W: Write + ?Sized>(out: &mut W, line: &str) -> Result<()> {
    out.write_all(line.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Terminate the process abnormally (`SIGABRT` on Unix)
#[cold]
pub fn abort_process() -> ! {
    std::process::abort()
}

/// Aborts the process when dropped, on return or during unwinding.
struct AbortOnDrop;

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        abort_process();
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level)
            .field("format", &self.format)
            .field("custom_sink", &self.sink.is_some())
            .field("metrics", &self.metrics)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use slimlog::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .style(LineStyle::Plain)
///     .timestamp_format(TimestampFormat::Utc)
///     .build();
/// assert_eq!(logger.level(), LogLevel::Debug);
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    sink: Option<BoxedSink>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            sink: None,
        }
    }

    /// Replace every option with those in `config`
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.config.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn style(mut self, style: LineStyle) -> Self {
        self.config.style = style;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.config.timestamp_format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn escape_newlines(mut self, escape: bool) -> Self {
        self.config.escape_newlines = escape;
        self
    }

    /// Write to `sink` instead of standard error
    #[must_use = "builder methods return a new value"]
    pub fn sink<W: Write + Send + 'static>(mut self, sink: W) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let mut logger = Logger::from_config(self.config);
        logger.set_sink(self.sink);
        logger
    }

    /// Build a [`SharedLogger`] guarded by a `parking_lot` mutex
    pub fn build_shared(self) -> SharedLogger {
        SharedLogger::new(self.build())
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
