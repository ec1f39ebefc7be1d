//! Logging macros for ergonomic log message formatting.
//!
//! Every macro captures the call site with `file!()` and `line!()` and takes
//! `format!`-style arguments. Pass a logger first to log through it, or leave
//! it out to use the process-wide default from [`crate::global`].
//!
//! Calls below [`STATIC_MIN_LEVEL`](crate::STATIC_MIN_LEVEL) are compiled out;
//! the argument expressions are never evaluated.
//!
//! # Examples
//!
//! ```
//! use slimlog::prelude::*;
//! use slimlog::{info, warn, sinks::MemorySink};
//!
//! let sink = MemorySink::new();
//! let mut logger = Logger::builder().sink(sink.clone()).build();
//!
//! // Through an owned logger
//! info!(logger, "Server listening on port {}", 8080);
//!
//! // Through the global logger
//! warn!("Low disk space: {}% free", 9);
//!
//! assert!(sink.contents().contains("Server listening on port 8080"));
//! ```

/// Build a [`SourceLocation`](crate::SourceLocation) for the call site.
#[macro_export]
macro_rules! location {
    () => {
        $crate::SourceLocation::new(file!(), line!())
    };
}

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use slimlog::prelude::*;
/// # let mut logger = Logger::new();
/// use slimlog::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let level: $crate::LogLevel = $level;
        if $crate::STATIC_MIN_LEVEL.permits(level) {
            $logger.log(level, $crate::location!(), format_args!($($arg)+));
        }
    }};
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use slimlog::prelude::*;
/// # let mut logger = Logger::new();
/// # logger.set_level(LogLevel::Trace);
/// use slimlog::trace;
/// trace!(logger, "Entering function: calculate()");
/// trace!("Variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::global::logger(), $crate::LogLevel::Trace, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use slimlog::prelude::*;
/// # let mut logger = Logger::new();
/// use slimlog::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::global::logger(), $crate::LogLevel::Debug, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use slimlog::prelude::*;
/// # let mut logger = Logger::new();
/// use slimlog::info;
/// info!(logger, "Processing {} items", 100);
/// info!("Hello {}", "world");
/// ```
#[macro_export]
macro_rules! info {
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::global::logger(), $crate::LogLevel::Info, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use slimlog::prelude::*;
/// # let mut logger = Logger::new();
/// use slimlog::warn;
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::global::logger(), $crate::LogLevel::Warn, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use slimlog::prelude::*;
/// # let mut logger = Logger::new();
/// use slimlog::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::global::logger(), $crate::LogLevel::Error, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message and abort the process.
///
/// Never filtered and never returns, so it can end a diverging branch.
///
/// # Examples
///
/// ```no_run
/// # use slimlog::prelude::*;
/// # let mut logger = Logger::new();
/// use slimlog::fatal;
/// let config: Option<&str> = None;
/// let path = match config {
///     Some(path) => path,
///     None => fatal!(logger, "Unable to recover from error: {}", "missing config"),
/// };
/// ```
#[macro_export]
macro_rules! fatal {
    ($fmt:literal $($arg:tt)*) => {
        $crate::fatal!($crate::global::logger(), $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {{
        $logger.log($crate::LogLevel::Fatal, $crate::location!(), format_args!($($arg)+));
        $crate::core::logger::abort_process()
    }};
}
