//! Process-wide default logger
//!
//! A thin convenience layer over one static [`SharedLogger`]. Code that can
//! pass a logger around should prefer an owned [`Logger`](crate::Logger).

use crate::core::{BoxedSink, LogLevel, Logger, SharedLogger, SourceLocation};
use std::fmt;
use std::io::Write;

static GLOBAL: SharedLogger = SharedLogger::new(Logger::new());

/// The default logger used by the single-argument macro forms
#[inline]
pub fn logger() -> &'static SharedLogger {
    &GLOBAL
}

pub fn set_level(level: LogLevel) {
    GLOBAL.set_level(level);
}

pub fn level() -> LogLevel {
    GLOBAL.level()
}

/// Redirect the default logger; `None` restores standard error
pub fn set_sink(sink: Option<BoxedSink>) {
    GLOBAL.set_sink(sink);
}

pub fn redirect<W: Write + Send + 'static>(sink: W) {
    GLOBAL.redirect(sink);
}

pub fn reset_sink() {
    GLOBAL.reset_sink();
}

pub fn log(level: LogLevel, location: SourceLocation, args: fmt::Arguments<'_>) {
    GLOBAL.log(level, location, args);
}
