//! Thread-safe logger wrapper
//!
//! The lock primitive is a type parameter: any [`lock_api::RawMutex`] works,
//! so targets without `std` threads can plug in their own lock/unlock
//! implementation. The default is `parking_lot`'s mutex.
//!
//! The lock is not reentrant. A record logged while the same thread is
//! already writing to this logger (from a `Display` impl of one of the
//! arguments, or while holding [`SharedLogger::lock`]) is dropped and counted
//! in [`SharedLogger::reentrant_drops`] instead of deadlocking. A dropped
//! `Fatal` record still aborts.

use super::{
    error::{LoggerError, Result},
    log_level::LogLevel,
    log_record::SourceLocation,
    logger::{abort_process, BoxedSink, Logger},
};
use parking_lot::lock_api::{self, MutexGuard, RawMutex};
use std::fmt;
use std::io::Write;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicU64, AtomicU8, AtomicUsize, Ordering};

/// Nonzero token unique among live threads
fn thread_token() -> usize {
    thread_local!(static TOKEN: u8 = 0);
    TOKEN.with(|token| token as *const u8 as usize)
}

/// A [`Logger`] behind a caller-chosen mutex.
///
/// The lock is held across state read, formatting, write and flush, so
/// concurrent records never interleave. The minimum level is mirrored in an
/// atomic; disabled calls return without touching the lock.
///
/// # Example
///
/// ```
/// use slimlog::prelude::*;
/// use slimlog::{info, sinks::MemorySink};
/// use std::sync::Arc;
///
/// let sink = MemorySink::new();
/// let logger = Arc::new(Logger::builder().sink(sink.clone()).build_shared());
///
/// let handles: Vec<_> = (0..4)
///     .map(|id| {
///         let logger = Arc::clone(&logger);
///         std::thread::spawn(move || info!(logger, "worker {} done", id))
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(sink.lines().len(), 4);
/// ```
pub struct SharedLogger<R: RawMutex = parking_lot::RawMutex> {
    min_level: AtomicU8,
    /// `thread_token()` of the lock holder, 0 when unlocked
    owner: AtomicUsize,
    reentrant_drops: AtomicU64,
    inner: lock_api::Mutex<R, Logger>,
}

impl<R: RawMutex> SharedLogger<R> {
    pub const fn new(logger: Logger) -> Self {
        Self {
            min_level: AtomicU8::new(logger.level().as_u8()),
            owner: AtomicUsize::new(0),
            reentrant_drops: AtomicU64::new(0),
            inner: lock_api::Mutex::const_new(R::INIT, logger),
        }
    }

    #[inline]
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.min_level.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, level: LogLevel) {
        self.lock().set_level(level);
    }

    pub fn set_sink(&self, sink: Option<BoxedSink>) {
        self.lock().set_sink(sink);
    }

    pub fn redirect<W: Write + Send + 'static>(&self, sink: W) {
        self.lock().redirect(sink);
    }

    pub fn reset_sink(&self) {
        self.lock().reset_sink();
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.level().permits(level)
    }

    pub fn log(&self, level: LogLevel, location: SourceLocation, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }

        if let Some(mut logger) = self.lock_for_emit(level) {
            logger.log(level, location, args);
        }
    }

    /// Like [`SharedLogger::log`] but reports failures, including
    /// [`LoggerError::Reentrant`] for a dropped nested record.
    pub fn try_log(
        &self,
        level: LogLevel,
        location: SourceLocation,
        args: fmt::Arguments<'_>,
    ) -> Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }

        match self.lock_for_emit(level) {
            Some(mut logger) => logger.try_log(level, location, args),
            None => Err(LoggerError::Reentrant),
        }
    }

    #[inline]
    pub fn trace(&self, location: SourceLocation, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Trace, location, args);
    }

    #[inline]
    pub fn debug(&self, location: SourceLocation, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Debug, location, args);
    }

    #[inline]
    pub fn info(&self, location: SourceLocation, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, location, args);
    }

    #[inline]
    pub fn warn(&self, location: SourceLocation, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Warn, location, args);
    }

    #[inline]
    pub fn error(&self, location: SourceLocation, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, location, args);
    }

    pub fn fatal(&self, location: SourceLocation, args: fmt::Arguments<'_>) -> ! {
        if let Some(mut logger) = self.lock_for_emit(LogLevel::Fatal) {
            logger.fatal(location, args);
        }
        abort_process()
    }

    /// Lock the inner logger for direct access.
    ///
    /// Level changes made through the guard are copied to the atomic mirror
    /// when it is dropped. Log calls on this logger from the same thread
    /// while the guard is alive are dropped; other threads block.
    pub fn lock(&self) -> SharedLoggerGuard<'_, R> {
        let logger = self.inner.lock();
        self.owner.store(thread_token(), Ordering::Relaxed);
        SharedLoggerGuard {
            shared: self,
            logger,
        }
    }

    /// `None` when this thread already holds the lock. A nested `Fatal`
    /// aborts here since its record cannot be written.
    fn lock_for_emit(&self, level: LogLevel) -> Option<SharedLoggerGuard<'_, R>> {
        if self.owner.load(Ordering::Relaxed) == thread_token() {
            self.reentrant_drops.fetch_add(1, Ordering::Relaxed);
            if level == LogLevel::Fatal {
                abort_process();
            }
            return None;
        }

        Some(self.lock())
    }

    pub fn records_written(&self) -> u64 {
        self.lock().metrics().records_written()
    }

    pub fn write_failures(&self) -> u64 {
        self.lock().metrics().write_failures()
    }

    /// Records dropped because they were logged while this thread was
    /// already writing to this logger
    pub fn reentrant_drops(&self) -> u64 {
        self.reentrant_drops.load(Ordering::Relaxed)
    }

    pub fn into_inner(self) -> Logger {
        self.inner.into_inner()
    }
}

/// Exclusive access to the [`Logger`] inside a [`SharedLogger`].
///
/// Dropping the guard publishes the inner level to the lock-free mirror and
/// then releases the lock.
pub struct SharedLoggerGuard<'a, R: RawMutex = parking_lot::RawMutex> {
    shared: &'a SharedLogger<R>,
    logger: MutexGuard<'a, R, Logger>,
}

impl<R: RawMutex> Deref for SharedLoggerGuard<'_, R> {
    type Target = Logger;

    fn deref(&self) -> &Logger {
        &self.logger
    }
}

impl<R: RawMutex> DerefMut for SharedLoggerGuard<'_, R> {
    fn deref_mut(&mut self) -> &mut Logger {
        &mut self.logger
    }
}

impl<R: RawMutex> Drop for SharedLoggerGuard<'_, R> {
    fn drop(&mut self) {
        self.shared
            .min_level
            .store(self.logger.level().as_u8(), Ordering::Relaxed);
        self.shared.owner.store(0, Ordering::Relaxed);
        // `logger` unlocks after this returns
    }
}

impl<R: RawMutex> From<Logger> for SharedLogger<R> {
    fn from(logger: Logger) -> Self {
        Self::new(logger)
    }
}

impl<R: RawMutex> Default for SharedLogger<R> {
    fn default() -> Self {
        Self::new(Logger::new())
    }
}

impl<R: RawMutex> fmt::Debug for SharedLogger<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedLogger")
            .field("min_level", &self.level())
            .finish_non_exhaustive()
    }
}
