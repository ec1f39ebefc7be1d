//! Sink implementations
//!
//! Any `Write + Send` value can be a sink; these cover the common cases.
//! Standard error is the implicit default and needs no wrapper.

pub mod file;
pub mod memory;

pub use file::FileSink;
pub use memory::MemorySink;

pub use crate::core::BoxedSink;
