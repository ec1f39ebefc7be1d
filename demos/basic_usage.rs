//! Basic logger usage example
//!
//! Demonstrates the global logger, an owned logger with a file sink, and the
//! level filter.
//!
//! Run with: cargo run --example basic_usage

use slimlog::prelude::*;
use slimlog::sinks::FileSink;
use slimlog::{debug, error, info, trace, warn};

fn main() -> Result<()> {
    println!("=== slimlog - Basic Usage Example ===\n");

    println!("1. Global logger, writing to standard error:");
    slimlog::global::set_level(LogLevel::Trace);
    trace!("This is a trace message");
    debug!("This is a debug message");
    info!("Hello {}", "world");
    warn!("disk at {}%", 91);
    error!("This is an error message");

    println!("\n2. Raising the minimum level to WARN:");
    slimlog::global::set_level(LogLevel::Warn);
    info!("Info message (hidden)");
    warn!("Warning message (visible)");

    println!("\n3. Owned logger with a file sink:");
    let path = std::env::temp_dir().join("slimlog_basic_usage.log");
    let mut logger = Logger::builder()
        .config(LoggerConfig::from_env()?)
        .style(LineStyle::Plain)
        .sink(FileSink::create(&path)?)
        .build();
    info!(logger, "written to {}", path.display());
    println!("   wrote {} record(s) to {}", logger.metrics().records_written(), path.display());

    logger.reset_sink();
    warn!(logger, "back on standard error");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
