//! Basic logger usage example
//!
//! Demonstrates a console-only session, the log types and per-call options.
//!
//! Run with: cargo run --example basic_usage

use session_logger::prelude::*;
use session_logger::{debug, error, info, success, warning};

fn main() -> Result<()> {
    println!("=== Session Logger - Basic Usage Example ===\n");

    // A console-only session never touches the file system
    let logger = Logger::new();
    logger.init(VerbosityMode::ConsoleOnly, &LogType::ALL)?;

    println!("1. Logging with each type:");
    info!(logger, "This is an info message");
    success!(logger, "This is a success message");
    warning!(logger, "This is a warning message");
    error!(logger, "This is an error message");
    debug!(logger, "This is a debug message");

    println!("\n2. Free-form arguments are joined with spaces:");
    info!(logger, "Listening on", "0.0.0.0", "port", 8080);
    success!(logger, "Loaded", 3, "plugins in", 1.5, "ms");

    println!("\n3. Methods trace the calling file and line:");
    logger.info("Traced with file:line");

    println!("\n4. Calling init twice is reported and rejected:");
    if let Err(e) = logger.init(VerbosityMode::ConsoleOnly, &LogType::ALL) {
        println!("   init returned: {}", e);
    }

    logger.exit()?;

    println!("\n5. Only some types shown on the console:");
    let quiet = Logger::new();
    quiet.init(VerbosityMode::ConsoleOnly, &[LogType::Error, LogType::Warning])?;
    info!(quiet, "Info message (hidden)");
    debug!(quiet, "Debug message (hidden)");
    warning!(quiet, "Warning message (visible)");
    error!(quiet, "Error message (visible)");
    quiet.exit()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
