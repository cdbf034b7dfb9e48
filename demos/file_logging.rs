//! File logging example
//!
//! Demonstrates a session that writes to the console, a session file and an
//! additional output stream at the same time.
//!
//! Run with: cargo run --example file_logging

use parking_lot::Mutex;
use session_logger::core::file_line::FileLine;
use session_logger::prelude::*;
use session_logger::{info, warning};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Session Logger - File Logging Example ===\n");

    let logger = Logger::builder()
        .log_path("./logs")
        .project_name("file_logging")
        .color(LogType::Info, "cyan")
        .build()?;

    // Streams registered before or after init both receive records
    let stream = Arc::new(Mutex::new(Vec::<u8>::new()));
    logger.add_output_stream(stream.clone());

    logger.init(VerbosityMode::FileAndConsole, &LogType::ALL)?;
    let path = logger.log_file_path();

    println!("1. Logging to console, file and stream:");
    info!(logger, "Application started");
    logger.debug("Loading configuration...");
    logger.success("Configuration loaded");
    warning!(logger, "Using default settings for", 2, "options");

    println!("\n2. Per-call options:");
    info!(logger, "Console only", CallOption::ConsoleOnly);
    info!(logger, "File only", CallOption::FileOnly);

    for i in 1..=5 {
        info!(logger, "Processing item", i, "of", 5);
    }

    logger.exit()?;

    println!("\n3. Stream received:");
    print!("{}", String::from_utf8_lossy(&stream.lock()));

    if let Some(path) = path {
        println!("\n4. Session file {}:", path.display());
        let content = std::fs::read_to_string(&path)?;
        for line in content.lines().filter_map(FileLine::parse) {
            println!(
                "   #{:<3} {:<8} {} {}",
                line.sequence, line.log_type, line.time, line.message
            );
        }
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
