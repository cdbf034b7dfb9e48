//! Threaded logging example
//!
//! Several threads share one logger through the process-wide instance.
//! Sequence numbers stay unique and the session file stays in order.
//!
//! Run with: cargo run --example threaded_logging

use session_logger::prelude::*;
use session_logger::{global, info, success};
use std::thread;

fn main() -> Result<()> {
    println!("=== Session Logger - Threaded Logging Example ===\n");

    global::init(VerbosityMode::FileAndConsole, &[LogType::Success, LogType::Error])?;

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            thread::spawn(move || {
                for job in 0..10 {
                    info!(global::logger(), "worker", worker, "job", job);
                }
                success!(global::logger(), "worker", worker, "done");
            })
        })
        .collect();

    for handle in handles {
        if handle.join().is_err() {
            global::logger().error("worker thread panicked");
        }
    }

    let logger = global::logger();
    println!(
        "\n{} calls, {} file lines, next sequence {}",
        logger.metrics().calls(),
        logger.metrics().file_lines(),
        logger.sequence()
    );
    if let Some(path) = logger.log_file_path() {
        println!("Session file: {}", path.display());
    }

    global::exit()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
