//! # Session Logger
//!
//! A thread-safe logging facility that renders each record through a small
//! template language and dispatches it to the console, a per-session log
//! file, and any number of additional writers.
//!
//! ## Features
//!
//! - **Templates**: `%`-directive templates per output (`[%n-%h-%t]\t[%T]\t%C`)
//! - **Routing**: session verbosity plus per-call `CONSOLE_ONLY` / `FILE_ONLY`
//! - **Thread Safe**: unique, gap-free sequence numbers under concurrent writers
//! - **Fire and Forget**: write failures are reported, never propagated
//!
//! ## Example
//!
//! ```no_run
//! use session_logger::prelude::*;
//! use session_logger::{info, warning};
//!
//! let logger = Logger::new();
//! logger.init(VerbosityMode::FileAndConsole, &LogType::ALL).unwrap();
//!
//! info!(logger, "Server listening on port", 8080);
//! warning!(logger, "Cache disabled", CallOption::ConsoleOnly);
//!
//! logger.exit().unwrap();
//! ```

pub mod appenders;
pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, StreamAppender};
    pub use crate::core::{
        Appender, CallOption, CallOptions, ColorTable, FileLine, IntoLogArg, LogArg, LogRecord,
        LogType, Logger, LoggerBuilder, LoggerConfig, LoggerError, Result, SinkMetrics, TypeSet,
        VerbosityMode,
    };
}

pub use appenders::{ConsoleAppender, FileAppender, StreamAppender};
pub use core::{
    Appender, CallOption, CallOptions, ColorTable, FileLine, IntoLogArg, LogArg, LogRecord,
    LogType, Logger, LoggerBuilder, LoggerConfig, LoggerError, Result, SinkMetrics, TypeSet,
    VerbosityMode,
};
