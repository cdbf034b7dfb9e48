//! Logging macros for free-form call sites.
//!
//! Each macro takes the logger followed by any mix of printable values and
//! [`CallOption`](crate::CallOption)s. Values are joined with a single space;
//! options apply to the whole call wherever they appear. The trace is the
//! call site's `module_path:line`.
//!
//! # Examples
//!
//! ```
//! use session_logger::prelude::*;
//! use session_logger::{debug, info};
//!
//! let logger = Logger::new();
//!
//! // Simple usage: console and file
//! debug!(logger, "Is it simple ?", "YES");
//!
//! // Complex usage: console only
//! info!(logger, "Not too complex ?", "Maybe", CallOption::ConsoleOnly);
//!
//! // Options may come first, values need not be strings
//! let port = 8080;
//! info!(logger, CallOption::FileOnly, "listening on", port);
//! ```

/// Log a record of the given type.
///
/// # Examples
///
/// ```
/// # use session_logger::prelude::*;
/// # let logger = Logger::new();
/// use session_logger::log;
/// log!(logger, LogType::Info, "Simple message");
/// log!(logger, LogType::Error, "Error code:", 500, CallOption::ConsoleOnly);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $log_type:expr $(, $arg:expr)* $(,)?) => {
        $logger.log_args(
            $log_type,
            concat!(module_path!(), ":", line!()),
            vec![$($crate::IntoLogArg::into_log_arg($arg)),*],
        )
    };
}

/// Log an info record.
///
/// # Examples
///
/// ```
/// # use session_logger::prelude::*;
/// # let logger = Logger::new();
/// use session_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing", 100, "items");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogType::Info $(, $arg)*)
    };
}

/// Log a success record.
///
/// # Examples
///
/// ```
/// # use session_logger::prelude::*;
/// # let logger = Logger::new();
/// use session_logger::success;
/// success!(logger, "Migration applied");
/// ```
#[macro_export]
macro_rules! success {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogType::Success $(, $arg)*)
    };
}

/// Log an error record.
///
/// # Examples
///
/// ```
/// # use session_logger::prelude::*;
/// # let logger = Logger::new();
/// use session_logger::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code:", 500, "message:", "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogType::Error $(, $arg)*)
    };
}

/// Log a warning record.
///
/// # Examples
///
/// ```
/// # use session_logger::prelude::*;
/// # let logger = Logger::new();
/// use session_logger::warning;
/// warning!(logger, "Low disk space");
/// warning!(logger, "Retry attempt", 3, "of", 5, CallOption::FileOnly);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogType::Warning $(, $arg)*)
    };
}

/// Log a debug record.
///
/// # Examples
///
/// ```
/// # use session_logger::prelude::*;
/// # let logger = Logger::new();
/// use session_logger::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value:", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogType::Debug $(, $arg)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{CallOption, LogType, Logger, VerbosityMode};
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn console_logger() -> (Logger, Arc<Mutex<Vec<u8>>>) {
        let console = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::builder()
            .use_colors(false)
            .console_writer(console.clone())
            .build()
            .expect("valid config");
        logger
            .init(VerbosityMode::ConsoleOnly, &LogType::ALL)
            .expect("init");
        (logger, console)
    }

    fn output(console: &Arc<Mutex<Vec<u8>>>) -> String {
        String::from_utf8(console.lock().clone()).expect("utf-8")
    }

    #[test]
    fn test_log_macro() {
        let (logger, console) = console_logger();
        log!(logger, LogType::Info, "Test message");
        log!(logger, LogType::Info, "Value:", 42);
        let out = output(&console);
        assert!(out.contains("\tTest message\n"));
        assert!(out.contains("\tValue: 42\n"));
    }

    #[test]
    fn test_trace_is_module_and_line() {
        let (logger, console) = console_logger();
        info!(logger, "where");
        let line = line!() - 1;
        assert!(output(&console).contains(&format!("[{}:{}]\twhere", module_path!(), line)));
    }

    #[test]
    fn test_type_macros() {
        let (logger, console) = console_logger();
        info!(logger, "i");
        success!(logger, "s");
        error!(logger, "e");
        warning!(logger, "w");
        debug!(logger, "d");
        assert_eq!(output(&console).lines().count(), 5);
    }

    #[test]
    fn test_file_only_option_hides_console_line() {
        let (logger, console) = console_logger();
        debug!(logger, "hidden", CallOption::FileOnly);
        debug!(logger, CallOption::ConsoleOnly, "shown", 1);
        let out = output(&console);
        assert!(!out.contains("hidden"));
        assert!(out.contains("\tshown 1\n"));
    }

    #[test]
    fn test_no_arguments_logs_empty_message() {
        let (logger, console) = console_logger();
        info!(logger);
        assert!(output(&console).ends_with("]\t\n"));
    }
}
