//! Process-wide logger
//!
//! For programs that want one logger reachable from everywhere without
//! passing it around. The instance uses the default configuration and is
//! created on first use. Because statics are never dropped, call [`exit`]
//! before the process ends to write the end marker and close the file.
//!
//! ```no_run
//! use session_logger::{global, info, LogType, VerbosityMode};
//!
//! global::init(VerbosityMode::FileAndConsole, &LogType::ALL).unwrap();
//! info!(global::logger(), "from anywhere");
//! global::exit().unwrap();
//! ```

use crate::core::{LogType, Logger, Result, VerbosityMode};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::{Arc, OnceLock};

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger
pub fn logger() -> &'static Logger {
    LOGGER.get_or_init(Logger::new)
}

#[track_caller]
pub fn init(verbosity: VerbosityMode, enabled_types: &[LogType]) -> Result<()> {
    logger().init(verbosity, enabled_types)
}

#[track_caller]
pub fn exit() -> Result<()> {
    logger().exit()
}

pub fn add_output_stream<W>(writer: Arc<Mutex<W>>)
where
    W: Write + Send + 'static,
{
    logger().add_output_stream(writer);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_instance_everywhere() {
        let a = logger() as *const Logger;
        let b = logger() as *const Logger;
        assert_eq!(a, b);
    }
}
