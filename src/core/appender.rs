//! Appender trait for log output destinations

use super::{error::Result, log_record::LogRecord};

pub trait Appender: Send {
    /// Render `record` with this appender's template and write it as one line
    fn append(&mut self, record: &LogRecord) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
