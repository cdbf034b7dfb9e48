//! Additional output streams

use crate::core::template::{self, ADDITIONAL_TEMPLATE};
use crate::core::{Appender, LogRecord, LoggerError, Result};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// A writer shared between the caller and the logger. The caller keeps it
/// alive; the logger only holds a handle.
pub type SharedWriter = Arc<Mutex<dyn Write + Send>>;

pub struct StreamAppender {
    name: String,
    writer: SharedWriter,
    template: String,
}

impl StreamAppender {
    pub fn new(name: impl Into<String>, writer: SharedWriter) -> Self {
        Self {
            name: name.into(),
            writer,
            template: ADDITIONAL_TEMPLATE.to_string(),
        }
    }

    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }
}

impl Appender for StreamAppender {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        let mut line = template::render(&self.template, record);
        line.push('\n');

        self.writer
            .lock()
            .write_all(line.as_bytes())
            .map_err(|e| {
                LoggerError::io_operation("writing to output stream", format!("{}: {}", self.name, e), e)
            })
    }

    fn flush(&mut self) -> Result<()> {
        self.writer
            .lock()
            .flush()
            .map_err(|e| {
                LoggerError::io_operation("flushing output stream", format!("{}: {}", self.name, e), e)
            })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
