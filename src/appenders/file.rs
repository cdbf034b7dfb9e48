//! Session file appender implementation

use crate::core::template::{self, FILE_TEMPLATE};
use crate::core::{Appender, LogRecord, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes one session's records to its own file.
///
/// The file is created fresh when the session starts and every record is
/// flushed as soon as it is written.
pub struct FileAppender {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    template: String,
}

impl FileAppender {
    /// Create (or truncate) the session file at `path`.
    ///
    /// With the `file-lock` feature the file is held under an exclusive
    /// advisory lock until the appender is closed.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| LoggerError::file_appender(path.display().to_string(), e.to_string()))?;

        #[cfg(feature = "file-lock")]
        {
            use fs2::FileExt;
            file.try_lock_exclusive()
                .map_err(|_| LoggerError::file_lock(path.display().to_string()))?;
        }

        // Truncate only once the file is ours
        file.set_len(0)
            .map_err(|e| LoggerError::file_appender(path.display().to_string(), e.to_string()))?;

        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
            template: FILE_TEMPLATE.to_string(),
        })
    }

    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush and release the file. Later appends fail.
    pub fn close(&mut self) -> Result<()> {
        match self.writer.take() {
            Some(mut writer) => writer.flush().map_err(|e| {
                LoggerError::io_operation("closing log file", self.path.display().to_string(), e)
            }),
            None => Ok(()),
        }
    }
}

impl Appender for FileAppender {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::writer("File writer not initialized"))?;

        let mut line = template::render(&self.template, record);
        line.push('\n');

        writer.write_all(line.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
