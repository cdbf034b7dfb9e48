//! Session logger implementation
//!
//! A [`Logger`] owns one logging session at a time. `init` opens the session
//! (and its file, when the verbosity needs one), the log calls render and
//! dispatch records, `exit` closes it. Dropping the logger closes a session
//! that is still open.
//!
//! `init` and `exit` are meant to be called from a single controlling
//! thread, bracketing the logging activity. Log calls may come from any
//! number of threads.

use super::{
    appender::Appender,
    config::LoggerConfig,
    error::{LoggerError, Result},
    log_arg::{partition_args, LogArg},
    log_record::LogRecord,
    log_type::{LogType, TypeSet},
    metrics::SinkMetrics,
    routing::{CallOptions, Route, VerbosityMode},
};
use crate::appenders::{ConsoleAppender, ConsoleTarget, FileAppender, SharedWriter, StreamAppender};
use chrono::{Local, NaiveDateTime};
use parking_lot::{Mutex, RwLock};
use std::io::Write;
use std::panic::Location;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy)]
struct SessionState {
    initialized: bool,
    verbosity: VerbosityMode,
    enabled: TypeSet,
    started_at: Option<NaiveDateTime>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            initialized: false,
            verbosity: VerbosityMode::FileAndConsole,
            enabled: TypeSet::empty(),
            started_at: None,
        }
    }
}

pub struct Logger {
    config: LoggerConfig,
    state: RwLock<SessionState>,
    /// Sequence number of the next accepted call
    counter: AtomicU64,
    console: Mutex<ConsoleAppender>,
    /// The one session file; this mutex is the file lock
    file: Mutex<Option<FileAppender>>,
    streams: Mutex<Vec<StreamAppender>>,
    metrics: Arc<SinkMetrics>,
}

impl Logger {
    /// Logger with the default configuration, writing its console to stdout
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LoggerConfig::default())
    }

    #[must_use]
    pub fn with_config(config: LoggerConfig) -> Self {
        Self::from_parts(config, ConsoleTarget::Stdout)
    }

    fn from_parts(config: LoggerConfig, console_target: ConsoleTarget) -> Self {
        let console = ConsoleAppender::with_colors(config.use_colors)
            .with_template(config.console_template.clone())
            .with_color_table(&config.colors)
            .with_target(console_target);

        Self {
            config,
            state: RwLock::new(SessionState::default()),
            counter: AtomicU64::new(0),
            console: Mutex::new(console),
            file: Mutex::new(None),
            streams: Mutex::new(Vec::new()),
            metrics: Arc::new(SinkMetrics::new()),
        }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Start a session.
    ///
    /// Records the verbosity and the types shown on the console. When the
    /// verbosity needs a file, the log directory is created if missing and a
    /// fresh session file is opened; if that fails the session stays closed
    /// and `init` may be retried.
    ///
    /// Calling `init` on a running session changes nothing and returns
    /// [`LoggerError::AlreadyInitialized`]. All failures are also reported on
    /// the console.
    #[track_caller]
    pub fn init(&self, verbosity: VerbosityMode, enabled_types: &[LogType]) -> Result<()> {
        let trace = caller_trace(Location::caller());

        if self.is_initialized() {
            self.log(
                LogType::Warning,
                &trace,
                &LoggerError::AlreadyInitialized.to_string(),
                CallOptions::CONSOLE_ONLY,
            );
            return Err(LoggerError::AlreadyInitialized);
        }

        let enabled: TypeSet = enabled_types.iter().collect();
        let started_at = Local::now().naive_local();
        let mut dir_created = false;

        if verbosity.needs_file() {
            match self.open_session_file(&started_at) {
                Ok((appender, created)) => {
                    *self.file.lock() = Some(appender);
                    dir_created = created;
                }
                Err(e) => {
                    // Requested settings route this report but are not kept
                    let route = Route::evaluate(
                        verbosity,
                        CallOptions::CONSOLE_ONLY,
                        LogType::Error,
                        &enabled,
                    );
                    let record =
                        LogRecord::new(LogType::Error, &trace, &format!("Log error: {}", e));
                    self.dispatch(record, route, false);
                    return Err(e);
                }
            }
        }

        {
            let mut state = self.state.write();
            state.initialized = true;
            state.verbosity = verbosity;
            state.enabled = enabled;
            state.started_at = Some(started_at);
        }

        self.log(LogType::Info, &trace, "Log start", CallOptions::FILE_ONLY);
        if dir_created {
            self.warning_at(&trace, "Log directory created");
        }

        Ok(())
    }

    fn open_session_file(&self, started_at: &NaiveDateTime) -> Result<(FileAppender, bool)> {
        let dir = self.config.log_path();
        let dir_created = !dir.is_dir();
        if dir_created {
            std::fs::create_dir_all(dir).map_err(|e| {
                LoggerError::io_operation("creating log directory", dir.display().to_string(), e)
            })?;
        }

        let appender = FileAppender::create(self.config.session_file_path(started_at))?
            .with_template(self.config.file_template.clone());
        Ok((appender, dir_created))
    }

    /// End the session: write the end marker, close the session, release
    /// the file.
    ///
    /// Without a running session this reports an error on the console and
    /// returns [`LoggerError::NotInitialized`]. A failure while closing the
    /// file is swallowed; the handle is discarded either way.
    #[track_caller]
    pub fn exit(&self) -> Result<()> {
        let trace = caller_trace(Location::caller());
        self.exit_at(&trace)
    }

    fn exit_at(&self, trace: &str) -> Result<()> {
        if !self.is_initialized() {
            self.log(
                LogType::Error,
                trace,
                "Please init logger before exit",
                CallOptions::CONSOLE_ONLY,
            );
            return Err(LoggerError::NotInitialized);
        }

        self.log(LogType::Info, trace, "End log", CallOptions::FILE_ONLY);
        self.state.write().initialized = false;

        if let Some(mut appender) = self.file.lock().take() {
            let _ = appender.close();
        }
        let _ = self.console.lock().flush();

        Ok(())
    }

    /// Register an additional output. Streams receive every call that is
    /// neither console-only nor file-only while the verbosity is
    /// [`VerbosityMode::FileAndConsole`]. The caller keeps ownership of the
    /// writer.
    ///
    /// # Example
    ///
    /// ```
    /// use parking_lot::Mutex;
    /// use session_logger::Logger;
    /// use std::sync::Arc;
    ///
    /// let logger = Logger::new();
    /// let buffer = Arc::new(Mutex::new(Vec::<u8>::new()));
    /// logger.add_output_stream(buffer.clone());
    /// ```
    pub fn add_output_stream<W>(&self, writer: Arc<Mutex<W>>)
    where
        W: Write + Send + 'static,
    {
        let writer: SharedWriter = writer;
        let mut streams = self.streams.lock();
        let name = format!("output stream #{}", streams.len());
        streams.push(
            StreamAppender::new(name, writer).with_template(self.config.additional_template.clone()),
        );
    }

    /// Log `message` with an explicit trace and option set.
    ///
    /// Never fails: write errors are reported on the console.
    pub fn log(&self, log_type: LogType, trace: &str, message: &str, options: CallOptions) {
        let state = *self.state.read();
        let route = Route::evaluate(state.verbosity, options, log_type, &state.enabled);
        let record = LogRecord::new(log_type, trace, message);
        self.dispatch(record, route, state.initialized);
    }

    /// Log a free-form argument list: message fragments are joined with a
    /// single space, options are collected wherever they appear.
    pub fn log_args(&self, log_type: LogType, trace: &str, args: Vec<LogArg>) {
        let (message, options) = partition_args(args);
        self.log(log_type, trace, &message, options);
    }

    fn dispatch(&self, mut record: LogRecord, route: Route, initialized: bool) {
        self.metrics.record_call();

        let mut file_error = None;
        if route.to_file {
            let mut file = self.file.lock();
            // Allocated under the file lock so file lines follow sequence order
            record.sequence = self.next_sequence();
            match file.as_mut() {
                Some(appender) => match appender.append(&record) {
                    Ok(()) => {
                        self.metrics.record_file_line();
                    }
                    Err(e) => file_error = Some(e),
                },
                None if !initialized => file_error = Some(LoggerError::NotInitialized),
                None => {}
            }
        } else {
            record.sequence = self.next_sequence();
        }

        if route.to_console {
            self.write_console(&record);
        }

        if let Some(e) = file_error {
            self.metrics.record_file_failure();
            self.report(&record.trace, &e);
        }

        if route.to_additional {
            let failures: Vec<LoggerError> = {
                let mut streams = self.streams.lock();
                streams
                    .iter_mut()
                    .filter_map(|stream| match stream.append(&record) {
                        Ok(()) => {
                            self.metrics.record_additional_line();
                            None
                        }
                        Err(e) => {
                            self.metrics.record_additional_failure();
                            Some(e)
                        }
                    })
                    .collect()
            };
            for e in failures {
                self.report(&record.trace, &e);
            }
        }
    }

    fn write_console(&self, record: &LogRecord) {
        match self.console.lock().append(record) {
            Ok(()) => {
                self.metrics.record_console_line();
            }
            // The console cannot report its own failure
            Err(e) => eprintln!("[LOGGER ERROR] Console write failed: {}", e),
        }
    }

    /// Console-only error report through the logger itself
    fn report(&self, trace: &str, error: &LoggerError) {
        self.log(LogType::Error, trace, &error.to_string(), CallOptions::CONSOLE_ONLY);
    }

    fn warning_at(&self, trace: &str, message: &str) {
        self.log(LogType::Warning, trace, message, CallOptions::NONE);
    }

    #[inline]
    fn next_sequence(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst)
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log_here(LogType::Info, message.as_ref());
    }

    #[inline]
    #[track_caller]
    pub fn success(&self, message: impl AsRef<str>) {
        self.log_here(LogType::Success, message.as_ref());
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log_here(LogType::Error, message.as_ref());
    }

    #[inline]
    #[track_caller]
    pub fn warning(&self, message: impl AsRef<str>) {
        self.log_here(LogType::Warning, message.as_ref());
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log_here(LogType::Debug, message.as_ref());
    }

    #[track_caller]
    fn log_here(&self, log_type: LogType, message: &str) {
        let trace = caller_trace(Location::caller());
        self.log(log_type, &trace, message, CallOptions::NONE);
    }

    pub fn is_initialized(&self) -> bool {
        self.state.read().initialized
    }

    pub fn verbosity(&self) -> VerbosityMode {
        self.state.read().verbosity
    }

    pub fn enabled_types(&self) -> TypeSet {
        self.state.read().enabled
    }

    /// When the current (or last) session started
    pub fn started_at(&self) -> Option<NaiveDateTime> {
        self.state.read().started_at
    }

    /// Sequence number the next accepted call will get
    pub fn sequence(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }

    /// Path of the open session file, if any
    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.file.lock().as_ref().map(|f| f.path().to_path_buf())
    }

    pub fn metrics(&self) -> &SinkMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.console.lock().flush()?;
        if let Some(appender) = self.file.lock().as_mut() {
            appender.flush()?;
        }
        for stream in self.streams.lock().iter_mut() {
            stream.flush()?;
        }
        Ok(())
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use session_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .log_path("./target/doc-logs")
    ///     .project_name("inventory")
    ///     .use_colors(false)
    ///     .build()
    ///     .unwrap();
    /// assert!(!logger.is_initialized());
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.is_initialized() {
            let _ = self.exit_at(concat!(module_path!(), "::drop"));
        }
    }
}

fn caller_trace(location: &Location<'_>) -> String {
    format!("{}:{}", location.file(), location.line())
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use session_logger::prelude::*;
/// use parking_lot::Mutex;
/// use std::sync::Arc;
///
/// let console = Arc::new(Mutex::new(Vec::<u8>::new()));
/// let logger = Logger::builder()
///     .project_name("worker")
///     .file_template("[%n-%d-%t]\t%C")
///     .console_writer(console.clone())
///     .build()
///     .unwrap();
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    console_target: ConsoleTarget,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            console_target: ConsoleTarget::Stdout,
        }
    }

    /// Start from an existing configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.log_path = path.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.config.project_name = name.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn console_template(mut self, template: impl Into<String>) -> Self {
        self.config.console_template = template.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_template(mut self, template: impl Into<String>) -> Self {
        self.config.file_template = template.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn additional_template(mut self, template: impl Into<String>) -> Self {
        self.config.additional_template = template.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn use_colors(mut self, use_colors: bool) -> Self {
        self.config.use_colors = use_colors;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn color(mut self, log_type: LogType, color: impl Into<String>) -> Self {
        self.config.colors = self.config.colors.with(log_type, color);
        self
    }

    /// Send console lines to `writer` instead of stdout
    #[must_use = "builder methods return a new value"]
    pub fn console_writer<W>(mut self, writer: Arc<Mutex<W>>) -> Self
    where
        W: Write + Send + 'static,
    {
        let writer: SharedWriter = writer;
        self.console_target = ConsoleTarget::Writer(writer);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Result<Logger> {
        self.config.validate()?;
        Ok(Logger::from_parts(self.config, self.console_target))
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
