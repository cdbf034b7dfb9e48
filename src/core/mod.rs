//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod file_line;
pub mod log_arg;
pub mod log_record;
pub mod log_type;
pub mod logger;
pub mod metrics;
pub mod routing;
pub mod template;

pub use appender::Appender;
pub use config::{ColorTable, LoggerConfig};
pub use error::{LoggerError, Result};
pub use file_line::FileLine;
pub use log_arg::{partition_args, IntoLogArg, LogArg};
pub use log_record::LogRecord;
pub use log_type::{LogType, TypeSet};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::SinkMetrics;
pub use routing::{CallOption, CallOptions, Route, VerbosityMode};
