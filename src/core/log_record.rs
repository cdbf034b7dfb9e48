//! Log record structure

use super::log_type::LogType;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One accepted log call, built once and rendered for every selected sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub log_type: LogType,
    pub message: String,
    /// Caller location, opaque to the logger
    pub trace: String,
    pub sequence: u64,
    /// Local wall-clock time of the call
    pub timestamp: NaiveDateTime,
}

impl LogRecord {
    pub fn new(log_type: LogType, trace: impl Into<String>, message: &str) -> Self {
        Self {
            log_type,
            message: message.to_string(),
            trace: trace.into(),
            sequence: 0,
            timestamp: Local::now().naive_local(),
        }
    }

    pub fn with_sequence(mut self, sequence: u64) -> Self {
        self.sequence = sequence;
        self
    }

    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = timestamp;
        self
    }
}
