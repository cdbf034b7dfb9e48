//! Reading session files back
//!
//! Lines written with [`FILE_TEMPLATE`](super::template::FILE_TEMPLATE) have
//! the shape `[<n>-<HH:mm:SS:nanos>-<TYPE>]\t[<trace>]\t<message>`.

use super::log_type::LogType;
use chrono::{NaiveDateTime, NaiveTime};

/// A parsed session file line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLine {
    pub sequence: u64,
    pub time: NaiveTime,
    pub log_type: LogType,
    pub trace: String,
    pub message: String,
}

impl FileLine {
    /// Parse one line written with the default file template.
    ///
    /// Returns `None` when the line does not have that shape.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let rest = line.strip_prefix('[')?;
        let (header, rest) = rest.split_once("]\t[")?;
        let (trace, message) = rest.split_once("]\t")?;

        let (sequence, header) = header.split_once('-')?;
        let (time, log_type) = header.rsplit_once('-')?;

        Some(Self {
            sequence: sequence.parse().ok()?,
            time: parse_time_stamp(time)?,
            log_type: log_type.parse().ok()?,
            trace: trace.to_string(),
            message: message.to_string(),
        })
    }
}

/// Parse a `%h` stamp (`HH:mm:SS:nanoseconds`).
pub fn parse_time_stamp(stamp: &str) -> Option<NaiveTime> {
    let mut parts = stamp.split(':');
    let hour = parts.next()?.parse().ok()?;
    let minute = parts.next()?.parse().ok()?;
    let second = parts.next()?.parse().ok()?;
    let nano = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveTime::from_hms_nano_opt(hour, minute, second, nano)
}

/// Parse a `%d` stamp (`YYYY-MM-DD@HH-mm-SS`).
pub fn parse_date_stamp(stamp: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d@%H-%M-%S").ok()
}

/// Recover the session start time from a session file name
/// (`<project>_log_<stamp>.log`).
pub fn session_started_at(file_name: &str) -> Option<NaiveDateTime> {
    let stem = file_name.strip_suffix(".log")?;
    let (_, stamp) = stem.rsplit_once("_log_")?;
    parse_date_stamp(stamp)
}
