//! Template rendering
//!
//! A template is a string of literal characters and `%` directives. Each
//! directive is exactly one character long:
//!
//! | Directive | Output |
//! |-----------|--------|
//! | `%Y` | year |
//! | `%M` | month, 2 digits |
//! | `%D` | day, 2 digits |
//! | `%H` | hour, 2 digits |
//! | `%m` | minute, 2 digits |
//! | `%S` | second, 2 digits |
//! | `%N` | nanoseconds |
//! | `%d` | date stamp `YYYY-MM-DD@HH-mm-SS` |
//! | `%h` | time stamp `HH:mm:SS:nanoseconds` |
//! | `%T` | caller trace |
//! | `%C` | message content |
//! | `%n` | sequence number |
//! | `%t` | log type name |
//!
//! Any other directive character, and a `%` at the very end of the template,
//! renders as nothing.
//!
//! # Example
//!
//! ```
//! use session_logger::core::template::{render, FILE_TEMPLATE};
//! use session_logger::{LogRecord, LogType};
//!
//! let record = LogRecord::new(LogType::Info, "main:12", "ready").with_sequence(3);
//! let line = render(FILE_TEMPLATE, &record);
//! assert!(line.starts_with("[3-"));
//! assert!(line.ends_with("-INFO]\t[main:12]\tready"));
//! ```

use super::log_record::LogRecord;
use chrono::{Datelike, NaiveDateTime, Timelike};
use std::fmt::Write;

/// Console template
pub const CONSOLE_TEMPLATE: &str = "[%T]\t%C";

/// Session file template
pub const FILE_TEMPLATE: &str = "[%n-%h-%t]\t[%T]\t%C";

/// Template for streams registered with `add_output_stream`
pub const ADDITIONAL_TEMPLATE: &str = "[%n-%t]\t[%T]\t%C";

/// Render `record` through `template`.
///
/// Pure: the output depends only on the arguments.
pub fn render(template: &str, record: &LogRecord) -> String {
    let mut out = String::with_capacity(template.len() + record.message.len() + 32);
    let ts = &record.timestamp;
    let mut chars = template.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        // write! into a String cannot fail
        let _ = match chars.next() {
            Some('Y') => write!(out, "{}", ts.year()),
            Some('M') => write!(out, "{:02}", ts.month()),
            Some('D') => write!(out, "{:02}", ts.day()),
            Some('H') => write!(out, "{:02}", ts.hour()),
            Some('m') => write!(out, "{:02}", ts.minute()),
            Some('S') => write!(out, "{:02}", ts.second()),
            Some('N') => write!(out, "{:02}", ts.nanosecond()),
            Some('d') => write_date_stamp(&mut out, ts),
            Some('h') => write_time_stamp(&mut out, ts),
            Some('T') => {
                out.push_str(&record.trace);
                Ok(())
            }
            Some('C') => {
                out.push_str(&record.message);
                Ok(())
            }
            Some('n') => write!(out, "{}", record.sequence),
            Some('t') => {
                out.push_str(record.log_type.to_str());
                Ok(())
            }
            _ => Ok(()),
        };
    }

    out
}

/// `YYYY-MM-DD@HH-mm-SS`, as used by `%d` and the session file name
pub fn date_stamp(ts: &NaiveDateTime) -> String {
    let mut out = String::with_capacity(19);
    let _ = write_date_stamp(&mut out, ts);
    out
}

/// `HH:mm:SS:nanoseconds`, as used by `%h`
pub fn time_stamp(ts: &NaiveDateTime) -> String {
    let mut out = String::with_capacity(20);
    let _ = write_time_stamp(&mut out, ts);
    out
}

fn write_date_stamp(out: &mut String, ts: &NaiveDateTime) -> std::fmt::Result {
    write!(
        out,
        "{}-{:02}-{:02}@{:02}-{:02}-{:02}",
        ts.year(),
        ts.month(),
        ts.day(),
        ts.hour(),
        ts.minute(),
        ts.second()
    )
}

fn write_time_stamp(out: &mut String, ts: &NaiveDateTime) -> std::fmt::Result {
    write!(
        out,
        "{:02}:{:02}:{:02}:{:02}",
        ts.hour(),
        ts.minute(),
        ts.second(),
        ts.nanosecond()
    )
}
