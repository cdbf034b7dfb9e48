//! Free-form call arguments
//!
//! Call sites may mix message fragments and [`CallOption`]s in any order.
//! [`LogArg`] keeps the two apart by type, and [`partition_args`] turns a
//! list of them into the message and option set the logger works with.

use super::routing::{CallOption, CallOptions};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogArg {
    Message(String),
    Option(CallOption),
}

/// Conversion used by the logging macros.
///
/// Anything printable becomes a message fragment; a [`CallOption`] stays an
/// option.
pub trait IntoLogArg {
    fn into_log_arg(self) -> LogArg;
}

impl<T: Display> IntoLogArg for T {
    fn into_log_arg(self) -> LogArg {
        LogArg::Message(self.to_string())
    }
}

impl IntoLogArg for CallOption {
    fn into_log_arg(self) -> LogArg {
        LogArg::Option(self)
    }
}

impl IntoLogArg for LogArg {
    fn into_log_arg(self) -> LogArg {
        self
    }
}

/// Join message fragments with a single space and collect the options.
pub fn partition_args<I>(args: I) -> (String, CallOptions)
where
    I: IntoIterator<Item = LogArg>,
{
    let mut message = String::new();
    let mut options = CallOptions::NONE;
    let mut first = true;

    for arg in args {
        match arg {
            LogArg::Message(fragment) => {
                if !first {
                    message.push(' ');
                }
                message.push_str(&fragment);
                first = false;
            }
            LogArg::Option(option) => options.insert(option),
        }
    }

    (message, options)
}
