//! Log type definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed catalog of log types. Each type carries a display name and a
/// default console color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogType {
    Info,
    Success,
    Error,
    Warning,
    Debug,
}

impl LogType {
    /// Every log type, in catalog order
    pub const ALL: [LogType; 5] = [
        LogType::Info,
        LogType::Success,
        LogType::Error,
        LogType::Warning,
        LogType::Debug,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogType::Info => "INFO",
            LogType::Success => "SUCCESS",
            LogType::Error => "ERROR",
            LogType::Warning => "WARNING",
            LogType::Debug => "DEBUG",
        }
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogType::Info => Blue,
            LogType::Success => Green,
            LogType::Error => Red,
            LogType::Warning => Yellow,
            LogType::Debug => Magenta,
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INFO" => Ok(LogType::Info),
            "SUCCESS" => Ok(LogType::Success),
            "ERROR" => Ok(LogType::Error),
            "WARNING" | "WARN" => Ok(LogType::Warning),
            "DEBUG" => Ok(LogType::Debug),
            _ => Err(format!("Invalid log type: '{}'", s)),
        }
    }
}

/// Set of log types shown on the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeSet(u8);

impl TypeSet {
    pub const fn empty() -> Self {
        TypeSet(0)
    }

    pub fn all() -> Self {
        LogType::ALL.iter().copied().collect()
    }

    #[must_use]
    pub fn with(mut self, log_type: LogType) -> Self {
        self.insert(log_type);
        self
    }

    pub fn insert(&mut self, log_type: LogType) {
        self.0 |= log_type.bit();
    }

    #[inline]
    pub fn contains(&self, log_type: LogType) -> bool {
        self.0 & log_type.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = LogType> + '_ {
        LogType::ALL.into_iter().filter(|t| self.contains(*t))
    }
}

impl FromIterator<LogType> for TypeSet {
    fn from_iter<I: IntoIterator<Item = LogType>>(iter: I) -> Self {
        let mut set = TypeSet::empty();
        for log_type in iter {
            set.insert(log_type);
        }
        set
    }
}

impl<'a> FromIterator<&'a LogType> for TypeSet {
    fn from_iter<I: IntoIterator<Item = &'a LogType>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}
