//! Logger configuration
//!
//! Everything here is fixed when the [`Logger`](super::Logger) is built.
//! Verbosity and the enabled type set are chosen per session in `init`.

use super::error::{LoggerError, Result};
use super::log_type::LogType;
use super::template::{self, ADDITIONAL_TEMPLATE, CONSOLE_TEMPLATE, FILE_TEMPLATE};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default directory for session files
pub const DEFAULT_LOG_PATH: &str = "./logs";

/// Default project name used in session file names
pub const DEFAULT_PROJECT_NAME: &str = "project";

/// Console color per log type, by color name (`"blue"`, `"purple"`, ...).
///
/// Unknown names fall back to the type's default color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorTable {
    pub info: String,
    pub success: String,
    pub error: String,
    pub warning: String,
    pub debug: String,
}

impl ColorTable {
    pub fn color(&self, log_type: LogType) -> colored::Color {
        let name = match log_type {
            LogType::Info => &self.info,
            LogType::Success => &self.success,
            LogType::Error => &self.error,
            LogType::Warning => &self.warning,
            LogType::Debug => &self.debug,
        };
        name.parse().unwrap_or_else(|_| log_type.color_code())
    }

    #[must_use]
    pub fn with(mut self, log_type: LogType, color: impl Into<String>) -> Self {
        let color = color.into();
        match log_type {
            LogType::Info => self.info = color,
            LogType::Success => self.success = color,
            LogType::Error => self.error = color,
            LogType::Warning => self.warning = color,
            LogType::Debug => self.debug = color,
        }
        self
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self {
            info: "blue".to_string(),
            success: "green".to_string(),
            error: "red".to_string(),
            warning: "yellow".to_string(),
            debug: "purple".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Directory holding session files
    pub log_path: PathBuf,
    /// Prefix of session file names
    pub project_name: String,
    pub console_template: String,
    pub file_template: String,
    pub additional_template: String,
    /// Wrap console lines in ANSI colors when the terminal supports it
    pub use_colors: bool,
    pub colors: ColorTable,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            console_template: CONSOLE_TEMPLATE.to_string(),
            file_template: FILE_TEMPLATE.to_string(),
            additional_template: ADDITIONAL_TEMPLATE.to_string(),
            use_colors: true,
            colors: ColorTable::default(),
        }
    }
}

impl LoggerConfig {
    /// Load a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use session_logger::LoggerConfig;
    ///
    /// let config = LoggerConfig::from_json(r#"{ "project_name": "billing" }"#).unwrap();
    /// assert_eq!(config.project_name, "billing");
    /// assert_eq!(config.file_template, "[%n-%h-%t]\t[%T]\t%C");
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.project_name.is_empty() {
            return Err(LoggerError::config("LoggerConfig", "project_name is empty"));
        }
        if self.project_name.contains(['/', '\\']) {
            return Err(LoggerError::config(
                "LoggerConfig",
                format!("project_name '{}' contains a path separator", self.project_name),
            ));
        }
        Ok(())
    }

    /// `<log_path>/<project_name>_log_<YYYY-MM-DD@HH-mm-SS>.log`
    pub fn session_file_path(&self, started_at: &NaiveDateTime) -> PathBuf {
        self.log_path.join(format!(
            "{}_log_{}.log",
            self.project_name,
            template::date_stamp(started_at)
        ))
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.log_path, PathBuf::from("./logs"));
        assert_eq!(config.project_name, "project");
        assert_eq!(config.console_template, "[%T]\t%C");
        assert_eq!(config.additional_template, "[%n-%t]\t[%T]\t%C");
        assert!(config.use_colors);
    }

    #[test]
    fn test_session_file_path() {
        let config = LoggerConfig::default();
        let started = NaiveDate::from_ymd_opt(2024, 11, 3)
            .and_then(|d| d.and_hms_opt(14, 2, 9))
            .expect("valid datetime");
        assert_eq!(
            config.session_file_path(&started),
            PathBuf::from("./logs/project_log_2024-11-03@14-02-09.log")
        );
    }

    #[test]
    fn test_from_json() {
        let config = LoggerConfig::from_json(
            r#"{ "log_path": "/tmp/app-logs", "use_colors": false, "colors": { "debug": "cyan" } }"#,
        )
        .expect("valid config");

        assert_eq!(config.log_path, PathBuf::from("/tmp/app-logs"));
        assert!(!config.use_colors);
        assert_eq!(config.colors.color(LogType::Debug), colored::Color::Cyan);
        assert_eq!(config.colors.color(LogType::Info), colored::Color::Blue);
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(
            LoggerConfig::from_json("{ not json"),
            Err(LoggerError::JsonError(_))
        ));
        assert!(matches!(
            LoggerConfig::from_json(r#"{ "project_name": "a/b" }"#),
            Err(LoggerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_color_table() {
        let colors = ColorTable::default();
        assert_eq!(colors.color(LogType::Debug), colored::Color::Magenta);
        assert_eq!(colors.color(LogType::Warning), colored::Color::Yellow);

        let colors = colors.with(LogType::Error, "not-a-color");
        assert_eq!(colors.color(LogType::Error), colored::Color::Red);
    }
}
