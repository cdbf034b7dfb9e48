//! Sink selection from the session verbosity and per-call options

use super::log_type::{LogType, TypeSet};
use serde::{Deserialize, Serialize};

/// Session-wide choice of which sink classes are ever eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerbosityMode {
    ConsoleOnly,
    FileOnly,
    #[default]
    FileAndConsole,
}

impl VerbosityMode {
    /// Whether a session in this mode owns a log file
    pub fn needs_file(&self) -> bool {
        *self != VerbosityMode::ConsoleOnly
    }
}

/// Per-call override narrowing the eligible sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallOption {
    ConsoleOnly,
    FileOnly,
}

/// The set of options attached to one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CallOptions {
    console_only: bool,
    file_only: bool,
}

impl CallOptions {
    pub const NONE: CallOptions = CallOptions {
        console_only: false,
        file_only: false,
    };
    pub const CONSOLE_ONLY: CallOptions = CallOptions {
        console_only: true,
        file_only: false,
    };
    pub const FILE_ONLY: CallOptions = CallOptions {
        console_only: false,
        file_only: true,
    };

    pub fn insert(&mut self, option: CallOption) {
        match option {
            CallOption::ConsoleOnly => self.console_only = true,
            CallOption::FileOnly => self.file_only = true,
        }
    }

    #[inline]
    pub fn contains(&self, option: CallOption) -> bool {
        match option {
            CallOption::ConsoleOnly => self.console_only,
            CallOption::FileOnly => self.file_only,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.console_only && !self.file_only
    }
}

impl From<CallOption> for CallOptions {
    fn from(option: CallOption) -> Self {
        let mut options = CallOptions::NONE;
        options.insert(option);
        options
    }
}

impl FromIterator<CallOption> for CallOptions {
    fn from_iter<I: IntoIterator<Item = CallOption>>(iter: I) -> Self {
        let mut options = CallOptions::NONE;
        for option in iter {
            options.insert(option);
        }
        options
    }
}

/// Sinks selected for one call. The three flags are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Route {
    pub to_console: bool,
    pub to_file: bool,
    pub to_additional: bool,
}

impl Route {
    /// Evaluate the routing rules.
    ///
    /// Only the console honors the enabled type set: the file receives every
    /// call that is not console-only, whatever its type.
    pub fn evaluate(
        verbosity: VerbosityMode,
        options: CallOptions,
        log_type: LogType,
        enabled: &TypeSet,
    ) -> Self {
        let console_only = options.contains(CallOption::ConsoleOnly);
        let file_only = options.contains(CallOption::FileOnly);

        Self {
            to_console: !file_only
                && verbosity != VerbosityMode::FileOnly
                && enabled.contains(log_type),
            to_file: !console_only && verbosity != VerbosityMode::ConsoleOnly,
            to_additional: !file_only
                && !console_only
                && verbosity == VerbosityMode::FileAndConsole,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.to_console && !self.to_file && !self.to_additional
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> TypeSet {
        TypeSet::all()
    }

    #[test]
    fn test_file_and_console_without_options_reaches_everything() {
        let route = Route::evaluate(
            VerbosityMode::FileAndConsole,
            CallOptions::NONE,
            LogType::Info,
            &all(),
        );
        assert_eq!(
            route,
            Route {
                to_console: true,
                to_file: true,
                to_additional: true
            }
        );
    }

    #[test]
    fn test_file_only_option_never_reaches_console() {
        for verbosity in [
            VerbosityMode::ConsoleOnly,
            VerbosityMode::FileOnly,
            VerbosityMode::FileAndConsole,
        ] {
            let route = Route::evaluate(verbosity, CallOptions::FILE_ONLY, LogType::Info, &all());
            assert!(!route.to_console);
            assert!(!route.to_additional);
        }
    }

    #[test]
    fn test_console_only_option_never_reaches_file_or_additional() {
        for verbosity in [
            VerbosityMode::ConsoleOnly,
            VerbosityMode::FileOnly,
            VerbosityMode::FileAndConsole,
        ] {
            let route =
                Route::evaluate(verbosity, CallOptions::CONSOLE_ONLY, LogType::Error, &all());
            assert!(!route.to_file);
            assert!(!route.to_additional);
        }
    }

    #[test]
    fn test_disabled_type_only_filters_console() {
        let enabled = TypeSet::empty().with(LogType::Info);
        let route = Route::evaluate(
            VerbosityMode::FileAndConsole,
            CallOptions::NONE,
            LogType::Debug,
            &enabled,
        );
        assert!(!route.to_console);
        assert!(route.to_file);
        assert!(route.to_additional);
    }

    #[test]
    fn test_verbosity_modes() {
        let console = Route::evaluate(
            VerbosityMode::ConsoleOnly,
            CallOptions::NONE,
            LogType::Info,
            &all(),
        );
        assert!(console.to_console && !console.to_file && !console.to_additional);

        let file = Route::evaluate(
            VerbosityMode::FileOnly,
            CallOptions::NONE,
            LogType::Info,
            &all(),
        );
        assert!(!file.to_console && file.to_file && !file.to_additional);
    }

    #[test]
    fn test_conflicting_options_select_nothing() {
        let options: CallOptions = [CallOption::ConsoleOnly, CallOption::FileOnly]
            .into_iter()
            .collect();
        let route = Route::evaluate(
            VerbosityMode::FileAndConsole,
            options,
            LogType::Info,
            &all(),
        );
        assert!(route.is_empty());
    }
}
