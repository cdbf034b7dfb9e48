//! Console appender implementation

use super::stream::SharedWriter;
use crate::core::template::{self, CONSOLE_TEMPLATE};
use crate::core::{Appender, ColorTable, LogRecord, LogType, Result};
use colored::Colorize;
use std::io::Write;

/// Where console lines go
pub enum ConsoleTarget {
    Stdout,
    /// Redirected console, e.g. an embedding host's terminal widget
    Writer(SharedWriter),
}

pub struct ConsoleAppender {
    template: String,
    use_colors: bool,
    colors: [colored::Color; 5],
    target: ConsoleTarget,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            template: CONSOLE_TEMPLATE.to_string(),
            use_colors: true,
            colors: resolve_colors(&ColorTable::default()),
            target: ConsoleTarget::Stdout,
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    #[must_use]
    pub fn with_color_table(mut self, colors: &ColorTable) -> Self {
        self.colors = resolve_colors(colors);
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: ConsoleTarget) -> Self {
        self.target = target;
        self
    }

    /// The rendered line, colored when enabled, without the trailing newline
    fn format_line(&self, record: &LogRecord) -> String {
        let rendered = template::render(&self.template, record);
        if self.use_colors {
            rendered
                .as_str()
                .color(self.colors[record.log_type as usize])
                .to_string()
        } else {
            rendered
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        let mut line = self.format_line(record);
        line.push('\n');

        // One write per line so concurrent lines never interleave
        match &self.target {
            ConsoleTarget::Stdout => std::io::stdout().lock().write_all(line.as_bytes())?,
            ConsoleTarget::Writer(writer) => writer.lock().write_all(line.as_bytes())?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match &self.target {
            ConsoleTarget::Stdout => std::io::stdout().flush()?,
            ConsoleTarget::Writer(writer) => writer.lock().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

fn resolve_colors(table: &ColorTable) -> [colored::Color; 5] {
    LogType::ALL.map(|log_type| table.color(log_type))
}
