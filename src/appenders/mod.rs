//! Appender implementations

pub mod console;
pub mod file;
pub mod stream;

pub use console::{ConsoleAppender, ConsoleTarget};
pub use file::FileAppender;
pub use stream::{SharedWriter, StreamAppender};

// Re-export trait for convenience
pub use crate::core::Appender;
