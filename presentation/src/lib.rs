//! Presentation layer for sarcasm-council
//!
//! This crate contains CLI definitions, output formatters
//! and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, CliOutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{BatchProgressBar, ProgressReporter, SimpleProgress};
