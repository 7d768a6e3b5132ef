//! CLI layer for Larder.
//!
//! Provides the command-line interface using clap and the interactive menu
//! session that drives the inventory store.

pub mod commands;
pub mod output;
pub mod parser;
pub mod session;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::Cli;
pub use session::Session;
