//! Error types for Larder operations.
//!
//! This module provides the error hierarchy using `thiserror` for item
//! construction, user input validation, terminal I/O, and CLI commands.
//! The inventory store itself never fails; its outcomes are return values.

use thiserror::Error;

/// Result type alias for Larder operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// An item could not be constructed.
    #[error("item error: {0}")]
    Item(#[from] ItemError),

    /// User input failed validation.
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// Terminal I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

/// Errors raised while constructing a [`crate::core::FoodItem`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    /// The item name was empty or whitespace.
    #[error("item name cannot be empty")]
    EmptyName,

    /// The use-by date was empty or whitespace.
    #[error("use-by date cannot be empty")]
    EmptyUseBy,

    /// Fridge numbers start at 1.
    #[error("fridge number must be positive")]
    ZeroFridgeNumber,

    /// Shelf numbers start at 1.
    #[error("shelf number must be positive")]
    ZeroShelfNumber,
}

/// Validation errors for raw user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Date not in `YYYY-MM-DD` form or out of range.
    #[error("invalid date: {input} (expected YYYY-MM-DD)")]
    InvalidDate {
        /// The rejected input.
        input: String,
    },

    /// A required answer was blank.
    #[error("{field} cannot be empty")]
    Blank {
        /// Which answer was blank.
        field: &'static str,
    },

    /// Input is not a non-negative decimal integer.
    #[error("not an integer: {input}")]
    NotAnInteger {
        /// The rejected input.
        input: String,
    },

    /// Integer outside the accepted range.
    #[error("value {input} out of range {min}..={max}")]
    OutOfRange {
        /// The rejected input.
        input: String,
        /// Smallest accepted value.
        min: u32,
        /// Largest accepted value.
        max: u32,
    },

    /// Category selection number not in the category menu.
    #[error("unknown category number: {input}")]
    UnknownCategory {
        /// The rejected input.
        input: String,
    },

    /// Storage selection number not in the storage menu.
    #[error("unknown storage number: {input}")]
    UnknownStorage {
        /// The rejected input.
        input: String,
    },

    /// Menu choice not in the main menu.
    #[error("invalid menu choice: {input}")]
    InvalidChoice {
        /// The rejected input.
        input: String,
    },
}

/// I/O errors on the session's input and output streams.
#[derive(Error, Debug)]
pub enum IoError {
    /// Failed to read from the input stream.
    #[error("failed to read input: {reason}")]
    ReadFailed {
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write to the output stream.
    #[error("failed to write output: {reason}")]
    WriteFailed {
        /// Reason for failure.
        reason: String,
    },

    /// The output stream was closed by its reader.
    #[error("output closed")]
    OutputClosed,
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Output format error.
    #[error("output format error: {0}")]
    OutputFormat(String),
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        Self::OutputFormat(err.to_string())
    }
}
