//! Error types for the phone book library.
//!
//! Filtering never fails. These errors come from the edges: looking up a
//! contact that is not in the store, reading a contacts file, or parsing
//! the configuration file.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhonebookError {
    /// No contact with this id exists in the store.
    #[error("Contact not found: {0}")]
    ContactNotFound(i64),

    /// The contacts file extension is not one we can read.
    #[error("Unsupported contacts file format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A CSV row could not be parsed. `line` is 1-indexed and counts the header.
    #[error("CSV error on line {line}: {message}")]
    Csv { line: usize, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PhonebookError>;
