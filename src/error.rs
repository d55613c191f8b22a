//! Error handling for the Mould application.
//! Defines custom error types and results used throughout the application.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Custom error types for Mould operations.
///
/// This enum represents all possible errors that can occur within the Mould application.
/// It implements the standard Error trait through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents JSON documents that cannot be parsed
    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// A template or a required file could not be found
    #[error("Not found: {0}.")]
    NotFound(String),

    /// A configuration document failed schema validation
    #[error("Invalid configuration '{}':\n  - {}", path.display(), violations.join("\n  - "))]
    ValidationError { path: PathBuf, violations: Vec<String> },

    /// A filesystem root is missing or unreadable
    #[error("Cannot read '{}': {source}.", path.display())]
    PathError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output path is already taken
    #[error("Output path '{}' already exists.", path.display())]
    AlreadyExists { path: PathBuf },

    /// A `--input` token is not a `key=value` pair
    #[error("Malformed input '{0}': expected exactly one '=' between a non-empty key and value.")]
    MalformedInput(String),

    /// Required template inputs were not supplied
    #[error("Missing required inputs for template: {}.", ids.join(", "))]
    MissingInputs { ids: Vec<String> },

    /// A `--template-sources` entry is not an existing directory
    #[error("Unresolvable template source directory: '{0}'.")]
    InvalidSources(String),

    /// A substitution pattern is not a valid regular expression
    #[error("Invalid substitution pattern '{pattern}': {source}.")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
