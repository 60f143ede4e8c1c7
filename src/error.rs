//! Error handling for kmenu.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use thiserror::Error;

/// Errors that can occur while scanning the trees or generating the menus.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A board or app directory could not be listed
    #[error("Cannot list directory '{path}': {source}.")]
    ListError { path: String, source: walkdir::Error },

    /// A tree root that exists but is not a directory
    #[error("Not a directory: '{0}'.")]
    NotADirectory(String),

    /// A directory name that cannot be used as a menu symbol
    #[error("Directory name is not valid UTF-8: {0}.")]
    InvalidName(String),

    /// The generated document could not be written
    #[error("Cannot write '{path}': {source}.")]
    WriteError { path: String, source: io::Error },

    /// Represents errors that occur while rendering a menu template
    #[error("Template error: {0}.")]
    TemplateError(#[from] minijinja::Error),

    /// The render context could not be serialized
    #[error("Context error: {0}.")]
    ContextError(#[from] serde_json::Error),

    /// Represents errors in the kmenu configuration file
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// One or more menus were not generated
    #[error("Menu generation failed for: {}.", .0.join(", "))]
    GenerationFailed(Vec<String>),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}
