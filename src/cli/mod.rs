//! CLI support for fieldpath
//!
//! Exposes the command implementations as plain functions so they can be
//! driven from tests or embedded in other tools.

mod check;
mod compile;
mod docs;

pub use check::{execute_check, CheckOptions, CheckResult};
pub use compile::{execute_compile, CompileOptions};
pub use docs::get_docs_overview;

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// JSON serialization error
    Json(serde_json::Error),
    /// IO error
    Io(io::Error),
    /// No input provided
    NoInput,
    /// A path required to be precise was not
    Imprecise(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Json(e) => write!(f, "JSON error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => {
                write!(f, "No path provided. Pass one as an argument or pipe paths to stdin.")
            }
            CliError::Imprecise(path) => {
                write!(f, "Path '{}' is imprecise: it traverses an array", path)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
