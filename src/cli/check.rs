//! Report whether a field path is precise

use super::CliError;
use crate::compile;

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The field path to classify
    pub path: String,
    /// Fail when the path is imprecise
    pub require_precise: bool,
}

/// Result of a check operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckResult {
    /// The path names exactly one location
    Precise,
    /// The path traverses at least one array
    Imprecise,
}

impl std::fmt::Display for CheckResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckResult::Precise => write!(f, "precise"),
            CheckResult::Imprecise => write!(f, "imprecise"),
        }
    }
}

/// Classify a field path
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let path = compile(&options.path);

    if path.is_precise() {
        Ok(CheckResult::Precise)
    } else if options.require_precise {
        Err(CliError::Imprecise(path.to_string()))
    } else {
        Ok(CheckResult::Imprecise)
    }
}
