//! Compile field paths and render them as JSON

use super::CliError;
use crate::{compile, output::to_json};

/// Options for the compile command
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// Paths to compile, in order
    pub paths: Vec<String>,
    /// Pretty-print the output
    pub pretty: bool,
}

/// Compile every path and render the result.
///
/// A single path renders as one JSON object, several as an array of them.
pub fn execute_compile(options: &CompileOptions) -> Result<String, CliError> {
    let mut rendered: Vec<serde_json::Value> = options
        .paths
        .iter()
        .map(|p| to_json(&compile(p)))
        .collect();

    let output = match rendered.len() {
        0 => return Err(CliError::NoInput),
        1 => rendered.remove(0),
        _ => serde_json::Value::Array(rendered),
    };

    let json = if options.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }?;
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_path_is_object() {
        let options = CompileOptions {
            paths: vec!["a.b[].c".to_string()],
            pretty: false,
        };
        let json: serde_json::Value =
            serde_json::from_str(&execute_compile(&options).unwrap()).unwrap();
        assert_eq!(json["path"], "a.b[].c");
        assert_eq!(json["precise"], false);
    }

    #[test]
    fn test_many_paths_is_array() {
        let options = CompileOptions {
            paths: vec!["a".to_string(), "b[0]".to_string()],
            pretty: true,
        };
        let json: serde_json::Value =
            serde_json::from_str(&execute_compile(&options).unwrap()).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(2));
        assert_eq!(json[1]["segments"][1], "[0]");
    }

    #[test]
    fn test_no_paths() {
        let result = execute_compile(&CompileOptions::default());
        assert!(matches!(result, Err(CliError::NoInput)));
    }
}
