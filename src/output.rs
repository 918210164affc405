//! JSON rendering of compiled paths.
//!
//! # Examples
//!
//! ```
//! use fieldpath::{compile, output::to_json};
//!
//! let json = to_json(&compile("a.b[].c"));
//! assert_eq!(json["segments"][2], "[]");
//! assert_eq!(json["precise"], false);
//! ```

use serde_json::{Value, json};

use crate::path::CompiledPath;

/// `{"path", "segments", "precise", "normalized"}` for one path.
pub fn to_json(path: &CompiledPath) -> Value {
    json!({
        "path": path.raw(),
        "segments": path.segments(),
        "precise": path.is_precise(),
        "normalized": path.normalized(),
    })
}

pub fn to_json_string(path: &CompiledPath, pretty: bool) -> serde_json::Result<String> {
    let value = to_json(path);
    if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
}
