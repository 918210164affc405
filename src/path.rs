//! Compiled field paths and the segment classification helpers.
//!
//! A [`CompiledPath`] is built once by [`compile`] and never changes. Its
//! precision flag is derived from the segments at construction time.
//!
//! ```
//! use fieldpath::compile;
//!
//! let path = compile("items[3].name");
//! assert_eq!(path.segments(), ["items", "[3]", "name"]);
//! assert!(!path.is_precise());
//! ```

use std::{convert::Infallible, fmt, str::FromStr};

use crate::{ast::Token, lexer::Lexer};

/// A field path split into its steps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompiledPath {
    raw: String,
    tokens: Vec<Token>,
    segments: Vec<String>,
    precise: bool,
}

impl CompiledPath {
    /// The path exactly as it was given to [`compile`].
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// True when the path names exactly one location, i.e. it has no array
    /// marker.
    pub fn is_precise(&self) -> bool {
        self.precise
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; even the empty path has one (empty) segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Canonical spelling of the path: fields joined with `.`, array markers
    /// attached directly to the step before them.
    ///
    /// `a.[0]..b` and `a[0]b` both normalize to `a[0].b`.
    pub fn normalized(&self) -> String {
        let mut result = String::new();
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 && !token.is_array_marker() {
                result.push('.');
            }
            result.push_str(&token.to_string());
        }
        result
    }
}

impl fmt::Display for CompiledPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for CompiledPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(compile(s))
    }
}

impl From<&str> for CompiledPath {
    fn from(s: &str) -> Self {
        compile(s)
    }
}

/// Compiles a raw field path. Never fails: text that does not match the
/// array marker grammar is kept as part of a field name.
///
/// An input with no steps at all (`""`, `"."`, `".."`) compiles to a single
/// empty field segment and is precise.
pub fn compile(raw: &str) -> CompiledPath {
    let mut tokens = Lexer::new(raw).tokenize();
    if tokens.is_empty() {
        tokens.push(Token::Field(String::new()));
    }

    let segments: Vec<String> = tokens.iter().map(Token::to_string).collect();
    let precise = matches_single_value(&segments);

    log::trace!(
        "compiled field path {:?} into {} segment(s), precise: {}",
        raw,
        segments.len(),
        precise
    );

    CompiledPath {
        raw: raw.to_string(),
        tokens,
        segments,
        precise,
    }
}

/// True iff `segment` is exactly `[]`, `[<digits>]` or `[*]`.
///
/// ```
/// use fieldpath::is_array_segment;
///
/// assert!(is_array_segment("[*]"));
/// assert!(!is_array_segment("foo[0]"));
/// ```
pub fn is_array_segment(segment: &str) -> bool {
    Lexer::new(segment).is_single_array_marker()
}

/// True iff none of `segments` is an array segment.
pub fn matches_single_value<S: AsRef<str>>(segments: &[S]) -> bool {
    !segments.iter().any(|s| is_array_segment(s.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precise_matches_tokens() {
        for raw in ["a.b", "a[0]", "[*]", "", "a[x]"] {
            let path = compile(raw);
            assert_eq!(
                path.is_precise(),
                !path.tokens().iter().any(Token::is_array_marker),
                "Failed for input: {}",
                raw
            );
        }
    }

    #[test]
    fn test_display_is_raw() {
        assert_eq!(compile("a[0]b").to_string(), "a[0]b");
        assert_eq!(compile("a[0]b").normalized(), "a[0].b");
    }

    #[test]
    fn test_from_str() {
        let path: CompiledPath = "x.y[*].z".parse().unwrap();
        assert_eq!(path, compile("x.y[*].z"));
        assert_eq!(CompiledPath::from("single").segments(), ["single"]);
    }
}
