use std::fmt;

/// The three forms an array marker can take.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArrayKind {
    /// Bare array reference, any element
    ///
    /// # Examples
    /// ```text
    /// a.b[].c
    /// ```
    Unspecified,

    /// A specific element, digits kept as written
    ///
    /// # Examples
    /// ```text
    /// items[3].name
    /// items[007]
    /// ```
    Index(String),

    /// Explicit wildcard over all elements
    ///
    /// # Examples
    /// ```text
    /// x.y[*].z
    /// ```
    Wildcard,
}

impl ArrayKind {
    /// Numeric value of an `Index` marker, `None` for the other forms or when
    /// the digits do not fit in a `u64`.
    pub fn index(&self) -> Option<u64> {
        match self {
            ArrayKind::Index(digits) => digits.parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for ArrayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayKind::Unspecified => write!(f, "[]"),
            ArrayKind::Index(digits) => write!(f, "[{}]", digits),
            ArrayKind::Wildcard => write!(f, "[*]"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Plain field name
    ///
    /// Anything between separators that is not an array marker, including
    /// bracket text that does not match the marker grammar.
    ///
    /// # Examples
    /// ```text
    /// name
    /// a[x]
    /// ```
    Field(String),

    /// Array traversal step
    ArrayMarker(ArrayKind),

    /// End of input
    Eof,
}

impl Token {
    pub fn is_array_marker(&self) -> bool {
        matches!(self, Token::ArrayMarker(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Field(name) => f.write_str(name),
            Token::ArrayMarker(kind) => kind.fmt(f),
            Token::Eof => Ok(()),
        }
    }
}
