//! # Field Path Tokens
//!
//! A field path is a flat sequence of steps. Each step is either a plain field
//! name or an array marker, so the "tree" here is just a list of [`Token`]s.
//!
//! ## Notation
//!
//! ```text
//! a.b.c           three field steps
//! a.b[].c         any element of the array at a.b
//! items[3].name   element 3 of items
//! x.y[*].z        every element of x.y
//! ```
//!
//! Dots separate field names. An array marker is always its own step, whether
//! or not a dot sits next to it, so `a[0]b` has the steps `a`, `[0]` and `b`.
//!
//! Bracketed text that is not one of `[]`, `[<digits>]` or `[*]` carries no
//! meaning and stays part of the surrounding field name.
pub mod tokens;

pub use tokens::{ArrayKind, Token};
