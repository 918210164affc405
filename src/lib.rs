pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod lexer;
pub mod output;
pub mod path;

pub use ast::{ArrayKind, Token};
pub use lexer::Lexer;
pub use output::to_json;
pub use path::{CompiledPath, compile, is_array_segment, matches_single_value};
