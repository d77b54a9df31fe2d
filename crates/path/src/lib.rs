//! Dotted path expressions over JSON values.
//!
//! A path is a separator-delimited list of field names, optionally prefixed
//! with a root marker (`$.` by default). Unmarked paths resolve against the
//! local record in scope; marked paths resolve against the document root.

pub mod ast;
mod parser;
pub mod resolve;
pub mod syntax;

// --- Public API ---
pub use ast::{Anchor, PathExpr, PathSegment};
pub use parser::{parse_path, parse_path_with};
pub use resolve::lookup;
pub use syntax::PathSyntax;

impl From<&str> for PathExpr {
    fn from(input: &str) -> Self {
        parse_path(input)
    }
}

impl From<String> for PathExpr {
    fn from(input: String) -> Self {
        parse_path(&input)
    }
}
