//! Shared data model for the XRT compiler front end.
//!
//! Everything downstream of file loading speaks these types:
//! - [`SourceBuffer`]: immutable decoded text plus its path
//! - [`Span`] / [`Location`]: byte ranges and 1-based line/column positions
//! - [`Token`] / [`TokenList`]: the scanner's output, borrowing text from the source
//! - [`Ast`]: the append-only parse output with a depth-tracked traversal

mod ast;
mod source;
mod span;
mod token;

pub use ast::{Ast, AstNode, AstRenderer, ScopeUnderflow};
pub use source::SourceBuffer;
pub use span::{Location, Span};
pub use token::{Keyword, Token, TokenKind, TokenList, EOF_PADDING};
