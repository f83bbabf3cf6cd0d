//! Lexer for XRT: logos-driven scanning followed by operator resolution.
//!
//! ```text
//! SourceBuffer ─▶ Scanner ─▶ TokenList (Punctuator per character)
//!              ─▶ resolve_operators ─▶ TokenList (operator kinds)
//! ```
//!
//! Both stages are fatal on the first error. The resolved stream is what the
//! parser consumes.

mod operators;
mod raw_token;
mod scanner;

use std::sync::Arc;

use xrt_diagnostic::CompileError;
use xrt_ir::{SourceBuffer, TokenList};

pub use operators::{resolve_operators, single_punctuator, Operator, OPERATOR_TABLE};
pub use scanner::{scan, Scanner};

/// Scan `source` and resolve its operators.
pub fn lex(source: Arc<SourceBuffer>) -> Result<TokenList, CompileError> {
    let scanned = scan(source)?;
    resolve_operators(&scanned)
}
