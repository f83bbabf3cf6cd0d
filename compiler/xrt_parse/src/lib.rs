//! Recursive descent parser for XRT.
//!
//! Consumes a resolved [`TokenList`] and produces the flat [`Ast`]. Parsing
//! stops at the first error; an AST is only returned for a complete parse.

mod cursor;
mod grammar;

pub use cursor::Cursor;

use tracing::{debug, warn};
use xrt_diagnostic::CompileError;
use xrt_ir::{Ast, TokenList};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    ast: Ast,
    /// Scopes opened by `namespace` and not yet closed.
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            ast: Ast::new(),
            depth: 0,
        }
    }

    /// Parse the whole stream.
    pub fn parse(mut self) -> Result<Ast, CompileError> {
        self.parse_top_level()?;
        if self.depth > 0 {
            warn!(open = self.depth, "scopes still open at end of input");
        }
        debug!(nodes = self.ast.len(), "parsed");
        Ok(self.ast)
    }
}

/// Parse a resolved token stream into an AST.
pub fn parse(tokens: &TokenList) -> Result<Ast, CompileError> {
    Parser::new(tokens).parse()
}

#[cfg(test)]
mod tests;
