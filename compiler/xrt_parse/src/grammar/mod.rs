//! Grammar Modules
//!
//! Each module extends `Parser` with the rules for one top-level construct:
//!
//! - [`preprocessor`]: `#include "path"` and the reserved `#define`
//! - [`namespace`]: `namespace A::B {` declarations
//!
//! Every rule works the same way: look ahead until the number of tokens the
//! construct covers is known, update the AST, then advance the cursor by
//! exactly that count.

mod namespace;
mod preprocessor;

use tracing::trace;
use xrt_diagnostic::CompileError;
use xrt_ir::{Keyword, Token, TokenKind};

use crate::Parser;

impl Parser<'_> {
    /// Run top-level rules until the first end-of-file token.
    pub(crate) fn parse_top_level(&mut self) -> Result<(), CompileError> {
        while let Some(token) = self.cursor.peek(0) {
            trace!(pos = self.cursor.position(), kind = %token.kind, "top level");
            match token.kind {
                TokenKind::EndOfFile => break,
                TokenKind::Comment => self.cursor.advance(1),
                TokenKind::Preprocessor => self.parse_preprocessor()?,
                TokenKind::Keyword(Keyword::Namespace) => self.parse_namespace()?,
                TokenKind::Keyword(keyword) => {
                    return Err(CompileError::not_implemented(
                        &format!("keyword `{keyword}`"),
                        token,
                    ));
                }
                TokenKind::CloseScope => self.parse_scope_end(token)?,
                _ => {
                    return Err(CompileError::unexpected_token(
                        token,
                        self.cursor.text(token),
                    ));
                }
            }
        }
        Ok(())
    }

    /// `}`: close the innermost open scope.
    fn parse_scope_end(&mut self, token: &Token) -> Result<(), CompileError> {
        let Some(depth) = self.depth.checked_sub(1) else {
            return Err(CompileError::unmatched_scope_end(token));
        };
        self.depth = depth;
        self.ast.exit_scope();
        self.cursor.advance(1);
        Ok(())
    }
}
