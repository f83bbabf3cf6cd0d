//! Namespace declarations.

use tracing::debug;
use xrt_diagnostic::CompileError;
use xrt_ir::{AstNode, TokenKind};

use crate::Parser;

impl Parser<'_> {
    /// `namespace` Identifier { `::` Identifier } `{`
    ///
    /// Segments are joined with their `::` separators. The opening `{` is
    /// consumed here; the matching `}` is handled by the top-level loop.
    pub(super) fn parse_namespace(&mut self) -> Result<(), CompileError> {
        let first = self.cursor.expect(1, TokenKind::Identifier)?;
        let mut name = self.cursor.text(first).to_string();

        // Index of the token after the last segment.
        let mut offset = 2;
        loop {
            let token = self.cursor.lookahead(offset, None)?;
            match token.kind {
                TokenKind::OpenScope => break,
                TokenKind::Resolve => {
                    // `A:: {` fails here: a segment must follow every `::`.
                    let segment = self.cursor.expect(offset + 1, TokenKind::Identifier)?;
                    name.push_str(self.cursor.text(token));
                    name.push_str(self.cursor.text(segment));
                    offset += 2;
                }
                _ => {
                    return Err(CompileError::expected(
                        "`::` or `{`",
                        token,
                        self.cursor.text(token),
                    ));
                }
            }
        }

        debug!(name = %name, depth = self.depth + 1, "namespace");
        self.ast.enter_scope();
        self.ast.append(AstNode::Namespace { name });
        self.depth += 1;
        self.cursor.advance(offset + 1);
        Ok(())
    }
}
