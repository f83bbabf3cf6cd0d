//! Preprocessor directives.

use tracing::debug;
use xrt_diagnostic::CompileError;
use xrt_ir::{AstNode, TokenKind};

use crate::Parser;

impl Parser<'_> {
    /// `#` directive: `include` records a source link, `define` is reserved.
    pub(super) fn parse_preprocessor(&mut self) -> Result<(), CompileError> {
        let directive = self.cursor.expect(1, TokenKind::Identifier)?;

        match self.cursor.text(directive) {
            "include" => {
                let literal = self.cursor.expect(2, TokenKind::StringLiteral)?;
                let path = unquote(self.cursor.text(literal));
                debug!(path, "include");
                self.ast.append(AstNode::SourceLink {
                    path: path.to_string(),
                });
                self.cursor.advance(3);
                Ok(())
            }
            "define" => Err(CompileError::not_implemented("`#define`", directive)),
            name => Err(CompileError::invalid_directive(directive, name)),
        }
    }
}

/// Contents of a string literal without its surrounding quotes.
fn unquote(literal: &str) -> &str {
    literal
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(literal)
}
