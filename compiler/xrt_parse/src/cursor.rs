//! Token cursor with bounds-checked lookahead.
//!
//! The parser never backtracks. A grammar rule inspects tokens ahead of the
//! cursor with [`Cursor::lookahead`] until it knows how many tokens it
//! covers, then commits by calling [`Cursor::advance`] with that count.

use tracing::trace;
use xrt_diagnostic::CompileError;
use xrt_ir::{Location, Span, Token, TokenKind, TokenList};

/// Placeholder for overflow reports on a stream with no tokens at all.
const EMPTY_STREAM: Token =
    Token::new(TokenKind::EndOfFile, Span::point(0)).with_location(Location::START);

pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Token `n` places ahead of the cursor, if the stream is that long.
    #[inline]
    pub fn peek(&self, n: usize) -> Option<&'a Token> {
        let tokens: &'a TokenList = self.tokens;
        tokens.get(self.pos + n)
    }

    /// Source text of a token from this stream.
    #[inline]
    pub fn text(&self, token: &Token) -> &'a str {
        let tokens: &'a TokenList = self.tokens;
        tokens.text(token)
    }

    /// No tokens left, or the cursor sits on an end-of-file sentinel.
    pub fn is_at_end(&self) -> bool {
        self.peek(0).map_or(true, |t| t.kind.is_eof())
    }

    /// Token at cursor + `n` without consuming it.
    ///
    /// Fails with `Overflow` when the index is past the end of the stream,
    /// and with `ExpectationError` when `expected` is given and the token's
    /// kind differs.
    pub fn lookahead(&self, n: usize, expected: Option<TokenKind>) -> Result<&'a Token, CompileError> {
        let Some(token) = self.peek(n) else {
            return Err(self.overflow(n));
        };
        trace!(pos = self.pos, n, kind = %token.kind, "lookahead");
        match expected {
            Some(kind) if token.kind != kind => {
                Err(CompileError::expected(kind, token, self.text(token)))
            }
            _ => Ok(token),
        }
    }

    /// `lookahead` with a required kind.
    #[inline]
    pub fn expect(&self, n: usize, kind: TokenKind) -> Result<&'a Token, CompileError> {
        self.lookahead(n, Some(kind))
    }

    /// Consume `count` tokens, stopping at the end of the stream.
    pub fn advance(&mut self, count: usize) {
        self.pos = (self.pos + count).min(self.tokens.len());
        trace!(pos = self.pos, count, "advance");
    }

    #[cold]
    #[inline(never)]
    fn overflow(&self, n: usize) -> CompileError {
        let current = self
            .peek(0)
            .or_else(|| self.tokens.as_slice().last())
            .copied()
            .unwrap_or(EMPTY_STREAM);
        CompileError::overflow(n, &current, self.text(&current))
    }
}
