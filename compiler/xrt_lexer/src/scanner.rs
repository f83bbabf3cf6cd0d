//! Source scanning.
//!
//! Turns a [`SourceBuffer`] into a flat token sequence in two passes:
//!
//! ```text
//! source ─▶ RawToken rules ─▶ Vec<Token> (spans only)
//!        ─▶ line pass      ─▶ line/column assigned, EOF padding appended
//! ```
//!
//! Whitespace is matched and discarded. Comments are kept as tokens so the
//! gaps between consecutive tokens are always pure whitespace.

use std::sync::Arc;

use logos::Logos;
use tracing::{debug, trace, warn};
use xrt_diagnostic::CompileError;
use xrt_ir::{Location, SourceBuffer, Span, Token, TokenKind, TokenList, EOF_PADDING};

use crate::raw_token::RawToken;

/// Scanner for one compilation unit.
///
/// Scanning is a one-shot operation: after the first successful
/// [`scan`](Scanner::scan), further calls log a warning and leave the tokens
/// untouched.
pub struct Scanner {
    source: Arc<SourceBuffer>,
    tokens: Vec<Token>,
    scanned: bool,
}

impl Scanner {
    pub fn new(source: Arc<SourceBuffer>) -> Self {
        Scanner {
            source,
            tokens: Vec::new(),
            scanned: false,
        }
    }

    /// Tokens produced so far (empty before the first successful scan).
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_scanned(&self) -> bool {
        self.scanned
    }

    /// Scan the whole buffer.
    ///
    /// Fails with `UnknownToken` carrying the unscanned suffix when no rule
    /// matches at the current position; nothing is kept from a failed scan.
    pub fn scan(&mut self) -> Result<(), CompileError> {
        if self.scanned {
            warn!(
                path = %self.source.path().display(),
                "source already processed"
            );
            return Ok(());
        }

        let text = self.source.text();
        let mut tokens = Vec::with_capacity(text.len() / 4 + EOF_PADDING);
        let mut lexer = RawToken::lexer(text);

        while let Some(result) = lexer.next() {
            let range = lexer.span();
            match result {
                Ok(RawToken::BlockComment(false)) => {
                    // An unclosed `/*` is the punctuators `/` and `*`.
                    trace!(start = range.start, "unterminated block comment");
                    let star = range.start + 1;
                    tokens.push(Token::new(TokenKind::Punctuator, Span::from_range(range.start..star)));
                    tokens.push(Token::new(TokenKind::Punctuator, Span::from_range(star..range.end)));
                }
                Ok(raw) => {
                    let kind = raw.kind(lexer.slice());
                    trace!(kind = %kind, start = range.start, end = range.end, "scan");
                    tokens.push(Token::new(kind, Span::from_range(range)));
                }
                Err(()) => {
                    let offset = range.start;
                    return Err(CompileError::unknown_token(
                        self.source.suffix_from(offset),
                        self.source.location_of(offset),
                        Span::from_range(offset..text.len()),
                    ));
                }
            }
        }

        let end = assign_locations(text, &mut tokens);
        let eof = Token::new(TokenKind::EndOfFile, Span::from_range(text.len()..text.len()))
            .with_location(end);
        tokens.extend(std::iter::repeat(eof).take(EOF_PADDING));

        debug!(
            path = %self.source.path().display(),
            tokens = tokens.len() - EOF_PADDING,
            "scanned"
        );
        self.tokens = tokens;
        self.scanned = true;
        Ok(())
    }

    /// Snapshot of the tokens as a stream sharing this scanner's source.
    pub fn token_list(&self) -> TokenList {
        TokenList::new(Arc::clone(&self.source), self.tokens.clone())
    }

    pub fn into_token_list(self) -> TokenList {
        TokenList::new(self.source, self.tokens)
    }
}

/// Scan `source` in one call.
pub fn scan(source: Arc<SourceBuffer>) -> Result<TokenList, CompileError> {
    let mut scanner = Scanner::new(source);
    scanner.scan()?;
    Ok(scanner.into_token_list())
}

/// Assign 1-based line/column to every token.
///
/// Walks the text once, merging against the tokens in offset order (tokens
/// are already sorted by offset). Returns the location just past the last
/// character, used for the end-of-file sentinels.
fn assign_locations(text: &str, tokens: &mut [Token]) -> Location {
    let mut pending = tokens.iter_mut().peekable();
    let mut location = Location::START;

    for (offset, c) in text.char_indices() {
        if let Some(token) = pending.next_if(|t| t.offset() == offset) {
            token.line = location.line;
            token.column = location.column;
        }
        if c == '\n' {
            location.line += 1;
            location.column = 1;
        } else {
            location.column += 1;
        }
    }

    location
}
