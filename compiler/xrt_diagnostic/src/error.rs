//! The single front-end error type.

use std::fmt;

use thiserror::Error;
use xrt_ir::{Location, Span, Token, TokenKind};

use crate::ErrorCode;

/// Pipeline stage an error was raised in.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Phase {
    Scan,
    Resolve,
    Parse,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Scan => "scan",
            Phase::Resolve => "resolve",
            Phase::Parse => "parse",
        })
    }
}

/// What went wrong.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorKind {
    /// No scanner rule matches the input at the current position.
    UnknownToken,
    /// Punctuator that forms no operator and has no single-character meaning.
    InvalidPunctuatorSequence,
    /// Lookahead index past the end of the token stream.
    Overflow,
    /// A lookahead found a different token kind than the grammar requires.
    ExpectationError,
    /// `#` followed by a directive name that does not exist.
    InvalidPreprocessorDirective,
    /// Recognized construct without an implementation (`#define`, most keywords).
    NotImplemented,
    /// Token that cannot start or continue anything at this grammar position.
    UnexpectedToken,
}

impl ErrorKind {
    pub fn code(self) -> ErrorCode {
        match self {
            ErrorKind::UnknownToken => ErrorCode::X0001,
            ErrorKind::InvalidPunctuatorSequence => ErrorCode::X1001,
            ErrorKind::Overflow => ErrorCode::X1002,
            ErrorKind::ExpectationError => ErrorCode::X1003,
            ErrorKind::InvalidPreprocessorDirective => ErrorCode::X1004,
            ErrorKind::NotImplemented => ErrorCode::X1005,
            ErrorKind::UnexpectedToken => ErrorCode::X1006,
        }
    }

    pub fn phase(self) -> Phase {
        match self {
            ErrorKind::UnknownToken => Phase::Scan,
            ErrorKind::InvalidPunctuatorSequence => Phase::Resolve,
            ErrorKind::Overflow
            | ErrorKind::ExpectationError
            | ErrorKind::InvalidPreprocessorDirective
            | ErrorKind::NotImplemented
            | ErrorKind::UnexpectedToken => Phase::Parse,
        }
    }
}

/// A fatal front-end error with the location of the offending token.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{location}: {message}")]
pub struct CompileError {
    pub kind: ErrorKind,
    pub message: String,
    pub location: Location,
    /// Byte range of the offending token (for `UnknownToken`, the whole
    /// unscanned suffix).
    pub span: Span,
}

impl CompileError {
    #[cold]
    pub fn new(
        kind: ErrorKind,
        message: impl Into<String>,
        location: Location,
        span: Span,
    ) -> Self {
        CompileError {
            kind,
            message: message.into(),
            location,
            span,
        }
    }

    #[cold]
    fn at_token(kind: ErrorKind, message: String, token: &Token) -> Self {
        Self::new(kind, message, token.location(), token.span)
    }

    /// No scanner rule matched; `suffix` is everything left unscanned.
    #[cold]
    pub fn unknown_token(suffix: &str, location: Location, span: Span) -> Self {
        Self::new(
            ErrorKind::UnknownToken,
            format!("unknown token: '{suffix}'"),
            location,
            span,
        )
    }

    #[cold]
    pub fn invalid_punctuator(token: &Token, text: &str) -> Self {
        Self::at_token(
            ErrorKind::InvalidPunctuatorSequence,
            format!("invalid operator `{text}`"),
            token,
        )
    }

    /// Lookahead `+offset` ran past the stream; reported at the cursor token.
    #[cold]
    pub fn overflow(offset: usize, current: &Token, text: &str) -> Self {
        Self::at_token(
            ErrorKind::Overflow,
            format!("lookahead [+{offset}] overflow ({})", describe(current.kind, text)),
            current,
        )
    }

    #[cold]
    pub fn expected(expected: impl fmt::Display, found: &Token, text: &str) -> Self {
        Self::at_token(
            ErrorKind::ExpectationError,
            format!("expected {expected}, found {}", describe(found.kind, text)),
            found,
        )
    }

    #[cold]
    pub fn invalid_directive(directive: &Token, text: &str) -> Self {
        Self::at_token(
            ErrorKind::InvalidPreprocessorDirective,
            format!("unknown preprocessing directive `{text}`"),
            directive,
        )
    }

    #[cold]
    pub fn not_implemented(what: &str, token: &Token) -> Self {
        Self::at_token(
            ErrorKind::NotImplemented,
            format!("not implemented: {what}"),
            token,
        )
    }

    #[cold]
    pub fn unexpected_token(token: &Token, text: &str) -> Self {
        Self::at_token(
            ErrorKind::UnexpectedToken,
            format!("unexpected {}", describe(token.kind, text)),
            token,
        )
    }

    /// `}` with no open scope.
    #[cold]
    pub fn unmatched_scope_end(token: &Token) -> Self {
        Self::at_token(
            ErrorKind::UnexpectedToken,
            "unmatched `}`".to_string(),
            token,
        )
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.kind.phase()
    }
}

/// Describe a token for a message: kinds with variable text show it,
/// fixed-spelling kinds are named by their display name alone.
fn describe(kind: TokenKind, text: &str) -> String {
    match kind {
        TokenKind::Identifier
        | TokenKind::StringLiteral
        | TokenKind::NumberLiteral
        | TokenKind::Comment
        | TokenKind::Punctuator
        | TokenKind::Unknown => format!("{} `{text}`", kind.display_name()),
        TokenKind::Keyword(kw) => format!("keyword `{kw}`"),
        _ => kind.display_name().to_string(),
    }
}
