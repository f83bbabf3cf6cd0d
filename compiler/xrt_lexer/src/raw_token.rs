//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived rule set the scanner runs over
//! the source. Every rule starts on a distinct character class except the
//! comment forms and the `/` punctuator, where the longer comment match wins,
//! so the longest match always agrees with the rule priority order
//! (whitespace, word, comment, punctuator, string, number). The scanner
//! splits an unclosed `/*` back into two punctuators.

use logos::{Lexer, Logos};
use xrt_ir::{Keyword, TokenKind};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum RawToken {
    /// Identifier or keyword; resolved against the keyword set afterwards.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Word,

    /// `/* ... */`, non-nesting. The flag is false for a `/*` with no
    /// closing `*/`, in which case the match covers only the opener.
    #[token("/*", block_comment)]
    BlockComment(bool),

    // Stops before the line terminator, including a `\r` of `\r\n`.
    #[regex(r"//[^\r\n]*")]
    LineComment,

    #[regex(r"[!%^&*()\-+={}|~\[\];:<>?,.#/\\]")]
    Punctuator,

    // Raw newlines are accepted inside strings.
    #[regex(r#""([^"\\]|\\.)*""#)]
    String,

    // Admits hex and suffixed forms such as `0x1F` and `12ns`.
    #[regex(r"[0-9][a-zA-Z0-9_]*")]
    Number,
}

/// Extend a `/*` match through the first `*/`.
fn block_comment(lex: &mut Lexer<'_, RawToken>) -> bool {
    match memchr::memmem::find(lex.remainder().as_bytes(), b"*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => false,
    }
}

impl RawToken {
    /// Scanner-level kind for a matched rule.
    pub(crate) fn kind(self, slice: &str) -> TokenKind {
        match self {
            RawToken::Word => Keyword::lookup(slice).map_or(TokenKind::Identifier, TokenKind::Keyword),
            RawToken::BlockComment(true) | RawToken::LineComment => TokenKind::Comment,
            RawToken::BlockComment(false) | RawToken::Punctuator => TokenKind::Punctuator,
            RawToken::String => TokenKind::StringLiteral,
            RawToken::Number => TokenKind::NumberLiteral,
        }
    }
}
