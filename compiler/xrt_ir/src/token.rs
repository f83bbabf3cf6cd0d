//! Token model shared by the scanner, the operator resolver, and the parser.
//!
//! Tokens never own their text. A [`Token`] carries a [`Span`] into the
//! [`SourceBuffer`] and the [`TokenList`] keeps that buffer alive through an
//! `Arc`, so `TokenList::text` can hand out borrowed slices for as long as the
//! list exists.

use std::fmt;
use std::sync::Arc;

use crate::{Location, SourceBuffer, Span};

/// Number of end-of-file sentinels appended after the last real token.
///
/// Grammar rules may look this many tokens past any real token without
/// reading beyond the stream; bounds are still checked on every lookahead.
pub const EOF_PADDING: usize = 16;

/// Reserved words of the language.
///
/// Keyword matching is exact: `namespace1` is an identifier, not a keyword
/// followed by a number.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Keyword {
    Abstract,
    Auto,
    Component,
    Else,
    Extern,
    For,
    If,
    Implementation,
    In,
    Inout,
    Length,
    Namespace,
    Out,
    Range,
    Registers,
    StaticAssert,
    Template,
    Typename,
    Using,
}

impl Keyword {
    /// Look up a keyword by its exact spelling.
    ///
    /// Uses the text length as a first-pass filter, then matches against the
    /// keywords of that length.
    pub fn lookup(text: &str) -> Option<Keyword> {
        match text.len() {
            2 => match text {
                "if" => Some(Keyword::If),
                "in" => Some(Keyword::In),
                _ => None,
            },
            3 => match text {
                "for" => Some(Keyword::For),
                "out" => Some(Keyword::Out),
                _ => None,
            },
            4 => match text {
                "auto" => Some(Keyword::Auto),
                "else" => Some(Keyword::Else),
                _ => None,
            },
            5 => match text {
                "inout" => Some(Keyword::Inout),
                "range" => Some(Keyword::Range),
                "using" => Some(Keyword::Using),
                _ => None,
            },
            6 => match text {
                "extern" => Some(Keyword::Extern),
                "length" => Some(Keyword::Length),
                _ => None,
            },
            8 => match text {
                "abstract" => Some(Keyword::Abstract),
                "template" => Some(Keyword::Template),
                "typename" => Some(Keyword::Typename),
                _ => None,
            },
            9 => match text {
                "component" => Some(Keyword::Component),
                "namespace" => Some(Keyword::Namespace),
                "registers" => Some(Keyword::Registers),
                _ => None,
            },
            13 => match text {
                "static_assert" => Some(Keyword::StaticAssert),
                _ => None,
            },
            14 => match text {
                "implementation" => Some(Keyword::Implementation),
                _ => None,
            },
            _ => None,
        }
    }

    /// Source spelling of the keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Abstract => "abstract",
            Keyword::Auto => "auto",
            Keyword::Component => "component",
            Keyword::Else => "else",
            Keyword::Extern => "extern",
            Keyword::For => "for",
            Keyword::If => "if",
            Keyword::Implementation => "implementation",
            Keyword::In => "in",
            Keyword::Inout => "inout",
            Keyword::Length => "length",
            Keyword::Namespace => "namespace",
            Keyword::Out => "out",
            Keyword::Range => "range",
            Keyword::Registers => "registers",
            Keyword::StaticAssert => "static_assert",
            Keyword::Template => "template",
            Keyword::Typename => "typename",
            Keyword::Using => "using",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lexical category of a token.
///
/// The scanner only produces the first group of kinds (`Keyword` through
/// `Punctuator`, plus `EndOfFile`). Operator resolution rewrites every
/// `Punctuator` into one of the operator/delimiter kinds, or `Unknown` when
/// the character has no meaning on its own.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Scanner output
    Keyword(Keyword),
    Identifier,
    StringLiteral,
    NumberLiteral,
    Comment,
    /// Single unresolved punctuator character.
    Punctuator,

    // Single-character punctuators
    Dot,
    Comma,
    Separator,
    OpenAngle,
    CloseAngle,
    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,
    OpenScope,
    CloseScope,
    Not,
    Add,
    Sub,
    Mul,
    Div,
    Xor,
    And,
    Or,
    Assign,
    TernaryIf,
    TernaryElse,
    Preprocessor,

    // Compound operators
    AssignRol,
    AssignRor,
    Rol,
    Ror,
    AssignLsl,
    AssignLsr,
    BoolAnd,
    BoolOr,
    Resolve,
    AssignAdd,
    AssignSub,
    AssignMul,
    AssignDiv,
    AssignAnd,
    AssignOr,
    AssignXor,
    Range,
    Inc,
    Dec,
    Equal,
    NotEqual,
    GtEq,
    LtEq,
    Lsl,
    Lsr,

    /// Punctuator with no single-character meaning.
    Unknown,
    EndOfFile,
}

impl TokenKind {
    /// Human-readable name used in diagnostics ("expected X, found Y").
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Keyword(kw) => kw.as_str(),
            TokenKind::Identifier => "identifier",
            TokenKind::StringLiteral => "string literal",
            TokenKind::NumberLiteral => "number literal",
            TokenKind::Comment => "comment",
            TokenKind::Punctuator => "punctuator",
            TokenKind::Dot => "`.`",
            TokenKind::Comma => "`,`",
            TokenKind::Separator => "`;`",
            TokenKind::OpenAngle => "`<`",
            TokenKind::CloseAngle => "`>`",
            TokenKind::OpenBracket => "`[`",
            TokenKind::CloseBracket => "`]`",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::OpenScope => "`{`",
            TokenKind::CloseScope => "`}`",
            TokenKind::Not => "`!`",
            TokenKind::Add => "`+`",
            TokenKind::Sub => "`-`",
            TokenKind::Mul => "`*`",
            TokenKind::Div => "`/`",
            TokenKind::Xor => "`^`",
            TokenKind::And => "`&`",
            TokenKind::Or => "`|`",
            TokenKind::Assign => "`=`",
            TokenKind::TernaryIf => "`?`",
            TokenKind::TernaryElse => "`:`",
            TokenKind::Preprocessor => "`#`",
            TokenKind::AssignRol => "`<<<=`",
            TokenKind::AssignRor => "`>>>=`",
            TokenKind::Rol => "`<<<`",
            TokenKind::Ror => "`>>>`",
            TokenKind::AssignLsl => "`<<=`",
            TokenKind::AssignLsr => "`>>=`",
            TokenKind::BoolAnd => "`&&`",
            TokenKind::BoolOr => "`||`",
            TokenKind::Resolve => "`::`",
            TokenKind::AssignAdd => "`+=`",
            TokenKind::AssignSub => "`-=`",
            TokenKind::AssignMul => "`*=`",
            TokenKind::AssignDiv => "`/=`",
            TokenKind::AssignAnd => "`&=`",
            TokenKind::AssignOr => "`|=`",
            TokenKind::AssignXor => "`^=`",
            TokenKind::Range => "`..`",
            TokenKind::Inc => "`++`",
            TokenKind::Dec => "`--`",
            TokenKind::Equal => "`==`",
            TokenKind::NotEqual => "`!=`",
            TokenKind::GtEq => "`>=`",
            TokenKind::LtEq => "`<=`",
            TokenKind::Lsl => "`<<`",
            TokenKind::Lsr => "`>>`",
            TokenKind::Unknown => "unknown punctuator",
            TokenKind::EndOfFile => "end of file",
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::EndOfFile)
    }

    #[inline]
    pub fn is_punctuator(&self) -> bool {
        matches!(self, TokenKind::Punctuator)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A classified slice of the source.
///
/// `line`/`column` stay 0 until the scanner's line pass assigns them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub line: u32,
    pub column: u32,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            span,
            line: 0,
            column: 0,
        }
    }

    /// Byte offset of the token's first character.
    #[inline]
    pub fn offset(&self) -> usize {
        self.span.start as usize
    }

    #[inline]
    pub fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }

    #[inline]
    #[must_use]
    pub const fn with_location(mut self, location: Location) -> Self {
        self.line = location.line;
        self.column = location.column;
        self
    }
}

/// Ordered token sequence together with the source it borrows from.
#[derive(Clone, Debug)]
pub struct TokenList {
    source: Arc<SourceBuffer>,
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new(source: Arc<SourceBuffer>, tokens: Vec<Token>) -> Self {
        TokenList { source, tokens }
    }

    /// The source buffer every token's span points into.
    #[inline]
    pub fn source(&self) -> &Arc<SourceBuffer> {
        &self.source
    }

    /// Text of a token from this list.
    #[inline]
    pub fn text(&self, token: &Token) -> &str {
        self.source.slice(token.span)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Tokens before the first end-of-file sentinel.
    pub fn real_tokens(&self) -> &[Token] {
        let end = self
            .tokens
            .iter()
            .position(|t| t.kind.is_eof())
            .unwrap_or(self.tokens.len());
        &self.tokens[..end]
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
