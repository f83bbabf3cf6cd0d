//! Operator resolution (maximal munch over punctuator runs).
//!
//! The scanner emits every punctuator as its own one-character token. This
//! pass merges contiguous runs into compound operators by trying
//! [`OPERATOR_TABLE`] in order, and maps whatever is left through the
//! single-character dispatch table. It produces a new [`TokenList`]; the
//! scanner's stream is never modified.

use std::sync::Arc;

use tracing::{debug, trace};
use xrt_diagnostic::CompileError;
use xrt_ir::{SourceBuffer, Token, TokenKind, TokenList};

/// One entry of the operator priority table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Operator {
    pub spelling: &'static str,
    pub kind: TokenKind,
}

const fn op(spelling: &'static str, kind: TokenKind) -> Operator {
    Operator { spelling, kind }
}

/// Compound operators in match priority order.
///
/// Every spelling precedes all of its own prefixes (`<<<=` before `<<<`
/// before `<<`), which is what makes the first match the longest one.
pub const OPERATOR_TABLE: [Operator; 25] = [
    op("<<<=", TokenKind::AssignRol),
    op(">>>=", TokenKind::AssignRor),
    op("<<<", TokenKind::Rol),
    op(">>>", TokenKind::Ror),
    op("<<=", TokenKind::AssignLsl),
    op(">>=", TokenKind::AssignLsr),
    op("&&", TokenKind::BoolAnd),
    op("||", TokenKind::BoolOr),
    op("::", TokenKind::Resolve),
    op("+=", TokenKind::AssignAdd),
    op("-=", TokenKind::AssignSub),
    op("*=", TokenKind::AssignMul),
    op("/=", TokenKind::AssignDiv),
    op("&=", TokenKind::AssignAnd),
    op("|=", TokenKind::AssignOr),
    op("^=", TokenKind::AssignXor),
    op("..", TokenKind::Range),
    op("++", TokenKind::Inc),
    op("--", TokenKind::Dec),
    op("==", TokenKind::Equal),
    op("!=", TokenKind::NotEqual),
    op(">=", TokenKind::GtEq),
    op("<=", TokenKind::LtEq),
    op("<<", TokenKind::Lsl),
    op(">>", TokenKind::Lsr),
];

/// Kind of a lone punctuator character; `Unknown` when it has no meaning
/// by itself (`%`, `~`, `\`).
pub fn single_punctuator(c: char) -> TokenKind {
    match c {
        '.' => TokenKind::Dot,
        ',' => TokenKind::Comma,
        ';' => TokenKind::Separator,
        '<' => TokenKind::OpenAngle,
        '>' => TokenKind::CloseAngle,
        '[' => TokenKind::OpenBracket,
        ']' => TokenKind::CloseBracket,
        '(' => TokenKind::OpenParen,
        ')' => TokenKind::CloseParen,
        '{' => TokenKind::OpenScope,
        '}' => TokenKind::CloseScope,
        '!' => TokenKind::Not,
        '+' => TokenKind::Add,
        '-' => TokenKind::Sub,
        '*' => TokenKind::Mul,
        '/' => TokenKind::Div,
        '^' => TokenKind::Xor,
        '&' => TokenKind::And,
        '|' => TokenKind::Or,
        '=' => TokenKind::Assign,
        '?' => TokenKind::TernaryIf,
        ':' => TokenKind::TernaryElse,
        '#' => TokenKind::Preprocessor,
        _ => TokenKind::Unknown,
    }
}

/// Resolve every punctuator token of `tokens` into an operator kind.
///
/// Non-punctuator tokens, end-of-file sentinels included, pass through
/// unchanged. Fails with `InvalidPunctuatorSequence` on the first punctuator
/// that neither starts a compound operator nor has a single-character kind.
pub fn resolve_operators(tokens: &TokenList) -> Result<TokenList, CompileError> {
    let source = tokens.source();
    let input = tokens.as_slice();
    let mut resolved = Vec::with_capacity(input.len());
    let mut i = 0;

    while i < input.len() {
        let token = input[i];
        if !token.kind.is_punctuator() {
            resolved.push(token);
            i += 1;
            continue;
        }

        if let Some((operator, last)) = match_compound(source, input, i) {
            trace!(op = operator.spelling, start = token.span.start, "compound operator");
            resolved.push(Token {
                kind: operator.kind,
                span: token.span.merge(last.span),
                ..token
            });
            i += operator.spelling.len();
            continue;
        }

        let text = source.slice(token.span);
        let kind = text.chars().next().map_or(TokenKind::Unknown, single_punctuator);
        if kind == TokenKind::Unknown {
            return Err(CompileError::invalid_punctuator(&token, text));
        }
        resolved.push(Token { kind, ..token });
        i += 1;
    }

    debug!(
        before = input.len(),
        after = resolved.len(),
        "resolved operators"
    );
    Ok(TokenList::new(Arc::clone(source), resolved))
}

/// First table entry spelled by the punctuator run starting at `start`.
///
/// A run only counts if its tokens are punctuators and sit back to back in
/// the source. Returns the entry and the last token it consumes.
fn match_compound(
    source: &SourceBuffer,
    tokens: &[Token],
    start: usize,
) -> Option<(&'static Operator, Token)> {
    OPERATOR_TABLE.iter().find_map(|operator| {
        let run = tokens.get(start..start + operator.spelling.len())?;
        let mut next_start = run.first()?.span.start;
        for (token, expected) in run.iter().zip(operator.spelling.bytes()) {
            if !token.kind.is_punctuator()
                || token.span.start != next_start
                || source.slice(token.span).as_bytes() != [expected]
            {
                return None;
            }
            next_start = token.span.end;
        }
        run.last().map(|last| (operator, *last))
    })
}
