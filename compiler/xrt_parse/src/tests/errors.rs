//! Error kinds raised by the grammar.

use pretty_assertions::assert_eq;
use xrt_diagnostic::{CompileError, ErrorKind};
use xrt_ir::{Location, SourceBuffer, Span, TokenList};

use crate::parse;

fn lexed(text: &str) -> TokenList {
    xrt_lexer::lex(SourceBuffer::shared(text, "test.xrt"))
        .unwrap_or_else(|e| panic!("lex failed: {e}"))
}

fn parse_err(text: &str) -> CompileError {
    parse(&lexed(text))
        .err()
        .unwrap_or_else(|| panic!("parse should fail for {text:?}"))
}

#[test]
fn dangling_resolve_before_scope() {
    let err = parse_err("namespace A:: {");
    assert_eq!(err.kind, ErrorKind::ExpectationError);
    assert_eq!(err.message, "expected identifier, found `{`");
    assert_eq!(err.location, Location::new(1, 15));
}

#[test]
fn namespace_without_name() {
    let err = parse_err("namespace {");
    assert_eq!(err.kind, ErrorKind::ExpectationError);
    assert_eq!(err.location, Location::new(1, 11));
}

#[test]
fn namespace_segments_need_resolve() {
    let err = parse_err("namespace A B {");
    assert_eq!(err.kind, ErrorKind::ExpectationError);
    assert_eq!(err.message, "expected `::` or `{`, found identifier `B`");
}

#[test]
fn single_colon_is_not_resolve() {
    let err = parse_err("namespace A:B {");
    assert_eq!(err.kind, ErrorKind::ExpectationError);
    assert_eq!(err.message, "expected `::` or `{`, found `:`");
}

#[test]
fn define_is_not_implemented() {
    let err = parse_err("#define X 1");
    assert_eq!(err.kind, ErrorKind::NotImplemented);
    assert_eq!(err.message, "not implemented: `#define`");
    assert_eq!(err.span, Span::new(1, 7));
}

#[test]
fn unknown_directive() {
    let err = parse_err("#pragma once");
    assert_eq!(err.kind, ErrorKind::InvalidPreprocessorDirective);
    assert_eq!(err.message, "unknown preprocessing directive `pragma`");
}

#[test]
fn include_needs_string_path() {
    let err = parse_err("#include foo");
    assert_eq!(err.kind, ErrorKind::ExpectationError);
    assert_eq!(err.message, "expected string literal, found identifier `foo`");
}

#[test]
fn directive_name_must_be_identifier() {
    let err = parse_err("# \"x\"");
    assert_eq!(err.kind, ErrorKind::ExpectationError);
}

#[test]
fn other_keywords_are_not_implemented() {
    let err = parse_err("component Timer {}");
    assert_eq!(err.kind, ErrorKind::NotImplemented);
    assert_eq!(err.message, "not implemented: keyword `component`");
    assert_eq!(err.location, Location::START);
}

#[test]
fn stray_token_at_top_level() {
    let err = parse_err("namespace A {\n  x\n}");
    assert_eq!(err.kind, ErrorKind::UnexpectedToken);
    assert_eq!(err.message, "unexpected identifier `x`");
    assert_eq!(err.location, Location::new(2, 3));
}

#[test]
fn unmatched_scope_end() {
    let err = parse_err("namespace A { }\n}");
    assert_eq!(err.kind, ErrorKind::UnexpectedToken);
    assert_eq!(err.message, "unmatched `}`");
    assert_eq!(err.location, Location::new(2, 1));
}

#[test]
fn lookahead_overflow_without_sentinels() {
    let mut tokens = lexed("#include").as_slice().to_vec();
    tokens.truncate(2);
    let list = TokenList::new(SourceBuffer::shared("#include", "test.xrt"), tokens);
    let err = parse(&list)
        .err()
        .unwrap_or_else(|| panic!("parse should fail"));
    assert_eq!(err.kind, ErrorKind::Overflow);
    assert_eq!(err.message, "lookahead [+2] overflow (`#`)");
}
