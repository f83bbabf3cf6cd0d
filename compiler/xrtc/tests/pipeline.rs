// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests through the driver pipeline.
//!
//! Each test feeds a whole source through scan, operator resolution, and
//! parsing, and checks the tokens or AST that come out the other end.

use std::io::Write;

use pretty_assertions::assert_eq;
use xrt_diagnostic::{ErrorKind, Phase};
use xrt_ir::{AstNode, Location, SourceBuffer, TokenKind};
use xrtc::{compile_file, compile_source, dump_ast, Compiled, DriverError};

fn compile(text: &str) -> Compiled {
    compile_source(SourceBuffer::shared(text, "test.xrt")).expect("compile failed")
}

fn compile_err(text: &str) -> xrt_diagnostic::CompileError {
    compile_source(SourceBuffer::shared(text, "test.xrt")).expect_err("compile should fail")
}

#[test]
fn include_scenario() {
    let compiled = compile("#include \"foo.xrt\"");
    assert_eq!(
        compiled.ast.nodes(),
        &[AstNode::SourceLink {
            path: "foo.xrt".to_string()
        }]
    );
    assert!(!compiled.ast.iter().any(AstNode::is_scope_marker));
}

#[test]
fn namespace_scenario() {
    let compiled = compile("namespace A::B { }");
    let nodes = compiled.ast.nodes();
    assert_eq!(nodes[0], AstNode::ScopeStart);
    assert_eq!(
        nodes[1],
        AstNode::Namespace {
            name: "A::B".to_string()
        }
    );
    assert_eq!(nodes.last(), Some(&AstNode::ScopeEnd));
    assert_eq!(compiled.ast.traverse(&mut |_: &AstNode, _: usize| {}), Ok(0));
}

#[test]
fn invalid_character_scenario() {
    let err = compile_err("namespace A {\n  `oops\n}");
    assert_eq!(err.kind, ErrorKind::UnknownToken);
    assert_eq!(err.phase(), Phase::Scan);
    assert_eq!(err.message, "unknown token: '`oops\n}'");
    assert_eq!(err.location, Location::new(2, 3));
}

#[test]
fn dangling_resolve_scenario() {
    let err = compile_err("namespace A:: {");
    assert_eq!(err.kind, ErrorKind::ExpectationError);
    assert_eq!(err.phase(), Phase::Parse);
}

#[test]
fn maximal_munch_scenario() {
    let tokens = xrt_lexer::lex(SourceBuffer::shared("<<<=", "test.xrt")).expect("lex failed");
    let kinds: Vec<_> = tokens.real_tokens().iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::AssignRol]);

    // The parser accepts no operators at top level.
    let err = compile_err("<<<=");
    assert_eq!(err.kind, ErrorKind::UnexpectedToken);
    assert_eq!(err.message, "unexpected `<<<=`");
}

#[test]
fn resolved_stream_keeps_padding() {
    let compiled = compile("namespace A { }");
    let tokens = compiled.tokens.as_slice();
    assert_eq!(tokens.len(), 4 + xrt_ir::EOF_PADDING);
    assert!(tokens[4..].iter().all(|t| t.kind == TokenKind::EndOfFile));
}

#[test]
fn register_file_layout() {
    let source = "\
// Peripheral map
#include \"common.xrt\"

namespace Chip::Periph {
    /* timers */
    namespace Timer {
    }
    #include \"timer_regs.xrt\"
}
";
    let compiled = compile(source);
    assert_eq!(
        dump_ast(&compiled.ast).unwrap(),
        "\
[SOURCE_LINK] path: common.xrt
[SCOPE_START]
    [NAMESPACE] name: Chip::Periph
    [SCOPE_START]
        [NAMESPACE] name: Timer
    [SCOPE_END]
    [SOURCE_LINK] path: timer_regs.xrt
[SCOPE_END]
"
    );
}

#[test]
fn crlf_source() {
    let compiled = compile("namespace A {\r\n}\r\n");
    assert_eq!(compiled.ast.len(), 3);
    let close = compiled.tokens.real_tokens()[3];
    assert_eq!(close.kind, TokenKind::CloseScope);
    assert_eq!(close.location(), Location::new(2, 1));
}

#[test]
fn compile_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "namespace Disk {{\n}}\n").unwrap();

    let compiled = compile_file(file.path()).unwrap();
    assert_eq!(compiled.ast.len(), 3);
    assert_eq!(compiled.tokens.source().path(), file.path());
}

#[test]
fn compile_error_names_the_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "namespace {{").unwrap();

    let err = compile_file(file.path()).unwrap_err();
    let kind = err.compile_error().map(|e| e.kind);
    assert_eq!(kind, Some(ErrorKind::ExpectationError));
    assert!(matches!(err, DriverError::Compile { .. }));
    assert_eq!(
        err.to_string(),
        format!(
            "{}:1:11: expected identifier, found `{{`",
            file.path().display()
        )
    );
}

#[test]
fn invalid_utf8_is_io_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0x6e, 0xff, 0xfe]).unwrap();

    let err = compile_file(file.path()).unwrap_err();
    assert!(matches!(err, DriverError::Io { .. }));
}
