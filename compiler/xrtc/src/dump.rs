//! Text dumps of the token stream and the AST.

use std::fmt::Write as _;

use xrt_ir::{Ast, AstNode, AstRenderer, ScopeUnderflow, TokenList};

/// Spaces per nesting level in [`dump_ast`].
const INDENT: usize = 4;

/// One line per real token: kind, quoted text, and `path:line:column`.
pub fn dump_tokens(tokens: &TokenList) -> String {
    let path = tokens.source().path().display();
    let mut out = String::new();
    for token in tokens.real_tokens() {
        let _ = writeln!(
            out,
            "[{:?}] '{}' {path}:{}:{}",
            token.kind,
            tokens.text(token),
            token.line,
            token.column
        );
    }
    out
}

/// Renders AST nodes as indented lines.
#[derive(Default)]
pub struct AstPrinter {
    out: String,
}

impl AstPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.out
    }
}

impl AstRenderer for AstPrinter {
    fn render(&mut self, node: &AstNode, depth: usize) {
        let indent = depth * INDENT;
        let _ = match node {
            AstNode::SourceLink { path } => {
                writeln!(self.out, "{:indent$}[{}] path: {path}", "", node.tag())
            }
            AstNode::Namespace { name } => {
                writeln!(self.out, "{:indent$}[{}] name: {name}", "", node.tag())
            }
            AstNode::ScopeStart | AstNode::ScopeEnd => {
                writeln!(self.out, "{:indent$}[{}]", "", node.tag())
            }
        };
    }
}

/// Render `ast` with four spaces of indentation per scope level.
pub fn dump_ast(ast: &Ast) -> Result<String, ScopeUnderflow> {
    let mut printer = AstPrinter::new();
    ast.traverse(&mut printer)?;
    Ok(printer.finish())
}
