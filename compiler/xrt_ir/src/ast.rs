//! Flat, append-only AST.
//!
//! Nodes never point at each other. Nesting is encoded purely by the linear
//! sequence of [`AstNode::ScopeStart`] / [`AstNode::ScopeEnd`] markers, and
//! [`Ast::traverse`] reconstructs depth from them in a single pass.

use std::fmt;

/// One entry of the parse output.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AstNode {
    /// `#include "path"`: a link to another source file.
    SourceLink { path: String },
    /// `namespace A::B {`: the qualified name, separators included.
    Namespace { name: String },
    ScopeStart,
    ScopeEnd,
}

impl AstNode {
    /// Upper-case tag used when dumping the tree.
    pub fn tag(&self) -> &'static str {
        match self {
            AstNode::SourceLink { .. } => "SOURCE_LINK",
            AstNode::Namespace { .. } => "NAMESPACE",
            AstNode::ScopeStart => "SCOPE_START",
            AstNode::ScopeEnd => "SCOPE_END",
        }
    }

    #[inline]
    pub fn is_scope_marker(&self) -> bool {
        matches!(self, AstNode::ScopeStart | AstNode::ScopeEnd)
    }
}

/// Receives each node with its nesting depth during [`Ast::traverse`].
///
/// Implemented for any `FnMut(&AstNode, usize)` closure.
pub trait AstRenderer {
    fn render(&mut self, node: &AstNode, depth: usize);
}

impl<F> AstRenderer for F
where
    F: FnMut(&AstNode, usize),
{
    fn render(&mut self, node: &AstNode, depth: usize) {
        self(node, depth);
    }
}

/// A `ScopeEnd` was reached with no open scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeUnderflow {
    /// Index of the offending `ScopeEnd` node.
    pub index: usize,
}

impl fmt::Display for ScopeUnderflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unmatched scope end at AST node {}", self.index)
    }
}

impl std::error::Error for ScopeUnderflow {}

/// Owned, insertion-ordered parse output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ast {
    nodes: Vec<AstNode>,
}

impl Ast {
    pub fn new() -> Self {
        Ast { nodes: Vec::new() }
    }

    /// Append a node at the end.
    pub fn append(&mut self, node: AstNode) {
        self.nodes.push(node);
    }

    /// Open a nested scope.
    pub fn enter_scope(&mut self) {
        self.nodes.push(AstNode::ScopeStart);
    }

    /// Close the innermost scope.
    pub fn exit_scope(&mut self) {
        self.nodes.push(AstNode::ScopeEnd);
    }

    pub fn nodes(&self) -> &[AstNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AstNode> {
        self.nodes.iter()
    }

    /// Visit every node in order with its depth.
    ///
    /// Depth is incremented after a `ScopeStart` and decremented before a
    /// `ScopeEnd`, so both markers of a pair are reported at the same level.
    /// Returns the depth left open at the end (0 for a balanced tree).
    pub fn traverse<R: AstRenderer + ?Sized>(
        &self,
        renderer: &mut R,
    ) -> Result<usize, ScopeUnderflow> {
        let mut depth = 0usize;
        for (index, node) in self.nodes.iter().enumerate() {
            if let AstNode::ScopeEnd = node {
                depth = depth.checked_sub(1).ok_or(ScopeUnderflow { index })?;
            }
            renderer.render(node, depth);
            if let AstNode::ScopeStart = node {
                depth += 1;
            }
        }
        Ok(depth)
    }
}

impl<'a> IntoIterator for &'a Ast {
    type Item = &'a AstNode;
    type IntoIter = std::slice::Iter<'a, AstNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
