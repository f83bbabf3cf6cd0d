//! Immutable source text for one compilation unit.
//!
//! The buffer is created once by the loader and shared (via `Arc`) with every
//! [`TokenList`](crate::TokenList) scanned from it. Tokens store only a
//! [`Span`]; their text is always re-borrowed from the buffer, so the text
//! cannot be released while a token stream still refers to it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::{Location, Span};

/// Decoded source text plus the path it was loaded from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceBuffer {
    text: Box<str>,
    path: PathBuf,
}

impl SourceBuffer {
    /// Create a buffer from already-decoded text.
    pub fn new(text: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        SourceBuffer {
            text: text.into().into_boxed_str(),
            path: path.into(),
        }
    }

    /// Create a buffer wrapped for sharing with token streams.
    pub fn shared(text: impl Into<String>, path: impl Into<PathBuf>) -> Arc<Self> {
        Arc::new(Self::new(text, path))
    }

    /// The full source text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Identifying path of this compilation unit.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text covered by `span`.
    ///
    /// The span must lie inside the buffer on character boundaries, as every
    /// span produced by the scanner does. Debug builds panic on any other
    /// span; release builds return an empty string.
    #[inline]
    pub fn slice(&self, span: Span) -> &str {
        let text = self.text.get(span.to_range());
        debug_assert!(
            text.is_some(),
            "span {span} is outside the source or off a character boundary (len {})",
            self.text.len()
        );
        text.unwrap_or("")
    }

    /// Text from `offset` to the end of the buffer.
    pub fn suffix_from(&self, offset: usize) -> &str {
        self.text.get(offset..).unwrap_or("")
    }

    /// Compute the line/column of a byte offset by walking the text.
    ///
    /// Used for diagnostics raised before the scanner's bulk line pass runs.
    /// Offsets past the end resolve to the position just after the last
    /// character.
    pub fn location_of(&self, offset: usize) -> Location {
        let mut location = Location::START;
        for (i, c) in self.text.char_indices() {
            if i >= offset {
                break;
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
}

#[cfg(test)]
mod tests;
