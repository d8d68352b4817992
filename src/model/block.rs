//! Classified paragraph blocks.

use serde::{Deserialize, Serialize};

/// Semantic role of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Short title-like paragraph
    Heading,
    /// Regular body paragraph
    Body,
}

impl BlockKind {
    /// Check if this is a heading.
    pub fn is_heading(self) -> bool {
        matches!(self, BlockKind::Heading)
    }
}

/// One logical paragraph extracted from raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Cleaned text (trimmed, no embedded newlines)
    pub text: String,

    /// Heading or body
    pub kind: BlockKind,
}

impl Block {
    /// Create a new block.
    pub fn new(text: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Create a heading block.
    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(text, BlockKind::Heading)
    }

    /// Create a body block.
    pub fn body(text: impl Into<String>) -> Self {
        Self::new(text, BlockKind::Body)
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        self.kind.is_heading()
    }
}
