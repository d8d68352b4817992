//! Document-level types.

use super::{BlockKind, PageSetup, ParagraphStyle};
use serde::{Deserialize, Serialize};

/// A block with its resolved style attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledBlock {
    /// Cleaned paragraph text
    pub text: String,

    /// Heading or body
    pub kind: BlockKind,

    /// Resolved paragraph attributes
    pub style: ParagraphStyle,
}

impl StyledBlock {
    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        self.kind.is_heading()
    }
}

/// A fully resolved, styled, ordered document ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentModel {
    /// Section page properties
    pub page: PageSetup,

    /// Styled blocks in source order
    pub blocks: Vec<StyledBlock>,
}

impl DocumentModel {
    /// Create a document with no blocks.
    pub fn new(page: PageSetup) -> Self {
        Self {
            page,
            blocks: Vec::new(),
        }
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has any blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over heading blocks.
    pub fn headings(&self) -> impl Iterator<Item = &StyledBlock> {
        self.blocks.iter().filter(|b| b.is_heading())
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|block| block.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
