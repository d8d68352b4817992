//! Statistics about a formatted document.

use crate::model::DocumentModel;
use serde::{Deserialize, Serialize};

/// Statistics collected from a document model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatStats {
    /// Number of blocks
    pub block_count: u32,

    /// Number of heading blocks
    pub heading_count: u32,

    /// Number of body blocks
    pub body_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl FormatStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics from a document.
    pub fn from_document(doc: &DocumentModel) -> Self {
        let mut stats = Self::new();
        for block in &doc.blocks {
            stats.block_count += 1;
            if block.is_heading() {
                stats.heading_count += 1;
            } else {
                stats.body_count += 1;
            }
            stats.count_text(&block.text);
        }
        stats
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        // Word count: whitespace-separated tokens
        self.word_count += text.split_whitespace().count() as u32;

        // Character count: non-whitespace characters
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}
