//! Document assembly.

use crate::model::{Block, DocumentModel, PageSetup, StyleSheet, StyledBlock};
use crate::style::ResolvedStyles;

/// Assembles classified blocks and resolved styles into a [`DocumentModel`].
///
/// Output order and cardinality always match the input blocks.
#[derive(Debug, Clone)]
pub struct DocumentBuilder<'a> {
    sheet: &'a StyleSheet,
    page: PageSetup,
}

impl<'a> DocumentBuilder<'a> {
    /// Create a builder from a style sheet and page setup.
    pub fn new(sheet: &'a StyleSheet, page: PageSetup) -> Self {
        Self { sheet, page }
    }

    /// Create a builder from resolved styles.
    pub fn from_styles(styles: &'a ResolvedStyles) -> Self {
        Self::new(&styles.sheet, styles.page)
    }

    /// Attach a style to one block.
    pub fn style_block(&self, block: Block) -> StyledBlock {
        let style = self.sheet.for_kind(block.kind).clone();
        StyledBlock {
            text: block.text,
            kind: block.kind,
            style,
        }
    }

    /// Build the document.
    pub fn build(&self, blocks: Vec<Block>) -> DocumentModel {
        let mut doc = DocumentModel::new(self.page);
        doc.blocks = blocks.into_iter().map(|b| self.style_block(b)).collect();

        log::debug!(
            "DocumentBuilder: {} blocks ({} headings)",
            doc.len(),
            doc.headings().count()
        );
        doc
    }
}

/// Build a document from blocks and resolved styles.
pub fn build_document(blocks: Vec<Block>, styles: &ResolvedStyles) -> DocumentModel {
    DocumentBuilder::from_styles(styles).build(blocks)
}
