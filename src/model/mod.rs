//! Document model types for styled text documents.
//!
//! This module defines the intermediate representation that bridges text
//! segmentation and DOCX serialization. A [`DocumentModel`] is built once per
//! formatting run and discarded after export.

mod block;
mod document;
mod page;
mod paragraph;

pub use block::{Block, BlockKind};
pub use document::{DocumentModel, StyledBlock};
pub use page::{PageMargins, PageSetup, PageSize};
pub use paragraph::{Alignment, ParagraphStyle, StyleSheet, Twips, TWIPS_PER_CM};
