//! Plain text rendering for styled documents.

use crate::model::DocumentModel;

/// Convert a document to plain text, one paragraph per blank-line-separated
/// block.
pub fn to_text(doc: &DocumentModel) -> String {
    doc.plain_text()
}
