//! Plain text extractor.

use super::TextExtractor;
use crate::error::{Error, Result};
use encoding_rs::{Encoding, UTF_8};

/// Reads `.txt` and similar files as UTF-8.
///
/// A UTF-16 byte order mark switches decoding to UTF-16. The UTF-8 BOM is
/// left in place for the segmenter to strip. Strict mode rejects malformed
/// input in either encoding.
#[derive(Debug, Clone)]
pub struct PlainTextExtractor {
    lossy: bool,
}

impl PlainTextExtractor {
    /// Create an extractor that replaces invalid UTF-8 sequences.
    pub fn new() -> Self {
        Self { lossy: true }
    }

    /// Create an extractor that rejects invalid UTF-8.
    pub fn strict() -> Self {
        Self { lossy: false }
    }

    /// Check if invalid sequences are replaced rather than rejected.
    pub fn is_lossy(&self) -> bool {
        self.lossy
    }
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PlainTextExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &["txt", "text", "md"]
    }

    fn name(&self) -> &str {
        "text"
    }

    fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        let (encoding, body) = match Encoding::for_bom(bytes) {
            Some((encoding, bom_len)) if encoding != UTF_8 => (encoding, &bytes[bom_len..]),
            _ => (UTF_8, bytes),
        };

        if !self.lossy {
            return encoding
                .decode_without_bom_handling_and_without_replacement(body)
                .map(|text| text.into_owned())
                .ok_or_else(|| {
                    Error::Encoding(format!("input is not valid {}", encoding.name()))
                });
        }

        let (text, had_errors) = encoding.decode_without_bom_handling(body);
        if had_errors {
            log::warn!(
                "input is not valid {}; invalid sequences replaced",
                encoding.name()
            );
        }
        Ok(text.into_owned())
    }
}
