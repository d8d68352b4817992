//! DOCX text extractor.
//!
//! Reads `word/document.xml` from the package and keeps paragraph text only.
//! Run formatting, tables structure and images are discarded.
//!
//! Paragraphs nested in text boxes come out as their own paragraphs, ahead of
//! the paragraph that anchors them. `mc:Fallback` content repeats the
//! preferred `mc:Choice` and is skipped.

use super::TextExtractor;
use crate::error::{Error, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extracts raw text from Office Open XML documents.
///
/// Each non-empty `w:p` becomes one paragraph; paragraphs are joined by a
/// blank line so the segmenter sees them as separate blocks.
#[derive(Debug, Clone, Default)]
pub struct DocxExtractor;

impl DocxExtractor {
    /// Create a new DOCX extractor.
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for DocxExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn name(&self) -> &str {
        "docx"
    }

    fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| Error::UnsupportedFormat(format!("not a DOCX package: {}", e)))?;

        let mut xml = String::new();
        archive
            .by_name(DOCUMENT_PART)
            .map_err(|_| Error::UnsupportedFormat(format!("DOCX is missing {}", DOCUMENT_PART)))?
            .read_to_string(&mut xml)
            .map_err(|e| Error::UnsupportedFormat(format!("cannot read {}: {}", DOCUMENT_PART, e)))?;

        let paragraphs = paragraphs_from_xml(&xml)?;
        log::debug!("extracted {} paragraphs from DOCX", paragraphs.len());
        Ok(paragraphs.join("\n\n"))
    }
}

/// Collect the text of every non-empty paragraph in document order.
fn paragraphs_from_xml(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    // Open paragraphs, innermost last
    let mut open: Vec<String> = Vec::new();
    let mut in_text = false;
    let mut fallback_depth = 0usize;

    loop {
        let event = reader.read_event().map_err(|e| {
            Error::UnsupportedFormat(format!("malformed {}: {}", DOCUMENT_PART, e))
        })?;

        if fallback_depth > 0 {
            match &event {
                Event::Start(e) if e.name().as_ref() == b"mc:Fallback" => fallback_depth += 1,
                Event::End(e) if e.name().as_ref() == b"mc:Fallback" => fallback_depth -= 1,
                Event::Eof => break,
                _ => {}
            }
            continue;
        }

        match event {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => open.push(String::new()),
                b"w:t" => in_text = true,
                b"mc:Fallback" => fallback_depth = 1,
                _ => {}
            },
            Event::Empty(e) => {
                if let Some(current) = open.last_mut() {
                    match e.name().as_ref() {
                        b"w:tab" => current.push('\t'),
                        b"w:br" | b"w:cr" => current.push('\n'),
                        _ => {}
                    }
                }
            }
            Event::Text(t) if in_text => {
                let text = t
                    .unescape()
                    .map_err(|e| Error::UnsupportedFormat(format!("malformed DOCX text: {}", e)))?;
                if let Some(current) = open.last_mut() {
                    current.push_str(&text);
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => {
                    if let Some(current) = open.pop() {
                        let text = current.trim();
                        if !text.is_empty() {
                            paragraphs.push(text.to_string());
                        }
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}
