//! Input format detection.

use crate::error::Result;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Detected format of an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Text (no binary signature, no NUL bytes)
    PlainText,
    /// Zip container, presumably Office Open XML (`.docx`)
    Docx,
    /// OLE compound file (legacy `.doc`)
    LegacyDoc,
    /// PDF document
    Pdf,
    /// Some other binary data
    UnknownBinary,
}

impl InputFormat {
    /// Check if text can be read directly from this format.
    pub fn is_text(self) -> bool {
        matches!(self, InputFormat::PlainText)
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            InputFormat::PlainText => "plain text",
            InputFormat::Docx => "DOCX",
            InputFormat::LegacyDoc => "legacy Word (.doc)",
            InputFormat::Pdf => "PDF",
            InputFormat::UnknownBinary => "binary",
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Zip local file header: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
/// OLE2 compound document header
const OLE_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
/// Bytes inspected for NUL characters
const SNIFF_LEN: usize = 8192;

/// Detect the format of a file from its first bytes.
///
/// # Example
/// ```no_run
/// use textdocx::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("essay.txt").unwrap();
/// println!("Format: {}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<InputFormat> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(SNIFF_LEN);
    file.take(SNIFF_LEN as u64).read_to_end(&mut header)?;
    Ok(detect_format_from_bytes(&header))
}

/// Detect the format of in-memory data.
pub fn detect_format_from_bytes(data: &[u8]) -> InputFormat {
    if data.starts_with(ZIP_MAGIC) {
        return InputFormat::Docx;
    }
    if data.starts_with(OLE_MAGIC) {
        return InputFormat::LegacyDoc;
    }
    if data.starts_with(PDF_MAGIC) {
        return InputFormat::Pdf;
    }

    let head = &data[..data.len().min(SNIFF_LEN)];
    if head.contains(&0) {
        InputFormat::UnknownBinary
    } else {
        InputFormat::PlainText
    }
}

/// Check if bytes look like a zip container.
pub fn is_zip_bytes(data: &[u8]) -> bool {
    data.starts_with(ZIP_MAGIC)
}
