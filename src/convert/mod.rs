//! Text extraction from uploaded files.
//!
//! Extractors turn the bytes of an input file into raw text for the
//! formatting pipeline. The registry dispatches on file extension and falls
//! back to content sniffing when the extension is unknown.
//!
//! # Example
//!
//! ```no_run
//! use textdocx::convert::ExtractorRegistry;
//! use std::path::Path;
//!
//! fn main() -> textdocx::Result<()> {
//!     let registry = ExtractorRegistry::with_defaults();
//!     let raw = registry.extract_file(Path::new("essay.docx"))?;
//!     println!("{}", raw);
//!     Ok(())
//! }
//! ```

mod docx;
mod text;

pub use docx::DocxExtractor;
pub use text::PlainTextExtractor;

use crate::detect::{detect_format_from_bytes, InputFormat};
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Trait for raw text extractors.
///
/// Implement this trait to accept a new kind of input file.
pub trait TextExtractor: Send + Sync {
    /// Get the supported file extensions for this extractor.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["txt"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this extractor.
    fn name(&self) -> &str;

    /// Extract raw text from file contents.
    fn extract_bytes(&self, bytes: &[u8]) -> Result<String>;

    /// Extract raw text from a file at the given path.
    fn extract_file(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path)?;
        self.extract_bytes(&bytes)
    }

    /// Check if this extractor supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry for text extractors.
///
/// Maps file extensions to extractors. Legacy `.doc` files are always
/// rejected.
pub struct ExtractorRegistry {
    extractors: HashMap<String, Arc<dyn TextExtractor>>,
    by_name: HashMap<String, Arc<dyn TextExtractor>>,
}

impl ExtractorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the plain text and DOCX extractors.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PlainTextExtractor::new()));
        registry.register(Arc::new(DocxExtractor::new()));
        registry
    }

    /// Register an extractor for all of its supported extensions.
    pub fn register(&mut self, extractor: Arc<dyn TextExtractor>) {
        for ext in extractor.supported_extensions() {
            self.extractors
                .insert(ext.to_lowercase(), extractor.clone());
        }
        self.by_name
            .insert(extractor.name().to_lowercase(), extractor);
    }

    /// Get an extractor by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn TextExtractor>> {
        self.extractors.get(&ext.to_lowercase()).cloned()
    }

    /// Get an extractor by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn TextExtractor>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.extractors.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions, sorted.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.extractors.keys().map(|s| s.as_str()).collect();
        exts.sort_unstable();
        exts
    }

    /// Extract raw text from a file, choosing the extractor by extension.
    pub fn extract_file(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path)?;
        let ext = path.extension().and_then(|e| e.to_str());
        self.extract_bytes(&bytes, ext)
    }

    /// Extract raw text from a file without blocking the async runtime.
    #[cfg(feature = "async")]
    pub async fn extract_file_async(&self, path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path).await?;
        let ext = path.extension().and_then(|e| e.to_str());
        self.extract_bytes(&bytes, ext)
    }

    /// Extract raw text from bytes.
    ///
    /// `ext` is the file extension without the dot, if known. Unknown or
    /// missing extensions are resolved by sniffing the content.
    pub fn extract_bytes(&self, bytes: &[u8], ext: Option<&str>) -> Result<String> {
        if let Some(ext) = ext {
            if ext.eq_ignore_ascii_case("doc") {
                return Err(legacy_doc_error());
            }
            if let Some(extractor) = self.get_by_extension(ext) {
                log::debug!("extracting .{} with {}", ext, extractor.name());
                return extractor.extract_bytes(bytes);
            }
        }

        let format = detect_format_from_bytes(bytes);
        log::debug!("sniffed input format: {}", format);
        let by_format = match format {
            InputFormat::PlainText => self.get_by_name("text"),
            InputFormat::Docx => self.get_by_name("docx"),
            InputFormat::LegacyDoc => return Err(legacy_doc_error()),
            InputFormat::Pdf | InputFormat::UnknownBinary => None,
        };

        match by_format {
            Some(extractor) => extractor.extract_bytes(bytes),
            None => Err(Error::UnsupportedFormat(match ext {
                Some(ext) => format!(".{} ({})", ext, format),
                None => format.to_string(),
            })),
        }
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn legacy_doc_error() -> Error {
    Error::UnsupportedFormat(
        "legacy .doc files are not supported; save as .docx or .txt".to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_defaults() {
        let registry = ExtractorRegistry::with_defaults();

        assert!(registry.supports("txt"));
        assert!(registry.supports("TXT"));
        assert!(registry.supports("docx"));
        assert!(!registry.supports("doc"));
        assert!(!registry.supports("pdf"));
    }

    #[test]
    fn test_registry_get_by_name() {
        let registry = ExtractorRegistry::with_defaults();

        assert!(registry.get_by_name("text").is_some());
        assert!(registry.get_by_name("DOCX").is_some());
        assert!(registry.get_by_name("unknown").is_none());
    }

    #[test]
    fn test_extract_text_by_extension() {
        let registry = ExtractorRegistry::with_defaults();
        let raw = registry
            .extract_bytes("ВВЕДЕНИЕ\n\nТекст".as_bytes(), Some("txt"))
            .unwrap();
        assert_eq!(raw, "ВВЕДЕНИЕ\n\nТекст");
    }

    #[test]
    fn test_doc_rejected() {
        let registry = ExtractorRegistry::with_defaults();

        let result = registry.extract_bytes(b"anything", Some("doc"));
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));

        let result = registry.extract_bytes(b"anything", Some("DOC"));
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_unknown_extension_sniffs_text() {
        let registry = ExtractorRegistry::with_defaults();

        let raw = registry.extract_bytes(b"plain words", Some("xyz")).unwrap();
        assert_eq!(raw, "plain words");

        let raw = registry.extract_bytes(b"no extension", None).unwrap();
        assert_eq!(raw, "no extension");
    }

    #[test]
    fn test_unknown_binary_rejected() {
        let registry = ExtractorRegistry::with_defaults();

        let ole = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1, 0x00];
        assert!(matches!(
            registry.extract_bytes(&ole, None),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(matches!(
            registry.extract_bytes(b"%PDF-1.4\n", Some("pdf")),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(matches!(
            registry.extract_bytes(&[0x00, 0x01, 0x02], Some("bin")),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_supported_extensions_sorted() {
        let registry = ExtractorRegistry::with_defaults();
        let exts = registry.supported_extensions();

        assert!(exts.contains(&"docx"));
        assert!(exts.contains(&"txt"));
        assert!(exts.windows(2).all(|w| w[0] <= w[1]));
    }
}
