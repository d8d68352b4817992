//! Tests for input extraction and the extractor registry.

use std::path::Path;
use std::sync::Arc;
use textdocx::{
    format_file, text_to_docx, DocxExtractor, DocxOptions, Error, ExtractorRegistry, Result,
    StyleConfig, TextExtractor, Textdocx,
};

/// Mock extractor for testing the registry.
struct MockExtractor {
    extensions: Vec<&'static str>,
    name: &'static str,
}

impl MockExtractor {
    fn new(extensions: Vec<&'static str>, name: &'static str) -> Self {
        Self { extensions, name }
    }
}

impl TextExtractor for MockExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &self.extensions
    }

    fn name(&self) -> &str {
        self.name
    }

    fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        Ok(format!("Extracted by {}:\n\n{} bytes", self.name, bytes.len()))
    }
}

#[test]
fn test_registry_new_is_empty() {
    let registry = ExtractorRegistry::new();
    assert!(!registry.supports("txt"));
    assert!(registry.supported_extensions().is_empty());
}

#[test]
fn test_registry_register_custom() {
    let mut registry = ExtractorRegistry::new();
    registry.register(Arc::new(MockExtractor::new(vec!["rtf", "odt"], "office")));

    assert!(registry.supports("rtf"));
    assert!(registry.supports("ODT"));
    assert!(registry.get_by_name("Office").is_some());

    let raw = registry.extract_bytes(b"abc", Some("rtf")).unwrap();
    assert_eq!(raw, "Extracted by office:\n\n3 bytes");
}

#[test]
fn test_registry_custom_extractor_overrides_default() {
    let mut registry = ExtractorRegistry::with_defaults();
    registry.register(Arc::new(MockExtractor::new(vec!["txt"], "custom")));

    let raw = registry.extract_bytes(b"hello", Some("txt")).unwrap();
    assert!(raw.starts_with("Extracted by custom"));
}

#[test]
fn test_registry_doc_rejected_even_if_registered() {
    let mut registry = ExtractorRegistry::new();
    registry.register(Arc::new(MockExtractor::new(vec!["doc"], "word97")));

    let result = registry.extract_bytes(b"data", Some("doc"));
    assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
}

#[test]
fn test_mock_extractor_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.mock");
    std::fs::write(&path, "12345").unwrap();

    let extractor = MockExtractor::new(vec!["mock"], "mock");
    let raw = extractor.extract_file(&path).unwrap();
    assert!(raw.ends_with("5 bytes"));
}

#[test]
fn test_exported_docx_reads_back() {
    let raw = "ВВЕДЕНИЕ\n\nПервый абзац & немного <разметки>.\n\nГлава 1:\n\nтекст";
    let bytes = text_to_docx(raw, &StyleConfig::default(), &DocxOptions::default()).unwrap();

    let extracted = DocxExtractor::new().extract_bytes(&bytes).unwrap();
    assert_eq!(extracted, raw);
}

#[test]
fn test_sniffed_docx_without_extension() {
    let bytes = text_to_docx("A\n\nB", &StyleConfig::default(), &DocxOptions::default()).unwrap();
    let registry = ExtractorRegistry::with_defaults();

    assert_eq!(registry.extract_bytes(&bytes, None).unwrap(), "A\n\nB");
    assert_eq!(registry.extract_bytes(&bytes, Some("upload")).unwrap(), "A\n\nB");
}

#[test]
fn test_format_file_txt_and_docx() {
    let dir = tempfile::tempdir().unwrap();
    let config = StyleConfig::default();

    let txt = dir.path().join("essay.txt");
    std::fs::write(&txt, "\u{FEFF}ВВЕДЕНИЕ\r\n\r\nтекст работы").unwrap();
    let from_txt = format_file(&txt, &config).unwrap();
    assert_eq!(from_txt.len(), 2);
    assert_eq!(from_txt.blocks[0].text, "ВВЕДЕНИЕ");

    let docx = dir.path().join("essay.docx");
    let bytes = Textdocx::new().format_file(&txt).unwrap().to_docx().unwrap();
    std::fs::write(&docx, bytes).unwrap();
    let from_docx = format_file(&docx, &config).unwrap();
    assert_eq!(from_docx, from_txt);
}

#[test]
fn test_format_file_doc_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("old.doc");
    std::fs::write(&path, [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1]).unwrap();

    let result = format_file(&path, &StyleConfig::default());
    assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
}

#[test]
fn test_format_file_missing() {
    let result = format_file(Path::new("/nonexistent/essay.txt"), &StyleConfig::default());
    assert!(matches!(result, Err(Error::Io(_))));
}

#[cfg(feature = "async")]
#[tokio::test]
async fn test_extract_file_async() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("essay.txt");
    std::fs::write(&path, "Глава 1:\n\nтекст").unwrap();

    let registry = ExtractorRegistry::with_defaults();
    let raw = registry.extract_file_async(&path).await.unwrap();
    assert_eq!(raw, "Глава 1:\n\nтекст");
}
