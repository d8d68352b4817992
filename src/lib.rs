//! # textdocx
//!
//! Turns raw pasted text into a uniformly formatted Word document.
//!
//! The pipeline splits text into paragraphs, classifies each one as a
//! heading or body paragraph, resolves a style configuration into concrete
//! paragraph styles and writes the result as a `.docx` package.
//!
//! ## Quick Start
//!
//! ```no_run
//! use textdocx::{text_to_docx, DocxOptions, StyleConfig};
//!
//! fn main() -> textdocx::Result<()> {
//!     let raw = "ВВЕДЕНИЕ\n\nв данной работе рассматривается...";
//!     let bytes = text_to_docx(raw, &StyleConfig::default(), &DocxOptions::default())?;
//!     std::fs::write("formatted.docx", bytes)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Paragraph segmentation**: blank-line separated blocks, soft wraps joined
//! - **Heading detection**: short blocks ending in `:` or starting uppercase
//! - **Configurable styles**: font, size, line spacing, indents and margins
//! - **Several outputs**: DOCX, HTML preview, plain text, JSON
//! - **Input extraction**: plain text and `.docx` uploads

pub mod build;
pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod render;
pub mod style;
pub mod text;

// Re-export commonly used types
pub use build::{build_document, DocumentBuilder};
pub use convert::{DocxExtractor, ExtractorRegistry, PlainTextExtractor, TextExtractor};
pub use detect::{detect_format_from_bytes, detect_format_from_path, InputFormat};
pub use error::{Error, Result};
pub use model::{
    Alignment, Block, BlockKind, DocumentModel, PageMargins, PageSetup, PageSize,
    ParagraphStyle, StyleSheet, StyledBlock, Twips,
};
pub use render::{DocxOptions, FormatStats, HtmlFormat, JsonFormat};
pub use style::{ResolvedStyles, StyleConfig, StyleResolver};
pub use text::{HeadingHeuristic, HeadingPolicy, SegmentOptions, Segmenter, UppercaseRule};

use std::path::Path;

/// Format raw text into a document model with the default segmenter and
/// heading heuristic.
///
/// The configuration is validated before any text is processed.
///
/// # Example
///
/// ```
/// use textdocx::{format_text, StyleConfig};
///
/// let doc = format_text("Глава 1:\n\nТекст главы.", &StyleConfig::default()).unwrap();
/// assert_eq!(doc.len(), 2);
/// assert!(doc.blocks[0].is_heading());
/// ```
pub fn format_text(raw: &str, config: &StyleConfig) -> Result<DocumentModel> {
    format_text_with(raw, config, &Segmenter::default(), &HeadingHeuristic::default())
}

/// Format raw text with a custom segmenter and heading policy.
pub fn format_text_with(
    raw: &str,
    config: &StyleConfig,
    segmenter: &Segmenter,
    policy: &dyn HeadingPolicy,
) -> Result<DocumentModel> {
    let styles = style::resolve(config)?;

    let blocks = text::to_blocks(raw, segmenter, policy);
    if blocks.is_empty() {
        return Err(Error::EmptyInput);
    }
    log::debug!(
        "classified {} blocks with {} policy",
        blocks.len(),
        policy.name()
    );

    Ok(build_document(blocks, &styles))
}

/// Format raw text and serialize it straight to `.docx` bytes.
///
/// # Example
///
/// ```no_run
/// use textdocx::{text_to_docx, DocxOptions, StyleConfig};
///
/// let config = StyleConfig::default().with_line_spacing(1.0);
/// let bytes = text_to_docx("Hello", &config, &DocxOptions::default()).unwrap();
/// std::fs::write("formatted.docx", bytes).unwrap();
/// ```
pub fn text_to_docx(raw: &str, config: &StyleConfig, options: &DocxOptions) -> Result<Vec<u8>> {
    let doc = format_text(raw, config)?;
    render::to_docx(&doc, options)
}

/// Read a text or `.docx` file and format its contents.
///
/// # Example
///
/// ```no_run
/// use textdocx::{format_file, StyleConfig};
///
/// let doc = format_file("essay.txt", &StyleConfig::default()).unwrap();
/// println!("Blocks: {}", doc.len());
/// ```
pub fn format_file<P: AsRef<Path>>(path: P, config: &StyleConfig) -> Result<DocumentModel> {
    let raw = ExtractorRegistry::with_defaults().extract_file(path.as_ref())?;
    format_text(&raw, config)
}

/// Builder for formatting text into documents.
///
/// # Example
///
/// ```no_run
/// use textdocx::{StyleConfig, Textdocx};
///
/// let bytes = Textdocx::new()
///     .with_config(StyleConfig::default().with_font_size(12.0))
///     .with_title("Курсовая работа")
///     .format("ВВЕДЕНИЕ\n\nТекст")?
///     .to_docx()?;
/// # Ok::<(), textdocx::Error>(())
/// ```
pub struct Textdocx {
    config: StyleConfig,
    segmenter: Segmenter,
    policy: Box<dyn HeadingPolicy>,
    docx_options: DocxOptions,
    extractors: ExtractorRegistry,
}

impl Textdocx {
    /// Create a new builder with default styles.
    pub fn new() -> Self {
        Self {
            config: StyleConfig::default(),
            segmenter: Segmenter::default(),
            policy: Box::new(HeadingHeuristic::default()),
            docx_options: DocxOptions::default(),
            extractors: ExtractorRegistry::with_defaults(),
        }
    }

    /// Set the style configuration.
    pub fn with_config(mut self, config: StyleConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the heading classification policy.
    pub fn with_heading_policy(mut self, policy: impl HeadingPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Set text normalization options.
    pub fn with_segment_options(mut self, options: SegmentOptions) -> Self {
        self.segmenter = Segmenter::new(options);
        self
    }

    /// Set all DOCX packaging options at once.
    pub fn with_docx_options(mut self, options: DocxOptions) -> Self {
        self.docx_options = options;
        self
    }

    /// Set the document title written to the package properties.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.docx_options = self.docx_options.with_title(title);
        self
    }

    /// Set the document author written to the package properties.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.docx_options = self.docx_options.with_author(author);
        self
    }

    /// Register an additional input extractor.
    pub fn with_extractor(mut self, extractor: std::sync::Arc<dyn TextExtractor>) -> Self {
        self.extractors.register(extractor);
        self
    }

    /// Format raw text.
    pub fn format(&self, raw: &str) -> Result<FormatResult> {
        let document = format_text_with(raw, &self.config, &self.segmenter, self.policy.as_ref())?;
        Ok(FormatResult {
            document,
            docx_options: self.docx_options.clone(),
        })
    }

    /// Extract text from a file and format it.
    pub fn format_file<P: AsRef<Path>>(&self, path: P) -> Result<FormatResult> {
        let raw = self.extractors.extract_file(path.as_ref())?;
        self.format(&raw)
    }

    /// Extract text from uploaded bytes and format it.
    pub fn format_bytes(&self, bytes: &[u8], ext: Option<&str>) -> Result<FormatResult> {
        let raw = self.extractors.extract_bytes(bytes, ext)?;
        self.format(&raw)
    }
}

impl Default for Textdocx {
    fn default() -> Self {
        Self::new()
    }
}

/// A formatted document ready for export.
#[derive(Debug, Clone)]
pub struct FormatResult {
    /// The formatted document
    pub document: DocumentModel,
    /// Packaging options used for DOCX export
    docx_options: DocxOptions,
}

impl FormatResult {
    /// Serialize to `.docx` bytes.
    pub fn to_docx(&self) -> Result<Vec<u8>> {
        render::to_docx(&self.document, &self.docx_options)
    }

    /// Serialize to `.docx` bytes on the blocking thread pool.
    #[cfg(feature = "async")]
    pub async fn to_docx_async(&self) -> Result<Vec<u8>> {
        render::to_docx_async(self.document.clone(), self.docx_options.clone()).await
    }

    /// Render an HTML preview.
    pub fn to_html(&self, format: HtmlFormat) -> String {
        render::to_html(&self.document, format)
    }

    /// Render paragraphs as plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document)
    }

    /// Serialize the document model to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Collect statistics about the document.
    pub fn stats(&self) -> FormatStats {
        FormatStats::from_document(&self.document)
    }

    /// Get the document.
    pub fn document(&self) -> &DocumentModel {
        &self.document
    }
}
