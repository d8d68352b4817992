//! Export options.

use chrono::{DateTime, Utc};

/// Default `w:styleId` for heading paragraphs.
pub const DEFAULT_HEADING_STYLE: &str = "Heading1";

/// Options for DOCX export.
#[derive(Debug, Clone)]
pub struct DocxOptions {
    /// Document title (`dc:title`)
    pub title: Option<String>,

    /// Document author (`dc:creator`)
    pub author: Option<String>,

    /// Application name (`Application` in app.xml)
    pub application: String,

    /// Paragraph style id linked to heading blocks (`None` = no style link)
    pub heading_style: Option<String>,

    /// Deflate package parts
    pub compress: bool,

    /// Fixed creation timestamp (`None` = time of export)
    pub created: Option<DateTime<Utc>>,
}

impl DocxOptions {
    /// Create new export options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the document author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set or clear the heading style link.
    pub fn with_heading_style(mut self, style_id: Option<String>) -> Self {
        self.heading_style = style_id;
        self
    }

    /// Enable or disable compression.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Use a fixed creation timestamp.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }
}

impl Default for DocxOptions {
    fn default() -> Self {
        Self {
            title: None,
            author: None,
            application: format!("textdocx {}", env!("CARGO_PKG_VERSION")),
            heading_style: Some(DEFAULT_HEADING_STYLE.to_string()),
            compress: true,
            created: None,
        }
    }
}
