//! Rendering module for converting document models to output formats.

mod docx;
mod html;
mod json;
mod options;
mod result;
mod text;

#[cfg(feature = "async")]
pub use docx::to_docx_async;
pub use docx::{document_xml, to_docx, DocxWriter, MalformedStyle, DOCX_MIME_TYPE};
pub use html::{to_html, HtmlFormat};
pub use json::{to_json, JsonFormat};
pub use options::{DocxOptions, DEFAULT_HEADING_STYLE};
pub use result::FormatStats;
pub use text::to_text;
