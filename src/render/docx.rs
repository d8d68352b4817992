//! DOCX (Office Open XML) serialization.
//!
//! The package is assembled in memory: every part is encoded first, then
//! zipped, and the bytes are returned only when all of it succeeded.

use std::borrow::Cow;
use std::io::{Cursor, Write};

use chrono::Utc;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{Error, Result};
use crate::model::{DocumentModel, PageSetup, ParagraphStyle, StyledBlock, Twips};

use super::DocxOptions;

type XmlResult<T> = std::result::Result<T, quick_xml::Error>;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// MIME type of a `.docx` file.
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
  <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
  <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
</Types>"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
  <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

/// A style value the XML encoder cannot represent.
#[derive(Debug, thiserror::Error)]
pub enum MalformedStyle {
    /// Font family is empty.
    #[error("block {block}: font family is empty")]
    EmptyFontFamily {
        /// Block index
        block: usize,
    },

    /// Font family contains a character XML 1.0 forbids.
    #[error("block {block}: font family contains {ch:?}, which is not allowed in XML")]
    FontFamily {
        /// Block index
        block: usize,
        /// Offending character
        ch: char,
    },

    /// Font size is outside the range `w:sz` allows.
    #[error("block {block}: font size of {half_points} half-points is outside 1..={max}", max = ParagraphStyle::MAX_FONT_SIZE_HALF_POINTS)]
    FontSize {
        /// Block index
        block: usize,
        /// Offending size
        half_points: u32,
    },

    /// Line spacing is outside the range `w:line` allows.
    #[error("block {block}: line spacing of {line} is outside 1..={max}", max = ParagraphStyle::MAX_LINE_SPACING)]
    LineSpacing {
        /// Block index
        block: usize,
        /// Offending value in 240ths of a line
        line: u32,
    },

    /// A paragraph or page length exceeds [`Twips::MAX`].
    #[error("{what} of {twips} twips exceeds {max}", max = Twips::MAX)]
    Length {
        /// Which length
        what: &'static str,
        /// Offending value
        twips: Twips,
    },

    /// Margins leave no room for text.
    #[error("page margins leave no text area ({width} x {height} twips)")]
    TextArea {
        /// Width between the left and right margins
        width: Twips,
        /// Height between the top and bottom margins
        height: Twips,
    },
}

/// Serializes a [`DocumentModel`] into a `.docx` package.
#[derive(Debug, Clone, Default)]
pub struct DocxWriter {
    options: DocxOptions,
}

impl DocxWriter {
    /// Create a new writer.
    pub fn new(options: DocxOptions) -> Self {
        Self { options }
    }

    /// Get the options.
    pub fn options(&self) -> &DocxOptions {
        &self.options
    }

    /// Encode the whole package.
    pub fn write(&self, doc: &DocumentModel) -> Result<Vec<u8>> {
        check_styles(doc).map_err(Error::serialization)?;

        let document = self.document_xml(doc).map_err(Error::serialization)?;
        let styles = self.styles_xml(doc).map_err(Error::serialization)?;
        let core = self.core_xml().map_err(Error::serialization)?;
        let app = self.app_xml().map_err(Error::serialization)?;

        let parts: [(&str, &[u8]); 7] = [
            ("[Content_Types].xml", CONTENT_TYPES_XML.as_bytes()),
            ("_rels/.rels", ROOT_RELS_XML.as_bytes()),
            ("docProps/core.xml", &core),
            ("docProps/app.xml", &app),
            ("word/document.xml", &document),
            ("word/_rels/document.xml.rels", DOCUMENT_RELS_XML.as_bytes()),
            ("word/styles.xml", &styles),
        ];

        let bytes = self.package(&parts).map_err(Error::serialization)?;
        log::debug!(
            "DocxWriter: {} paragraphs -> {} bytes",
            doc.len(),
            bytes.len()
        );
        Ok(bytes)
    }

    fn package(&self, parts: &[(&str, &[u8])]) -> zip::result::ZipResult<Vec<u8>> {
        let method = if self.options.compress {
            CompressionMethod::Deflated
        } else {
            CompressionMethod::Stored
        };
        let file_options = SimpleFileOptions::default().compression_method(method);

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, data) in parts {
            zip.start_file(*name, file_options)?;
            zip.write_all(data)?;
        }
        Ok(zip.finish()?.into_inner())
    }

    fn document_xml(&self, doc: &DocumentModel) -> XmlResult<Vec<u8>> {
        let mut w = Writer::new(Vec::new());
        write_decl(&mut w)?;

        start(&mut w, "w:document", &[("xmlns:w", W_NS), ("xmlns:r", R_NS)])?;
        start(&mut w, "w:body", &[])?;

        let heading_style = self.options.heading_style.as_deref();
        for block in &doc.blocks {
            write_paragraph(&mut w, block, heading_style)?;
        }

        write_section(&mut w, &doc.page)?;

        end(&mut w, "w:body")?;
        end(&mut w, "w:document")?;
        Ok(w.into_inner())
    }

    fn styles_xml(&self, doc: &DocumentModel) -> XmlResult<Vec<u8>> {
        let mut w = Writer::new(Vec::new());
        write_decl(&mut w)?;
        start(&mut w, "w:styles", &[("xmlns:w", W_NS)])?;

        // Defaults follow the first body paragraph.
        let defaults = doc
            .blocks
            .iter()
            .find(|b| !b.is_heading())
            .or_else(|| doc.blocks.first())
            .map(|b| &b.style);

        start(&mut w, "w:docDefaults", &[])?;
        start(&mut w, "w:rPrDefault", &[])?;
        start(&mut w, "w:rPr", &[])?;
        if let Some(style) = defaults {
            write_fonts(&mut w, style)?;
        }
        end(&mut w, "w:rPr")?;
        end(&mut w, "w:rPrDefault")?;
        start(&mut w, "w:pPrDefault", &[])?;
        start(&mut w, "w:pPr", &[])?;
        empty(
            &mut w,
            "w:spacing",
            &[("w:after", "0"), ("w:line", "240"), ("w:lineRule", "auto")],
        )?;
        end(&mut w, "w:pPr")?;
        end(&mut w, "w:pPrDefault")?;
        end(&mut w, "w:docDefaults")?;

        start(
            &mut w,
            "w:style",
            &[("w:type", "paragraph"), ("w:default", "1"), ("w:styleId", "Normal")],
        )?;
        empty(&mut w, "w:name", &[("w:val", "Normal")])?;
        empty(&mut w, "w:qFormat", &[])?;
        end(&mut w, "w:style")?;

        if let Some(id) = self.options.heading_style.as_deref() {
            let name = if id == super::options::DEFAULT_HEADING_STYLE {
                "heading 1"
            } else {
                id
            };
            start(&mut w, "w:style", &[("w:type", "paragraph"), ("w:styleId", id)])?;
            empty(&mut w, "w:name", &[("w:val", name)])?;
            empty(&mut w, "w:basedOn", &[("w:val", "Normal")])?;
            empty(&mut w, "w:next", &[("w:val", "Normal")])?;
            empty(&mut w, "w:qFormat", &[])?;
            start(&mut w, "w:pPr", &[])?;
            empty(&mut w, "w:keepNext", &[])?;
            empty(&mut w, "w:outlineLvl", &[("w:val", "0")])?;
            end(&mut w, "w:pPr")?;
            start(&mut w, "w:rPr", &[])?;
            empty(&mut w, "w:b", &[])?;
            empty(&mut w, "w:bCs", &[])?;
            end(&mut w, "w:rPr")?;
            end(&mut w, "w:style")?;
        }

        end(&mut w, "w:styles")?;
        Ok(w.into_inner())
    }

    fn core_xml(&self) -> XmlResult<Vec<u8>> {
        let created = self
            .options
            .created
            .unwrap_or_else(Utc::now)
            .format("%Y-%m-%dT%H:%M:%SZ")
            .to_string();

        let mut w = Writer::new(Vec::new());
        write_decl(&mut w)?;
        start(
            &mut w,
            "cp:coreProperties",
            &[
                (
                    "xmlns:cp",
                    "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
                ),
                ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
                ("xmlns:dcterms", "http://purl.org/dc/terms/"),
                ("xmlns:dcmitype", "http://purl.org/dc/dcmitype/"),
                ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
            ],
        )?;
        if let Some(title) = self.options.title.as_deref() {
            text_element(&mut w, "dc:title", &[], title)?;
        }
        if let Some(author) = self.options.author.as_deref() {
            text_element(&mut w, "dc:creator", &[], author)?;
            text_element(&mut w, "cp:lastModifiedBy", &[], author)?;
        }
        let w3cdtf = [("xsi:type", "dcterms:W3CDTF")];
        text_element(&mut w, "dcterms:created", &w3cdtf, &created)?;
        text_element(&mut w, "dcterms:modified", &w3cdtf, &created)?;
        end(&mut w, "cp:coreProperties")?;
        Ok(w.into_inner())
    }

    fn app_xml(&self) -> XmlResult<Vec<u8>> {
        let mut w = Writer::new(Vec::new());
        write_decl(&mut w)?;
        start(
            &mut w,
            "Properties",
            &[(
                "xmlns",
                "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties",
            )],
        )?;
        text_element(&mut w, "Application", &[], &self.options.application)?;
        end(&mut w, "Properties")?;
        Ok(w.into_inner())
    }
}

/// Serialize a document to `.docx` bytes.
pub fn to_docx(doc: &DocumentModel, options: &DocxOptions) -> Result<Vec<u8>> {
    DocxWriter::new(options.clone()).write(doc)
}

/// Serialize a document on the blocking thread pool.
///
/// Await the returned bytes before writing or offering them for download.
#[cfg(feature = "async")]
pub async fn to_docx_async(doc: DocumentModel, options: DocxOptions) -> Result<Vec<u8>> {
    tokio::task::spawn_blocking(move || to_docx(&doc, &options))
        .await
        .map_err(Error::serialization)?
}

/// Render only `word/document.xml`, for inspection and debugging.
pub fn document_xml(doc: &DocumentModel, options: &DocxOptions) -> Result<String> {
    check_styles(doc).map_err(Error::serialization)?;
    let bytes = DocxWriter::new(options.clone())
        .document_xml(doc)
        .map_err(Error::serialization)?;
    String::from_utf8(bytes).map_err(Error::serialization)
}

fn check_styles(doc: &DocumentModel) -> std::result::Result<(), MalformedStyle> {
    for (index, block) in doc.blocks.iter().enumerate() {
        let style = &block.style;
        if style.font_family.is_empty() {
            return Err(MalformedStyle::EmptyFontFamily { block: index });
        }
        if let Some(ch) = style.font_family.chars().find(|c| !is_xml_char(*c)) {
            return Err(MalformedStyle::FontFamily { block: index, ch });
        }
        let half_points = style.font_size_half_points;
        if half_points == 0 || half_points > ParagraphStyle::MAX_FONT_SIZE_HALF_POINTS {
            return Err(MalformedStyle::FontSize {
                block: index,
                half_points,
            });
        }
        if let Some(line) = style.line_spacing {
            if line == 0 || line > ParagraphStyle::MAX_LINE_SPACING {
                return Err(MalformedStyle::LineSpacing { block: index, line });
            }
        }
        check_length("first line indent", style.first_line_indent)?;
        check_length("paragraph spacing", style.space_after)?;
    }

    let margins = &doc.page.margins;
    check_length("top margin", margins.top)?;
    check_length("bottom margin", margins.bottom)?;
    check_length("left margin", margins.left)?;
    check_length("right margin", margins.right)?;

    let (width, height) = (doc.page.text_width(), doc.page.text_height());
    if width.is_zero() || height.is_zero() {
        return Err(MalformedStyle::TextArea { width, height });
    }
    Ok(())
}

fn check_length(what: &'static str, twips: Twips) -> std::result::Result<(), MalformedStyle> {
    if twips > Twips::MAX {
        return Err(MalformedStyle::Length { what, twips });
    }
    Ok(())
}

fn write_paragraph<W: Write>(
    w: &mut Writer<W>,
    block: &StyledBlock,
    heading_style: Option<&str>,
) -> XmlResult<()> {
    let style = &block.style;

    start(w, "w:p", &[])?;
    start(w, "w:pPr", &[])?;

    if block.is_heading() {
        if let Some(id) = heading_style {
            empty(w, "w:pStyle", &[("w:val", id)])?;
        }
        empty(w, "w:keepNext", &[])?;
    }

    let after = style.space_after.to_string();
    match style.line_spacing {
        Some(line) => {
            let line = line.to_string();
            empty(
                w,
                "w:spacing",
                &[("w:after", after.as_str()), ("w:line", line.as_str()), ("w:lineRule", "auto")],
            )?;
        }
        None => empty(w, "w:spacing", &[("w:after", after.as_str())])?,
    }

    if !style.first_line_indent.is_zero() {
        let indent = style.first_line_indent.to_string();
        empty(w, "w:ind", &[("w:firstLine", indent.as_str())])?;
    }

    empty(w, "w:jc", &[("w:val", style.alignment.docx_value())])?;
    end(w, "w:pPr")?;

    start(w, "w:r", &[])?;
    start(w, "w:rPr", &[])?;
    write_fonts(w, style)?;
    end(w, "w:rPr")?;
    text_element(w, "w:t", &[("xml:space", "preserve")], &block.text)?;
    end(w, "w:r")?;

    end(w, "w:p")
}

/// Font, weight and size run properties, in schema order.
fn write_fonts<W: Write>(w: &mut Writer<W>, style: &ParagraphStyle) -> XmlResult<()> {
    let font = style.font_family.as_str();
    empty(
        w,
        "w:rFonts",
        &[
            ("w:ascii", font),
            ("w:hAnsi", font),
            ("w:eastAsia", font),
            ("w:cs", font),
        ],
    )?;
    if style.bold {
        empty(w, "w:b", &[])?;
        empty(w, "w:bCs", &[])?;
    }
    let size = style.font_size_half_points.to_string();
    empty(w, "w:sz", &[("w:val", size.as_str())])?;
    empty(w, "w:szCs", &[("w:val", size.as_str())])
}

fn write_section<W: Write>(w: &mut Writer<W>, page: &PageSetup) -> XmlResult<()> {
    let width = page.size.width().to_string();
    let height = page.size.height().to_string();
    let top = page.margins.top.to_string();
    let right = page.margins.right.to_string();
    let bottom = page.margins.bottom.to_string();
    let left = page.margins.left.to_string();

    start(w, "w:sectPr", &[])?;
    empty(w, "w:pgSz", &[("w:w", width.as_str()), ("w:h", height.as_str())])?;
    empty(
        w,
        "w:pgMar",
        &[
            ("w:top", top.as_str()),
            ("w:right", right.as_str()),
            ("w:bottom", bottom.as_str()),
            ("w:left", left.as_str()),
            ("w:header", "708"),
            ("w:footer", "708"),
            ("w:gutter", "0"),
        ],
    )?;
    end(w, "w:sectPr")
}

fn write_decl<W: Write>(w: &mut Writer<W>) -> XmlResult<()> {
    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
}

fn start<W: Write>(w: &mut Writer<W>, name: &str, attrs: &[(&str, &str)]) -> XmlResult<()> {
    let mut elem = BytesStart::new(name);
    for attr in attrs {
        elem.push_attribute(*attr);
    }
    w.write_event(Event::Start(elem))
}

fn empty<W: Write>(w: &mut Writer<W>, name: &str, attrs: &[(&str, &str)]) -> XmlResult<()> {
    let mut elem = BytesStart::new(name);
    for attr in attrs {
        elem.push_attribute(*attr);
    }
    w.write_event(Event::Empty(elem))
}

fn end<W: Write>(w: &mut Writer<W>, name: &str) -> XmlResult<()> {
    w.write_event(Event::End(BytesEnd::new(name)))
}

fn text_element<W: Write>(
    w: &mut Writer<W>,
    name: &str,
    attrs: &[(&str, &str)],
    value: &str,
) -> XmlResult<()> {
    start(w, name, attrs)?;
    w.write_event(Event::Text(BytesText::new(&xml_text(value))))?;
    end(w, name)
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

/// Drop characters XML 1.0 cannot carry (C0 controls other than tab/newline).
fn xml_text(value: &str) -> Cow<'_, str> {
    if value.chars().all(is_xml_char) {
        Cow::Borrowed(value)
    } else {
        log::warn!("Dropping control characters not representable in XML");
        Cow::Owned(value.chars().filter(|c| is_xml_char(*c)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, PageMargins};
    use crate::style::{resolve, StyleConfig};
    use std::error::Error as _;
    use std::io::Read;

    fn sample_doc() -> DocumentModel {
        let styles = resolve(&StyleConfig::default()).unwrap();
        crate::build::build_document(
            vec![Block::heading("ВВЕДЕНИЕ"), Block::body("Текст & <абзаца>.")],
            &styles,
        )
    }

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_package_parts() {
        let bytes = to_docx(&sample_doc(), &DocxOptions::default()).unwrap();
        assert!(bytes.starts_with(b"PK"));

        let archive = zip::ZipArchive::new(Cursor::new(&bytes)).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/document.xml",
            "word/styles.xml",
            "word/_rels/document.xml.rels",
            "docProps/core.xml",
            "docProps/app.xml",
        ] {
            assert!(names.contains(&part), "missing {}", part);
        }
    }

    #[test]
    fn test_document_xml_paragraphs() {
        let xml = document_xml(&sample_doc(), &DocxOptions::default()).unwrap();

        assert_eq!(xml.matches("<w:p>").count(), 2);
        let heading = xml.find("ВВЕДЕНИЕ").unwrap();
        let body = xml.find("Текст &amp; &lt;абзаца&gt;.").unwrap();
        assert!(heading < body);

        assert!(xml.contains(r#"<w:pStyle w:val="Heading1"/>"#));
        assert!(xml.contains(r#"<w:ind w:firstLine="709"/>"#));
        assert_eq!(xml.matches("<w:ind ").count(), 1);
        assert!(xml.contains(r#"<w:jc w:val="both"/>"#));
        assert!(xml.contains(r#"w:line="360""#));
        assert!(xml.contains(r#"<w:sz w:val="28"/>"#));
    }

    #[test]
    fn test_margins_written_once() {
        let xml = document_xml(&sample_doc(), &DocxOptions::default()).unwrap();
        assert_eq!(xml.matches("<w:sectPr>").count(), 1);
        assert_eq!(xml.matches("<w:pgMar ").count(), 1);
        assert!(xml.contains(r#"w:top="1134" w:right="1134" w:bottom="1134" w:left="1134""#));
        assert!(xml.contains(r#"<w:pgSz w:w="11906" w:h="16838"/>"#));
    }

    #[test]
    fn test_heading_style_link_optional() {
        let options = DocxOptions::default().with_heading_style(None);
        let xml = document_xml(&sample_doc(), &options).unwrap();
        assert!(!xml.contains("w:pStyle"));
        assert!(xml.contains("<w:b/>"));
    }

    #[test]
    fn test_core_properties() {
        use chrono::TimeZone;
        let created = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();
        let options = DocxOptions::default()
            .with_title("Курсовая <работа>")
            .with_author("Student")
            .with_created(created);

        let bytes = to_docx(&sample_doc(), &options).unwrap();
        let core = read_part(&bytes, "docProps/core.xml");
        assert!(core.contains("<dc:title>Курсовая &lt;работа&gt;</dc:title>"));
        assert!(core.contains("<dc:creator>Student</dc:creator>"));
        assert!(core.contains("2024-05-06T07:08:09Z"));
    }

    #[test]
    fn test_styles_defaults_follow_body() {
        let bytes = to_docx(&sample_doc(), &DocxOptions::default()).unwrap();
        let styles = read_part(&bytes, "word/styles.xml");
        assert!(styles.contains(r#"w:ascii="Times New Roman""#));
        assert!(styles.contains(r#"w:styleId="Heading1""#));
    }

    #[test]
    fn test_uncompressed_package() {
        let options = DocxOptions::default().with_compression(false);
        let bytes = to_docx(&sample_doc(), &options).unwrap();
        let document = read_part(&bytes, "word/document.xml");
        assert!(document.contains("ВВЕДЕНИЕ"));
    }

    #[test]
    fn test_malformed_font_fails() {
        let mut doc = sample_doc();
        doc.blocks[1].style.font_family = "Bad\u{0}Font".to_string();

        let err = to_docx(&doc, &DocxOptions::default()).unwrap_err();
        assert!(matches!(err, Error::SerializationFailed(_)));
        let source = err.source().unwrap();
        assert!(source.to_string().contains("block 1"));
    }

    #[test]
    fn test_zero_font_size_fails() {
        let mut doc = sample_doc();
        doc.blocks[0].style.font_size_half_points = 0;
        assert!(matches!(
            to_docx(&doc, &DocxOptions::default()),
            Err(Error::SerializationFailed(_))
        ));
    }

    #[test]
    fn test_oversized_values_fail() {
        let mut doc = sample_doc();
        doc.blocks[1].style.font_size_half_points = u32::MAX;
        let err = document_xml(&doc, &DocxOptions::default()).unwrap_err();
        assert!(matches!(err, Error::SerializationFailed(_)));
        assert!(err.source().unwrap().to_string().contains("block 1"));

        let mut doc = sample_doc();
        doc.blocks[1].style.line_spacing = Some(u32::MAX);
        assert!(matches!(
            document_xml(&doc, &DocxOptions::default()),
            Err(Error::SerializationFailed(_))
        ));

        let mut doc = sample_doc();
        doc.blocks[1].style.first_line_indent = Twips(Twips::MAX.0 + 1);
        assert!(matches!(
            to_docx(&doc, &DocxOptions::default()),
            Err(Error::SerializationFailed(_))
        ));
    }

    #[test]
    fn test_page_margins_out_of_range_fail() {
        let mut doc = sample_doc();
        doc.page.margins = PageMargins::uniform(Twips(u32::MAX));
        let err = document_xml(&doc, &DocxOptions::default()).unwrap_err();
        assert!(err.source().unwrap().to_string().contains("top margin"));

        let mut doc = sample_doc();
        doc.page.margins.left = Twips(6000);
        doc.page.margins.right = Twips(6000);
        let err = to_docx(&doc, &DocxOptions::default()).unwrap_err();
        assert!(matches!(err, Error::SerializationFailed(_)));
        assert!(err.source().unwrap().to_string().contains("no text area"));
    }

    #[test]
    fn test_control_chars_dropped_from_text() {
        let mut doc = DocumentModel::new(PageSetup::new(
            Default::default(),
            PageMargins::uniform(Twips(567)),
        ));
        let styles = resolve(&StyleConfig::default()).unwrap();
        doc.blocks.push(StyledBlock {
            text: "bell\u{7}text".into(),
            kind: crate::model::BlockKind::Body,
            style: styles.sheet.body,
        });

        let xml = document_xml(&doc, &DocxOptions::default()).unwrap();
        assert!(xml.contains(">belltext<"));
    }

    #[test]
    fn test_empty_document_still_valid() {
        let doc = DocumentModel::new(PageSetup::default());
        let bytes = to_docx(&doc, &DocxOptions::default()).unwrap();
        let document = read_part(&bytes, "word/document.xml");
        assert!(document.contains("<w:sectPr>"));
        assert!(!document.contains("<w:p>"));
    }
}
