//! End-to-end tests for the text formatting pipeline.

use textdocx::{
    format_text, text_to_docx, Alignment, BlockKind, DocxOptions, Error, StyleConfig, Textdocx,
    Twips,
};

const SAMPLE: &str = "ВВЕДЕНИЕ\n\nЭто первый абзац текста.";

#[test]
fn test_end_to_end_cyrillic_sample() {
    let config = StyleConfig::default()
        .with_font_family("Times New Roman")
        .with_font_size(14.0)
        .with_line_spacing(1.5)
        .with_indent(1.25)
        .with_paragraph_spacing(0.0)
        .with_margins(2.0);

    let doc = format_text(SAMPLE, &config).unwrap();
    assert_eq!(doc.len(), 2);

    let heading = &doc.blocks[0];
    assert_eq!(heading.kind, BlockKind::Heading);
    assert_eq!(heading.text, "ВВЕДЕНИЕ");
    assert!(heading.style.bold);
    assert!(heading.style.first_line_indent.is_zero());

    let body = &doc.blocks[1];
    assert_eq!(body.kind, BlockKind::Body);
    assert_eq!(body.style.first_line_indent, Twips(709));
    assert_eq!(body.style.alignment, Alignment::Justify);
    assert_eq!(body.style.line_spacing, Some(360));
    assert_eq!(body.style.font_size_half_points, 28);
    assert_eq!(body.style.font_family, "Times New Roman");

    assert_eq!(doc.page.margins.top, Twips(1134));
    assert_eq!(doc.page.margins.left, Twips(1134));

    let bytes = textdocx::render::to_docx(&doc, &DocxOptions::default()).unwrap();
    assert!(!bytes.is_empty());
}

#[test]
fn test_block_count_matches_chunks() {
    let config = StyleConfig::default();

    let doc = format_text("A\n\nB\n\nC", &config).unwrap();
    let texts: Vec<&str> = doc.blocks.iter().map(|b| b.text.as_str()).collect();
    assert_eq!(texts, vec!["A", "B", "C"]);

    let doc = format_text("A\nB", &config).unwrap();
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.blocks[0].text, "A B");
}

#[test]
fn test_windows_line_endings_and_extra_blank_lines() {
    let doc = format_text("one\r\ntwo\r\n\r\n \t \r\n\r\nthree", &StyleConfig::default()).unwrap();
    let texts: Vec<&str> = doc.blocks.iter().map(|b| b.text.as_str()).collect();
    assert_eq!(texts, vec!["one two", "three"]);
}

#[test]
fn test_functional_idempotence() {
    let config = StyleConfig::default().with_font_size(12.0);
    let first = format_text(SAMPLE, &config).unwrap();
    let second = format_text(SAMPLE, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_input() {
    let result = format_text("", &StyleConfig::default());
    assert!(matches!(result, Err(Error::EmptyInput)));

    let result = format_text("\n\n   \n\t\n", &StyleConfig::default());
    assert!(matches!(result, Err(Error::EmptyInput)));
}

#[test]
fn test_negative_line_spacing_rejected() {
    let config = StyleConfig::default().with_line_spacing(-1.0);
    let err = format_text(SAMPLE, &config).unwrap_err();

    assert!(matches!(err, Error::InvalidConfiguration { .. }));
    assert_eq!(err.config_field(), Some("lineSpacing"));
    assert!(err.to_string().contains("lineSpacing"));
}

#[test]
fn test_values_beyond_word_limits_rejected() {
    let config = StyleConfig::default()
        .with_margins(1e7)
        .with_font_size(1e10)
        .with_line_spacing(1e8);
    let err = text_to_docx(SAMPLE, &config, &DocxOptions::default()).unwrap_err();
    assert_eq!(err.config_field(), Some("fontSizePt"));

    let config = StyleConfig::default().with_margins(1e7);
    let err = format_text(SAMPLE, &config).unwrap_err();
    assert_eq!(err.config_field(), Some("marginTopCm"));

    let config = StyleConfig::default().with_margin_sides(2.0, 2.0, 12.0, 12.0);
    let err = format_text(SAMPLE, &config).unwrap_err();
    assert_eq!(err.config_field(), Some("marginRightCm"));
}

#[test]
fn test_config_from_json() {
    let config = StyleConfig::from_json_str(
        r#"{"fontFamily": "Arial", "fontSizePt": 12, "marginLeftCm": 3}"#,
    )
    .unwrap();
    let doc = format_text(SAMPLE, &config).unwrap();

    assert_eq!(doc.blocks[1].style.font_family, "Arial");
    assert_eq!(doc.blocks[1].style.font_size_half_points, 24);
    assert_eq!(doc.page.margins.left, Twips(1701));
    assert_eq!(doc.page.margins.right, Twips(1134));
}

#[test]
fn test_heading_never_indented() {
    let config = StyleConfig::default().with_indent(3.0);
    let doc = format_text("Глава 1:\n\nтекст\n\nЗАКЛЮЧЕНИЕ", &config).unwrap();

    for block in &doc.blocks {
        if block.is_heading() {
            assert!(block.style.first_line_indent.is_zero());
        } else {
            assert_eq!(block.style.first_line_indent, Twips::from_cm(3.0));
        }
    }
}

#[test]
fn test_text_to_docx() {
    let bytes = text_to_docx(SAMPLE, &StyleConfig::default(), &DocxOptions::default()).unwrap();
    assert!(textdocx::detect::is_zip_bytes(&bytes));

    let result = text_to_docx("   ", &StyleConfig::default(), &DocxOptions::default());
    assert!(matches!(result, Err(Error::EmptyInput)));
}

#[test]
fn test_builder_stats() {
    let result = Textdocx::new()
        .format("ВВЕДЕНИЕ\n\nпервый абзац\n\nвторой абзац")
        .unwrap();
    let stats = result.stats();

    assert_eq!(stats.block_count, 3);
    assert_eq!(stats.heading_count, 1);
    assert_eq!(stats.body_count, 2);
    assert_eq!(stats.word_count, 5);
}
