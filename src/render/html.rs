//! HTML preview rendering.
//!
//! Produces the same formatting as the exported document, expressed in CSS,
//! for showing a preview before export.

use crate::model::{DocumentModel, ParagraphStyle, StyledBlock};
use html_escape::{encode_double_quoted_attribute, encode_text};

/// HTML output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HtmlFormat {
    /// A `<div>` fragment for embedding
    #[default]
    Fragment,
    /// A complete HTML page
    Page,
}

/// Render a document as an HTML preview.
pub fn to_html(doc: &DocumentModel, format: HtmlFormat) -> String {
    let mut out = String::new();

    if format == HtmlFormat::Page {
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str("<title>Preview</title>\n</head>\n<body>\n");
    }

    let mut wrapper = Vec::new();
    if let Some(body) = doc.blocks.iter().find(|b| !b.is_heading()) {
        wrapper.push(font_css(&body.style));
        wrapper.push(format!(
            "line-height: {};",
            trim_float(body.style.line_spacing_multiplier())
        ));
    }
    let margins = &doc.page.margins;
    wrapper.push(format!(
        "margin-top: {}; margin-bottom: {}; margin-left: {}; margin-right: {};",
        cm(margins.top.to_cm()),
        cm(margins.bottom.to_cm()),
        cm(margins.left.to_cm()),
        cm(margins.right.to_cm()),
    ));

    out.push_str(&format!(
        "<div class=\"formatted-preview\" style=\"{}\">\n",
        encode_double_quoted_attribute(&wrapper.join(" "))
    ));
    for block in &doc.blocks {
        out.push_str(&paragraph_html(block));
        out.push('\n');
    }
    out.push_str("</div>\n");

    if format == HtmlFormat::Page {
        out.push_str("</body>\n</html>\n");
    }

    out
}

fn paragraph_html(block: &StyledBlock) -> String {
    let style = &block.style;
    let mut css = Vec::new();

    if !style.first_line_indent.is_zero() {
        css.push(format!("text-indent: {};", cm(style.first_line_indent.to_cm())));
    }
    css.push(format!("margin-bottom: {};", cm(style.space_after.to_cm())));
    css.push(format!(
        "line-height: {};",
        trim_float(style.line_spacing_multiplier())
    ));
    css.push(font_css(style));
    css.push(format!("text-align: {};", style.alignment.css_value()));
    if style.bold {
        css.push("font-weight: bold;".to_string());
    }

    format!(
        "<p style=\"{}\">{}</p>",
        encode_double_quoted_attribute(&css.join(" ")),
        encode_text(&block.text)
    )
}

fn font_css(style: &ParagraphStyle) -> String {
    format!(
        "font-family: '{}', serif; font-size: {}pt;",
        style.font_family.replace('\\', "\\\\").replace('\'', "\\'"),
        trim_float(style.font_size_pt())
    )
}

fn cm(value: f64) -> String {
    format!("{}cm", trim_float((value * 100.0).round() / 100.0))
}

/// Format a float without trailing zeros (1.5 -> "1.5", 2.0 -> "2").
fn trim_float(value: f64) -> String {
    let s = format!("{:.2}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
