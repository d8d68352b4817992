//! User-facing formatting parameters.

use crate::error::{Error, Result};
use crate::model::PageSize;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The complete set of user-chosen formatting parameters for one run.
///
/// Field names serialize in camelCase (`fontFamily`, `lineSpacing`,
/// `marginTopCm`, ...). Missing fields take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    /// Font family name
    pub font_family: String,

    /// Font size in points (> 0)
    pub font_size_pt: f64,

    /// Line spacing multiplier for body text (> 0, typically 1.0-2.0)
    pub line_spacing: f64,

    /// First line indent of body paragraphs in cm (>= 0)
    pub indent_cm: f64,

    /// Space after every paragraph in cm (>= 0)
    pub paragraph_spacing_cm: f64,

    /// Top page margin in cm (>= 0)
    pub margin_top_cm: f64,

    /// Bottom page margin in cm (>= 0)
    pub margin_bottom_cm: f64,

    /// Left page margin in cm (>= 0)
    pub margin_left_cm: f64,

    /// Right page margin in cm (>= 0)
    pub margin_right_cm: f64,

    /// Paper size
    pub page_size: PageSize,
}

impl StyleConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::invalid_config("config", e.to_string()))
    }

    /// Read a JSON config file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Set the font family.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the font size in points.
    pub fn with_font_size(mut self, pt: f64) -> Self {
        self.font_size_pt = pt;
        self
    }

    /// Set the line spacing multiplier.
    pub fn with_line_spacing(mut self, spacing: f64) -> Self {
        self.line_spacing = spacing;
        self
    }

    /// Set the first line indent in cm.
    pub fn with_indent(mut self, cm: f64) -> Self {
        self.indent_cm = cm;
        self
    }

    /// Set the paragraph spacing in cm.
    pub fn with_paragraph_spacing(mut self, cm: f64) -> Self {
        self.paragraph_spacing_cm = cm;
        self
    }

    /// Set all four margins in cm.
    pub fn with_margins(mut self, cm: f64) -> Self {
        self.margin_top_cm = cm;
        self.margin_bottom_cm = cm;
        self.margin_left_cm = cm;
        self.margin_right_cm = cm;
        self
    }

    /// Set each margin in cm.
    pub fn with_margin_sides(mut self, top: f64, bottom: f64, left: f64, right: f64) -> Self {
        self.margin_top_cm = top;
        self.margin_bottom_cm = bottom;
        self.margin_left_cm = left;
        self.margin_right_cm = right;
        self
    }

    /// Set the paper size.
    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.page_size = size;
        self
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_family: "Times New Roman".to_string(),
            font_size_pt: 14.0,
            line_spacing: 1.5,
            indent_cm: 1.25,
            paragraph_spacing_cm: 0.0,
            margin_top_cm: 2.0,
            margin_bottom_cm: 2.0,
            margin_left_cm: 2.0,
            margin_right_cm: 2.0,
            page_size: PageSize::A4,
        }
    }
}
