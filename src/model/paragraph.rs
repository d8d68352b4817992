//! Paragraph styling and length units.

use serde::{Deserialize, Serialize};

/// Twips per centimeter: cm -> points (72 / 2.54) -> twentieths of a point.
pub const TWIPS_PER_CM: f64 = 20.0 * 72.0 / 2.54;

/// Length in twips (twentieths of a point), the native WordprocessingML unit.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Twips(pub u32);

impl Twips {
    /// Zero length.
    pub const ZERO: Twips = Twips(0);

    /// Largest length Word accepts for page and paragraph measures (22 in).
    pub const MAX: Twips = Twips(31680);

    /// Convert centimeters to twips.
    ///
    /// This is the only cm conversion in the crate; margins, indents and
    /// spacing all go through it. Negative or non-finite input clamps to zero,
    /// callers are expected to validate first.
    pub fn from_cm(cm: f64) -> Self {
        if !cm.is_finite() || cm <= 0.0 {
            return Twips::ZERO;
        }
        Twips((cm * TWIPS_PER_CM).round() as u32)
    }

    /// Raw twips value.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Length in points.
    pub fn to_points(self) -> f64 {
        f64::from(self.0) / 20.0
    }

    /// Length in centimeters.
    pub fn to_cm(self) -> f64 {
        f64::from(self.0) / TWIPS_PER_CM
    }

    /// Check if the length is zero.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for Twips {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

impl Alignment {
    /// Value of the `w:jc` element.
    pub fn docx_value(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "both",
        }
    }

    /// Value of the CSS `text-align` property.
    pub fn css_value(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
        }
    }
}

/// Fully resolved paragraph attributes, in native units.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Font family name
    pub font_family: String,

    /// Font size in half-points (`w:sz`)
    pub font_size_half_points: u32,

    /// Bold weight
    pub bold: bool,

    /// Text alignment
    pub alignment: Alignment,

    /// First line indent
    pub first_line_indent: Twips,

    /// Space after the paragraph
    pub space_after: Twips,

    /// Line spacing in 240ths of a line (`None` = single, inherited)
    pub line_spacing: Option<u32>,
}

impl ParagraphStyle {
    /// Largest `w:sz` value Word accepts (1638pt).
    pub const MAX_FONT_SIZE_HALF_POINTS: u32 = 3276;

    /// Largest `w:line` value in "auto" mode (132 lines).
    pub const MAX_LINE_SPACING: u32 = 31680;

    /// Font size in points.
    pub fn font_size_pt(&self) -> f64 {
        f64::from(self.font_size_half_points) / 2.0
    }

    /// Line spacing as a multiplier (1.0 = single).
    pub fn line_spacing_multiplier(&self) -> f64 {
        self.line_spacing.map_or(1.0, |line| f64::from(line) / 240.0)
    }
}

/// The two styles resolved for one formatting run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSheet {
    /// Style applied to heading blocks
    pub heading: ParagraphStyle,

    /// Style applied to body blocks
    pub body: ParagraphStyle,
}

impl StyleSheet {
    /// Pick the style for a block kind.
    pub fn for_kind(&self, kind: super::BlockKind) -> &ParagraphStyle {
        match kind {
            super::BlockKind::Heading => &self.heading,
            super::BlockKind::Body => &self.body,
        }
    }
}
