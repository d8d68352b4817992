//! Style validation and unit conversion.

use super::StyleConfig;
use crate::error::{Error, Result};
use crate::model::{
    Alignment, PageMargins, PageSetup, ParagraphStyle, StyleSheet, Twips, TWIPS_PER_CM,
};

/// WordprocessingML expresses "auto" line spacing in 240ths of a line.
pub const LINE_SPACING_UNIT: f64 = 240.0;

/// Smallest font size, one half-point.
pub const MIN_FONT_SIZE_PT: f64 = 0.5;

/// Largest font size Word accepts.
pub const MAX_FONT_SIZE_PT: f64 = ParagraphStyle::MAX_FONT_SIZE_HALF_POINTS as f64 / 2.0;

/// Largest line spacing multiplier.
pub const MAX_LINE_SPACING: f64 = ParagraphStyle::MAX_LINE_SPACING as f64 / LINE_SPACING_UNIT;

/// Largest indent, spacing or margin in centimeters.
pub const MAX_LENGTH_CM: f64 = Twips::MAX.0 as f64 / TWIPS_PER_CM;

/// Styles resolved from one [`StyleConfig`], reusable for every block of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyles {
    /// Heading and body paragraph styles
    pub sheet: StyleSheet,

    /// Page size and converted margins
    pub page: PageSetup,
}

/// Validates a [`StyleConfig`] and converts it to native units.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleResolver;

impl StyleResolver {
    /// Create a new resolver.
    pub fn new() -> Self {
        Self
    }

    /// Check every field against its valid range.
    pub fn validate(&self, config: &StyleConfig) -> Result<()> {
        if config.font_family.trim().is_empty() {
            return Err(Error::invalid_config("fontFamily", "must not be empty"));
        }

        require_positive("fontSizePt", config.font_size_pt)?;
        if config.font_size_pt < MIN_FONT_SIZE_PT {
            return Err(Error::invalid_config(
                "fontSizePt",
                format!(
                    "must be at least {}pt (got {})",
                    MIN_FONT_SIZE_PT, config.font_size_pt
                ),
            ));
        }
        require_at_most("fontSizePt", config.font_size_pt, MAX_FONT_SIZE_PT)?;

        require_positive("lineSpacing", config.line_spacing)?;
        if (config.line_spacing * LINE_SPACING_UNIT).round() < 1.0 {
            return Err(Error::invalid_config(
                "lineSpacing",
                format!(
                    "must be at least 1/{} of a line (got {})",
                    LINE_SPACING_UNIT, config.line_spacing
                ),
            ));
        }
        require_at_most("lineSpacing", config.line_spacing, MAX_LINE_SPACING)?;

        for (field, value) in [
            ("indentCm", config.indent_cm),
            ("paragraphSpacingCm", config.paragraph_spacing_cm),
            ("marginTopCm", config.margin_top_cm),
            ("marginBottomCm", config.margin_bottom_cm),
            ("marginLeftCm", config.margin_left_cm),
            ("marginRightCm", config.margin_right_cm),
        ] {
            require_non_negative(field, value)?;
            require_at_most(field, value, MAX_LENGTH_CM)?;
        }

        let page = PageSetup::new(config.page_size, margins(config));
        if page.text_width().is_zero() {
            return Err(Error::invalid_config(
                "marginRightCm",
                format!(
                    "left and right margins leave no text width on a {:?} page",
                    config.page_size
                ),
            ));
        }
        if page.text_height().is_zero() {
            return Err(Error::invalid_config(
                "marginBottomCm",
                format!(
                    "top and bottom margins leave no text height on a {:?} page",
                    config.page_size
                ),
            ));
        }

        Ok(())
    }

    /// Validate and convert a config.
    pub fn resolve(&self, config: &StyleConfig) -> Result<ResolvedStyles> {
        self.validate(config)?;

        let font_family = config.font_family.trim().to_string();
        let font_size_half_points = (config.font_size_pt * 2.0).round() as u32;
        let space_after = Twips::from_cm(config.paragraph_spacing_cm);

        let heading = ParagraphStyle {
            font_family: font_family.clone(),
            font_size_half_points,
            bold: true,
            alignment: Alignment::Left,
            first_line_indent: Twips::ZERO,
            space_after,
            line_spacing: None,
        };

        let body = ParagraphStyle {
            font_family,
            font_size_half_points,
            bold: false,
            alignment: Alignment::Justify,
            first_line_indent: Twips::from_cm(config.indent_cm),
            space_after,
            line_spacing: Some((config.line_spacing * LINE_SPACING_UNIT).round() as u32),
        };

        let margins = margins(config);

        log::debug!(
            "Resolved styles: {} {}pt, indent {} twips, spacing {} twips, margins {:?}",
            body.font_family,
            body.font_size_pt(),
            body.first_line_indent,
            space_after,
            margins
        );

        Ok(ResolvedStyles {
            sheet: StyleSheet { heading, body },
            page: PageSetup::new(config.page_size, margins),
        })
    }
}

/// Validate and convert a config with the default resolver.
pub fn resolve(config: &StyleConfig) -> Result<ResolvedStyles> {
    StyleResolver::new().resolve(config)
}

fn margins(config: &StyleConfig) -> PageMargins {
    PageMargins {
        top: Twips::from_cm(config.margin_top_cm),
        bottom: Twips::from_cm(config.margin_bottom_cm),
        left: Twips::from_cm(config.margin_left_cm),
        right: Twips::from_cm(config.margin_right_cm),
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::invalid_config(
            field,
            format!("must be greater than 0 (got {})", value),
        ));
    }
    Ok(())
}

fn require_non_negative(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::invalid_config(
            field,
            format!("must not be negative (got {})", value),
        ));
    }
    Ok(())
}

fn require_at_most(field: &'static str, value: f64, max: f64) -> Result<()> {
    if value > max {
        return Err(Error::invalid_config(
            field,
            format!("must not exceed {} (got {})", max, value),
        ));
    }
    Ok(())
}
