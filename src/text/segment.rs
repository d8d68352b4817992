//! Paragraph segmentation.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

const BOM: char = '\u{FEFF}';
const REPLACEMENT_CHAR: char = '\u{FFFD}';

/// Options for text normalization ahead of segmentation.
#[derive(Debug, Clone)]
pub struct SegmentOptions {
    /// Strip a leading byte order mark
    pub strip_bom: bool,

    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Remove Unicode replacement character (U+FFFD)
    pub remove_replacement_char: bool,
}

impl SegmentOptions {
    /// Create options with defaults (all normalization enabled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave the text exactly as supplied, apart from line endings.
    pub fn raw() -> Self {
        Self {
            strip_bom: false,
            normalize_unicode: false,
            remove_replacement_char: false,
        }
    }

    /// Enable or disable NFC normalization.
    pub fn with_unicode_normalization(mut self, enabled: bool) -> Self {
        self.normalize_unicode = enabled;
        self
    }

    /// Enable or disable replacement character removal.
    pub fn with_replacement_char_removal(mut self, enabled: bool) -> Self {
        self.remove_replacement_char = enabled;
        self
    }
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            strip_bom: true,
            normalize_unicode: true,
            remove_replacement_char: true,
        }
    }
}

/// Splits raw text into cleaned paragraph strings.
///
/// Paragraphs are separated by blank lines (a line break, optional
/// whitespace-only content, another line break). Single line breaks inside a
/// paragraph become spaces.
#[derive(Debug, Clone)]
pub struct Segmenter {
    options: SegmentOptions,
    separator: Regex,
    line_break: Regex,
}

impl Segmenter {
    /// Create a new segmenter with the given options.
    pub fn new(options: SegmentOptions) -> Self {
        Self {
            options,
            separator: Regex::new(r"\n\s*\n").expect("separator pattern is valid"),
            line_break: Regex::new(r"[^\S\n]*\n[^\S\n]*").expect("line break pattern is valid"),
        }
    }

    /// Get the options.
    pub fn options(&self) -> &SegmentOptions {
        &self.options
    }

    /// Split text into non-empty, trimmed, single-line paragraphs.
    pub fn split(&self, raw: &str) -> Vec<String> {
        let text = self.normalize(raw);

        let paragraphs: Vec<String> = self
            .separator
            .split(&text)
            .map(|chunk| self.line_break.replace_all(chunk, " ").trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        log::debug!(
            "Segmenter: {} bytes -> {} paragraphs",
            raw.len(),
            paragraphs.len()
        );
        paragraphs
    }

    fn normalize(&self, raw: &str) -> String {
        let mut text = raw.replace("\r\n", "\n").replace('\r', "\n");

        if self.options.strip_bom {
            if let Some(stripped) = text.strip_prefix(BOM) {
                text = stripped.to_string();
            }
        }

        if self.options.remove_replacement_char && text.contains(REPLACEMENT_CHAR) {
            log::warn!("Removing U+FFFD replacement characters from input");
            text = text.replace(REPLACEMENT_CHAR, "");
        }

        if self.options.normalize_unicode {
            text = text.nfc().collect();
        }

        text
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(SegmentOptions::default())
    }
}

/// Split text into paragraphs with default options.
pub fn segment(raw: &str) -> Vec<String> {
    Segmenter::default().split(raw)
}
