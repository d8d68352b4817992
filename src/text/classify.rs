//! Heading detection.
//!
//! Headings in academic papers tend to be short and either end with a colon
//! or start with a capital letter (often the whole line is in capitals). The
//! default [`HeadingHeuristic`] encodes that, and additionally treats a short
//! capitalized line ending in sentence punctuation (`.`, `!`, `?`, `…`) as an
//! ordinary sentence. It is a best-effort signal: a short unpunctuated body
//! line starting with a capital letter is classified as a heading, and a long
//! heading is classified as body text.

use crate::model::BlockKind;

/// Default maximum heading length, in characters (exclusive).
pub const DEFAULT_MAX_HEADING_CHARS: usize = 100;

const SENTENCE_END: &[char] = &['.', '!', '?', '…'];

/// Decides whether a cleaned paragraph is a heading.
pub trait HeadingPolicy: Send + Sync {
    /// Classify a cleaned paragraph.
    fn classify(&self, text: &str) -> BlockKind;

    /// Get the name of this policy.
    fn name(&self) -> &str;
}

/// Which letters count as "uppercase" for the first-character rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UppercaseRule {
    /// Any Unicode uppercase letter
    #[default]
    AnyScript,
    /// Cyrillic capitals only (А-Я, Ё)
    Cyrillic,
    /// Latin capitals only (A-Z)
    Latin,
}

impl UppercaseRule {
    /// Check a character against the rule.
    pub fn matches(self, c: char) -> bool {
        match self {
            UppercaseRule::AnyScript => c.is_uppercase(),
            UppercaseRule::Cyrillic => matches!(c, 'А'..='Я' | 'Ё'),
            UppercaseRule::Latin => c.is_ascii_uppercase(),
        }
    }
}

/// Length + punctuation + capitalization heading rule.
///
/// A paragraph is a heading when it is shorter than `max_chars` characters
/// and it either ends with `:` or starts with an uppercase letter. With
/// `sentence_is_body` set, a capitalized line ending in sentence punctuation
/// is body text.
#[derive(Debug, Clone)]
pub struct HeadingHeuristic {
    /// Headings must be strictly shorter than this many characters
    pub max_chars: usize,

    /// Rule for the first character
    pub uppercase: UppercaseRule,

    /// Treat capitalized lines ending in `.`, `!`, `?` or `…` as body text
    pub sentence_is_body: bool,
}

impl HeadingHeuristic {
    /// Create the default heuristic.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum heading length.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Set the uppercase rule.
    pub fn with_uppercase_rule(mut self, rule: UppercaseRule) -> Self {
        self.uppercase = rule;
        self
    }

    /// Enable or disable the sentence punctuation exception.
    pub fn with_sentence_rule(mut self, enabled: bool) -> Self {
        self.sentence_is_body = enabled;
        self
    }

    /// Check whether `text` qualifies as a heading.
    pub fn is_heading(&self, text: &str) -> bool {
        let text = text.trim();
        if text.chars().count() >= self.max_chars {
            return false;
        }

        if text.ends_with(':') {
            return true;
        }
        if self.sentence_is_body && text.ends_with(SENTENCE_END) {
            return false;
        }
        text.chars().next().is_some_and(|c| self.uppercase.matches(c))
    }
}

impl Default for HeadingHeuristic {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_HEADING_CHARS,
            uppercase: UppercaseRule::AnyScript,
            sentence_is_body: true,
        }
    }
}

impl HeadingPolicy for HeadingHeuristic {
    fn classify(&self, text: &str) -> BlockKind {
        if self.is_heading(text) {
            BlockKind::Heading
        } else {
            BlockKind::Body
        }
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}

/// Classify a paragraph with the default heuristic.
pub fn classify(text: &str) -> BlockKind {
    HeadingHeuristic::default().classify(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_short_is_heading() {
        assert_eq!(classify("ВВЕДЕНИЕ"), BlockKind::Heading);
        assert_eq!(classify("Introduction"), BlockKind::Heading);
    }

    #[test]
    fn test_colon_is_heading() {
        assert_eq!(classify("задачи работы:"), BlockKind::Heading);
    }

    #[test]
    fn test_long_lowercase_is_body() {
        let text = "a".repeat(150);
        assert_eq!(classify(&text), BlockKind::Body);
    }

    #[test]
    fn test_long_uppercase_is_body() {
        let text = format!("A{}", "b".repeat(99));
        assert_eq!(text.chars().count(), 100);
        assert_eq!(classify(&text), BlockKind::Body);

        let text = format!("A{}", "b".repeat(98));
        assert_eq!(classify(&text), BlockKind::Heading);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 60 Cyrillic chars = 120 bytes
        let text = "Я".repeat(60);
        assert_eq!(classify(&text), BlockKind::Heading);
    }

    #[test]
    fn test_short_lowercase_is_body() {
        assert_eq!(classify("just a short note"), BlockKind::Body);
        assert_eq!(classify("1. numbered item"), BlockKind::Body);
        assert_eq!(classify(""), BlockKind::Body);
    }

    #[test]
    fn test_deterministic() {
        let text = "Цель работы. Изучение влияния технологий.";
        assert_eq!(classify(text), classify(text));
    }

    #[test]
    fn test_uppercase_rules() {
        let cyrillic = HeadingHeuristic::new().with_uppercase_rule(UppercaseRule::Cyrillic);
        assert!(cyrillic.is_heading("Ёлка"));
        assert!(!cyrillic.is_heading("Introduction"));

        let latin = HeadingHeuristic::new().with_uppercase_rule(UppercaseRule::Latin);
        assert!(latin.is_heading("Introduction"));
        assert!(!latin.is_heading("ВВЕДЕНИЕ"));
    }

    #[test]
    fn test_short_sentence_is_body() {
        assert_eq!(classify("Это первый абзац текста."), BlockKind::Body);
        assert_eq!(classify("Why does it matter?"), BlockKind::Body);
        assert_eq!(classify("Итоги работы:"), BlockKind::Heading);

        let literal = HeadingHeuristic::new().with_sentence_rule(false);
        assert!(literal.is_heading("Это первый абзац текста."));
    }

    #[test]
    fn test_custom_max_chars() {
        let policy = HeadingHeuristic::new().with_max_chars(5);
        assert!(policy.is_heading("Tiny"));
        assert!(!policy.is_heading("Longer"));
        assert_eq!(policy.name(), "heuristic");
    }
}
