use std::sync::LazyLock;

use regex::Regex;

/// Maximal runs of Unicode alphanumerics (any letter or number category,
/// superscripts and fractions included) plus `_`. Combining marks and other
/// connector punctuation separate words.
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}_]+").expect("static word regex should not panic")
});

pub trait WordExtractor: Send + Sync {
    /// Splits `text` into word tokens in order of appearance.
    ///
    /// Absent and empty text both yield an empty list.
    fn extract(&self, text: Option<&str>) -> Vec<String>;
}

/// Regex-backed extractor; punctuation and whitespace only separate tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexWordExtractor;

impl WordExtractor for RegexWordExtractor {
    fn extract(&self, text: Option<&str>) -> Vec<String> {
        match text {
            Some(text) if !text.is_empty() => WORD_PATTERN
                .find_iter(text)
                .map(|m| m.as_str().to_string())
                .collect(),
            _ => Vec::new(),
        }
    }
}
