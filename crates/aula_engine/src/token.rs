use std::sync::Arc;

use crate::extract::WordExtractor;
use crate::Tally;

/// Counts words by delegating to the extractor it was built with.
#[derive(Clone)]
pub struct WordCounter {
    extractor: Arc<dyn WordExtractor>,
}

impl WordCounter {
    pub fn new(extractor: Arc<dyn WordExtractor>) -> Self {
        Self { extractor }
    }

    pub fn extractor(&self) -> &dyn WordExtractor {
        self.extractor.as_ref()
    }

    /// Number of tokens in `text`; 0 for absent or empty text.
    pub fn count(&self, text: Option<&str>) -> usize {
        match text {
            Some(text) if !text.is_empty() => self.extractor.extract(Some(text)).len(),
            _ => 0,
        }
    }

    /// Extracts once and returns the tokens with their count.
    pub fn tally(&self, text: &str) -> Tally {
        if text.is_empty() {
            return Tally::default();
        }
        Tally::from_tokens(self.extractor.extract(Some(text)))
    }
}
