use std::io;
use std::sync::Arc;

use aula_logging::{aula_debug, aula_info};

use crate::extract::RegexWordExtractor;
use crate::present::{ConsolePresenter, Presenter};
use crate::reader::{FileReader, SourceReader};
use crate::token::WordCounter;

/// Runs one read -> count -> show request end to end.
pub struct Orchestrator {
    reader: Box<dyn SourceReader>,
    counter: WordCounter,
    presenter: Box<dyn Presenter>,
}

impl Orchestrator {
    pub fn new(
        reader: Box<dyn SourceReader>,
        counter: WordCounter,
        presenter: Box<dyn Presenter>,
    ) -> Self {
        Self {
            reader,
            counter,
            presenter,
        }
    }

    /// File reader, regex extractor and stdout presenter.
    pub fn with_defaults() -> Self {
        Self::new(
            Box::new(FileReader::new()),
            WordCounter::new(Arc::new(RegexWordExtractor)),
            Box::new(ConsolePresenter::stdout()),
        )
    }

    pub fn counter(&self) -> &WordCounter {
        &self.counter
    }

    /// Processes `source_name`.
    ///
    /// Returns `Ok(false)` without touching the counter or presenter when the
    /// reader has no text, `Ok(true)` once the result has been shown. Only a
    /// failing presenter sink produces `Err`.
    pub fn process(&self, source_name: &str) -> io::Result<bool> {
        aula_info!("Processing source {:?}", source_name);
        let Some(text) = self.reader.read(source_name) else {
            aula_info!("No text available for {:?}", source_name);
            return Ok(false);
        };

        // One extraction feeds both the count and the token list.
        let tally = self.counter.tally(&text);
        aula_debug!(
            "Source {:?}: {} chars, {} words",
            source_name,
            text.chars().count(),
            tally.count
        );

        self.presenter.show(&text, &tally.tokens, tally.count)?;
        aula_info!("Processed {:?} ({} words)", source_name, tally.count);
        Ok(true)
    }
}
