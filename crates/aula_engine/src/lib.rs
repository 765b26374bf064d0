//! Aula engine: the word-count pipeline.
//!
//! A request flows reader -> counter (which owns the extractor) -> presenter,
//! wired together by [`Orchestrator`]. Each role sits behind its own trait so
//! any of them can be replaced independently.
mod decode;
mod extract;
mod orchestrator;
mod present;
mod reader;
mod token;
mod types;

pub use decode::{decode_text, DecodeError, DecodedText};
pub use extract::{RegexWordExtractor, WordExtractor};
pub use orchestrator::Orchestrator;
pub use present::{render_report, ConsolePresenter, Presenter, WriterPresenter};
pub use reader::{FileReader, SourceReader};
pub use token::WordCounter;
pub use types::{ReadError, Tally};
