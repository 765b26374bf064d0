use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Renders one word-count result to an output sink.
pub trait Presenter: Send + Sync {
    fn show(&self, text: &str, tokens: &[String], count: usize) -> io::Result<()>;
}

/// Builds the report shown for one source: the text, its tokens, the total.
pub fn render_report(text: &str, tokens: &[String], count: usize) -> String {
    format!("File contents:\n{text}\n\nWords found:\n{tokens:?}\n\nTotal words: {count}\n")
}

/// Presenter writing the rendered report to any `Write` sink.
pub struct WriterPresenter<W> {
    sink: Mutex<W>,
}

/// Presenter bound to standard output.
pub type ConsolePresenter = WriterPresenter<io::Stdout>;

impl ConsolePresenter {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> WriterPresenter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    pub fn into_inner(self) -> W {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Presenter for WriterPresenter<W> {
    fn show(&self, text: &str, tokens: &[String], count: usize) -> io::Result<()> {
        let report = render_report(text, tokens, count);
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        sink.write_all(report.as_bytes())?;
        sink.flush()
    }
}
