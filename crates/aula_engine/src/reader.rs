use std::fs;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use aula_logging::{aula_debug, aula_warn};

use crate::decode::decode_text;
use crate::ReadError;

/// Retrieves raw text from a named source.
///
/// Returns `None` when the text is unavailable. Implementations recover from
/// their own retrieval faults and report them out of band.
pub trait SourceReader: Send + Sync {
    fn read(&self, source_name: &str) -> Option<String>;
}

/// Reads a whole file from the local filesystem.
///
/// Failures are written as one human-readable line to the diagnostics sink
/// (stderr unless another sink is injected) and logged at warn level.
pub struct FileReader<W = io::Stderr> {
    diagnostics: Mutex<W>,
}

impl FileReader<io::Stderr> {
    pub fn new() -> Self {
        Self::with_diagnostics(io::stderr())
    }
}

impl Default for FileReader<io::Stderr> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> FileReader<W> {
    pub fn with_diagnostics(sink: W) -> Self {
        Self {
            diagnostics: Mutex::new(sink),
        }
    }

    /// Hands back the diagnostics sink, e.g. to inspect what was reported.
    pub fn into_diagnostics(self) -> W {
        self.diagnostics
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Reads and decodes `source_name`, classifying any failure.
    ///
    /// The file handle never outlives this call.
    pub fn try_read(&self, source_name: &str) -> Result<String, ReadError> {
        let bytes = fs::read(source_name).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => ReadError::NotFound {
                source_name: source_name.to_string(),
            },
            _ => ReadError::ReadFailure {
                source_name: source_name.to_string(),
                message: err.to_string(),
            },
        })?;

        let decoded = decode_text(&bytes).map_err(|err| ReadError::ReadFailure {
            source_name: source_name.to_string(),
            message: err.to_string(),
        })?;
        aula_debug!(
            "Read {} bytes from {:?} as {}",
            bytes.len(),
            source_name,
            decoded.encoding_label
        );
        Ok(decoded.text)
    }

    fn report(&self, err: &ReadError) {
        aula_warn!("{}", err);
        let mut sink = self
            .diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        // A broken diagnostics sink must not turn a recovered fault into a new one.
        let _ = writeln!(sink, "{}", err.diagnostic());
        let _ = sink.flush();
    }
}

impl<W: Write + Send> SourceReader for FileReader<W> {
    fn read(&self, source_name: &str) -> Option<String> {
        match self.try_read(source_name) {
            Ok(text) => Some(text),
            Err(err) => {
                self.report(&err);
                None
            }
        }
    }
}
