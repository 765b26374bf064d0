mod common;

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use aula_engine::{
    render_report, FileReader, Orchestrator, Presenter, RegexWordExtractor, SourceReader,
    WordCounter, WordExtractor, WriterPresenter,
};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

/// Reader returning a canned answer and recording what it was asked for.
struct StubReader {
    text: Option<String>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl SourceReader for StubReader {
    fn read(&self, source_name: &str) -> Option<String> {
        self.requests.lock().unwrap().push(source_name.to_string());
        self.text.clone()
    }
}

/// Extractor wrapper that counts invocations.
struct CountingExtractor {
    calls: Arc<Mutex<usize>>,
}

impl WordExtractor for CountingExtractor {
    fn extract(&self, text: Option<&str>) -> Vec<String> {
        *self.calls.lock().unwrap() += 1;
        RegexWordExtractor.extract(text)
    }
}

type Shown = (String, Vec<String>, usize);

struct RecordingPresenter {
    shown: Arc<Mutex<Vec<Shown>>>,
}

impl Presenter for RecordingPresenter {
    fn show(&self, text: &str, tokens: &[String], count: usize) -> io::Result<()> {
        self.shown
            .lock()
            .unwrap()
            .push((text.to_string(), tokens.to_vec(), count));
        Ok(())
    }
}

struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct Harness {
    orchestrator: Orchestrator,
    requests: Arc<Mutex<Vec<String>>>,
    extract_calls: Arc<Mutex<usize>>,
    shown: Arc<Mutex<Vec<Shown>>>,
}

fn harness(text: Option<&str>) -> Harness {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let extract_calls = Arc::new(Mutex::new(0));
    let shown = Arc::new(Mutex::new(Vec::new()));
    let orchestrator = Orchestrator::new(
        Box::new(StubReader {
            text: text.map(str::to_string),
            requests: requests.clone(),
        }),
        WordCounter::new(Arc::new(CountingExtractor {
            calls: extract_calls.clone(),
        })),
        Box::new(RecordingPresenter {
            shown: shown.clone(),
        }),
    );
    Harness {
        orchestrator,
        requests,
        extract_calls,
        shown,
    }
}

#[test]
fn successful_read_is_shown_once() {
    common::init_logging();
    let h = harness(Some("Hola mundo"));

    assert!(h.orchestrator.process("test.txt").unwrap());

    assert_eq!(*h.requests.lock().unwrap(), vec!["test.txt".to_string()]);
    assert_eq!(*h.extract_calls.lock().unwrap(), 1);
    assert_eq!(
        *h.shown.lock().unwrap(),
        vec![(
            "Hola mundo".to_string(),
            vec!["Hola".to_string(), "mundo".to_string()],
            2usize
        )]
    );
}

#[test]
fn absent_text_short_circuits() {
    common::init_logging();
    let h = harness(None);

    assert!(!h.orchestrator.process("missing_file.txt").unwrap());

    assert_eq!(
        *h.requests.lock().unwrap(),
        vec!["missing_file.txt".to_string()]
    );
    assert_eq!(*h.extract_calls.lock().unwrap(), 0);
    assert!(h.shown.lock().unwrap().is_empty());
}

#[test]
fn empty_text_is_still_a_success() {
    common::init_logging();
    let h = harness(Some(""));

    assert!(h.orchestrator.process("empty.txt").unwrap());
    assert_eq!(*h.shown.lock().unwrap(), vec![(String::new(), Vec::<String>::new(), 0usize)]);
}

#[test]
fn repeated_calls_are_independent() {
    common::init_logging();
    let h = harness(Some("a b c d e"));

    assert!(h.orchestrator.process("one").unwrap());
    assert!(h.orchestrator.process("two").unwrap());

    let shown = h.shown.lock().unwrap();
    assert_eq!(shown.len(), 2);
    assert_eq!(shown[0], shown[1]);
    assert_eq!(shown[0].2, 5);
}

#[test]
fn failing_presenter_sink_propagates() {
    common::init_logging();
    let orchestrator = Orchestrator::new(
        Box::new(StubReader {
            text: Some("x".into()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }),
        WordCounter::new(Arc::new(RegexWordExtractor)),
        Box::new(WriterPresenter::new(BrokenSink)),
    );

    let err = orchestrator.process("x.txt").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn full_pipeline_over_a_real_file() {
    common::init_logging();
    let mut file = NamedTempFile::new().unwrap();
    file.write_all("Hola mundo".as_bytes()).unwrap();

    let output = Arc::new(Mutex::new(Vec::new()));
    let orchestrator = Orchestrator::new(
        Box::new(FileReader::with_diagnostics(Vec::new())),
        WordCounter::new(Arc::new(RegexWordExtractor)),
        Box::new(WriterPresenter::new(SharedBuffer(output.clone()))),
    );

    assert!(orchestrator.process(file.path().to_str().unwrap()).unwrap());

    let expected = render_report(
        "Hola mundo",
        &["Hola".to_string(), "mundo".to_string()],
        2,
    );
    assert_eq!(
        String::from_utf8(output.lock().unwrap().clone()).unwrap(),
        expected
    );
}

#[test]
fn full_pipeline_reports_missing_file() {
    common::init_logging();
    let orchestrator = Orchestrator::new(
        Box::new(FileReader::with_diagnostics(Vec::new())),
        WordCounter::new(Arc::new(RegexWordExtractor)),
        Box::new(WriterPresenter::new(BrokenSink)),
    );
    // The presenter would fail if it were reached.
    assert!(!orchestrator.process("definitely/not/here.txt").unwrap());
}

struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
