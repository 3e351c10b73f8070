//! Integration tests for the tracing backend adapter.
//!
//! These tests install a scoped `tracing` subscriber that writes into an
//! in-memory buffer, then assert that lifecycle records come out of the
//! formatted line with their fields flattened as `key=value` text.

use std::io;
use std::sync::{Arc, Mutex};
use truss_eventlog::event::Event;
use truss_eventlog::event_logger::EventLogger;
use truss_eventlog::listener::EventListener;
use truss_eventlog::log::TracingLogger;

// =============================================================================
// Test Helpers
// =============================================================================

/// Clonable writer collecting subscriber output in memory.
#[derive(Clone, Default)]
struct SharedBuffer {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs the closure under a buffer-backed subscriber and returns the output.
///
/// The subscriber is thread-local for the duration of the call, so parallel
/// tests do not see each other's records.
fn capture_output(run: impl FnOnce()) -> String {
    let writer = SharedBuffer::default();
    let writer_handle = writer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(move || writer_handle.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, run);
    writer.contents()
}

#[derive(Debug)]
struct TestFailure(&'static str);

impl std::fmt::Display for TestFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for TestFailure {}

// =============================================================================
// Integration Tests
// =============================================================================

#[test]
fn test_success_records_flatten_fields_onto_one_line() {
    let output = capture_output(|| {
        let listener = EventLogger::new(Arc::new(TracingLogger::new()));
        listener.handle(&Event::Provided {
            constructor_name: "new_pool".to_string(),
            module_name: "database".to_string(),
            private: false,
            error: None,
        });
    });

    assert!(output.contains("DEBUG"), "output: {output}");
    assert!(output.contains("[Truss] provided"), "output: {output}");
    assert!(
        output.contains("constructor_name=new_pool"),
        "output: {output}"
    );
    assert!(output.contains("module_name=database"), "output: {output}");
    assert!(output.contains("private=false"), "output: {output}");
}

#[test]
fn test_failure_records_carry_quoted_error_description() {
    let output = capture_output(|| {
        let listener = EventLogger::new(Arc::new(TracingLogger::new()));
        listener.handle(&Event::Started {
            error: Some(Arc::new(TestFailure("address already in use"))),
        });
    });

    assert!(output.contains("ERROR"), "output: {output}");
    assert!(output.contains("[Truss] started"), "output: {output}");
    assert!(
        output.contains("error=\"address already in use\""),
        "output: {output}"
    );
}

#[test]
fn test_silent_success_produces_no_output() {
    let output = capture_output(|| {
        let listener = EventLogger::new(Arc::new(TracingLogger::new()));
        listener.handle(&Event::Started { error: None });
        listener.handle(&Event::Stopped { error: None });
    });

    assert!(output.is_empty(), "output: {output}");
}

#[test]
fn test_string_sequences_render_bracketed() {
    let output = capture_output(|| {
        let listener = EventLogger::new(Arc::new(TracingLogger::new()));
        listener.handle(&Event::Replaced {
            module_name: "database".to_string(),
            module_trace: vec!["app".to_string(), "database".to_string()],
            output_type_names: vec!["Pool".to_string()],
            stack_trace: vec!["main.rs:12".to_string()],
            error: None,
        });
    });

    assert!(
        output.contains("module_trace=[app, database]"),
        "output: {output}"
    );
    assert!(
        output.contains("stacktrace=[main.rs:12]"),
        "output: {output}"
    );
}
