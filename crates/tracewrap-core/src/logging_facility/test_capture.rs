//! Test capture mode for deterministic logging assertions
//!
//! A test-only subscriber layer that records each rendered log line in
//! memory. The engines' contract is the exact wording of their lines, so
//! the capture handle exposes message-oriented search helpers.

use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::Visit;
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One captured log line
#[derive(Clone, Debug)]
pub struct CapturedLine {
    pub level: Level,
    pub target: String,
    pub message: String,
}

struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// Capture layer collecting rendered lines
pub struct LogCaptureLayer {
    lines: Arc<Mutex<Vec<CapturedLine>>>,
}

impl LogCaptureLayer {
    pub fn new() -> (Self, LogCapture) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let layer = Self {
            lines: lines.clone(),
        };
        let capture = LogCapture { lines };
        (layer, capture)
    }
}

impl<S> Layer<S> for LogCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = MessageVisitor {
            message: String::new(),
        };
        event.record(&mut visitor);

        let captured = CapturedLine {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.message,
        };

        self.lines
            .lock()
            .map(|mut lines| lines.push(captured))
            .ok();
    }
}

/// Handle for inspecting captured lines in tests
#[derive(Clone)]
pub struct LogCapture {
    lines: Arc<Mutex<Vec<CapturedLine>>>,
}

impl LogCapture {
    /// All captured lines
    pub fn lines(&self) -> Vec<CapturedLine> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// All captured message texts
    pub fn messages(&self) -> Vec<String> {
        self.lines().into_iter().map(|l| l.message).collect()
    }

    /// Find the first captured line whose message contains `needle`
    pub fn find_message(&self, needle: &str) -> Option<CapturedLine> {
        self.lines().into_iter().find(|l| l.message.contains(needle))
    }

    /// Assert that some captured message contains `needle`
    ///
    /// # Panics
    ///
    /// Panics if no such line was captured
    pub fn assert_message_contains(&self, needle: &str) {
        let lines = self.lines();
        let found = lines.iter().any(|l| l.message.contains(needle));
        assert!(
            found,
            "Expected a log line containing {:?}, not found in {} captured lines",
            needle,
            lines.len()
        );
    }

    /// Count lines matching a predicate
    pub fn count_lines<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedLine) -> bool,
    {
        self.lines().iter().filter(|l| predicate(l)).count()
    }

    /// Clear all captured lines
    pub fn clear(&self) {
        self.lines.lock().map(|mut l| l.clear()).ok();
    }
}

static GLOBAL_CAPTURE: OnceLock<LogCapture> = OnceLock::new();

/// Initialize test capture mode
///
/// Installs the capture layer as the global subscriber on first use and
/// returns a shared handle. Tests in the same binary share the handle,
/// so assertions should search for unique markers rather than assume an
/// exclusive event stream.
///
/// # Example
///
/// ```
/// use tracewrap_core::logging_facility::test_capture::init_test_capture;
///
/// let capture = init_test_capture();
/// tracing::info!("marker-line-1");
/// capture.assert_message_contains("marker-line-1");
/// ```
pub fn init_test_capture() -> LogCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (layer, capture) = LogCaptureLayer::new();
            tracing_subscriber::registry().with(layer).init();
            capture
        })
        .clone()
}
