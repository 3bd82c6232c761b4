//! Logging helpers for tests.
//!
//! Library crates in this workspace only ever emit [`tracing`] events, they
//! never install a subscriber. These helpers are how tests either look at
//! those events or print them.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::Subscriber;
use tracing::field::Visit;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// [`tracing`] reports the log message a field instead of a separate field.
static MESSAGE_FIELD_NAME: &str = "message";

/// When truthy, [`init_test_logging`] prints events to the test output.
pub static TEST_LOG_VAR: &str = "PULL_TEST_LOG";

/// Filter directive used when `RUST_LOG` isn't set.
static DEFAULT_DIRECTIVE: &str = "trace";

/// A single event recorded by [`with_captured_logging`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedEvent {
    pub level: tracing::Level,
    pub target: String,
    pub message: String,
    pub fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    /// Returns the recorded value of the field `name`, if the event had one.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|v| v.as_str())
    }
}

/// Executes the provided closure within the scope of a [`CaptureLayer`],
/// returning its result along with every event emitted on this thread while
/// it ran.
pub fn with_captured_logging<F, T>(closure: F) -> (T, Vec<CapturedEvent>)
where
    F: FnOnce() -> T,
{
    let layer = CaptureLayer::default();
    let events = Arc::clone(&layer.events);

    let result = {
        let _guard = tracing_subscriber::registry().with(layer).set_default();
        (closure)()
    };

    let mut events = events.lock().unwrap_or_else(PoisonError::into_inner);
    (result, std::mem::take(&mut *events))
}

/// Installs a global fmt subscriber for tests, if [`TEST_LOG_VAR`] is truthy.
///
/// Filtering follows `RUST_LOG`, falling back to everything. Safe to call
/// from every test, only the first call installs anything.
pub fn init_test_logging() {
    if !crate::env::is_truthy(TEST_LOG_VAR) {
        return;
    }

    let directive = crate::env::var_or(EnvFilter::DEFAULT_ENV, DEFAULT_DIRECTIVE);
    let filter = EnvFilter::try_new(&directive)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// A [`tracing_subscriber::Layer`] that records every event it sees.
#[derive(Default)]
pub struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut fields = BTreeMap::default();
        let mut collector = FieldCollector::new(&mut fields);
        event.record(&mut collector);
        let message = collector.extract_message().unwrap_or_default();

        let captured = CapturedEvent {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            message,
            fields,
        };
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(captured);
    }
}

struct FieldCollector<'a> {
    fields: &'a mut BTreeMap<String, String>,
}

impl<'a> FieldCollector<'a> {
    fn new(fields: &'a mut BTreeMap<String, String>) -> Self {
        FieldCollector { fields }
    }

    /// Remove the field named [`MESSAGE_FIELD_NAME`] if it exists.
    fn extract_message(&mut self) -> Option<String> {
        self.fields.remove(MESSAGE_FIELD_NAME)
    }
}

impl<'a> Visit for FieldCollector<'a> {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.fields.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let key = field.name().to_string();
        let value = format!("{:?}", value);
        self.fields.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoketest_capture() {
        let (value, events) = with_captured_logging(|| {
            tracing::trace!(side = "first", count = 3, "something happened");
            tracing::warn!("second");
            42
        });

        assert_eq!(value, 42);
        assert_eq!(events.len(), 2);

        assert_eq!(events[0].level, tracing::Level::TRACE);
        assert_eq!(events[0].message, "something happened");
        assert_eq!(events[0].field("side"), Some("first"));
        assert_eq!(events[0].field("count"), Some("3"));
        assert_eq!(events[1].level, tracing::Level::WARN);
        assert_eq!(events[1].field("side"), None);
    }

    #[test]
    fn capture_is_scoped_to_the_closure() {
        let ((), first) = with_captured_logging(|| tracing::info!("inside"));
        tracing::info!("outside");
        let ((), second) = with_captured_logging(|| ());

        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
    }

    #[test]
    fn init_test_logging_is_idempotent() {
        init_test_logging();
        init_test_logging();
    }
}
