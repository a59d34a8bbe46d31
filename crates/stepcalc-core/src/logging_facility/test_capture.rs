//! In-memory event capture for logging assertions
//!
//! `init_test_capture` installs a global subscriber that keeps every event
//! it sees. Tests in one binary share it, so assertions should filter on an
//! op name or field value unique to the test.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

type Sink = Arc<Mutex<Vec<CapturedEvent>>>;

/// One recorded event; every field value is kept in its display form
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub op: Option<String>,
    pub event: Option<String>,
    pub fields: HashMap<String, String>,
}

#[derive(Default)]
struct Fields(HashMap<String, String>);

impl Visit for Fields {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

struct CaptureLayer {
    sink: Sink,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Fields::default();
        event.record(&mut fields);
        let fields = fields.0;

        let captured = CapturedEvent {
            level: *event.metadata().level(),
            op: fields.get("op").cloned(),
            event: fields.get("event").cloned(),
            fields,
        };
        if let Ok(mut events) = self.sink.lock() {
            events.push(captured);
        }
    }
}

/// Shared handle onto the captured events
#[derive(Clone)]
pub struct TestCapture {
    sink: Sink,
}

impl TestCapture {
    /// Snapshot of everything captured so far
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.sink.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Number of captured events matching `predicate`
    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }

    /// # Panics
    ///
    /// If no captured event carries both `op` and `event`.
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let matching = self.count_events(|e| {
            e.op.as_deref() == Some(op) && e.event.as_deref() == Some(event)
        });
        assert!(
            matching > 0,
            "Expected event op={} event={} among {} captured events",
            op,
            event,
            self.events().len()
        );
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture subscriber on first call; return the shared handle
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let sink = Sink::default();
            tracing_subscriber::registry()
                .with(CaptureLayer { sink: sink.clone() })
                .init();
            TestCapture { sink }
        })
        .clone()
}
