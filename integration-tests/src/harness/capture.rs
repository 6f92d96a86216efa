use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{Layer, layer::Context};

/// One recorded event with its fields rendered as strings.
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    pub fields: Vec<(String, String)>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn message(&self) -> Option<&str> {
        self.field("message")
    }
}

/// Events recorded by the global test subscriber.
///
/// Tests in one binary run in parallel and share this log, so lookups should
/// narrow by a field unique to the test (a fixture path, for instance).
#[derive(Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl EventLog {
    pub fn all(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Events with `message` whose `field` equals `value`.
    pub fn matching(&self, message: &str, field: &str, value: &str) -> Vec<CapturedEvent> {
        self.all()
            .into_iter()
            .filter(|e| e.message() == Some(message) && e.field(field) == Some(value))
            .collect()
    }
}

/// Installs the recording subscriber on first use and returns the shared log.
pub fn capture_events() -> EventLog {
    static LOG: OnceLock<EventLog> = OnceLock::new();

    LOG.get_or_init(|| {
        let log = EventLog::default();
        let layer = EventLogLayer { log: log.clone() };

        tracing::subscriber::set_global_default(tracing_subscriber::registry().with(layer))
            .expect("failed to set global tracing subscriber");

        log
    })
    .clone()
}

struct EventLogLayer {
    log: EventLog,
}

impl<S> Layer<S> for EventLogLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Vec::new();
        event.record(&mut FieldVisitor {
            fields: &mut fields,
        });

        self.log.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            fields,
        });
    }
}

struct FieldVisitor<'a> {
    fields: &'a mut Vec<(String, String)>,
}

impl FieldVisitor<'_> {
    fn push(&mut self, field: &Field, value: String) {
        self.fields.push((field.name().to_string(), value));
    }
}

// Counters and flags are recorded in display form so assertions compare
// against plain text.
impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.push(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.push(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.push(field, format!("{value:?}"));
    }
}
