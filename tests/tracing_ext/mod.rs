use std::fmt;
use std::sync::{Arc, Mutex};

use causal_error::tracing_ext::{log_error, span_info, OptionsSpanExt};
use causal_error::{chain, verror, Options};
use tracing::field::{Field, Visit};
use tracing::{span, Event, Level, Metadata, Span, Subscriber};

#[test]
fn span_without_metadata_contributes_nothing() {
    assert!(span_info(&Span::none()).is_empty());

    let options = Options::new().info_entry("k", "v").with_span(&Span::none());
    let err = verror!(options, "msg").unwrap();
    assert_eq!(chain::info(&err).len(), 1);
}

#[test]
fn span_metadata_does_not_override_existing_info() {
    let span = tracing::info_span!("fetch_user");
    let info = span_info(&span);

    let options = Options::new().info_entry("span.name", "explicit").with_span(&span);
    let err = verror!(options, "msg").unwrap();
    let merged = chain::info(&err);

    assert_eq!(merged["span.name"], "explicit");
    match span.metadata() {
        Some(metadata) => {
            assert_eq!(info["span.name"], metadata.name());
            assert_eq!(info["span.level"], "INFO");
        },
        None => assert!(info.is_empty()),
    }
}

/// Records every event's fields as `(name, rendered value)` pairs.
#[derive(Clone, Default)]
struct FieldRecorder {
    events: Arc<Mutex<Vec<Vec<(String, String)>>>>,
}

struct FieldVisitor<'a>(&'a mut Vec<(String, String)>);

impl Visit for FieldVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.push((field.name().to_owned(), format!("{value:?}")));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.push((field.name().to_owned(), value.to_owned()));
    }
}

impl Subscriber for FieldRecorder {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &span::Attributes<'_>) -> span::Id {
        span::Id::from_u64(1)
    }

    fn record(&self, _: &span::Id, _: &span::Record<'_>) {}

    fn record_follows_from(&self, _: &span::Id, _: &span::Id) {}

    fn event(&self, event: &Event<'_>) {
        if *event.metadata().level() != Level::ERROR {
            return;
        }
        let mut fields = Vec::new();
        event.record(&mut FieldVisitor(&mut fields));
        self.events.lock().unwrap().push(fields);
    }

    fn enter(&self, _: &span::Id) {}

    fn exit(&self, _: &span::Id) {}
}

#[test]
fn log_error_emits_one_structured_event() {
    let root = verror!(Options::new().info_entry("peer", "10.0.0.7"), "connection reset").unwrap();
    let err = verror!(root, "sync failed").unwrap();

    let recorder = FieldRecorder::default();
    tracing::subscriber::with_default(recorder.clone(), || log_error(&err));

    let events = recorder.events.lock().unwrap();
    assert_eq!(events.len(), 1);
    let field = |name: &str| {
        events[0].iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    };

    assert_eq!(field("message"), Some("VError: sync failed: connection reset"));
    assert_eq!(field("error.name"), Some("VError"));
    assert_eq!(field("error.message"), Some("sync failed: connection reset"));
    assert_eq!(field("error.chain_depth"), Some("1"));
    assert_eq!(field("error.info"), Some(r#"{"peer":"10.0.0.7"}"#));
}
