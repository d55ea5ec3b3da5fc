//! Reporting errors through the facts/audit pair: envelope shape, the
//! embedded tag-only error object, and redaction for deterministic capture.

use serde_json::Value;
use waybill::logging::{AuditSink, FactsEmitter, Reporter, TS_ZERO};
use waybill::TaggedError;

#[derive(Default, Clone)]
struct TestEmitter {
    events: std::sync::Arc<std::sync::Mutex<Vec<(String, String, String, Value)>>>,
}

impl FactsEmitter for TestEmitter {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value) {
        self.events.lock().unwrap().push((
            subsystem.to_string(),
            event.to_string(),
            decision.to_string(),
            fields,
        ));
    }
}

#[derive(Default, Clone)]
struct TestAudit {
    lines: std::sync::Arc<std::sync::Mutex<Vec<(log::Level, String)>>>,
}

impl AuditSink for TestAudit {
    fn log(&self, level: log::Level, msg: &str) {
        self.lines.lock().unwrap().push((level, msg.to_string()));
    }
}

#[test]
fn redacted_report_has_a_deterministic_envelope_and_a_tag_only_error() {
    let facts = TestEmitter::default();
    let audit = TestAudit::default();
    let reporter = Reporter::new(facts.clone(), audit.clone())
        .with_subsystem("calculator")
        .with_redaction(true);

    let err = TaggedError::new("DIVISOR_IS_ZERO")
        .with_message("Cannot divide by zero")
        .with_cause(serde_json::json!({"divisor": 0}));
    reporter.report("divide", &err);

    let events = facts.events.lock().unwrap();
    assert_eq!(events.len(), 1);
    let (subsystem, event, decision, fields) = &events[0];
    assert_eq!(subsystem, "calculator");
    assert_eq!(event, "divide");
    assert_eq!(decision, "failure");

    assert_eq!(fields.get("schema_version"), Some(&Value::from(1)));
    assert_eq!(fields.get("ts"), Some(&Value::from(TS_ZERO)));
    assert_eq!(fields.get("event"), Some(&Value::from("divide")));
    assert_eq!(fields.get("decision"), Some(&Value::from("failure")));

    let error = fields.get("error").and_then(|v| v.as_object()).unwrap();
    assert_eq!(error.len(), 1);
    assert_eq!(
        error.get("tag"),
        Some(&Value::from("DIVISOR_IS_ZERO"))
    );
}

#[test]
fn unredacted_report_still_embeds_only_the_tag() {
    // Redaction is about the envelope; the error object is tag-only either
    // way, that being the value's entire serialized form.
    let facts = TestEmitter::default();
    let reporter = Reporter::new(facts.clone(), TestAudit::default());

    struct Opaque;
    let err = TaggedError::new("AUTH_FAILED")
        .with_message("token rejected")
        .with_cause(Opaque);
    reporter.report("login", &err);

    let events = facts.events.lock().unwrap();
    let fields = &events[0].3;
    let ts = fields.get("ts").and_then(|v| v.as_str()).unwrap();
    assert_ne!(ts, TS_ZERO);
    let error = fields.get("error").and_then(|v| v.as_object()).unwrap();
    assert_eq!(error.len(), 1);
    assert_eq!(error.get("tag"), Some(&Value::from("AUTH_FAILED")));
}

#[test]
fn audit_channel_carries_the_display_rendering() {
    let audit = TestAudit::default();
    let reporter = Reporter::new(TestEmitter::default(), audit.clone())
        .with_audit_level(log::Level::Warn);

    let err = TaggedError::new("NEGATIVE_RESULT")
        .with_message("Cannot calculate square root of negative number");
    reporter.report("sqrt", &err);

    let lines = audit.lines.lock().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].0, log::Level::Warn);
    assert_eq!(
        lines[0].1,
        "TaggedError(NEGATIVE_RESULT): Cannot calculate square root of negative number"
    );
}

#[test]
fn one_fact_and_one_audit_line_per_report() {
    let facts = TestEmitter::default();
    let audit = TestAudit::default();
    let reporter = Reporter::new(facts.clone(), audit.clone());

    for i in 0..3 {
        let err = TaggedError::new("RETRY").with_cause(i);
        reporter.report("attempt", &err);
    }

    assert_eq!(facts.events.lock().unwrap().len(), 3);
    assert_eq!(audit.lines.lock().unwrap().len(), 3);
}
