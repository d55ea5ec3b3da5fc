// Facts emission for tagged error values.
//
// Side-effects:
// - Emits one JSON fact per reported error via `FactsEmitter`, with a minimal
//   envelope: `schema_version`, `ts`, `event`, `decision`, `error`.
// - The embedded `error` object is the value's own serialized form, i.e. the
//   tag alone; `message` and `cause` never reach the structured channel.
// - Mirrors each fact with a human-readable line on `AuditSink`; the line
//   keeps the message, the structured channel never does.

use log::Level;
use serde_json::{json, Value};

use crate::error::TaggedError;
use crate::logging::redact::{now_iso, redact_event};

pub(crate) const SCHEMA_VERSION: i64 = 1;

pub trait FactsEmitter {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value);
}

pub trait AuditSink {
    fn log(&self, level: Level, msg: &str);
}

/// Default sink forwarding both channels to the `log` facade.
///
/// The crate performs no I/O of its own; whatever logger the consumer
/// installed decides where the lines go.
#[derive(Default)]
pub struct LogSink;

impl FactsEmitter for LogSink {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value) {
        log::info!(target: "waybill::facts", "{subsystem} {event} {decision} {fields}");
    }
}

impl AuditSink for LogSink {
    fn log(&self, level: Level, msg: &str) {
        log::log!(target: "waybill::audit", level, "{msg}");
    }
}

/// Context for reporting tagged errors to a facts channel and an audit
/// channel, with ergonomic `with_*` chaining.
pub struct Reporter<E: FactsEmitter, A: AuditSink> {
    facts: E,
    audit: A,
    subsystem: String,
    level: Level,
    redact: bool,
}

impl<E: FactsEmitter, A: AuditSink> Reporter<E, A> {
    pub fn new(facts: E, audit: A) -> Self {
        Self {
            facts,
            audit,
            subsystem: "waybill".to_string(),
            level: Level::Error,
            redact: false,
        }
    }

    pub fn with_subsystem(mut self, subsystem: impl Into<String>) -> Self {
        self.subsystem = subsystem.into();
        self
    }

    pub fn with_audit_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Run [`redact_event`](crate::logging::redact_event) over each fact
    /// before emission. Off by default; turn on for deterministic capture
    /// and for sinks that must never see volatile envelope fields.
    pub fn with_redaction(mut self, redact: bool) -> Self {
        self.redact = redact;
        self
    }

    /// Emit one fact and one audit line for `err` under `event`.
    ///
    /// Reporting is fire-and-forget: sinks cannot fail the caller.
    pub fn report<C>(&self, event: &str, err: &TaggedError<C>) {
        let fields = json!({
            "schema_version": SCHEMA_VERSION,
            "ts": now_iso(),
            "event": event,
            "decision": "failure",
            "error": err,
        });
        let fields = if self.redact {
            redact_event(fields)
        } else {
            fields
        };
        self.facts.emit(&self.subsystem, event, "failure", fields);
        self.audit.log(self.level, &err.to_string());
    }
}
