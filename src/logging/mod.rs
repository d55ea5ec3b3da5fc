pub mod facts;
pub mod redact;

pub use facts::{AuditSink, FactsEmitter, LogSink, Reporter};
pub use redact::{now_iso, redact_event, TS_ZERO};
