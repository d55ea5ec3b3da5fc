use log::Level;
use serde_json::Value;
use waybill::logging::{AuditSink, FactsEmitter, Reporter};
use waybill::{ErrorTag, TaggedError};

struct StdoutFacts;
impl FactsEmitter for StdoutFacts {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value) {
        println!("[facts] {subsystem}/{event} {decision}: {fields}");
    }
}

struct StdoutAudit;
impl AuditSink for StdoutAudit {
    fn log(&self, level: Level, msg: &str) {
        println!("[audit] {level}: {msg}");
    }
}

#[derive(Debug)]
struct Denial {
    account: String,
}

struct QuotaExceeded;
impl ErrorTag for QuotaExceeded {
    const TAG: &'static str = "QUOTA_EXCEEDED";
    type Cause = Denial;
}

fn main() {
    let err: TaggedError<Denial> = QuotaExceeded::err_with(Denial {
        account: "acct-7431".to_string(),
    })
    .with_message("Monthly upload quota exhausted");

    let reporter = Reporter::new(StdoutFacts, StdoutAudit).with_subsystem("uploads");
    println!("-- live timestamps --");
    reporter.report("upload.commit", &err);

    let redacted = Reporter::new(StdoutFacts, StdoutAudit)
        .with_subsystem("uploads")
        .with_audit_level(Level::Warn)
        .with_redaction(true);
    println!("-- redacted --");
    redacted.report("upload.commit", &err);

    if let Some(denial) = err.narrow::<QuotaExceeded>() {
        println!("-- next: notify {} --", denial.account);
    }
}
