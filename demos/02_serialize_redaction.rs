use serde_json::json;
use waybill::logging::{now_iso, redact_event};
use waybill::TaggedError;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // However rich the value is in memory, the wire form is the tag alone.
    let err = TaggedError::new("FILE_MISSING")
        .with_message("No such file: /etc/waybill.toml")
        .with_cause(json!({"path": "/etc/waybill.toml", "errno": 2}));

    println!("display : {err}");
    println!("debug   : {err:?}");
    println!("json    : {}", serde_json::to_string_pretty(&err)?);

    // An envelope enriched by hand downstream still redacts back to the tag.
    let envelope = json!({
        "ts": now_iso(),
        "event": "config.load",
        "decision": "failure",
        "error": {
            "tag": err.tag(),
            "name": err.name(),
            "message": err.message(),
        },
    });
    println!("\nenvelope (raw)      : {envelope}");
    println!("envelope (redacted) : {}", redact_event(envelope));
    Ok(())
}
