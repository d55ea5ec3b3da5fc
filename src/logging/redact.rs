use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

pub const TS_ZERO: &str = "1970-01-01T00:00:00Z";

pub fn now_iso() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_else(|_| TS_ZERO.to_string())
}


/// Apply redactions to a fact event for comparison and safe logging.
/// Zeroes the envelope timestamp to [`TS_ZERO`] and strips from an embedded
/// `error` object the fields the serialization contract already hides, in
/// case an emitter was handed a hand-built map instead of a serialized
/// [`TaggedError`](crate::TaggedError).
pub fn redact_event(mut v: Value) -> Value {
    if let Some(obj) = v.as_object_mut() {
        obj.insert("ts".into(), Value::String(TS_ZERO.to_string()));
        if let Some(err) = obj.get_mut("error") {
            if let Some(eobj) = err.as_object_mut() {
                // Fields the wire form never carries
                eobj.remove("message");
                eobj.remove("cause");
                eobj.remove("name");
            }
        }
    }
    v
}
