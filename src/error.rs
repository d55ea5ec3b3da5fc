//! The tagged error value and its field-visibility contract.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Convenient alias for results whose error arm is a [`TaggedError`].
///
/// The second parameter is the cause payload type and defaults to `()` for
/// variants that carry none.
pub type Result<T, C = ()> = std::result::Result<T, TaggedError<C>>;

/// An error value carrying a string discriminant ("tag"), an optional
/// human-readable message, and an optional caller-typed payload ("cause").
///
/// The value is data, not control flow: construction always succeeds, and the
/// library never raises on its own behalf. Consumers typically return it as
/// the error arm of a [`Result`], then narrow on [`tag`](Self::tag) at the
/// call site.
///
/// Field visibility is asymmetric:
/// - serde serialization emits `tag` and nothing else (see the `Serialize`
///   impl below), so structured dumps cannot leak `message` or `cause`;
/// - `Display` renders `TaggedError(<tag>): <message>`, keeping the message
///   available to the human-readable channel.
///
/// Equality is not implemented. Two instances are never equal by value
/// (the same shape `std::io::Error` has); identity is instance identity
/// only.
pub struct TaggedError<C = ()> {
    tag: String,
    message: String,
    cause: Option<C>,
}

impl TaggedError {
    /// Construct a value with the given tag, an empty message, and no cause.
    ///
    /// Tags are opaque strings chosen by the caller; `SCREAMING_SNAKE_CASE`
    /// is a convention, not an enforced rule, and no input is rejected.
    pub fn new(tag: impl Into<String>) -> TaggedError {
        TaggedError::from_tag(tag.into())
    }
}

impl<C> TaggedError<C> {
    pub(crate) fn from_tag(tag: impl Into<String>) -> TaggedError<C> {
        TaggedError {
            tag: tag.into(),
            message: String::new(),
            cause: None,
        }
    }

    /// Set the human-readable message.
    pub fn with_message(mut self, message: impl Into<String>) -> TaggedError<C> {
        self.message = message.into();
        self
    }

    /// Attach a cause payload, re-typing the value to the payload's type.
    ///
    /// Any value counts as "supplied", including `0`, `""`, `false`, and
    /// `None` inside an `Option` payload; it is stored and read back
    /// verbatim. The only absent state is the one reached by never calling
    /// this method. When chained more than once the last payload wins; the
    /// builder consumes `self`, so the cause is fixed by the time the value
    /// is used as an error.
    pub fn with_cause<D>(self, cause: D) -> TaggedError<D> {
        TaggedError {
            tag: self.tag,
            message: self.message,
            cause: Some(cause),
        }
    }

    /// The discriminant this value was constructed with.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The human-readable message; empty when none was supplied.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The cause payload, or `None` when no cause was supplied.
    pub fn cause(&self) -> Option<&C> {
        self.cause.as_ref()
    }

    /// Whether a cause was supplied at construction.
    pub fn has_cause(&self) -> bool {
        self.cause.is_some()
    }

    /// Consume the value, yielding the cause payload if one was supplied.
    pub fn into_cause(self) -> Option<C> {
        self.cause
    }

    /// Derived display name of the form `TaggedError(<tag>)`.
    ///
    /// Computed on demand from `tag`; not stored, and not part of the
    /// serialized form.
    #[must_use]
    pub fn name(&self) -> String {
        format!("TaggedError({})", self.tag)
    }
}

impl<C> fmt::Display for TaggedError<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "TaggedError({})", self.tag)
        } else {
            write!(f, "TaggedError({}): {}", self.tag, self.message)
        }
    }
}

// Hand-written: no `C: Debug` bound, and debug output shows only whether a
// cause is present, matching the serialized form.
impl<C> fmt::Debug for TaggedError<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cause = if self.cause.is_some() { "<set>" } else { "<absent>" };
        f.debug_struct("TaggedError")
            .field("tag", &self.tag)
            .field("message", &self.message)
            .field("cause", &cause)
            .finish()
    }
}

impl<C> std::error::Error for TaggedError<C> {}

/// Structured-form conversion emits exactly one field: the tag.
///
/// No `C: Serialize` bound: `cause` is never emitted, so every instantiation
/// is serializable even when the payload type is not. There is no matching
/// `Deserialize`; `{"tag": ...}` cannot restore the redacted fields, so the
/// conversion is one-way.
impl<C> Serialize for TaggedError<C> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("TaggedError", 1)?;
        state.serialize_field("tag", &self.tag)?;
        state.end()
    }
}
