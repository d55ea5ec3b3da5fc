#![forbid(unsafe_code)]
//! Waybill: tagged error values that travel as ordinary data.
//!
//! Contract highlights:
//! - A [`TaggedError`] is returned, not raised: construction never fails and the value is
//!   immutable once built (tag at construction, message/cause via consuming `with_*` builders).
//! - Structured-form conversion redacts: serializing any instance yields `{"tag": "<tag>"}`
//!   and nothing else, so cause payloads cannot leak into logs that blindly serialize
//!   "any object". `Display`, by contrast, keeps the human-readable message.
//! - Every instantiation implements `std::error::Error`, so the value passes unmodified
//!   through pre-existing `Box<dyn Error>` / `impl Error` seams.
//! - Narrowing is tag-keyed: an [`ErrorTag`] marker ties a tag literal to its payload type,
//!   and `narrow::<K>()` refuses at compile time to read a payload under the wrong type.

pub mod error;
pub mod logging;
pub mod tag;

pub use error::{Result, TaggedError};
pub use tag::ErrorTag;
