//! Tag markers: compile-time association between a tag literal and its
//! cause payload type.

use crate::error::TaggedError;

/// Marker trait implemented by unit types, one per error variant a consumer
/// defines. The library itself defines no tags.
///
/// An impl ties a discriminant string to the payload type carried under it:
///
/// ```
/// use waybill::ErrorTag;
///
/// struct NegativeResult;
/// impl ErrorTag for NegativeResult {
///     const TAG: &'static str = "NEGATIVE_RESULT";
///     type Cause = f64;
/// }
///
/// let err = NegativeResult::err_with(-10.0).with_message("square root of a negative");
/// assert_eq!(err.tag(), "NEGATIVE_RESULT");
/// assert_eq!(err.narrow::<NegativeResult>(), Some(&-10.0));
/// ```
pub trait ErrorTag {
    /// The discriminant string for this variant.
    const TAG: &'static str;

    /// Payload type keyed by this tag; `()` when the variant carries none.
    type Cause;

    /// Construct a value tagged with [`Self::TAG`] and no cause.
    ///
    /// The stored payload type is inferred from the call site, so causeless
    /// variants of a union slot into the same `TaggedError<C>` as their
    /// payload-carrying siblings.
    fn err<C>() -> TaggedError<C> {
        TaggedError::from_tag(Self::TAG)
    }

    /// Construct a value tagged with [`Self::TAG`] carrying `cause`.
    fn err_with(cause: Self::Cause) -> TaggedError<Self::Cause> {
        // The intermediate is pinned explicitly: `with_cause` accepts any
        // instantiation, so nothing else constrains it.
        TaggedError::<Self::Cause>::from_tag(Self::TAG).with_cause(cause)
    }
}

impl<C> TaggedError<C> {
    /// Runtime tag test against `K::TAG`.
    ///
    /// No payload bound: any marker can be tested against any
    /// instantiation.
    pub fn is<K: ErrorTag>(&self) -> bool {
        self.tag() == K::TAG
    }

    /// Narrow to `K`'s payload: `Some` exactly when the tag matches and a
    /// cause was supplied.
    ///
    /// The `Cause = C` bound is the compile-time half of the narrowing
    /// contract. A marker whose declared payload type differs from the
    /// stored one is rejected before the tag is ever compared:
    ///
    /// ```compile_fail
    /// use waybill::{ErrorTag, TaggedError};
    ///
    /// struct ErrorA;
    /// impl ErrorTag for ErrorA {
    ///     const TAG: &'static str = "ERROR_A";
    ///     type Cause = i64;
    /// }
    /// struct ErrorB;
    /// impl ErrorTag for ErrorB {
    ///     const TAG: &'static str = "ERROR_B";
    ///     type Cause = ();
    /// }
    ///
    /// let err: TaggedError<i64> = ErrorA::err_with(7);
    /// // ERROR_B declares no payload of this type, so no field is assumed.
    /// let _ = err.narrow::<ErrorB>();
    /// ```
    pub fn narrow<K>(&self) -> Option<&C>
    where
        K: ErrorTag<Cause = C>,
    {
        if self.is::<K>() {
            self.cause()
        } else {
            None
        }
    }

    /// Owning variant of [`narrow`](Self::narrow).
    pub fn into_narrowed<K>(self) -> Option<C>
    where
        K: ErrorTag<Cause = C>,
    {
        if self.is::<K>() {
            self.into_cause()
        } else {
            None
        }
    }
}
