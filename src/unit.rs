//! Unit marker type.
//!
//! [`Unit`] represents "no useful value". It is the payload of the
//! status-only outcome shapes and the conceptual output of action-only
//! combinators.

use std::fmt;

use static_assertions::assert_eq_size;

/// A zero-information marker value.
///
/// All `Unit` instances compare equal and the type carries no state. It
/// plays the role `()` plays in the standard library, but as a named type
/// it can serve as a default generic parameter and document intent at call
/// sites.
///
/// # Examples
///
/// ```rust
/// use triage::unit::Unit;
///
/// assert_eq!(Unit, Unit);
/// assert_eq!(Unit.to_string(), "()");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit;

assert_eq_size!(Unit, ());

impl fmt::Display for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("()")
    }
}

impl From<()> for Unit {
    #[inline]
    fn from((): ()) -> Self {
        Self
    }
}

impl From<Unit> for () {
    #[inline]
    fn from(_: Unit) -> Self {}
}
