//! Conversions between outcome shapes and the other wrapper families.
//!
//! Every conversion here is total: each source state maps deterministically
//! to exactly one target state. Where the source carries no message, a
//! canned one is synthesized (see [`Maybe::to_outcome`]).

use crate::maybe::Maybe;
use crate::unit::Unit;

use super::Outcome;

impl<T, E> Outcome<T, E> {
    /// Converts into a [`Maybe`], keeping the value of the non-failure
    /// states and collapsing a failure to absence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::maybe::Maybe;
    /// use triage::outcome::Outcome;
    ///
    /// assert_eq!(Outcome::<i32>::success(42).to_maybe(), Maybe::just(42));
    /// assert_eq!(Outcome::<i32>::warning(42, "caveat").to_maybe(), Maybe::just(42));
    /// assert_eq!(Outcome::<i32>::failure("boom").to_maybe(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Self::Success { value } | Self::Warning { value, .. } => Maybe::Just(value),
            Self::Failure { .. } => Maybe::Nothing,
        }
    }

    /// Discards the carried value, keeping state, message, and error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::outcome::Outcome;
    ///
    /// let status = Outcome::<i32>::warning(42, "caveat").drop_value();
    /// assert!(status.is_warning());
    /// assert_eq!(status.message(), "caveat");
    /// ```
    #[inline]
    pub fn drop_value(self) -> Outcome<Unit, E> {
        match self {
            Self::Success { .. } => Outcome::Success { value: Unit },
            Self::Warning { message, .. } => Outcome::Warning {
                value: Unit,
                message,
            },
            Self::Failure { message, error } => Outcome::Failure { message, error },
        }
    }
}

impl<E> Outcome<Unit, E> {
    /// Attaches a value to a status-only outcome, keeping state, message,
    /// and error. A failure passes through without consuming the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::outcome::Outcome;
    ///
    /// let outcome: Outcome = Outcome::warn("caveat");
    /// let carrying = outcome.with_value(42);
    /// assert_eq!(carrying, Outcome::warning(42, "caveat"));
    /// ```
    #[inline]
    pub fn with_value<T>(self, value: T) -> Outcome<T, E> {
        match self {
            Self::Success { .. } => Outcome::Success { value },
            Self::Warning { message, .. } => Outcome::Warning { value, message },
            Self::Failure { message, error } => Outcome::Failure { message, error },
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Maybe<T>> for Outcome<T, ()> {
    /// Converts presence to a success and absence to a failure with the
    /// canned templated message of [`Maybe::to_outcome`].
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.to_outcome()
    }
}

impl<T, E> From<Outcome<T, E>> for Maybe<T> {
    /// Converts the non-failure states to `Just` and a failure to
    /// `Nothing`.
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.to_maybe()
    }
}
