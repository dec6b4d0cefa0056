//! Maybe type - presence or absence of a value.
//!
//! This module provides the [`Maybe<T>`] type, a two-state container that
//! either holds a value (`Just`) or holds nothing (`Nothing`). Unlike a
//! bare sentinel, absence is a first-class state that combinators can
//! branch on, and a present value is never itself absent.
//!
//! # Ordering
//!
//! `Nothing` is strictly less than any `Just`; two `Just` values delegate
//! to the wrapped value's natural order.
//!
//! # Examples
//!
//! ```rust
//! use triage::maybe::Maybe;
//!
//! let present = Maybe::just(42);
//! let absent: Maybe<i32> = Maybe::Nothing;
//!
//! assert!(present.has_value());
//! assert_eq!(present.unwrap_or(0), 42);
//! assert_eq!(absent.unwrap_or(0), 0);
//! assert!(absent < present);
//! ```

use std::any::Any;

use crate::error::AccessError;
use crate::outcome::Outcome;

/// A value that may be present (`Just`) or absent (`Nothing`).
///
/// `Nothing` is declared first so the derived ordering ranks absence
/// strictly below every present value.
///
/// # Type Parameters
///
/// * `T` - The type of the wrapped value
///
/// # Examples
///
/// ```rust
/// use triage::maybe::Maybe;
///
/// let doubled = Maybe::just(21).map(|x| x * 2);
/// assert_eq!(doubled, Maybe::just(42));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// The absent state.
    #[default]
    Nothing,
    /// A present value.
    Just(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a present value.
    ///
    /// Absence cannot be smuggled through this constructor: the argument is
    /// a plain `T`, so a `Just` never wraps "no value". Use
    /// [`Maybe::from`] on an `Option` when the input may be absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::maybe::Maybe;
    ///
    /// let value = Maybe::just("hello");
    /// assert!(value.has_value());
    /// ```
    #[inline]
    pub const fn just(value: T) -> Self {
        Self::Just(value)
    }

    // =========================================================================
    // State Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Value Access
    // =========================================================================

    /// Returns a reference to the wrapped value.
    ///
    /// # Panics
    ///
    /// Panics if this is `Nothing`. Prefer [`Maybe::unwrap_or`] or
    /// [`Maybe::try_value`] when a fallback exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::maybe::Maybe;
    ///
    /// let value = Maybe::just(42);
    /// assert_eq!(*value.value(), 42);
    /// ```
    #[inline]
    pub fn value(&self) -> &T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => panic!("{}", AccessError::Value { state: "nothing" }),
        }
    }

    /// Returns a reference to the wrapped value, or an [`AccessError`]
    /// if this is `Nothing`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Value`] when no value is present.
    #[inline]
    pub const fn try_value(&self) -> Result<&T, AccessError> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(AccessError::Value { state: "nothing" }),
        }
    }

    /// Returns the wrapped value, consuming the maybe.
    ///
    /// # Panics
    ///
    /// Panics if this is `Nothing`.
    #[inline]
    pub fn into_value(self) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => panic!("{}", AccessError::Value { state: "nothing" }),
        }
    }

    /// Returns the wrapped value or the given fallback.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::just(42).unwrap_or(0), 42);
    /// assert_eq!(Maybe::<i32>::Nothing.unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => fallback,
        }
    }

    /// Returns the wrapped value or computes a fallback.
    ///
    /// The factory is only invoked when no value is present.
    #[inline]
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => fallback(),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the wrapped value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::just(21).map(|x| x * 2), Maybe::just(42));
    /// assert_eq!(Maybe::<i32>::Nothing.map(|x| x * 2), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Applies a maybe-producing function to the wrapped value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::maybe::Maybe;
    ///
    /// let half = |x: i32| {
    ///     if x % 2 == 0 { Maybe::just(x / 2) } else { Maybe::Nothing }
    /// };
    /// assert_eq!(Maybe::just(42).and_then(half), Maybe::just(21));
    /// assert_eq!(Maybe::just(21).and_then(half), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Keeps the wrapped value only if the predicate accepts it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Just(value) if predicate(&value) => Self::Just(value),
            _ => Self::Nothing,
        }
    }

    // =========================================================================
    // Fallback Operations
    // =========================================================================

    /// Returns itself if a value is present, otherwise wraps the fallback.
    ///
    /// The result always holds a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::just(1).or(9), Maybe::just(1));
    /// assert_eq!(Maybe::Nothing.or(9), Maybe::just(9));
    /// ```
    #[inline]
    pub fn or(self, fallback: T) -> Self {
        match self {
            Self::Just(value) => Self::Just(value),
            Self::Nothing => Self::Just(fallback),
        }
    }

    /// Returns itself if a value is present, otherwise wraps the factory's
    /// result. The factory is only invoked on the absent path.
    #[inline]
    pub fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => Self::Just(value),
            Self::Nothing => Self::Just(fallback()),
        }
    }

    /// Returns itself if a value is present, otherwise the given fallback.
    ///
    /// The fallback is validated before any branching: passing an absent
    /// fallback is a contract violation even when the receiver holds a
    /// value and the fallback would never be used.
    ///
    /// # Panics
    ///
    /// Panics if `fallback` is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Nothing.or_with(Maybe::just(9)), Maybe::just(9));
    /// ```
    #[inline]
    pub fn or_with(self, fallback: Self) -> Self {
        assert!(
            fallback.has_value(),
            "called `Maybe::or_with` with an absent fallback"
        );
        match self {
            Self::Just(value) => Self::Just(value),
            Self::Nothing => fallback,
        }
    }

    /// Returns itself if a value is present, otherwise the factory's
    /// result. The factory is only invoked on the absent path and is
    /// contractually required to produce a present value.
    ///
    /// # Panics
    ///
    /// Panics if the factory produces `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::maybe::Maybe;
    ///
    /// // The factory is never consulted when a value is present.
    /// let value = Maybe::just(1).or_from(|| unreachable!());
    /// assert_eq!(value, Maybe::just(1));
    /// ```
    #[inline]
    pub fn or_from<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Just(value) => Self::Just(value),
            Self::Nothing => {
                let produced = fallback();
                assert!(
                    produced.has_value(),
                    "fallback factory passed to `Maybe::or_from` produced an absent value"
                );
                produced
            }
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Downcasts the wrapped value to another type by runtime type check.
    ///
    /// Yields `Nothing` when the wrapped value is not a `U`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::just(42).cast::<i32>(), Maybe::just(42));
    /// assert_eq!(Maybe::just(42).cast::<String>(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn cast<U: 'static>(self) -> Maybe<U>
    where
        T: Any,
    {
        match self {
            Self::Just(value) => {
                let boxed: Box<dyn Any> = Box::new(value);
                match boxed.downcast::<U>() {
                    Ok(value) => Maybe::Just(*value),
                    Err(_) => Maybe::Nothing,
                }
            }
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Converts into an outcome, using a canned message on the absent path.
    ///
    /// `Just(value)` becomes a success; `Nothing` becomes a failure whose
    /// message names the wrapped type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::maybe::Maybe;
    ///
    /// let present = Maybe::just(42).to_outcome();
    /// assert!(present.is_success());
    /// assert_eq!(*present.value(), 42);
    ///
    /// let absent = Maybe::<i32>::Nothing.to_outcome();
    /// assert!(absent.is_failure());
    /// assert_eq!(absent.message(), "Maybe<i32> has no value");
    /// ```
    #[inline]
    pub fn to_outcome(self) -> Outcome<T, ()> {
        self.to_outcome_with(format!(
            "Maybe<{}> has no value",
            std::any::type_name::<T>()
        ))
    }

    /// Converts into an outcome with the given failure message for the
    /// absent path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::maybe::Maybe;
    ///
    /// let absent = Maybe::<i32>::Nothing.to_outcome_with("lookup missed");
    /// assert_eq!(absent.message(), "lookup missed");
    /// ```
    #[inline]
    pub fn to_outcome_with(self, message: impl Into<String>) -> Outcome<T, ()> {
        match self {
            Self::Just(value) => Outcome::success(value),
            Self::Nothing => Outcome::failure(message),
        }
    }

    /// Converts into a standard `Option`, consuming the maybe.
    #[inline]
    pub fn to_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Flattens one level of nesting; absence never nests.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::just(Maybe::just(42)).flatten(), Maybe::just(42));
    /// assert_eq!(Maybe::just(Maybe::<i32>::Nothing).flatten(), Maybe::Nothing);
    /// assert_eq!(Maybe::<Maybe<i32>>::Nothing.flatten(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Self::Just(inner) => inner,
            Self::Nothing => Maybe::Nothing,
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// Converts an `Option` to a `Maybe`; `None` becomes `Nothing`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// Converts a `Maybe` to an `Option`; `Nothing` becomes `None`.
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_just_holds_value() {
        let value = Maybe::just(42);
        assert!(value.has_value());
        assert!(!value.is_nothing());
        assert_eq!(*value.value(), 42);
    }

    #[test]
    fn test_nothing_holds_no_value() {
        let value: Maybe<i32> = Maybe::Nothing;
        assert!(value.is_nothing());
        assert_eq!(value.try_value(), Err(AccessError::Value { state: "nothing" }));
    }

    #[test]
    #[should_panic(expected = "value is unavailable in the nothing state")]
    fn test_value_panics_on_nothing() {
        let value: Maybe<i32> = Maybe::Nothing;
        let _ = value.value();
    }

    #[test]
    fn test_nothing_orders_below_just() {
        assert!(Maybe::<i32>::Nothing < Maybe::just(i32::MIN));
        assert!(Maybe::just(1) < Maybe::just(2));
    }

    #[test]
    #[should_panic(expected = "called `Maybe::or_with` with an absent fallback")]
    fn test_or_with_validates_fallback_before_branching() {
        // The receiver holds a value, so the fallback would never be used;
        // the absent argument must still be rejected.
        let _ = Maybe::just(1).or_with(Maybe::Nothing);
    }

    #[test]
    #[should_panic(expected = "produced an absent value")]
    fn test_or_from_rejects_absent_factory_result() {
        let _ = Maybe::<i32>::Nothing.or_from(|| Maybe::Nothing);
    }

    #[test]
    fn test_or_from_is_lazy() {
        let mut invocations = 0;
        let value = Maybe::just(1).or_from(|| {
            invocations += 1;
            Maybe::just(9)
        });
        assert_eq!(value, Maybe::just(1));
        assert_eq!(invocations, 0);
    }

    #[test]
    fn test_cast_succeeds_on_matching_type() {
        assert_eq!(Maybe::just(42_i32).cast::<i32>(), Maybe::just(42));
    }

    #[test]
    fn test_cast_misses_on_foreign_type() {
        assert_eq!(Maybe::just(42_i32).cast::<String>(), Maybe::Nothing);
    }

    #[test]
    fn test_flatten_collapses_one_level() {
        assert_eq!(Maybe::just(Maybe::just(1)).flatten(), Maybe::just(1));
        assert_eq!(Maybe::<Maybe<i32>>::Nothing.flatten(), Maybe::Nothing);
    }

    #[test]
    fn test_option_roundtrip() {
        let maybe: Maybe<i32> = Some(42).into();
        assert_eq!(maybe, Maybe::just(42));
        assert_eq!(maybe.to_option(), Some(42));

        let absent: Maybe<i32> = None.into();
        assert_eq!(absent, Maybe::Nothing);
    }
}
