//! Either type - a value that can be one of two types, or neither.
//!
//! This module provides the [`Either<L, R>`] type, a three-state
//! discriminated union: `Left(L)`, `Right(R)`, or `Neither`. Unlike a
//! conventional two-state either, the `Neither` state models an
//! indeterminate disjunction — for example a branch that was never taken —
//! and makes some conversions deliberately partial.
//!
//! By convention `Right` carries the success value and `Left` the error,
//! which is how the conversions into [`Outcome`](crate::outcome::Outcome)
//! interpret the states.
//!
//! # Examples
//!
//! ```rust
//! use triage::either::Either;
//!
//! let right: Either<String, i32> = Either::Right(42);
//!
//! // Using fold_or to handle all three cases
//! let rendered = right.fold_or(
//!     |error| format!("error: {error}"),
//!     |value| format!("value: {value}"),
//!     || "indeterminate".to_string(),
//! );
//! assert_eq!(rendered, "value: 42");
//! ```

use std::fmt;

use crate::maybe::Maybe;
use crate::outcome::Outcome;
use crate::unit::Unit;

/// Failure message used when converting an indeterminate either.
const NEITHER_CONVERSION_MESSAGE: &str = "either holds neither value; conversion failed";

/// Failure message used when converting a left value into a typed error.
const LEFT_CONVERSION_MESSAGE: &str = "either resolved to its left value";

/// A value that is `Left(L)`, `Right(R)`, or `Neither`.
///
/// Exactly one of the three states holds at any time. `Neither` is ranked
/// below both value-carrying states by the derived ordering.
///
/// # Type Parameters
///
/// * `L` - The type of the left value, conventionally the error
/// * `R` - The type of the right value, conventionally the success
///
/// # Examples
///
/// ```rust
/// use triage::either::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let failure: Either<String, i32> = Either::Left("error".to_string());
/// let indeterminate: Either<String, i32> = Either::Neither;
///
/// assert!(success.is_right());
/// assert!(failure.is_left());
/// assert!(indeterminate.is_neither());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The indeterminate state, carrying no value at all.
    Neither,
    /// The left variant, conventionally representing the error.
    Left(L),
    /// The right variant, conventionally representing the success.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns `true` if this is the indeterminate state.
    #[inline]
    pub const fn is_neither(&self) -> bool {
        matches!(self, Self::Neither)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into a [`Maybe<L>`], consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::either::Either;
    /// use triage::maybe::Maybe;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Maybe::just(42));
    ///
    /// let neither: Either<i32, String> = Either::Neither;
    /// assert_eq!(neither.left(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn left(self) -> Maybe<L> {
        match self {
            Self::Left(value) => Maybe::Just(value),
            Self::Right(_) | Self::Neither => Maybe::Nothing,
        }
    }

    /// Converts into a [`Maybe<R>`], consuming the either.
    #[inline]
    pub fn right(self) -> Maybe<R> {
        match self {
            Self::Right(value) => Maybe::Just(value),
            Self::Left(_) | Self::Neither => Maybe::Nothing,
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Maybe<&L> {
        match self {
            Self::Left(value) => Maybe::Just(value),
            Self::Right(_) | Self::Neither => Maybe::Nothing,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Maybe<&R> {
        match self {
            Self::Right(value) => Maybe::Just(value),
            Self::Left(_) | Self::Neither => Maybe::Nothing,
        }
    }

    /// Converts into a pair of maybes; at most one side is present.
    #[inline]
    pub fn into_maybes(self) -> (Maybe<L>, Maybe<R>) {
        match self {
            Self::Left(value) => (Maybe::Just(value), Maybe::Nothing),
            Self::Right(value) => (Maybe::Nothing, Maybe::Just(value)),
            Self::Neither => (Maybe::Nothing, Maybe::Nothing),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left value if present; the other states
    /// pass through.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
            Self::Neither => Either::Neither,
        }
    }

    /// Applies a function to the right value if present; the other states
    /// pass through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::either::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map_right(|s| s.len()), Either::Right(5));
    /// ```
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
            Self::Neither => Either::Neither,
        }
    }

    /// Applies one of two functions depending on whether this is `Left`
    /// or `Right`; `Neither` passes through.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
            Self::Neither => Either::Neither,
        }
    }

    // =========================================================================
    // Fold Operations
    // =========================================================================

    /// Eliminates the either by applying one of two functions.
    ///
    /// Dispatching an indeterminate either without a handler for it is a
    /// programming error, not a silent no-op; use [`Either::fold_or`] when
    /// `Neither` is an expected state.
    ///
    /// # Panics
    ///
    /// Panics if this is `Neither`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::either::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// let result = left.fold(|x| x.to_string(), |s| s);
    /// assert_eq!(result, "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
            Self::Neither => panic!(
                "called `Either::fold()` on a `Neither` value without a neither handler"
            ),
        }
    }

    /// Eliminates the either by applying one of three functions; total
    /// over all states.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::either::Either;
    ///
    /// let neither: Either<i32, String> = Either::Neither;
    /// let result = neither.fold_or(|x| x.to_string(), |s| s, || "nothing".to_string());
    /// assert_eq!(result, "nothing");
    /// ```
    #[inline]
    pub fn fold_or<T, F, G, N>(self, left_function: F, right_function: G, neither_function: N) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
        N: FnOnce() -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
            Self::Neither => neither_function(),
        }
    }

    // =========================================================================
    // Swap Operation
    // =========================================================================

    /// Swaps the `Left` and `Right` variants; `Neither` stays put.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
            Self::Neither => Either::Neither,
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the left value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` or `Neither` value.
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
            Self::Neither => panic!("called `Either::unwrap_left()` on a `Neither` value"),
        }
    }

    /// Returns the right value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` or `Neither` value.
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Right(value) => value,
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Self::Neither => panic!("called `Either::unwrap_right()` on a `Neither` value"),
        }
    }

    // =========================================================================
    // Outcome Conversions (typed error)
    // =========================================================================

    /// Converts into a status-only outcome carrying the left value as the
    /// typed failure detail.
    ///
    /// `Right` becomes a success, `Left` a failure with a fixed message
    /// and the left value as detail. This conversion is partial: the
    /// indeterminate state cannot supply the error payload the typed
    /// shape requires.
    ///
    /// # Panics
    ///
    /// Panics if this is `Neither`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::either::Either;
    ///
    /// let left: Either<u8, String> = Either::Left(9);
    /// let status = left.to_custom_status();
    /// assert!(status.is_failure());
    /// assert_eq!(*status.error(), 9);
    /// ```
    #[inline]
    pub fn to_custom_status(self) -> Outcome<Unit, L> {
        match self {
            Self::Right(_) => Outcome::ok(),
            Self::Left(error) => Outcome::failure_with(LEFT_CONVERSION_MESSAGE, error),
            Self::Neither => panic!("called `Either::to_custom_status()` on a `Neither` value"),
        }
    }

    /// Converts into a value-carrying outcome with the left value as the
    /// typed failure detail.
    ///
    /// Like [`Either::to_custom_status`] but keeping the right value.
    ///
    /// # Panics
    ///
    /// Panics if this is `Neither`.
    #[inline]
    pub fn to_custom_outcome(self) -> Outcome<R, L> {
        match self {
            Self::Right(value) => Outcome::success(value),
            Self::Left(error) => Outcome::failure_with(LEFT_CONVERSION_MESSAGE, error),
            Self::Neither => panic!("called `Either::to_custom_outcome()` on a `Neither` value"),
        }
    }
}

// =============================================================================
// Outcome Conversions (message only)
// =============================================================================

impl<L: fmt::Display, R> Either<L, R> {
    /// Converts into a status-only outcome, rendering the left value as
    /// the failure message. Total: the indeterminate state becomes a
    /// failure with a canned message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::either::Either;
    ///
    /// let left: Either<String, i32> = Either::Left("no route".to_string());
    /// let status = left.to_status();
    /// assert_eq!(status.message(), "no route");
    ///
    /// let neither: Either<String, i32> = Either::Neither;
    /// assert!(neither.to_status().is_failure());
    /// ```
    #[inline]
    pub fn to_status(self) -> Outcome<Unit, ()> {
        match self {
            Self::Right(_) => Outcome::ok(),
            Self::Left(error) => Outcome::failure(error.to_string()),
            Self::Neither => Outcome::failure(NEITHER_CONVERSION_MESSAGE),
        }
    }

    /// Converts into a value-carrying outcome, rendering the left value
    /// as the failure message. Total: the indeterminate state becomes a
    /// failure with a canned message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::either::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(42);
    /// assert_eq!(right.to_outcome().unwrap_or(0), 42);
    /// ```
    #[inline]
    pub fn to_outcome(self) -> Outcome<R, ()> {
        match self {
            Self::Right(value) => Outcome::success(value),
            Self::Left(error) => Outcome::failure(error.to_string()),
            Self::Neither => Outcome::failure(NEITHER_CONVERSION_MESSAGE),
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<L: Default, R> Either<L, R> {
    /// Returns the left value, or default if this is a `Right` or
    /// `Neither`.
    #[inline]
    pub fn left_or_default(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) | Self::Neither => L::default(),
        }
    }
}

impl<L, R: Default> Either<L, R> {
    /// Returns the right value, or default if this is a `Left` or
    /// `Neither`.
    #[inline]
    pub fn right_or_default(self) -> R {
        match self {
            Self::Left(_) | Self::Neither => R::default(),
            Self::Right(value) => value,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
            Self::Neither => formatter.write_str("Neither"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`; the
    /// indeterminate state is unreachable from a `Result`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}
