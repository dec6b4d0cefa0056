//! Three-state outcome model.
//!
//! This module provides [`Outcome<T, E>`], a wrapper that is always in
//! exactly one of three states:
//!
//! - `Success`: the operation produced a value.
//! - `Warning`: the operation produced a value, with a caveat message.
//! - `Failure`: the operation produced a message and a typed error detail.
//!
//! One tagged union covers the four classic wrapper shapes through its
//! generic parameter defaults:
//!
//! | shape                     | instantiation      |
//! |---------------------------|--------------------|
//! | status only               | `Outcome`          |
//! | value-carrying            | `Outcome<T>`       |
//! | status with typed error   | `Outcome<Unit, E>` |
//! | value with typed error    | `Outcome<T, E>`    |
//!
//! # Warnings
//!
//! A warning is a success with a caveat. Whether a particular call treats
//! it as a success or as a failure is decided per call with
//! [`WarningPolicy`] — never stored in the wrapper, never mutating it.
//!
//! # Examples
//!
//! ```rust
//! use triage::outcome::{Outcome, WarningPolicy};
//!
//! let outcome: Outcome<i32> = Outcome::warning(7, "approximated");
//!
//! assert!(outcome.is_warning());
//! assert!(outcome.is_effective_success(WarningPolicy::Preserve));
//! assert!(outcome.is_effective_failure(WarningPolicy::Escalate));
//! ```

mod combinators;
mod convert;
#[cfg(feature = "async")]
mod future;

#[cfg(feature = "async")]
pub use future::FutureOutcomeExt;

use static_assertions::assert_impl_all;

use crate::error::AccessError;
use crate::unit::Unit;

// =============================================================================
// Warning Policy
// =============================================================================

/// Per-call rule for how combinators treat a `Warning` receiver.
///
/// The policy is a parameter, not state: it decides how one combinator call
/// classifies a warning and leaves the wrapper untouched.
///
/// # Examples
///
/// ```rust
/// use triage::outcome::{Outcome, WarningPolicy};
///
/// let outcome: Outcome = Outcome::warn("disk almost full");
///
/// let mut observed = 0;
/// let outcome = outcome.on_failure(|_| observed += 1);
/// assert_eq!(observed, 0);
///
/// let outcome = outcome.on_failure_with(WarningPolicy::Escalate, |_| observed += 1);
/// assert_eq!(observed, 1);
/// assert!(outcome.is_warning());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WarningPolicy {
    /// A warning counts as a success (the default).
    #[default]
    Preserve,
    /// A warning counts as a failure for this call only.
    Escalate,
}

// =============================================================================
// Outcome Definition
// =============================================================================

/// A wrapper that is in exactly one of three states: `Success`, `Warning`,
/// or `Failure`.
///
/// Illegal state/data combinations are unrepresentable: only the
/// non-failure states carry a value, only `Warning` and `Failure` carry a
/// message, and only `Failure` carries an error detail.
///
/// # Type Parameters
///
/// * `T` - The type of the carried value (defaults to [`Unit`] for
///   status-only shapes)
/// * `E` - The type of the failure detail (defaults to `()` for shapes
///   whose failures are described by the message alone)
///
/// # Examples
///
/// ```rust
/// use triage::outcome::Outcome;
///
/// let parsed: Outcome<i32> = Outcome::success(42);
/// assert!(parsed.is_success());
/// assert_eq!(parsed.unwrap_or(0), 42);
///
/// let failed: Outcome<i32> = Outcome::failure("not a number");
/// assert!(failed.is_failure());
/// assert_eq!(failed.message(), "not a number");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T = Unit, E = ()> {
    /// The operation succeeded.
    Success {
        /// The produced value.
        value: T,
    },
    /// The operation succeeded with a caveat.
    Warning {
        /// The produced value.
        value: T,
        /// The caveat.
        message: String,
    },
    /// The operation failed.
    Failure {
        /// Description of the failure.
        message: String,
        /// Typed failure detail.
        error: E,
    },
}

assert_impl_all!(Outcome<i32, String>: Send, Sync);

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful outcome carrying `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32> = Outcome::success(42);
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success { value }
    }

    /// Creates a warning outcome carrying `value` and a caveat message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32> = Outcome::warning(42, "stale cache");
    /// assert!(outcome.is_warning());
    /// assert_eq!(outcome.message(), "stale cache");
    /// ```
    #[inline]
    pub fn warning(value: T, message: impl Into<String>) -> Self {
        Self::Warning {
            value,
            message: message.into(),
        }
    }

    /// Creates a failed outcome carrying a message and a typed error
    /// detail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, u8> = Outcome::failure_with("bad header", 0x7f);
    /// assert_eq!(outcome.message(), "bad header");
    /// assert_eq!(*outcome.error(), 0x7f);
    /// ```
    #[inline]
    pub fn failure_with(message: impl Into<String>, error: E) -> Self {
        Self::Failure {
            message: message.into(),
            error,
        }
    }

    // =========================================================================
    // State Checking
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns `true` if this is a `Warning`.
    #[inline]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Self::Warning { .. })
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// Returns `true` if this counts as a success under the given policy:
    /// a literal `Success`, or a `Warning` that the policy preserves.
    #[inline]
    pub const fn is_effective_success(&self, policy: WarningPolicy) -> bool {
        match self {
            Self::Success { .. } => true,
            Self::Warning { .. } => matches!(policy, WarningPolicy::Preserve),
            Self::Failure { .. } => false,
        }
    }

    /// Returns `true` if this counts as a failure under the given policy:
    /// a literal `Failure`, or a `Warning` that the policy escalates.
    #[inline]
    pub const fn is_effective_failure(&self, policy: WarningPolicy) -> bool {
        !self.is_effective_success(policy)
    }

    /// Returns the name of the current state: `"success"`, `"warning"`,
    /// or `"failure"`.
    #[inline]
    pub const fn state_name(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::Warning { .. } => "warning",
            Self::Failure { .. } => "failure",
        }
    }

    // =========================================================================
    // Value Access
    // =========================================================================

    /// Returns a reference to the carried value.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`, which carries no value. Prefer
    /// [`Outcome::unwrap_or`] or [`Outcome::try_value`] when a fallback
    /// exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32> = Outcome::warning(42, "approximated");
    /// assert_eq!(*outcome.value(), 42);
    /// ```
    #[inline]
    pub fn value(&self) -> &T {
        match self.try_value() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns a reference to the carried value, or an [`AccessError`] if
    /// this is a `Failure`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Value`] in the failure state.
    #[inline]
    pub const fn try_value(&self) -> Result<&T, AccessError> {
        match self {
            Self::Success { value } | Self::Warning { value, .. } => Ok(value),
            Self::Failure { .. } => Err(AccessError::Value { state: "failure" }),
        }
    }

    /// Returns the carried value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`.
    #[inline]
    pub fn into_value(self) -> T {
        match self.try_into_value() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the carried value, consuming the outcome, or an
    /// [`AccessError`] if this is a `Failure`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Value`] in the failure state.
    #[inline]
    pub fn try_into_value(self) -> Result<T, AccessError> {
        match self {
            Self::Success { value } | Self::Warning { value, .. } => Ok(value),
            Self::Failure { .. } => Err(AccessError::Value { state: "failure" }),
        }
    }

    /// Returns the carried value or the given fallback.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::outcome::Outcome;
    ///
    /// let failed: Outcome<i32> = Outcome::failure("boom");
    /// assert_eq!(failed.unwrap_or(-1), -1);
    /// ```
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Success { value } | Self::Warning { value, .. } => value,
            Self::Failure { .. } => fallback,
        }
    }

    /// Returns the carried value or computes a fallback.
    ///
    /// The factory is only invoked in the failure state.
    #[inline]
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Success { value } | Self::Warning { value, .. } => value,
            Self::Failure { .. } => fallback(),
        }
    }

    // =========================================================================
    // Message and Error Access
    // =========================================================================

    /// Returns the caveat or failure message.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success`, which carries no message.
    #[inline]
    pub fn message(&self) -> &str {
        match self.try_message() {
            Ok(message) => message,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the caveat or failure message, or an [`AccessError`] if
    /// this is a `Success`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Message`] in the success state.
    #[inline]
    pub fn try_message(&self) -> Result<&str, AccessError> {
        match self {
            Self::Warning { message, .. } | Self::Failure { message, .. } => Ok(message),
            Self::Success { .. } => Err(AccessError::Message { state: "success" }),
        }
    }

    /// Returns the typed failure detail.
    ///
    /// # Panics
    ///
    /// Panics unless this is a `Failure`; the other states carry no
    /// error detail.
    #[inline]
    pub fn error(&self) -> &E {
        match self.try_error() {
            Ok(error) => error,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the typed failure detail, or an [`AccessError`] outside the
    /// failure state.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Detail`] in the success and warning states.
    #[inline]
    pub const fn try_error(&self) -> Result<&E, AccessError> {
        match self {
            Self::Failure { error, .. } => Ok(error),
            Self::Success { .. } => Err(AccessError::Detail { state: "success" }),
            Self::Warning { .. } => Err(AccessError::Detail { state: "warning" }),
        }
    }
}

// =============================================================================
// Status-Shape Constructors
// =============================================================================

impl<E> Outcome<Unit, E> {
    /// Creates a successful status-only outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::outcome::Outcome;
    ///
    /// let outcome: Outcome = Outcome::ok();
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub const fn ok() -> Self {
        Self::success(Unit)
    }

    /// Creates a status-only warning with the given caveat message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::outcome::Outcome;
    ///
    /// let outcome: Outcome = Outcome::warn("partial refresh");
    /// assert!(outcome.is_warning());
    /// ```
    #[inline]
    pub fn warn(message: impl Into<String>) -> Self {
        Self::warning(Unit, message)
    }
}

impl<T> Outcome<T, ()> {
    /// Creates a failed outcome whose failure is described by the message
    /// alone.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::outcome::Outcome;
    ///
    /// let outcome: Outcome = Outcome::failure("connection refused");
    /// assert!(outcome.is_failure());
    /// assert_eq!(outcome.message(), "connection refused");
    /// ```
    #[inline]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::failure_with(message, ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_state_holds() {
        let outcomes: [Outcome<i32, String>; 3] = [
            Outcome::success(1),
            Outcome::warning(1, "caveat"),
            Outcome::failure_with("boom", "detail".to_string()),
        ];
        for outcome in outcomes {
            let states = [
                outcome.is_success(),
                outcome.is_warning(),
                outcome.is_failure(),
            ];
            assert_eq!(states.iter().filter(|held| **held).count(), 1);
        }
    }

    #[test]
    fn test_effective_state_under_policies() {
        let warning: Outcome<i32> = Outcome::warning(1, "caveat");
        assert!(warning.is_effective_success(WarningPolicy::Preserve));
        assert!(warning.is_effective_failure(WarningPolicy::Escalate));

        let success: Outcome<i32> = Outcome::success(1);
        assert!(success.is_effective_success(WarningPolicy::Escalate));

        let failure: Outcome<i32> = Outcome::failure("boom");
        assert!(failure.is_effective_failure(WarningPolicy::Preserve));
    }

    #[test]
    fn test_value_available_outside_failure() {
        assert_eq!(*Outcome::<i32>::success(42).value(), 42);
        assert_eq!(*Outcome::<i32>::warning(42, "caveat").value(), 42);
    }

    #[test]
    #[should_panic(expected = "value is unavailable in the failure state")]
    fn test_value_panics_on_failure() {
        let outcome: Outcome<i32> = Outcome::failure("boom");
        let _ = outcome.value();
    }

    #[test]
    #[should_panic(expected = "message is unavailable in the success state")]
    fn test_message_panics_on_success() {
        let outcome: Outcome<i32> = Outcome::success(42);
        let _ = outcome.message();
    }

    #[test]
    #[should_panic(expected = "error detail is unavailable in the warning state")]
    fn test_error_panics_outside_failure() {
        let outcome: Outcome<i32, u8> = Outcome::warning(42, "caveat");
        let _ = outcome.error();
    }

    #[test]
    fn test_checked_accessors_report_state() {
        let failure: Outcome<i32, u8> = Outcome::failure_with("boom", 3);
        assert_eq!(
            failure.try_value(),
            Err(AccessError::Value { state: "failure" })
        );
        assert_eq!(failure.try_message(), Ok("boom"));
        assert_eq!(failure.try_error(), Ok(&3));

        let success: Outcome<i32, u8> = Outcome::success(42);
        assert_eq!(success.try_value(), Ok(&42));
        assert_eq!(
            success.try_message(),
            Err(AccessError::Message { state: "success" })
        );
        assert_eq!(
            success.try_error(),
            Err(AccessError::Detail { state: "success" })
        );
    }

    #[test]
    fn test_unwrap_or_prefers_carried_value() {
        assert_eq!(Outcome::<i32>::success(42).unwrap_or(-1), 42);
        assert_eq!(Outcome::<i32>::warning(42, "caveat").unwrap_or(-1), 42);
        assert_eq!(Outcome::<i32>::failure("boom").unwrap_or(-1), -1);
    }

    #[test]
    fn test_unwrap_or_else_is_lazy() {
        let mut invocations = 0;
        let value = Outcome::<i32>::success(42).unwrap_or_else(|| {
            invocations += 1;
            -1
        });
        assert_eq!(value, 42);
        assert_eq!(invocations, 0);
    }

    #[test]
    fn test_state_names() {
        assert_eq!(Outcome::<i32>::success(1).state_name(), "success");
        assert_eq!(Outcome::<i32>::warning(1, "m").state_name(), "warning");
        assert_eq!(Outcome::<i32>::failure("m").state_name(), "failure");
    }
}
