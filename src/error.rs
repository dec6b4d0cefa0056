//! Contract-violation error types.
//!
//! Wrapper types in this crate guard their state-dependent data behind
//! checked accessors. [`AccessError`] is returned when a wrapper is read in
//! a state that does not carry the requested datum; the panicking accessors
//! surface the same rendering through a panic. These errors are local
//! signal-and-abort values — they are never retried or swallowed, and
//! recovery is the caller's responsibility (prefer `unwrap_or` over `value`
//! when a fallback exists).

use std::fmt;

/// Error returned when state-dependent data is read in the wrong state.
///
/// Each variant names the datum that was requested and carries the name of
/// the state the wrapper was actually in.
///
/// # Examples
///
/// ```rust
/// use triage::error::AccessError;
/// use triage::outcome::Outcome;
///
/// let failed: Outcome<i32> = Outcome::failure("out of range");
/// assert_eq!(
///     failed.try_value(),
///     Err(AccessError::Value { state: "failure" })
/// );
/// assert_eq!(
///     failed.try_value().unwrap_err().to_string(),
///     "value is unavailable in the failure state"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessError {
    /// A value was requested from a state that carries none.
    Value {
        /// The state the wrapper was in.
        state: &'static str,
    },
    /// A message was requested from a state that carries none.
    Message {
        /// The state the wrapper was in.
        state: &'static str,
    },
    /// A failure detail was requested outside the failure state.
    Detail {
        /// The state the wrapper was in.
        state: &'static str,
    },
}

impl fmt::Display for AccessError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value { state } => {
                write!(formatter, "value is unavailable in the {state} state")
            }
            Self::Message { state } => {
                write!(formatter, "message is unavailable in the {state} state")
            }
            Self::Detail { state } => {
                write!(formatter, "error detail is unavailable in the {state} state")
            }
        }
    }
}

impl std::error::Error for AccessError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_access_error_display() {
        let error = AccessError::Value { state: "failure" };
        assert_eq!(format!("{error}"), "value is unavailable in the failure state");
    }

    #[test]
    fn test_message_access_error_display() {
        let error = AccessError::Message { state: "success" };
        assert_eq!(format!("{error}"), "message is unavailable in the success state");
    }

    #[test]
    fn test_detail_access_error_display() {
        let error = AccessError::Detail { state: "warning" };
        assert_eq!(
            format!("{error}"),
            "error detail is unavailable in the warning state"
        );
    }

    #[test]
    fn test_access_error_equality() {
        let first = AccessError::Value { state: "failure" };
        let second = AccessError::Value { state: "failure" };
        let third = AccessError::Value { state: "nothing" };
        assert_eq!(first, second);
        assert_ne!(first, third);
    }

    #[test]
    fn test_access_error_source() {
        use std::error::Error;

        let error = AccessError::Detail { state: "success" };
        assert!(error.source().is_none());
    }
}
