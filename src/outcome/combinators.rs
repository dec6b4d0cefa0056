//! Synchronous combinator families.
//!
//! Every combinator observes the same contract: the supplied callback is
//! invoked at most once per call, exactly once when its branch condition
//! holds, and never when it does not. Side-effect combinators receive the
//! receiver by reference and return it unchanged — a
//! [`WarningPolicy`](super::WarningPolicy) gates *invocation only*, it
//! never rewrites the wrapper. Only the explicitly escalating, wrapper-
//! producing combinators turn a warning into a failure, and those preserve
//! the warning's message verbatim.
//!
//! The branch table, with `W` abbreviating an escalating policy:
//!
//! ```text
//! on_success(action):   Success -> run          Warning -> run unless W   Failure -> never
//! on_failure(action):   Failure -> run          Warning -> run iff W      Success -> never
//! on_any(action):       always run, exactly once
//! on_success_or_failure(ok, fail):
//!                       effective success -> ok, otherwise fail
//! fold(ok, warn, fail): literal three-way dispatch, no escalation
//! ```

use super::{Outcome, WarningPolicy};

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Side-Effect Combinators
    // =========================================================================

    /// Runs `action` if this is an effective success, treating a warning
    /// as a success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::outcome::Outcome;
    ///
    /// let mut observed = None;
    /// let outcome = Outcome::<i32>::success(42).on_success(|o| observed = Some(*o.value()));
    /// assert_eq!(observed, Some(42));
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    #[must_use]
    pub fn on_success<F>(self, action: F) -> Self
    where
        F: FnOnce(&Self),
    {
        self.on_success_with(WarningPolicy::Preserve, action)
    }

    /// Runs `action` if this is an effective success under `policy`.
    ///
    /// The receiver is returned unchanged in every state.
    #[inline]
    #[must_use]
    pub fn on_success_with<F>(self, policy: WarningPolicy, action: F) -> Self
    where
        F: FnOnce(&Self),
    {
        if self.is_effective_success(policy) {
            action(&self);
        }
        self
    }

    /// Runs `action` if this is an effective failure, treating a warning
    /// as a success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::outcome::Outcome;
    ///
    /// let mut observed = 0;
    /// let outcome = Outcome::<i32>::failure("boom").on_failure(|_| observed += 1);
    /// assert_eq!(observed, 1);
    /// assert!(outcome.is_failure());
    /// ```
    #[inline]
    #[must_use]
    pub fn on_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&Self),
    {
        self.on_failure_with(WarningPolicy::Preserve, action)
    }

    /// Runs `action` if this is an effective failure under `policy`.
    ///
    /// The receiver is returned unchanged in every state; escalation gates
    /// invocation only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::outcome::{Outcome, WarningPolicy};
    ///
    /// let mut observed = 0;
    /// let outcome: Outcome = Outcome::warn("My warning");
    ///
    /// let outcome = outcome.on_failure_with(WarningPolicy::Preserve, |_| observed += 1);
    /// assert_eq!(observed, 0);
    ///
    /// let outcome = outcome.on_failure_with(WarningPolicy::Escalate, |_| observed += 1);
    /// assert_eq!(observed, 1);
    /// assert!(outcome.is_warning());
    /// ```
    #[inline]
    #[must_use]
    pub fn on_failure_with<F>(self, policy: WarningPolicy, action: F) -> Self
    where
        F: FnOnce(&Self),
    {
        if self.is_effective_failure(policy) {
            action(&self);
        }
        self
    }

    /// Runs `action` exactly once, regardless of state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::outcome::Outcome;
    ///
    /// let mut invocations = 0;
    /// let outcome = Outcome::<i32>::failure("boom")
    ///     .on_any(|_| invocations += 1)
    ///     .on_any(|_| invocations += 1);
    /// assert_eq!(invocations, 2);
    /// assert!(outcome.is_failure());
    /// ```
    #[inline]
    #[must_use]
    pub fn on_any<F>(self, action: F) -> Self
    where
        F: FnOnce(&Self),
    {
        action(&self);
        self
    }

    /// Collapses the outcome to a plain value, regardless of state.
    #[inline]
    pub fn on_any_map<U, F>(self, transform: F) -> U
    where
        F: FnOnce(Self) -> U,
    {
        transform(self)
    }

    /// Dispatches to `on_success` or `on_failure` by effective state,
    /// treating a warning as a success. Exactly one of the two runs.
    #[inline]
    #[must_use]
    pub fn on_success_or_failure<S, F>(self, on_success: S, on_failure: F) -> Self
    where
        S: FnOnce(&Self),
        F: FnOnce(&Self),
    {
        self.on_success_or_failure_with(WarningPolicy::Preserve, on_success, on_failure)
    }

    /// Dispatches to `on_success` or `on_failure` by effective state under
    /// `policy`. Exactly one of the two runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::outcome::{Outcome, WarningPolicy};
    ///
    /// use std::cell::Cell;
    /// let route = Cell::new("");
    /// let _ = Outcome::<i32>::warning(7, "caveat").on_success_or_failure_with(
    ///     WarningPolicy::Escalate,
    ///     |_| route.set("success"),
    ///     |_| route.set("failure"),
    /// );
    /// assert_eq!(route.get(), "failure");
    /// ```
    #[inline]
    #[must_use]
    pub fn on_success_or_failure_with<S, F>(
        self,
        policy: WarningPolicy,
        on_success: S,
        on_failure: F,
    ) -> Self
    where
        S: FnOnce(&Self),
        F: FnOnce(&Self),
    {
        if self.is_effective_success(policy) {
            on_success(&self);
        } else {
            on_failure(&self);
        }
        self
    }

    // =========================================================================
    // Three-Way Dispatch
    // =========================================================================

    /// Eliminates the outcome by applying the handler for its literal
    /// state. Warnings are never escalated here; this is case analysis,
    /// not classification.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32> = Outcome::warning(7, "approximated");
    /// let rendered = outcome.fold(
    ///     |value| format!("ok: {value}"),
    ///     |value, message| format!("{value} ({message})"),
    ///     |message, ()| format!("failed: {message}"),
    /// );
    /// assert_eq!(rendered, "7 (approximated)");
    /// ```
    #[inline]
    pub fn fold<U, S, W, F>(self, on_success: S, on_warning: W, on_failure: F) -> U
    where
        S: FnOnce(T) -> U,
        W: FnOnce(T, String) -> U,
        F: FnOnce(String, E) -> U,
    {
        match self {
            Self::Success { value } => on_success(value),
            Self::Warning { value, message } => on_warning(value, message),
            Self::Failure { message, error } => on_failure(message, error),
        }
    }

    // =========================================================================
    // Collapse With Defaulting
    // =========================================================================

    /// Collapses to `transform(self)` on an effective success under
    /// `policy`, otherwise to `fallback`. The transform is not evaluated
    /// on the other branch.
    #[inline]
    pub fn on_success_or<U, F>(self, policy: WarningPolicy, transform: F, fallback: U) -> U
    where
        F: FnOnce(Self) -> U,
    {
        if self.is_effective_success(policy) {
            transform(self)
        } else {
            fallback
        }
    }

    /// Collapses to `transform(self)` on an effective success under
    /// `policy`, otherwise to the factory's result. Each side is evaluated
    /// only on its own branch.
    #[inline]
    pub fn on_success_or_else<U, F, D>(self, policy: WarningPolicy, transform: F, fallback: D) -> U
    where
        F: FnOnce(Self) -> U,
        D: FnOnce() -> U,
    {
        if self.is_effective_success(policy) {
            transform(self)
        } else {
            fallback()
        }
    }

    /// Collapses to `transform(self)` on an effective failure under
    /// `policy`, otherwise to `fallback`. The transform is not evaluated
    /// on the other branch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::outcome::{Outcome, WarningPolicy};
    ///
    /// let failed: Outcome = Outcome::failure("My failure");
    /// assert_eq!(
    ///     failed.on_failure_or(WarningPolicy::Preserve, |_| 42.5_f32, -1.0),
    ///     42.5
    /// );
    ///
    /// let succeeded: Outcome = Outcome::ok();
    /// assert_eq!(
    ///     succeeded.on_failure_or(WarningPolicy::Preserve, |_| 42.5_f32, -1.0),
    ///     -1.0
    /// );
    /// ```
    #[inline]
    pub fn on_failure_or<U, F>(self, policy: WarningPolicy, transform: F, fallback: U) -> U
    where
        F: FnOnce(Self) -> U,
    {
        if self.is_effective_failure(policy) {
            transform(self)
        } else {
            fallback
        }
    }

    /// Collapses to `transform(self)` on an effective failure under
    /// `policy`, otherwise to the factory's result. The factory is only
    /// invoked on the non-failure branch, so the unused default costs
    /// nothing and has no side effects.
    #[inline]
    pub fn on_failure_or_else<U, F, D>(self, policy: WarningPolicy, transform: F, fallback: D) -> U
    where
        F: FnOnce(Self) -> U,
        D: FnOnce() -> U,
    {
        if self.is_effective_failure(policy) {
            transform(self)
        } else {
            fallback()
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the carried value, preserving state and
    /// message. A failure passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::outcome::Outcome;
    ///
    /// let doubled = Outcome::<i32>::warning(21, "caveat").map(|x| x * 2);
    /// assert_eq!(doubled, Outcome::warning(42, "caveat"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success { value } => Outcome::Success {
                value: function(value),
            },
            Self::Warning { value, message } => Outcome::Warning {
                value: function(value),
                message,
            },
            Self::Failure { message, error } => Outcome::Failure { message, error },
        }
    }

    /// Applies a function to the failure detail, preserving everything
    /// else. Bridges the message-only and typed-error shapes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::outcome::Outcome;
    ///
    /// let failed: Outcome<i32> = Outcome::failure("boom");
    /// let typed: Outcome<i32, u8> = failed.map_error(|()| 255);
    /// assert_eq!(*typed.error(), 255);
    /// ```
    #[inline]
    pub fn map_error<E2, F>(self, function: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Success { value } => Outcome::Success { value },
            Self::Warning { value, message } => Outcome::Warning { value, message },
            Self::Failure { message, error } => Outcome::Failure {
                message,
                error: function(error),
            },
        }
    }

    /// Applies a function to the caveat or failure message; a success
    /// passes through untouched.
    #[inline]
    #[must_use]
    pub fn map_message<F>(self, function: F) -> Self
    where
        F: FnOnce(String) -> String,
    {
        match self {
            Self::Success { value } => Self::Success { value },
            Self::Warning { value, message } => Self::Warning {
                value,
                message: function(message),
            },
            Self::Failure { message, error } => Self::Failure {
                message: function(message),
                error,
            },
        }
    }

    // =========================================================================
    // Wrapper-Producing Chains
    // =========================================================================

    /// Feeds an effective success into `transform`, producing an outcome
    /// of a possibly different value type. A warning is fed through with
    /// its message intact; a literal failure propagates its message and
    /// error without invoking the transform.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::outcome::Outcome;
    ///
    /// let chained = Outcome::<i32>::success(21)
    ///     .and_then(|outcome| Outcome::success(outcome.into_value() * 2));
    /// assert_eq!(chained, Outcome::success(42));
    ///
    /// let failed = Outcome::<i32>::failure("boom")
    ///     .and_then(|outcome| Outcome::success(outcome.into_value() * 2));
    /// assert_eq!(failed, Outcome::failure("boom"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, transform: F) -> Outcome<U, E>
    where
        F: FnOnce(Self) -> Outcome<U, E>,
    {
        match self {
            Self::Failure { message, error } => Outcome::Failure { message, error },
            other => transform(other),
        }
    }

    /// Feeds an effective success under `policy` into `transform`. An
    /// escalated warning becomes a failure carrying the warning's message
    /// verbatim and a default error detail; the transform is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::outcome::{Outcome, WarningPolicy};
    ///
    /// let escalated = Outcome::<i32>::warning(7, "stale")
    ///     .and_then_with(WarningPolicy::Escalate, |outcome| {
    ///         Outcome::success(outcome.into_value() * 2)
    ///     });
    /// assert_eq!(escalated, Outcome::failure("stale"));
    /// ```
    #[inline]
    pub fn and_then_with<U, F>(self, policy: WarningPolicy, transform: F) -> Outcome<U, E>
    where
        F: FnOnce(Self) -> Outcome<U, E>,
        E: Default,
    {
        match self {
            Self::Failure { message, error } => Outcome::Failure { message, error },
            Self::Warning { message, .. } if matches!(policy, WarningPolicy::Escalate) => {
                Outcome::Failure {
                    message,
                    error: E::default(),
                }
            }
            other => transform(other),
        }
    }

    /// Feeds an effective failure into `recover`, producing an outcome of
    /// the same shape; an effective success passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::outcome::Outcome;
    ///
    /// let recovered = Outcome::<i32>::failure("boom").or_else(|_| Outcome::success(0));
    /// assert_eq!(recovered, Outcome::success(0));
    /// ```
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, recover: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        self.or_else_with(WarningPolicy::Preserve, recover)
    }

    /// Feeds an effective failure under `policy` into `recover`; an
    /// effective success passes through untouched.
    #[inline]
    #[must_use]
    pub fn or_else_with<F>(self, policy: WarningPolicy, recover: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if self.is_effective_failure(policy) {
            recover(self)
        } else {
            self
        }
    }

    // =========================================================================
    // Error-Construction Combinator
    // =========================================================================

    /// Escalating failure handler for the typed-error shapes.
    ///
    /// A literal failure runs `action` and passes through untouched. A
    /// warning is escalated into a failure that preserves the warning's
    /// message verbatim and carries the factory's error detail; `action`
    /// then observes the escalated failure. A success runs neither the
    /// action nor the factory.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use triage::outcome::Outcome;
    ///
    /// let escalated: Outcome<i32, u8> = Outcome::warning(7, "stale")
    ///     .on_failure_escalating(|_| {}, || 86);
    /// assert_eq!(escalated, Outcome::failure_with("stale", 86));
    /// ```
    #[inline]
    #[must_use]
    pub fn on_failure_escalating<F, G>(self, action: F, error_factory: G) -> Self
    where
        F: FnOnce(&Self),
        G: FnOnce() -> E,
    {
        match self {
            failure @ Self::Failure { .. } => {
                action(&failure);
                failure
            }
            Self::Warning { message, .. } => {
                let escalated = Self::Failure {
                    message,
                    error: error_factory(),
                };
                action(&escalated);
                escalated
            }
            success @ Self::Success { .. } => success,
        }
    }
}
