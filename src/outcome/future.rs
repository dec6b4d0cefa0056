//! Asynchronous combinator layer.
//!
//! Branch semantics are identical to the synchronous families in
//! [`combinators`](super::Outcome); the only difference is that the
//! callback and/or the receiver may be an in-flight computation:
//!
//! - The `*_async` methods on [`Outcome`] accept callbacks that return
//!   futures. The branch decision is made synchronously, then the chosen
//!   callback's future is awaited — exactly one logical invocation per
//!   call, on the current task, with no executor dependency.
//! - [`FutureOutcomeExt`] provides the same families on any
//!   `Future<Output = Outcome<T, E>>`: the receiver is resolved first,
//!   then the identical synchronous branch logic applies.
//!
//! No concurrency is introduced: the only suspension points are awaiting
//! the receiver and awaiting the chosen callback. Dropping the returned
//! future cancels the chain, and a receiver that never resolves never
//! fires a callback — cancellation and fault signals of the host runtime
//! propagate untouched.
//!
//! Side-effect callbacks receive the outcome *by value*: wrappers have
//! value semantics, so the callback observes a copy and the original
//! receiver is returned unchanged.
//!
//! # Examples
//!
//! ```rust,ignore
//! use triage::outcome::{Outcome, FutureOutcomeExt};
//!
//! #[tokio::main]
//! async fn main() {
//!     let outcome = std::future::ready(Outcome::<i32>::success(21))
//!         .and_then(|outcome| Outcome::success(outcome.into_value() * 2))
//!         .await;
//!     assert_eq!(outcome, Outcome::success(42));
//! }
//! ```

use std::future::Future;

use super::{Outcome, WarningPolicy};

// =============================================================================
// Async Callbacks on a Resolved Receiver
// =============================================================================

impl<T, E> Outcome<T, E> {
    /// Awaits `action` if this is an effective success, treating a
    /// warning as a success. The receiver is returned unchanged.
    #[inline]
    pub async fn on_success_async<F, Fut>(self, action: F) -> Self
    where
        T: Clone,
        E: Clone,
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = ()>,
    {
        self.on_success_async_with(WarningPolicy::Preserve, action)
            .await
    }

    /// Awaits `action` if this is an effective success under `policy`.
    /// The receiver is returned unchanged.
    #[inline]
    pub async fn on_success_async_with<F, Fut>(self, policy: WarningPolicy, action: F) -> Self
    where
        T: Clone,
        E: Clone,
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = ()>,
    {
        if self.is_effective_success(policy) {
            action(self.clone()).await;
        }
        self
    }

    /// Awaits `action` if this is an effective failure, treating a
    /// warning as a success. The receiver is returned unchanged.
    #[inline]
    pub async fn on_failure_async<F, Fut>(self, action: F) -> Self
    where
        T: Clone,
        E: Clone,
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = ()>,
    {
        self.on_failure_async_with(WarningPolicy::Preserve, action)
            .await
    }

    /// Awaits `action` if this is an effective failure under `policy`.
    /// The receiver is returned unchanged.
    #[inline]
    pub async fn on_failure_async_with<F, Fut>(self, policy: WarningPolicy, action: F) -> Self
    where
        T: Clone,
        E: Clone,
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = ()>,
    {
        if self.is_effective_failure(policy) {
            action(self.clone()).await;
        }
        self
    }

    /// Awaits `action` exactly once, regardless of state. The receiver is
    /// returned unchanged.
    #[inline]
    pub async fn on_any_async<F, Fut>(self, action: F) -> Self
    where
        T: Clone,
        E: Clone,
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = ()>,
    {
        action(self.clone()).await;
        self
    }

    /// Asynchronous [`Outcome::and_then`]: feeds an effective success into
    /// `transform` and awaits the produced outcome; a literal failure
    /// propagates without invoking the transform.
    #[inline]
    pub async fn and_then_async<U, F, Fut>(self, transform: F) -> Outcome<U, E>
    where
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        match self {
            Self::Failure { message, error } => Outcome::Failure { message, error },
            other => transform(other).await,
        }
    }

    /// Asynchronous [`Outcome::and_then_with`]: an escalated warning
    /// becomes a failure carrying the warning's message verbatim; the
    /// transform is not invoked.
    #[inline]
    pub async fn and_then_async_with<U, F, Fut>(
        self,
        policy: WarningPolicy,
        transform: F,
    ) -> Outcome<U, E>
    where
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
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
            other => transform(other).await,
        }
    }

    /// Asynchronous [`Outcome::or_else`]: feeds an effective failure into
    /// `recover` and awaits the produced outcome.
    #[inline]
    pub async fn or_else_async<F, Fut>(self, recover: F) -> Self
    where
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = Self>,
    {
        self.or_else_async_with(WarningPolicy::Preserve, recover)
            .await
    }

    /// Asynchronous [`Outcome::or_else_with`].
    #[inline]
    pub async fn or_else_async_with<F, Fut>(self, policy: WarningPolicy, recover: F) -> Self
    where
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = Self>,
    {
        if self.is_effective_failure(policy) {
            recover(self).await
        } else {
            self
        }
    }

    /// Asynchronous [`Outcome::fold`]: literal three-way dispatch awaiting
    /// the chosen handler's future.
    #[inline]
    pub async fn fold_async<U, S, SF, W, WF, F, FF>(
        self,
        on_success: S,
        on_warning: W,
        on_failure: F,
    ) -> U
    where
        S: FnOnce(T) -> SF,
        SF: Future<Output = U>,
        W: FnOnce(T, String) -> WF,
        WF: Future<Output = U>,
        F: FnOnce(String, E) -> FF,
        FF: Future<Output = U>,
    {
        match self {
            Self::Success { value } => on_success(value).await,
            Self::Warning { value, message } => on_warning(value, message).await,
            Self::Failure { message, error } => on_failure(message, error).await,
        }
    }

    /// Asynchronous [`Outcome::on_failure_or_else`]: each side is awaited
    /// only on its own branch, so the unused default performs no work.
    #[inline]
    pub async fn on_failure_or_else_async<U, F, Fut, D, DFut>(
        self,
        policy: WarningPolicy,
        transform: F,
        fallback: D,
    ) -> U
    where
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = U>,
        D: FnOnce() -> DFut,
        DFut: Future<Output = U>,
    {
        if self.is_effective_failure(policy) {
            transform(self).await
        } else {
            fallback().await
        }
    }
}

// =============================================================================
// Pending Receivers
// =============================================================================

/// Combinator families for pending outcomes.
///
/// Blanket-implemented for every `Future<Output = Outcome<T, E>>`, so an
/// in-flight computation chains exactly like a resolved one: the receiver
/// is awaited first, then the synchronous branch logic of
/// [`Outcome`](super::Outcome) applies, then an asynchronous callback (if
/// any) is awaited.
///
/// # Examples
///
/// ```rust,ignore
/// use triage::outcome::{FutureOutcomeExt, Outcome};
///
/// #[tokio::main]
/// async fn main() {
///     let mut observed = 0;
///     let outcome = std::future::ready(Outcome::<i32>::success(42))
///         .on_success(|_| observed += 1)
///         .await;
///     assert!(outcome.is_success());
///     assert_eq!(observed, 1);
/// }
/// ```
pub trait FutureOutcomeExt<T, E>: Future<Output = Outcome<T, E>> + Sized {
    /// Resolves the receiver, then behaves as [`Outcome::on_success`].
    fn on_success<F>(self, action: F) -> impl Future<Output = Outcome<T, E>>
    where
        F: FnOnce(&Outcome<T, E>),
    {
        async move { self.await.on_success(action) }
    }

    /// Resolves the receiver, then behaves as
    /// [`Outcome::on_success_with`].
    fn on_success_with<F>(self, policy: WarningPolicy, action: F) -> impl Future<Output = Outcome<T, E>>
    where
        F: FnOnce(&Outcome<T, E>),
    {
        async move { self.await.on_success_with(policy, action) }
    }

    /// Resolves the receiver, then behaves as [`Outcome::on_failure`].
    fn on_failure<F>(self, action: F) -> impl Future<Output = Outcome<T, E>>
    where
        F: FnOnce(&Outcome<T, E>),
    {
        async move { self.await.on_failure(action) }
    }

    /// Resolves the receiver, then behaves as
    /// [`Outcome::on_failure_with`].
    fn on_failure_with<F>(self, policy: WarningPolicy, action: F) -> impl Future<Output = Outcome<T, E>>
    where
        F: FnOnce(&Outcome<T, E>),
    {
        async move { self.await.on_failure_with(policy, action) }
    }

    /// Resolves the receiver, then behaves as [`Outcome::on_any`].
    fn on_any<F>(self, action: F) -> impl Future<Output = Outcome<T, E>>
    where
        F: FnOnce(&Outcome<T, E>),
    {
        async move { self.await.on_any(action) }
    }

    /// Resolves the receiver, then behaves as
    /// [`Outcome::on_success_or_failure_with`].
    fn on_success_or_failure_with<S, F>(
        self,
        policy: WarningPolicy,
        on_success: S,
        on_failure: F,
    ) -> impl Future<Output = Outcome<T, E>>
    where
        S: FnOnce(&Outcome<T, E>),
        F: FnOnce(&Outcome<T, E>),
    {
        async move {
            self.await
                .on_success_or_failure_with(policy, on_success, on_failure)
        }
    }

    /// Resolves the receiver, then behaves as [`Outcome::and_then`].
    fn and_then<U, F>(self, transform: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(Outcome<T, E>) -> Outcome<U, E>,
    {
        async move { self.await.and_then(transform) }
    }

    /// Resolves the receiver, then behaves as [`Outcome::and_then_with`].
    fn and_then_with<U, F>(
        self,
        policy: WarningPolicy,
        transform: F,
    ) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(Outcome<T, E>) -> Outcome<U, E>,
        E: Default,
    {
        async move { self.await.and_then_with(policy, transform) }
    }

    /// Resolves the receiver, then behaves as [`Outcome::or_else`].
    fn or_else<F>(self, recover: F) -> impl Future<Output = Outcome<T, E>>
    where
        F: FnOnce(Outcome<T, E>) -> Outcome<T, E>,
    {
        async move { self.await.or_else(recover) }
    }

    /// Resolves the receiver, then behaves as [`Outcome::fold`].
    fn fold<U, S, W, F>(
        self,
        on_success: S,
        on_warning: W,
        on_failure: F,
    ) -> impl Future<Output = U>
    where
        S: FnOnce(T) -> U,
        W: FnOnce(T, String) -> U,
        F: FnOnce(String, E) -> U,
    {
        async move { self.await.fold(on_success, on_warning, on_failure) }
    }

    /// Resolves the receiver, then behaves as
    /// [`Outcome::on_failure_or_else`].
    fn on_failure_or_else<U, F, D>(
        self,
        policy: WarningPolicy,
        transform: F,
        fallback: D,
    ) -> impl Future<Output = U>
    where
        F: FnOnce(Outcome<T, E>) -> U,
        D: FnOnce() -> U,
    {
        async move { self.await.on_failure_or_else(policy, transform, fallback) }
    }

    /// Resolves the receiver, then awaits `action` as
    /// [`Outcome::on_success_async`].
    fn on_success_async<F, Fut>(self, action: F) -> impl Future<Output = Outcome<T, E>>
    where
        T: Clone,
        E: Clone,
        F: FnOnce(Outcome<T, E>) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.on_success_async(action).await }
    }

    /// Resolves the receiver, then awaits `action` as
    /// [`Outcome::on_failure_async_with`].
    fn on_failure_async_with<F, Fut>(
        self,
        policy: WarningPolicy,
        action: F,
    ) -> impl Future<Output = Outcome<T, E>>
    where
        T: Clone,
        E: Clone,
        F: FnOnce(Outcome<T, E>) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.on_failure_async_with(policy, action).await }
    }

    /// Resolves the receiver, then awaits `action` as
    /// [`Outcome::on_any_async`].
    fn on_any_async<F, Fut>(self, action: F) -> impl Future<Output = Outcome<T, E>>
    where
        T: Clone,
        E: Clone,
        F: FnOnce(Outcome<T, E>) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.on_any_async(action).await }
    }

    /// Resolves the receiver, then awaits `transform` as
    /// [`Outcome::and_then_async`].
    fn and_then_async<U, F, Fut>(self, transform: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(Outcome<T, E>) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        async move { self.await.and_then_async(transform).await }
    }

    /// Resolves the receiver, then awaits the chosen handler as
    /// [`Outcome::fold_async`].
    fn fold_async<U, S, SF, W, WF, F, FF>(
        self,
        on_success: S,
        on_warning: W,
        on_failure: F,
    ) -> impl Future<Output = U>
    where
        S: FnOnce(T) -> SF,
        SF: Future<Output = U>,
        W: FnOnce(T, String) -> WF,
        WF: Future<Output = U>,
        F: FnOnce(String, E) -> FF,
        FF: Future<Output = U>,
    {
        async move {
            self.await
                .fold_async(on_success, on_warning, on_failure)
                .await
        }
    }
}

impl<T, E, R> FutureOutcomeExt<T, E> for R where R: Future<Output = Outcome<T, E>> {}
