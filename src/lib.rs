//! # triage
//!
//! Algebraic wrapper types for expressing success, failure, warning, and
//! absence without panics or sentinel values in the happy path.
//!
//! ## Overview
//!
//! The standard library's `Result` is binary: a computation either produced
//! a value or an error. Real pipelines often have a third outcome — the
//! operation worked, but with a caveat the caller may or may not care
//! about. This crate models that directly:
//!
//! - **[`Outcome<T, E>`](outcome::Outcome)**: a three-state wrapper
//!   (`Success`, `Warning`, `Failure`) with a combinator surface
//!   (`on_success`, `on_failure`, `on_any`, `fold`, `map`, `and_then`, …)
//!   whose callbacks run exactly once when their branch holds and never
//!   otherwise.
//! - **[`WarningPolicy`](outcome::WarningPolicy)**: a per-call rule that
//!   decides whether a warning counts as a success or a failure for that
//!   call only — it never mutates the wrapper.
//! - **[`Maybe<T>`](maybe::Maybe)**: presence or absence as a first-class
//!   two-state container, ordered with absence below every present value.
//! - **[`Either<L, R>`](either::Either)**: a three-state disjunction
//!   (`Left`, `Right`, `Neither`) used mainly as a conversion source into
//!   outcomes.
//! - **[`Unit`](unit::Unit)**: a zero-information marker carried by
//!   status-only outcome shapes.
//!
//! ## Feature Flags
//!
//! - `async`: asynchronous combinator layer — async callbacks on
//!   [`Outcome`](outcome::Outcome) and the
//!   [`FutureOutcomeExt`](outcome::FutureOutcomeExt) extension trait for
//!   pending receivers (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` derives on all wrapper types
//!
//! ## Example
//!
//! ```rust
//! use triage::prelude::*;
//!
//! let parsed: Outcome<i32> = Outcome::warning(7, "input had trailing spaces");
//!
//! // A warning is a success unless the call escalates it.
//! let mut failures = 0;
//! let parsed = parsed.on_failure(|_| failures += 1);
//! assert_eq!(failures, 0);
//!
//! let parsed = parsed.on_failure_with(WarningPolicy::Escalate, |_| failures += 1);
//! assert_eq!(failures, 1);
//!
//! // The wrapper itself is untouched by escalation.
//! assert!(parsed.is_warning());
//! assert_eq!(*parsed.value(), 7);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the wrapper types and the combinator extension trait.
///
/// # Usage
///
/// ```rust
/// use triage::prelude::*;
/// ```
pub mod prelude {

    pub use crate::either::Either;

    pub use crate::error::AccessError;

    pub use crate::maybe::Maybe;

    pub use crate::outcome::{Outcome, WarningPolicy};

    #[cfg(feature = "async")]
    pub use crate::outcome::FutureOutcomeExt;

    pub use crate::unit::Unit;
}

pub mod either;

pub mod error;

pub mod maybe;

pub mod outcome;

pub mod unit;
