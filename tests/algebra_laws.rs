//! Property-based tests for the wrapper algebra.
//!
//! These laws hold for every constructible wrapper, not just hand-picked
//! cases:
//!
//! 1. **State exclusivity**: exactly one state predicate is true.
//! 2. **Warning promotion symmetry**: an escalated warning is classified
//!    and dispatched exactly like a failure built from the same message,
//!    and escalation preserves the message verbatim.
//! 3. **Exactly-once invocation**: `on_any` fires once per call for every
//!    state; the gated families fire 0 or 1 times per the branch table.
//! 4. **Ordering**: absence ranks below presence, presence delegates to
//!    the wrapped order.
//! 5. **Round-trips**: presence survives Maybe -> Outcome -> Maybe.

use proptest::prelude::*;
use triage::maybe::Maybe;
use triage::outcome::{Outcome, WarningPolicy};

fn outcome_strategy() -> impl Strategy<Value = Outcome<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::success),
        (any::<i32>(), ".*").prop_map(|(value, message)| Outcome::warning(value, message)),
        (".*", ".*").prop_map(|(message, error)| Outcome::failure_with(message, error)),
    ]
}

fn policy_strategy() -> impl Strategy<Value = WarningPolicy> {
    any::<bool>().prop_map(|escalate| {
        if escalate {
            WarningPolicy::Escalate
        } else {
            WarningPolicy::Preserve
        }
    })
}

proptest! {
    // =========================================================================
    // State Exclusivity
    // =========================================================================

    #[test]
    fn prop_exactly_one_outcome_state_holds(outcome in outcome_strategy()) {
        let states = [outcome.is_success(), outcome.is_warning(), outcome.is_failure()];
        prop_assert_eq!(states.iter().filter(|held| **held).count(), 1);
    }

    #[test]
    fn prop_maybe_states_are_exclusive(value in any::<Option<i32>>()) {
        let maybe: Maybe<i32> = value.into();
        prop_assert_ne!(maybe.has_value(), maybe.is_nothing());
    }

    // =========================================================================
    // Effective-State Classification
    // =========================================================================

    #[test]
    fn prop_effective_predicates_partition_every_state(
        outcome in outcome_strategy(),
        policy in policy_strategy(),
    ) {
        prop_assert_ne!(
            outcome.is_effective_success(policy),
            outcome.is_effective_failure(policy)
        );
    }

    #[test]
    fn prop_preserve_classifies_warnings_as_successes(outcome in outcome_strategy()) {
        prop_assert_eq!(
            outcome.is_effective_success(WarningPolicy::Preserve),
            !outcome.is_failure()
        );
    }

    #[test]
    fn prop_escalate_classifies_warnings_as_failures(outcome in outcome_strategy()) {
        prop_assert_eq!(
            outcome.is_effective_success(WarningPolicy::Escalate),
            outcome.is_success()
        );
    }

    // =========================================================================
    // Warning Promotion Symmetry
    // =========================================================================

    #[test]
    fn prop_escalated_warning_dispatches_like_an_equivalent_failure(
        value in any::<i32>(),
        message in ".*",
    ) {
        let mut warning_invocations = 0;
        let mut failure_invocations = 0;

        let warning: Outcome<i32, String> = Outcome::warning(value, message.clone());
        let failure: Outcome<i32, String> =
            Outcome::failure_with(message, String::default());

        let _ = warning.on_failure_with(WarningPolicy::Escalate, |_| warning_invocations += 1);
        let _ = failure.on_failure_with(WarningPolicy::Escalate, |_| failure_invocations += 1);

        prop_assert_eq!(warning_invocations, 1);
        prop_assert_eq!(failure_invocations, 1);
    }

    #[test]
    fn prop_escalating_chain_preserves_the_warning_message(
        value in any::<i32>(),
        message in ".*",
    ) {
        let warning: Outcome<i32, String> = Outcome::warning(value, message.clone());
        let escalated: Outcome<i32, String> =
            warning.and_then_with(WarningPolicy::Escalate, |outcome| outcome);
        prop_assert!(escalated.is_failure());
        prop_assert_eq!(escalated.message(), message.as_str());
    }

    // =========================================================================
    // Exactly-Once Invocation
    // =========================================================================

    #[test]
    fn prop_on_any_fires_once_per_call(outcome in outcome_strategy()) {
        let mut invocations = 0;
        let _ = outcome.on_any(|_| invocations += 1).on_any(|_| invocations += 1);
        prop_assert_eq!(invocations, 2);
    }

    #[test]
    fn prop_gated_families_fire_on_complementary_branches(
        outcome in outcome_strategy(),
        policy in policy_strategy(),
    ) {
        let mut success_invocations = 0;
        let mut failure_invocations = 0;
        let _ = outcome
            .on_success_with(policy, |_| success_invocations += 1)
            .on_failure_with(policy, |_| failure_invocations += 1);
        prop_assert_eq!(success_invocations + failure_invocations, 1);
    }

    #[test]
    fn prop_fold_agrees_with_the_state_predicates(outcome in outcome_strategy()) {
        let expected = outcome.state_name();
        let folded = outcome.fold(
            |_| "success",
            |_, _| "warning",
            |_, _| "failure",
        );
        prop_assert_eq!(folded, expected);
    }

    // =========================================================================
    // Ordering
    // =========================================================================

    #[test]
    fn prop_absence_ranks_below_presence(value in any::<i32>()) {
        prop_assert!(Maybe::<i32>::Nothing < Maybe::just(value));
    }

    #[test]
    fn prop_presence_delegates_to_the_wrapped_order(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(Maybe::just(a).cmp(&Maybe::just(b)), a.cmp(&b));
    }

    // =========================================================================
    // Round-Trips
    // =========================================================================

    #[test]
    fn prop_presence_survives_the_outcome_bridge(value in any::<i32>()) {
        let outcome = Maybe::just(value).to_outcome();
        prop_assert!(outcome.is_success());
        prop_assert_eq!(outcome.to_maybe(), Maybe::just(value));
    }

    #[test]
    fn prop_success_converts_to_presence(value in any::<i32>()) {
        let maybe: Maybe<i32> = Outcome::<i32>::success(value).to_maybe();
        prop_assert_eq!(maybe, Maybe::just(value));
    }
}
