//! Unit tests for the Maybe<T> type.
//!
//! Covers the fallback surface (or / or_else / or_with / or_from), the
//! ordering rule that ranks absence below every present value, and the
//! runtime downcast.

use rstest::rstest;
use triage::error::AccessError;
use triage::maybe::Maybe;

// =============================================================================
// Basic Construction and State Checking
// =============================================================================

#[rstest]
fn just_holds_its_value() {
    let value = Maybe::just(42);
    assert!(value.has_value());
    assert_eq!(value.try_value(), Ok(&42));
}

#[rstest]
fn nothing_reports_absence() {
    let value: Maybe<i32> = Maybe::Nothing;
    assert!(value.is_nothing());
    assert_eq!(value.try_value(), Err(AccessError::Value { state: "nothing" }));
}

#[rstest]
#[should_panic(expected = "value is unavailable in the nothing state")]
fn reading_an_absent_value_is_a_contract_violation() {
    let value: Maybe<i32> = Maybe::Nothing;
    let _ = value.into_value();
}

// =============================================================================
// Ordering
// =============================================================================

#[rstest]
fn absence_ranks_below_every_present_value() {
    assert!(Maybe::<i32>::Nothing < Maybe::just(i32::MIN));
    assert!(Maybe::<&str>::Nothing < Maybe::just(""));
}

#[rstest]
fn present_values_delegate_to_their_natural_order() {
    assert!(Maybe::just(1) < Maybe::just(2));
    assert_eq!(
        Maybe::just("a").cmp(&Maybe::just("a")),
        std::cmp::Ordering::Equal
    );
}

// =============================================================================
// Fallback Surface
// =============================================================================

#[rstest]
fn or_wraps_the_fallback_only_on_absence() {
    assert_eq!(Maybe::just(1).or(9), Maybe::just(1));
    assert_eq!(Maybe::Nothing.or(9), Maybe::just(9));
}

#[rstest]
fn or_else_invokes_the_factory_only_on_absence() {
    let mut invocations = 0;
    let value = Maybe::just(1).or_else(|| {
        invocations += 1;
        9
    });
    assert_eq!(value, Maybe::just(1));
    assert_eq!(invocations, 0);

    let value = Maybe::<i32>::Nothing.or_else(|| 9);
    assert_eq!(value, Maybe::just(9));
}

#[rstest]
fn or_with_prefers_the_present_receiver() {
    assert_eq!(Maybe::just(1).or_with(Maybe::just(9)), Maybe::just(1));
    assert_eq!(Maybe::Nothing.or_with(Maybe::just(9)), Maybe::just(9));
}

#[rstest]
#[should_panic(expected = "called `Maybe::or_with` with an absent fallback")]
fn or_with_rejects_an_absent_fallback_even_when_unused() {
    // Argument validation precedes branching: the receiver is present, so
    // the fallback would never be consulted, but it is still rejected.
    let _ = Maybe::just(1).or_with(Maybe::Nothing);
}

#[rstest]
#[should_panic(expected = "called `Maybe::or_with` with an absent fallback")]
fn or_with_rejects_an_absent_fallback_on_the_absent_path_too() {
    let _ = Maybe::<i32>::Nothing.or_with(Maybe::Nothing);
}

#[rstest]
fn or_from_accepts_a_present_factory_result() {
    let value = Maybe::<i32>::Nothing.or_from(|| Maybe::just(9));
    assert_eq!(value, Maybe::just(9));
}

#[rstest]
#[should_panic(expected = "produced an absent value")]
fn or_from_rejects_an_absent_factory_result() {
    let _ = Maybe::<i32>::Nothing.or_from(|| Maybe::Nothing);
}

#[rstest]
fn or_from_never_consults_the_factory_when_present() {
    let mut invocations = 0;
    let value = Maybe::just(1).or_from(|| {
        invocations += 1;
        Maybe::just(9)
    });
    assert_eq!(value, Maybe::just(1));
    assert_eq!(invocations, 0);
}

// =============================================================================
// Mapping and Filtering
// =============================================================================

#[rstest]
fn map_and_and_then_skip_the_absent_path() {
    let mut invocations = 0;
    let absent = Maybe::<i32>::Nothing.map(|x| {
        invocations += 1;
        x * 2
    });
    assert_eq!(absent, Maybe::Nothing);
    assert_eq!(invocations, 0);

    assert_eq!(Maybe::just(4).and_then(|x| Maybe::just(x + 1)), Maybe::just(5));
}

#[rstest]
fn filter_drops_rejected_values() {
    assert_eq!(Maybe::just(4).filter(|x| x % 2 == 0), Maybe::just(4));
    assert_eq!(Maybe::just(3).filter(|x| x % 2 == 0), Maybe::Nothing);
}

// =============================================================================
// Runtime Downcast
// =============================================================================

#[rstest]
fn cast_keeps_matching_types() {
    assert_eq!(Maybe::just(42_i32).cast::<i32>(), Maybe::just(42));
    assert_eq!(
        Maybe::just("text".to_string()).cast::<String>(),
        Maybe::just("text".to_string())
    );
}

#[rstest]
fn cast_yields_nothing_on_mismatch() {
    assert_eq!(Maybe::just(42_i32).cast::<String>(), Maybe::Nothing);
    assert_eq!(Maybe::<i32>::Nothing.cast::<String>(), Maybe::Nothing);
}
