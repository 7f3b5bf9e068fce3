//! End-to-end resolution behavior through the public API.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use casematch::{case, cases, match_on, MatchError, Type};

#[test]
fn exact_match_is_never_displaced() {
    let mut matcher = cases()
        .case(case(|_: i64| {}))
        .case(case(|_: f64| {}))
        .case(case(|_: i32| {}))
        .complete(case(|| {}));

    assert_eq!(matcher.try_apply(5i32), Ok(2));
}

#[test]
fn promotion_beats_standard_conversion_in_both_orders() {
    // An i16 argument promotes to i32 but merely converts to i64; the
    // promotion target must win under either declaration order.
    let mut long_first = cases()
        .case(case(|_: i64| {}))
        .complete(case(|_: i32| {}));
    assert_eq!(long_first.try_apply(7i16), Ok(1));

    let mut int_first = cases()
        .case(case(|_: i32| {}))
        .complete(case(|_: i64| {}));
    assert_eq!(int_first.try_apply(7i16), Ok(0));
}

#[test]
fn string_literal_prefers_borrowed_slice_over_owning_string() {
    let seen = Rc::new(RefCell::new(Vec::new()));

    let s = seen.clone();
    let borrowed = case(move |v: &'static str| s.borrow_mut().push(format!("slice:{v}")));
    let s = seen.clone();
    let owned = case(move |v: String| s.borrow_mut().push(format!("owned:{v}")));

    let mut matcher = cases().case(borrowed).complete(owned);
    assert_eq!(matcher.try_apply("Hello"), Ok(0));
    assert_eq!(*seen.borrow(), vec!["slice:Hello".to_string()]);

    // Without a slice case the owning case is still reachable through the
    // user conversion.
    let s = seen.clone();
    let owned = case(move |v: String| s.borrow_mut().push(format!("owned:{v}")));
    let mut matcher = cases().case(owned).complete(case(|| {}));
    assert_eq!(matcher.try_apply("Hello"), Ok(0));
}

#[test]
fn decomposed_and_aggregate_cases_resolve_deterministically() {
    // Both cases receive (3, "Hello") without conversions; the forms are
    // equally direct and the first declared wins, under both orders.
    let selected = (match_on((3i32, "Hello"))
        | case(|n: i32, s: &'static str| assert_eq!((n, s), (3, "Hello"))))
    .finish(case(|pair: (i32, &'static str)| {
        assert_eq!(pair, (3, "Hello"));
    }));
    assert_eq!(selected, Ok(0));

    let selected = (match_on((3i32, "Hello"))
        | case(|pair: (i32, &'static str)| assert_eq!(pair, (3, "Hello"))))
    .finish(case(|n: i32, s: &'static str| {
        assert_eq!((n, s), (3, "Hello"));
    }));
    assert_eq!(selected, Ok(0));
}

#[test]
fn direct_aggregate_beats_converting_decomposition() {
    // The positional case needs an i32 -> i64 conversion on top of the
    // decomposition; the whole-aggregate case is direct and wins in either
    // declaration order.
    let mut split_first = cases()
        .case(case(|_: i64, _: &'static str| {}))
        .complete(case(|_: (i32, &'static str)| {}));
    assert_eq!(split_first.try_apply((3i32, "Hello")), Ok(1));

    let mut whole_first = cases()
        .case(case(|_: (i32, &'static str)| {}))
        .complete(case(|_: i64, _: &'static str| {}));
    assert_eq!(whole_first.try_apply((3i32, "Hello")), Ok(0));
}

#[test]
fn base_case_catches_unrelated_values() {
    let hits = Rc::new(RefCell::new(0));
    let h = hits.clone();
    let mut matcher = cases()
        .case(case(|_: &'static str| {}))
        .case(case(|_: (i32, i32)| {}))
        .complete(case(move || *h.borrow_mut() += 1));

    assert_eq!(matcher.try_apply(2.5f64), Ok(2));
    assert_eq!(*hits.borrow(), 1);
}

#[test]
fn non_exhaustive_match_is_a_hard_error() {
    let result = (match_on(1.5f32) | case(|_: &'static str| {}))
        .finish(case(|_: (i32, i32)| {}));

    assert_eq!(
        result,
        Err(MatchError::NonExhaustive {
            value_type: Type::f32(),
            candidate_count: 2,
        })
    );
}

#[test]
fn strict_policy_rejects_equal_rank_candidates() {
    // Both candidates are standard conversions from i32.
    let result = (match_on(5i32).strict() | case(|_: i16| {})).finish(case(|_: i64| {}));

    assert_eq!(
        result,
        Err(MatchError::Ambiguous {
            value_type: Type::i32(),
            first: 0,
            second: 1,
        })
    );

    // With an exact candidate present the strict policy agrees with the
    // default one.
    let result = (match_on(5i32).strict()
        | case(|_: i16| {})
        | case(|_: i32| {}))
    .finish(case(|| {}));
    assert_eq!(result, Ok(1));
}

#[test]
fn reusable_matcher_is_stable_across_invocations() {
    let order = Rc::new(RefCell::new(Vec::new()));

    let o = order.clone();
    let on_int = case(move |n: i32| o.borrow_mut().push(n));
    let mut matcher = cases().case(on_int).complete(case(|| {}));

    for round in 0..3 {
        assert_eq!(matcher.try_apply(round), Ok(0));
    }
    assert_eq!(*order.borrow(), vec![0, 1, 2]);
}
