use std::cell::Cell;

use outcome_rail::{
    Error, InvalidStateAccess, OptionalOutcome, Outcome, OutcomeState, StackCapture, StateKind,
    UnitOutcome,
};

fn quiet_fail<T>(message: &str) -> Outcome<T> {
    Outcome::fail_with(message, StackCapture::Skip)
}

#[test]
fn success_matches_only_the_success_branch() {
    let fail_calls = Cell::new(0);
    let out = Outcome::success(7).match_with(
        |v| v,
        |_| {
            fail_calls.set(fail_calls.get() + 1);
            0
        },
    );

    assert_eq!(out, 7);
    assert_eq!(fail_calls.get(), 0);
    assert!(!Outcome::success(7).is_fail());
}

#[test]
fn fail_matches_only_the_fail_branch() {
    let failed: Outcome<i32> = quiet_fail("boom");
    let expected = failed.error().clone();
    let success_calls = Cell::new(0);

    let seen = failed.match_with(
        |_| {
            success_calls.set(success_calls.get() + 1);
            None
        },
        Some,
    );

    assert_eq!(seen, Some(expected));
    assert_eq!(success_calls.get(), 0);
}

#[test]
fn map_on_failure_is_identity_and_skips_transform() {
    let calls = Cell::new(0);
    let failed: Outcome<i32> = quiet_fail("boom");
    let original = failed.clone();

    let mapped = failed.map(|x| {
        calls.set(calls.get() + 1);
        x * 2
    });

    assert_eq!(calls.get(), 0);
    assert_eq!(mapped.error(), original.error());
}

#[test]
fn map_both_transforms_error_on_failure() {
    let failed: Outcome<i32> = quiet_fail("boom");
    let mapped = failed.map_both(|x| x + 1, |e| e.with_error_code(500));

    assert_eq!(mapped.error().error_code(), Some(500));
    assert_eq!(mapped.error().message(), "boom");
}

#[test]
fn and_then_short_circuits_on_failure() {
    let calls = Cell::new(0);
    let failed: Outcome<i32> = quiet_fail("boom");
    let original = failed.clone();

    let chained = failed.and_then(|x| {
        calls.set(calls.get() + 1);
        Outcome::success(x.to_string())
    });

    assert_eq!(calls.get(), 0);
    assert_eq!(chained.error(), original.error());
}

#[test]
fn map_then_and_then_yields_rendered_value() {
    let out = Outcome::success(4).map(|x| x * 2).and_then(|x| {
        if x > 0 {
            Outcome::success(format!("{x}"))
        } else {
            Outcome::fail("neg")
        }
    });

    assert_eq!(out, Outcome::success("8".to_string()));
}

#[test]
fn unit_outcome_composes_into_value_outcome() {
    let done: UnitOutcome = Outcome::unit();
    let next = done.and_then(|()| Outcome::success(42));

    assert_eq!(next.value(), &42);
}

#[test]
fn and_then_optional_crosses_into_optional() {
    let found = Outcome::success(3).and_then_optional(|x| {
        if x > 5 {
            OptionalOutcome::success(x)
        } else {
            OptionalOutcome::none()
        }
    });

    assert!(found.is_none());
}

#[test]
fn side_effects_run_only_on_matching_state() {
    let successes = Cell::new(0);
    let failures = Cell::new(0);

    let ok = Outcome::success(1)
        .on_success(|_| successes.set(successes.get() + 1))
        .on_fail(|_| failures.set(failures.get() + 1));
    let bad: Outcome<i32> = quiet_fail::<i32>("x")
        .on_success(|_| successes.set(successes.get() + 1))
        .on_fail(|_| failures.set(failures.get() + 1));

    assert_eq!(ok, Outcome::success(1));
    assert!(bad.is_fail());
    assert_eq!((successes.get(), failures.get()), (1, 1));
}

#[test]
fn ensure_downgrades_when_predicate_rejects() {
    let rejected = Outcome::success(3).ensure(|x| *x > 10, |x| format!("{x} is too small"));
    let kept = Outcome::success(30).ensure(|x| *x > 10, |x| format!("{x} is too small"));

    assert_eq!(rejected.error().message(), "3 is too small");
    assert_eq!(kept.value(), &30);
}

#[test]
fn ensure_leaves_failure_alone() {
    let calls = Cell::new(0);
    let failed: Outcome<i32> = quiet_fail("first");
    let out = failed.ensure(
        |_| {
            calls.set(calls.get() + 1);
            false
        },
        |_| "second",
    );

    assert_eq!(out.error().message(), "first");
    assert_eq!(calls.get(), 0);
}

#[test]
fn truncate_discards_value() {
    assert_eq!(Outcome::success("payload").truncate(), Outcome::unit());
    assert!(quiet_fail::<u8>("x").truncate().is_fail());
}

#[test]
fn or_else_recovers_failure() {
    let recovered = quiet_fail::<i32>("x").or_else(|_| Outcome::success(0));
    assert_eq!(recovered.value(), &0);
}

#[test]
fn from_option_fails_on_absent_value() {
    let missing: Outcome<i32> = Outcome::from_option(None);
    let present = Outcome::from_option(Some(5));

    assert!(missing.is_fail());
    assert_eq!(missing.error().identifier(), Error::value_required().identifier());
    assert_eq!(present, Outcome::success(5));
}

#[test]
fn from_result_and_back() {
    let out: Outcome<u8> = Outcome::from_result(Err::<u8, _>("bad input"));
    assert_eq!(out.error().message(), "bad input");

    let result: Result<u8, Error> = Outcome::success(9).into();
    assert_eq!(result.ok(), Some(9));
}

#[test]
fn value_access_on_failure_panics() {
    let failed: Outcome<i32> = quiet_fail("boom");
    let caught = std::panic::catch_unwind(|| *failed.value());

    assert!(caught.is_err());
}

#[test]
fn try_value_reports_invalid_state_with_source_error() {
    let failed: Outcome<i32> = quiet_fail("boom");
    let access: InvalidStateAccess = failed.try_value().unwrap_err();

    assert_eq!(access.requested(), StateKind::Success);
    assert_eq!(access.actual(), StateKind::Fail);
    assert_eq!(access.source_error().map(Error::message), Some("boom"));
    assert!(access.to_string().contains("boom"));
}

#[test]
fn try_error_on_success_has_no_source() {
    let access = Outcome::success(1).try_error().unwrap_err();

    assert_eq!(access.actual(), StateKind::Success);
    assert!(access.source_error().is_none());
}

#[test]
fn equality_follows_state_and_payload() {
    let err = Error::new("same");
    let a: Outcome<i32> = Outcome::fail_with(err.clone(), StackCapture::Skip);
    let b: Outcome<i32> = Outcome::fail_with(err, StackCapture::Skip);

    assert_eq!(a, b);
    assert_eq!(Outcome::success(1), Outcome::success(1));
    assert_ne!(Outcome::success(1), Outcome::success(2));
    assert_ne!(a, Outcome::success(1));
}

#[test]
fn state_view_exposes_payload() {
    match Outcome::success("x").state() {
        OutcomeState::Success(v) => assert_eq!(*v, "x"),
        OutcomeState::Fail(_) => panic!("expected success"),
    }
    assert_eq!(quiet_fail::<()>("x").kind(), StateKind::Fail);
}

#[test]
fn unwrap_helpers_fall_back_on_failure() {
    assert_eq!(quiet_fail::<i32>("x").unwrap_or(3), 3);
    assert_eq!(quiet_fail::<i32>("x").unwrap_or_else(|e| e.message().len() as i32), 1);
    assert_eq!(quiet_fail::<String>("x").unwrap_or_default(), "");
}

#[test]
fn iterates_over_success_value_only() {
    let values: Vec<i32> = Outcome::success(2).into_iter().collect();
    assert_eq!(values, [2]);
    assert_eq!(quiet_fail::<i32>("x").iter().count(), 0);
}

#[test]
fn into_optional_keeps_state() {
    assert_eq!(Outcome::success(1).into_optional(), OptionalOutcome::success(1));
    assert!(quiet_fail::<i32>("x").into_optional().is_fail());
}
