use std::panic::{self, AssertUnwindSafe};

use outcome_rail::escape::UnsafeAccess;
use outcome_rail::{OptionalOutcome, Outcome, StackCapture};

fn panic_message<R>(f: impl FnOnce() -> R) -> String {
    let payload = match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => panic!("expected a panic"),
        Err(payload) => payload,
    };
    payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_default()
}

#[test]
fn extracts_matching_payloads() {
    assert_eq!(Outcome::success(5).unsafe_get_value(), 5);
    assert_eq!(OptionalOutcome::success("x").unsafe_get_value(), "x");

    let failed: Outcome<u8> = Outcome::fail_with("gone", StackCapture::Skip);
    assert_eq!(failed.unsafe_get_error().message(), "gone");
}

#[test]
fn value_from_failure_carries_source_error() {
    let failed: Outcome<u8> = Outcome::fail_with("disk offline", StackCapture::Skip);
    let message = panic_message(|| failed.unsafe_get_value());

    assert!(message.contains("invalid state access"));
    assert!(message.contains("disk offline"));
}

#[test]
fn error_from_success_panics() {
    let message = panic_message(|| Outcome::success(1).unsafe_get_error());
    assert!(message.contains("Success state"));
}

#[test]
fn optional_none_panics_for_both_accessors() {
    let value = panic_message(|| OptionalOutcome::<u8>::none().unsafe_get_value());
    let error = panic_message(|| OptionalOutcome::<u8>::none().unsafe_get_error());

    assert!(value.contains("None state"));
    assert!(error.contains("None state"));
}
