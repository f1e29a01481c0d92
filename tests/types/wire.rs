use outcome_rail::Error;
use serde_json::json;

#[test]
fn serializes_known_fields_and_flattened_extensions() {
    let err = Error::builder()
        .message("quota exceeded")
        .title("Quota")
        .error_code(429)
        .identifier("quota.exceeded")
        .extension("retryAfter", 30)
        .inner_error(Error::new("bucket empty"))
        .build();

    let value = serde_json::to_value(&err).unwrap();

    assert_eq!(
        value,
        json!({
            "message": "quota exceeded",
            "errorCode": 429,
            "identifier": "quota.exceeded",
            "title": "Quota",
            "innerError": { "message": "bucket empty", "title": "Error" },
            "retryAfter": 30
        })
    );
}

#[test]
fn absent_fields_are_omitted() {
    let value = serde_json::to_value(Error::new("bare")).unwrap();
    let object = value.as_object().unwrap();

    assert!(!object.contains_key("errorCode"));
    assert!(!object.contains_key("stackTrace"));
    assert!(!object.contains_key("innerError"));
    assert!(!object.contains_key("isSensitive"));
}

#[test]
fn deserializes_unknown_keys_as_extensions() {
    let err: Error = serde_json::from_value(json!({
        "message": "payment failed",
        "title": "Payment",
        "errorCode": 402,
        "stackTrace": "at charge()",
        "innerError": { "message": "card expired" },
        "orderId": "A-17",
        "amount": 12.5
    }))
    .unwrap();

    assert_eq!(err.message(), "payment failed");
    assert_eq!(err.error_code(), Some(402));
    assert_eq!(err.stack_trace(), Some("at charge()"));
    assert_eq!(err.inner_error().map(Error::message), Some("card expired"));
    assert_eq!(err.extensions().get("orderId"), Some(&json!("A-17")));
    assert_eq!(err.extensions().get("amount"), Some(&json!(12.5)));
}

#[test]
fn null_fields_read_as_unset() {
    let err: Error = serde_json::from_value(json!({
        "message": "x",
        "errorCode": null,
        "identifier": null,
        "innerError": null
    }))
    .unwrap();

    assert_eq!(err.error_code(), None);
    assert_eq!(err.identifier(), None);
    assert!(err.inner_error().is_none());
    assert!(err.extensions().is_empty());
}

#[test]
fn extensions_survive_a_round_trip() {
    let err = Error::new("x").with_extension("tenant", "acme").with_extension("tries", 2);
    let text = serde_json::to_string(&err).unwrap();
    let back: Error = serde_json::from_str(&text).unwrap();

    assert_eq!(back.extensions(), err.extensions());
    assert_eq!(back.message(), "x");
}

#[test]
fn rejects_non_object_input() {
    assert!(serde_json::from_value::<Error>(json!("just a string")).is_err());
}
