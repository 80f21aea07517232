//! Envelope assertions.

use serde_json::Value;

/// Returns the `request` record of an envelope, asserting it exists.
pub fn request_record(body: &Value) -> &Value {
    let record = &body["request"];
    assert!(record.is_object(), "Expected request envelope, got {}", body);
    record
}

/// Asserts that the envelope reports the expected message type.
pub fn assert_message_type(body: &Value, expected: &str) {
    let actual = request_record(body)["message"]["type"]
        .as_str()
        .unwrap_or("");
    assert_eq!(
        actual, expected,
        "Expected message type {}, got {}",
        expected, actual
    );
}

/// Asserts that the envelope is a failure with no answer.
pub fn assert_failure(body: &Value, expected_type: &str) {
    assert_message_type(body, expected_type);
    assert!(
        request_record(body)["answer"].is_null(),
        "Expected null answer, got {}",
        request_record(body)["answer"]
    );
}

/// Returns the message text of the envelope.
pub fn message_text(body: &Value) -> &str {
    request_record(body)["message"]["text"]
        .as_str()
        .unwrap_or("")
}

/// Returns the resolved value of `family` in a successful envelope.
pub fn answer_value(body: &Value, family: &str) -> u64 {
    request_record(body)["answer"]["families"][family]["value"]
        .as_u64()
        .unwrap_or_else(|| panic!("No resolved value for {} in {}", family, body))
}
