//! Tests for the error payload constructors and serde contract.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
fn invalid_request_constructor_sets_code() {
    let err = Error::invalid_request("bad");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id
        .parse()
        .expect("fixtures provide a valid UUID");
    let error = TraceId::scope(trace_id, async move {
        Error::new(ErrorCode::InternalError, "boom")
    })
    .await;

    assert_eq!(error.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
fn serialises_with_camel_case_keys(expected_trace_id: String) {
    let error = Error::invalid_request("invalid weight: weight must be greater than 0")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({ "field": "weight" }));

    let value = serde_json::to_value(&error).expect("error serialises");

    assert_eq!(
        value,
        json!({
            "code": "invalid_request",
            "message": "invalid weight: weight must be greater than 0",
            "traceId": expected_trace_id,
            "details": { "field": "weight" },
        })
    );
}

#[rstest]
fn deserialise_rejects_unknown_fields() {
    let payload = json!({ "code": "internal_error", "message": "boom", "error": "boom" });
    let result = serde_json::from_value::<Error>(payload);
    assert!(result.is_err(), "unknown fields must be rejected");
}

#[rstest]
fn deserialise_accepts_snake_case_trace_alias(expected_trace_id: String) {
    let payload = json!({
        "code": "invalid_request",
        "message": "bad",
        "trace_id": expected_trace_id,
    });
    let error: Error = serde_json::from_value(payload).expect("alias accepted");
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}
