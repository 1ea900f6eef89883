//! Tests for HTTP error mapping.

use super::*;
use crate::domain::ports::RepositoryError;
use crate::domain::{EntityKind, Violations};
use actix_web::body::to_bytes;
use rstest::rstest;

async fn render(error: ApiError) -> (StatusCode, ErrorBody) {
    let response = ResponseError::error_response(&error);
    let status = response.status();
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("error body deserialises");
    (status, body)
}

#[rstest]
#[case(Error::invalid_id(EntityKind::Driver).into(), StatusCode::BAD_REQUEST)]
#[case(Error::missing_payload(EntityKind::Vehicle).into(), StatusCode::BAD_REQUEST)]
#[case(ApiError::malformed("invalid request body"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found(EntityKind::Vehicle).into(), StatusCode::NOT_FOUND)]
#[case(
    Error::from(RepositoryError::connection("refused")).into(),
    StatusCode::SERVICE_UNAVAILABLE
)]
#[case(
    Error::from(RepositoryError::query("syntax")).into(),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn status_code_matches_error_code(#[case] error: ApiError, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

#[rstest]
#[actix_web::test]
async fn validation_failures_list_every_violation() {
    let violations: Violations = ["vehicle brand is invalid", "vehicle plate is invalid"]
        .into_iter()
        .collect();
    let (status, body) = render(Error::Validation(violations).into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.code, ErrorCode::InvalidRequest);
    assert_eq!(
        body.message,
        "vehicle brand is invalid,vehicle plate is invalid"
    );
    assert_eq!(
        body.details,
        Some(json!({
            "violations": ["vehicle brand is invalid", "vehicle plate is invalid"]
        }))
    );
}

#[rstest]
#[actix_web::test]
async fn not_found_has_no_details() {
    let (status, body) = render(Error::not_found(EntityKind::Driver).into()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.message, "driver not found");
    assert!(body.details.is_none());
}

#[rstest]
#[actix_web::test]
async fn internal_failures_are_redacted() {
    let error = Error::from(RepositoryError::query("relation drivers does not exist"));
    let (status, body) = render(error.into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.code, ErrorCode::InternalError);
    assert_eq!(body.message, "Internal server error");
}

#[rstest]
#[actix_web::test]
async fn unavailable_store_message_passes_through() {
    let error = Error::from(RepositoryError::connection("refused"));
    let (_, body) = render(error.into()).await;
    assert_eq!(body.message, "fleet repository connection failed: refused");
}

#[rstest]
#[actix_web::test]
async fn trace_id_is_included_when_in_scope() {
    let trace_id: TraceId = "00000000-0000-0000-0000-000000000000"
        .parse()
        .expect("valid UUID");
    let (_, body) = TraceId::scope(trace_id, render(ApiError::malformed("bad"))).await;
    assert_eq!(
        body.trace_id.as_deref(),
        Some("00000000-0000-0000-0000-000000000000")
    );
}
