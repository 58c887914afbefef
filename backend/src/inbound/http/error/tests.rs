//! Tests for HTTP error mapping.

use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

async fn body_json(response: HttpResponse) -> Value {
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error envelope is JSON")
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

#[actix_web::test]
async fn internal_errors_are_redacted() {
    let error = Error::internal("mineral repository error: relation does not exist")
        .with_trace_id(TRACE_ID)
        .with_details(json!({ "sql": "select" }));

    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok()),
        Some(TRACE_ID)
    );

    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({
            "code": "internal_error",
            "message": "Internal server error",
            "traceId": TRACE_ID,
        })
    );
}

#[actix_web::test]
async fn client_errors_keep_message_and_details() {
    let error = Error::not_found("mineral 42 not found").with_details(json!({ "id": 42 }));

    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());

    let body = body_json(response).await;
    assert_eq!(body.get("message"), Some(&json!("mineral 42 not found")));
    assert_eq!(body.get("details"), Some(&json!({ "id": 42 })));
}

#[test]
fn template_failures_become_internal_errors() {
    let env = minijinja::Environment::new();
    let failure = env
        .get_template("missing.html")
        .expect_err("template is not registered");
    let error = Error::from(failure);
    assert_eq!(error.code(), ErrorCode::InternalError);
}
