use core::str::FromStr;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{json, Value};

use stockroom_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> Response {
    let message = err.to_string();
    match err {
        DomainError::Validation { field, reason } => json_error_with_details(
            StatusCode::BAD_REQUEST,
            "validation_error",
            message,
            json!({ "field": field, "reason": reason }),
        ),
        DomainError::InvalidState { valid_values } => json_error_with_details(
            StatusCode::BAD_REQUEST,
            "invalid_state",
            message,
            json!({ "valid_values": valid_values }),
        ),
        DomainError::InvalidStateTransition { current, requested } => json_error_with_details(
            StatusCode::BAD_REQUEST,
            "invalid_state_transition",
            message,
            json!({ "current": current, "requested": requested }),
        ),
        DomainError::NotFound {
            resource,
            identifier,
        } => json_error_with_details(
            StatusCode::NOT_FOUND,
            "not_found",
            message,
            json!({ "resource": resource, "identifier": identifier }),
        ),
        DomainError::Duplicate { resource, value } => json_error_with_details(
            StatusCode::CONFLICT,
            "duplicate_resource",
            message,
            json!({ "resource": resource, "value": value }),
        ),
        DomainError::InsufficientStock {
            available,
            requested,
        } => json_error_with_details(
            StatusCode::CONFLICT,
            "insufficient_stock",
            message,
            json!({ "available": available, "requested": requested }),
        ),
        DomainError::Conflict {
            resource,
            identifier,
        } => json_error_with_details(
            StatusCode::CONFLICT,
            "conflict",
            message,
            json!({ "resource": resource, "identifier": identifier }),
        ),
        DomainError::Storage(_) => {
            tracing::error!(error = %message, "storage failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "storage_error", message)
        }
    }
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    json_error_with_details(status, code, message, json!({}))
}

pub fn json_error_with_details(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
    details: Value,
) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
            "details": details,
        })),
    )
        .into_response()
}

pub fn parse_id<I: FromStr>(raw: &str, what: &'static str) -> Result<I, Response> {
    raw.parse().map_err(|_| {
        json_error(
            StatusCode::BAD_REQUEST,
            "invalid_id",
            format!("invalid {what} id"),
        )
    })
}

pub fn json_rejection(rejection: JsonRejection) -> Response {
    json_error(rejection.status(), "invalid_body", rejection.body_text())
}

pub fn query_rejection(rejection: QueryRejection) -> Response {
    json_error(rejection.status(), "invalid_query", rejection.body_text())
}
