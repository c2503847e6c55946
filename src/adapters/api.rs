//! Transport-agnostic request handlers.
//!
//! Each handler turns a raw request into a status code and a JSON body so that
//! any front end (HTTP router, CLI, serverless function) can reply without
//! knowing about the conversion core's error types.

use crate::adapters::problem::{ProblemDetails, ProblemKind, PROBLEM_CONTENT_TYPE};
use crate::core::detector::looks_roman;
use crate::domain::converter::{to_arabic, to_roman};
use crate::domain::model::{ConversionRequest, RequestedDirection};
use crate::domain::ports::ConversionService;
use crate::domain::validation::parse_integer_literal;
use crate::utils::error::{AppError, Result};
use serde_json::{json, Value};

pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    pub fn problem(problem: ProblemDetails) -> Self {
        let status = problem.status;
        let body = serde_json::to_value(&problem).unwrap_or_else(|e| {
            tracing::error!("Failed to serialize problem details: {}", e);
            json!({
                "type": ProblemKind::Internal.type_uri(),
                "title": ProblemKind::Internal.title(),
                "status": ProblemKind::Internal.status(),
                "detail": "An unexpected error occurred",
            })
        });
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn content_type(&self) -> &'static str {
        if self.is_success() {
            JSON_CONTENT_TYPE
        } else {
            PROBLEM_CONTENT_TYPE
        }
    }
}

/// Handles a conversion request body such as `{"input": "42", "direction": "auto"}`.
pub fn handle_convert<S: ConversionService + ?Sized>(
    service: &S,
    raw_body: &str,
    instance: &str,
) -> ApiResponse {
    tracing::debug!(instance, "Handling conversion request");

    match parse_request_body(raw_body) {
        Ok(request) => respond_convert(service, &request, instance),
        Err(e) => error_response(&e, instance),
    }
}

/// Runs an already-parsed request through the service.
pub fn respond_convert<S: ConversionService + ?Sized>(
    service: &S,
    request: &ConversionRequest,
    instance: &str,
) -> ApiResponse {
    match run_convert(service, request) {
        Ok(body) => ApiResponse::ok(body),
        Err(e) => error_response(&e, instance),
    }
}

fn run_convert<S: ConversionService + ?Sized>(
    service: &S,
    request: &ConversionRequest,
) -> Result<Value> {
    let result = service.convert(request)?;
    tracing::debug!(
        direction = %result.direction,
        "Converted {} to {}",
        result.input,
        result.output
    );
    Ok(serde_json::to_value(result)?)
}

/// Maps any failure to a problem response, logging by severity.
pub fn error_response(error: &AppError, instance: &str) -> ApiResponse {
    match error {
        AppError::Domain(e) => {
            tracing::debug!(
                instance,
                kind = ?e.conversion_kind(),
                "Conversion rejected: {}",
                e
            );
        }
        AppError::MalformedRequest { message } => {
            tracing::debug!(instance, "Malformed request: {}", message);
        }
        other => {
            tracing::error!(instance, "Unexpected error: {}", other);
        }
    }
    ApiResponse::problem(ProblemDetails::from_app_error(error, Some(instance)))
}

/// Checks the request shape and collects every issue before giving up.
pub fn parse_request_body(raw_body: &str) -> Result<ConversionRequest> {
    let value: Value = serde_json::from_str(raw_body).map_err(|e| AppError::MalformedRequest {
        message: format!("Request body must be valid JSON: {}", e),
    })?;

    let Some(object) = value.as_object() else {
        return Err(AppError::MalformedRequest {
            message: "Request body must be a JSON object".to_string(),
        });
    };

    let mut issues = Vec::new();

    let input = match object.get("input") {
        Some(Value::String(s)) if s.is_empty() => {
            issues.push("Input cannot be empty".to_string());
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            issues.push("Input must be a string".to_string());
            None
        }
        None => {
            issues.push("Input is required".to_string());
            None
        }
    };

    let direction = match object.get("direction") {
        None | Some(Value::Null) => Some(RequestedDirection::Auto),
        Some(raw) => match serde_json::from_value::<RequestedDirection>(raw.clone()) {
            Ok(direction) => Some(direction),
            Err(_) => {
                issues.push("Direction must be one of: toRoman, toNumeric, auto".to_string());
                None
            }
        },
    };

    match (input, direction) {
        (Some(input), Some(direction)) if issues.is_empty() => {
            Ok(ConversionRequest::new(input).with_direction(direction))
        }
        _ => Err(AppError::MalformedRequest {
            message: issues.join("; "),
        }),
    }
}

/// Quick Arabic to Roman lookup, e.g. `?arabic=1994`.
pub fn handle_arabic_to_roman(arabic: Option<&str>, instance: &str) -> ApiResponse {
    let Some(arabic) = arabic.filter(|s| !s.is_empty()) else {
        return bad_request("Parameter 'arabic' is required", instance);
    };

    let Some(n) = parse_integer_literal(arabic) else {
        return bad_request("Parameter 'arabic' must be a valid integer", instance);
    };

    match to_roman(n) {
        Ok(roman) => ApiResponse::ok(json!({ "roman": roman })),
        Err(e) => bad_request(e.message(), instance),
    }
}

/// Quick Roman to Arabic lookup, e.g. `?roman=mcmxciv`. Case-insensitive.
pub fn handle_roman_to_arabic(roman: Option<&str>, instance: &str) -> ApiResponse {
    let Some(roman) = roman.filter(|s| !s.is_empty()) else {
        return bad_request("Parameter 'roman' is required", instance);
    };

    let upper = roman.to_uppercase();
    if !looks_roman(&upper) {
        return bad_request(
            "Parameter 'roman' must contain only valid Roman characters (I, V, X, L, C, D, M)",
            instance,
        );
    }

    match to_arabic(&upper) {
        Ok(arabic) => ApiResponse::ok(json!({ "arabic": arabic })),
        Err(e) => bad_request(e.message(), instance),
    }
}

fn bad_request(detail: &str, instance: &str) -> ApiResponse {
    tracing::debug!(instance, "Rejected quick conversion: {}", detail);
    ApiResponse::problem(ProblemDetails::new(
        ProblemKind::BadRequest,
        detail,
        Some(instance),
    ))
}
