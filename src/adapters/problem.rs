//! RFC 7807 problem details for conversion failures.
//!
//! See <https://datatracker.ietf.org/doc/html/rfc7807>.

use crate::utils::error::{AppError, ConversionErrorKind, DomainError};
use serde::{Deserialize, Serialize};

pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// Category of a problem body. Each maps to a fixed type URI, title and status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemKind {
    Validation,
    Range,
    InvalidNumeral,
    MalformedRequest,
    BadRequest,
    Internal,
}

impl ProblemKind {
    pub fn type_uri(&self) -> &'static str {
        match self {
            ProblemKind::Validation => "/problems/validation-error",
            ProblemKind::Range => "/problems/range-error",
            ProblemKind::InvalidNumeral => "/problems/invalid-numeral",
            ProblemKind::MalformedRequest => "/problems/malformed-request",
            ProblemKind::BadRequest => "/problems/bad-request",
            ProblemKind::Internal => "/problems/internal-error",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ProblemKind::Validation => "Validation Error",
            ProblemKind::Range => "Value Out of Range",
            ProblemKind::InvalidNumeral => "Invalid Roman Numeral",
            ProblemKind::MalformedRequest => "Malformed Request",
            ProblemKind::BadRequest => "Invalid Request",
            ProblemKind::Internal => "Internal Server Error",
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            ProblemKind::Validation | ProblemKind::Range | ProblemKind::InvalidNumeral => 422,
            ProblemKind::MalformedRequest | ProblemKind::BadRequest => 400,
            ProblemKind::Internal => 500,
        }
    }
}

impl From<&DomainError> for ProblemKind {
    fn from(error: &DomainError) -> Self {
        match error {
            DomainError::Validation { .. } => ProblemKind::Validation,
            DomainError::Conversion {
                kind: ConversionErrorKind::Range,
                ..
            } => ProblemKind::Range,
            DomainError::Conversion {
                kind: ConversionErrorKind::InvalidNumeral,
                ..
            } => ProblemKind::InvalidNumeral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl ProblemDetails {
    pub fn new(kind: ProblemKind, detail: impl Into<String>, instance: Option<&str>) -> Self {
        Self {
            problem_type: kind.type_uri().to_string(),
            title: kind.title().to_string(),
            status: kind.status(),
            detail: detail.into(),
            instance: instance.map(str::to_string),
        }
    }

    pub fn from_domain(error: &DomainError, instance: Option<&str>) -> Self {
        Self::new(ProblemKind::from(error), error.message(), instance)
    }

    pub fn malformed_request(detail: impl Into<String>, instance: Option<&str>) -> Self {
        Self::new(ProblemKind::MalformedRequest, detail, instance)
    }

    /// Body for failures outside the domain taxonomy; the cause is not exposed.
    pub fn internal(instance: Option<&str>) -> Self {
        Self::new(ProblemKind::Internal, "An unexpected error occurred", instance)
    }

    pub fn from_app_error(error: &AppError, instance: Option<&str>) -> Self {
        match error {
            AppError::Domain(e) => Self::from_domain(e, instance),
            AppError::MalformedRequest { message } => Self::malformed_request(message, instance),
            AppError::IoError(_)
            | AppError::SerializationError(_)
            | AppError::ConfigError { .. }
            | AppError::InvalidConfigValueError { .. } => Self::internal(instance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_422() {
        let cases = [
            (DomainError::validation("Input cannot be empty"), "/problems/validation-error"),
            (DomainError::range("Cannot convert 0"), "/problems/range-error"),
            (DomainError::invalid_numeral("Invalid Roman numeral: IIII"), "/problems/invalid-numeral"),
        ];

        for (error, type_uri) in cases {
            let problem = ProblemDetails::from_domain(&error, Some("/api/convert"));
            assert_eq!(problem.status, 422);
            assert_eq!(problem.problem_type, type_uri);
            assert_eq!(problem.detail, error.message());
            assert_eq!(problem.instance.as_deref(), Some("/api/convert"));
        }
    }

    #[test]
    fn test_serialization_uses_type_and_skips_missing_instance() {
        let problem = ProblemDetails::malformed_request("Input cannot be empty", None);
        let value = serde_json::to_value(&problem).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "/problems/malformed-request",
                "title": "Malformed Request",
                "status": 400,
                "detail": "Input cannot be empty"
            })
        );
    }

    #[test]
    fn test_unexpected_errors_hide_details() {
        let error = AppError::IoError(std::io::Error::other("disk on fire"));
        let problem = ProblemDetails::from_app_error(&error, Some("/api/convert"));
        assert_eq!(problem.status, 500);
        assert_eq!(problem.problem_type, "/problems/internal-error");
        assert!(!problem.detail.contains("disk"));
    }
}
