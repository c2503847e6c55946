use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated values live in [1, 3999]; raw input is carried as a string.
pub type ArabicNumber = u16;

/// Uppercase string over {I, V, X, L, C, D, M} in canonical form.
pub type RomanNumeral = String;

/// Direction as supplied by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequestedDirection {
    ToRoman,
    ToNumeric,
    #[default]
    Auto,
}

/// Direction after auto-detection has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    ToRoman,
    ToNumeric,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::ToRoman => "toRoman",
            Direction::ToNumeric => "toNumeric",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub input: String,
    #[serde(default)]
    pub direction: RequestedDirection,
}

impl ConversionRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            direction: RequestedDirection::Auto,
        }
    }

    pub fn with_direction(mut self, direction: RequestedDirection) -> Self {
        self.direction = direction;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Input after trimming.
    pub input: String,
    /// Always a string; collaborators decide how to present numbers.
    pub output: String,
    pub direction: Direction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_direction_defaults_to_auto() {
        let request: ConversionRequest = serde_json::from_str(r#"{"input": "42"}"#).unwrap();
        assert_eq!(request.direction, RequestedDirection::Auto);

        let request: ConversionRequest =
            serde_json::from_str(r#"{"input": "XLII", "direction": "toNumeric"}"#).unwrap();
        assert_eq!(request.direction, RequestedDirection::ToNumeric);
    }

    #[test]
    fn test_unknown_direction_is_rejected() {
        let parsed: Result<ConversionRequest, _> =
            serde_json::from_str(r#"{"input": "42", "direction": "sideways"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_result_serializes_camel_case_direction() {
        let result = ConversionResult {
            input: "42".to_string(),
            output: "XLII".to_string(),
            direction: Direction::ToRoman,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"input": "42", "output": "XLII", "direction": "toRoman"})
        );
    }
}
