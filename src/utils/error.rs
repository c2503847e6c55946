use std::fmt;
use thiserror::Error;

/// 轉換錯誤的子類別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionErrorKind {
    /// Arabic value outside [1, 3999].
    Range,
    /// Roman string that fails the canonical grammar.
    InvalidNumeral,
}

impl ConversionErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionErrorKind::Range => "range",
            ConversionErrorKind::InvalidNumeral => "invalid-numeral",
        }
    }
}

impl fmt::Display for ConversionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures raised by the conversion core.
///
/// `Validation` means the input has the wrong shape (empty, ambiguous, not
/// parseable as the requested kind). `Conversion` means the shape is right but
/// a domain rule is violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    Conversion {
        kind: ConversionErrorKind,
        message: String,
    },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }

    pub fn range(message: impl Into<String>) -> Self {
        DomainError::Conversion {
            kind: ConversionErrorKind::Range,
            message: message.into(),
        }
    }

    pub fn invalid_numeral(message: impl Into<String>) -> Self {
        DomainError::Conversion {
            kind: ConversionErrorKind::InvalidNumeral,
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            DomainError::Validation { message } | DomainError::Conversion { message, .. } => {
                message
            }
        }
    }

    /// Sub-kind of a conversion failure; `None` for validation failures.
    pub fn conversion_kind(&self) -> Option<ConversionErrorKind> {
        match self {
            DomainError::Validation { .. } => None,
            DomainError::Conversion { kind, .. } => Some(*kind),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation { .. })
    }
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Malformed request: {message}")]
    MalformedRequest { message: String },
}

impl AppError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::Domain(e) => e.message().to_string(),
            AppError::IoError(e) => format!("Could not read or write a file: {}", e),
            AppError::SerializationError(e) => format!("Could not process JSON: {}", e),
            AppError::ConfigError { message } => format!("Configuration problem: {}", message),
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            AppError::MalformedRequest { message } => format!("Request is malformed: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::Domain(DomainError::Validation { .. }) => {
                "Enter an Arabic number (1-3999) or a Roman numeral using only I, V, X, L, C, D, M"
            }
            AppError::Domain(DomainError::Conversion {
                kind: ConversionErrorKind::Range,
                ..
            }) => "Classical Roman numerals only represent values from 1 to 3999",
            AppError::Domain(DomainError::Conversion {
                kind: ConversionErrorKind::InvalidNumeral,
                ..
            }) => "I, X, C, M repeat at most 3 times and V, L, D never repeat; write IV instead of IIII",
            AppError::IoError(_) => "Check that the file exists and is readable",
            AppError::SerializationError(_) | AppError::MalformedRequest { .. } => {
                "Send a JSON object such as {\"input\": \"42\", \"direction\": \"auto\"}"
            }
            AppError::ConfigError { .. } | AppError::InvalidConfigValueError { .. } => {
                "Check the configuration file against the documented keys and values"
            }
        }
    }

    /// 依錯誤類型決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Domain(DomainError::Validation { .. }) => 2,
            AppError::Domain(DomainError::Conversion { .. }) => 3,
            AppError::MalformedRequest { .. } | AppError::SerializationError(_) => 2,
            AppError::ConfigError { .. } | AppError::InvalidConfigValueError { .. } => 78,
            AppError::IoError(_) => 74,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
