pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{OutputFormat, TomlConfig};
pub use crate::core::{convert, ConvertUseCase};
pub use domain::converter::{to_arabic, to_roman};
pub use domain::model::{
    ArabicNumber, ConversionRequest, ConversionResult, Direction, RequestedDirection, RomanNumeral,
};
pub use domain::ports::ConversionService;
pub use domain::validation::{is_valid_arabic, is_valid_roman, validate_range};
pub use utils::error::{AppError, ConversionErrorKind, DomainError, DomainResult, Result};
