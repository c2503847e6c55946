pub mod detector;
pub mod use_case;

pub use crate::domain::model::{ConversionRequest, ConversionResult, Direction, RequestedDirection};
pub use crate::domain::ports::ConversionService;
pub use crate::utils::error::{DomainError, DomainResult};
pub use use_case::{convert, ConvertUseCase};
