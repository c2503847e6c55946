use crate::domain::model::{ConversionRequest, ConversionResult};
use crate::utils::error::DomainResult;

/// The single operation the conversion core exposes to its callers.
pub trait ConversionService: Send + Sync {
    fn convert(&self, request: &ConversionRequest) -> DomainResult<ConversionResult>;
}
