use crate::core::detector::{detect, looks_roman};
use crate::domain::converter::{to_arabic, to_roman};
use crate::domain::model::{ConversionRequest, ConversionResult, Direction, RequestedDirection};
use crate::domain::ports::ConversionService;
use crate::domain::validation::parse_integer_literal;
use crate::utils::error::{DomainError, DomainResult};

/// Default [`ConversionService`]: trims, resolves direction, converts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertUseCase;

impl ConvertUseCase {
    pub fn new() -> Self {
        Self
    }
}

impl ConversionService for ConvertUseCase {
    fn convert(&self, request: &ConversionRequest) -> DomainResult<ConversionResult> {
        convert(request)
    }
}

pub fn convert(request: &ConversionRequest) -> DomainResult<ConversionResult> {
    let input = request.input.trim();
    if input.is_empty() {
        return Err(DomainError::validation("Input cannot be empty"));
    }

    let direction = match request.direction {
        RequestedDirection::Auto => detect(input)?,
        RequestedDirection::ToRoman => Direction::ToRoman,
        RequestedDirection::ToNumeric => Direction::ToNumeric,
    };

    let output = match direction {
        Direction::ToRoman => convert_to_roman(input)?,
        Direction::ToNumeric => convert_to_numeric(input)?,
    };

    Ok(ConversionResult {
        input: input.to_string(),
        output,
        direction,
    })
}

fn convert_to_roman(input: &str) -> DomainResult<String> {
    // 範圍檢查交給 domain 層
    let n = parse_integer_literal(input).ok_or_else(|| {
        DomainError::validation("Input must be a valid integer for conversion to Roman")
    })?;
    to_roman(n)
}

fn convert_to_numeric(input: &str) -> DomainResult<String> {
    if !looks_roman(input) {
        return Err(DomainError::validation(
            "Input must be a valid Roman numeral for conversion to numeric",
        ));
    }
    Ok(to_arabic(input)?.to_string())
}
