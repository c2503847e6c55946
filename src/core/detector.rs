use crate::domain::model::Direction;
use crate::utils::error::{DomainError, DomainResult};
use regex::Regex;
use std::sync::LazyLock;

// ASCII only: `\d` would also admit other Unicode digits.
static NUMERIC_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("numeric shape pattern is valid"));

static ROMAN_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[IVXLCDM]+$").expect("roman shape pattern is valid"));

pub fn looks_numeric(input: &str) -> bool {
    NUMERIC_SHAPE.is_match(input)
}

pub fn looks_roman(input: &str) -> bool {
    ROMAN_SHAPE.is_match(input)
}

/// Infers the conversion direction from the shape of `input`.
pub fn detect(input: &str) -> DomainResult<Direction> {
    classify(looks_numeric(input), looks_roman(input))
}

fn classify(numeric: bool, roman: bool) -> DomainResult<Direction> {
    match (numeric, roman) {
        // 兩個字元集不重疊，理論上不會發生
        (true, true) => Err(DomainError::validation(
            "Ambiguous input: cannot detect conversion direction",
        )),
        (true, false) => Ok(Direction::ToRoman),
        (false, true) => Ok(Direction::ToNumeric),
        (false, false) => Err(DomainError::validation(
            "Input is neither a valid number nor a valid Roman numeral",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_numeric_and_roman() {
        assert_eq!(detect("42").unwrap(), Direction::ToRoman);
        assert_eq!(detect("0").unwrap(), Direction::ToRoman);
        assert_eq!(detect("XLII").unwrap(), Direction::ToNumeric);
        // Shape only: grammar is checked later by the converter.
        assert_eq!(detect("IIII").unwrap(), Direction::ToNumeric);
    }

    #[test]
    fn test_detect_rejects_mixed_and_unknown_input() {
        for input in ["12X", "abc", "xlii", "-5", "4.2", "", "٤٢"] {
            let err = detect(input).unwrap_err();
            assert!(err.is_validation(), "{:?}", input);
            assert_eq!(
                err.message(),
                "Input is neither a valid number nor a valid Roman numeral"
            );
        }
    }

    #[test]
    fn test_ambiguous_branch_is_unreachable_for_real_input() {
        // Dead code kept as a fallback: no string satisfies both shapes.
        for c in ('0'..='9').chain("IVXLCDM".chars()) {
            let s = c.to_string();
            assert!(!(looks_numeric(&s) && looks_roman(&s)));
        }

        let err = classify(true, true).unwrap_err();
        assert!(err.is_validation());
        assert!(err.message().starts_with("Ambiguous input"));
    }
}
