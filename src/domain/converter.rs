use crate::domain::model::{ArabicNumber, RomanNumeral};
use crate::domain::validation::{is_valid_roman, validate_range};
use crate::utils::error::{DomainError, DomainResult};

/// Greedy encoding table, largest value first. The order matters.
const ROMAN_PAIRS: [(u16, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Longest canonical numeral (MMMDCCCLXXXVIII).
pub const MAX_ROMAN_LEN: usize = 15;

const fn symbol_value(symbol: u8) -> Option<u16> {
    match symbol {
        b'I' => Some(1),
        b'V' => Some(5),
        b'X' => Some(10),
        b'L' => Some(50),
        b'C' => Some(100),
        b'D' => Some(500),
        b'M' => Some(1000),
        _ => None,
    }
}

pub fn to_roman(n: i64) -> DomainResult<RomanNumeral> {
    validate_range(n).map_err(|e| DomainError::range(format!("Cannot convert {}: {}", n, e)))?;

    let mut result = String::with_capacity(MAX_ROMAN_LEN);
    let mut remaining = n as u16;

    for (value, numeral) in ROMAN_PAIRS {
        while remaining >= value {
            result.push_str(numeral);
            remaining -= value;
        }
    }

    Ok(result)
}

pub fn to_arabic(roman: &str) -> DomainResult<ArabicNumber> {
    if !is_valid_roman(roman) {
        return Err(DomainError::invalid_numeral(format!(
            "Invalid Roman numeral: {}",
            roman
        )));
    }

    let mut total: u16 = 0;
    let mut previous: u16 = 0;

    // 從右到左：比右邊小的符號要減去
    for symbol in roman.bytes().rev() {
        let value = symbol_value(symbol)
            .ok_or_else(|| DomainError::invalid_numeral(format!("Invalid Roman numeral: {}", roman)))?;

        if value < previous {
            total -= value;
        } else {
            total += value;
        }
        previous = value;
    }

    Ok(total)
}
