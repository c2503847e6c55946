use crate::utils::error::{DomainError, DomainResult};
use regex::Regex;
use std::sync::LazyLock;

pub const MIN_VALUE: i64 = 1;
pub const MAX_VALUE: i64 = 3999;

static ROMAN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$")
        .expect("roman numeral pattern is valid")
});

/// True iff `input` is a non-empty, canonical, uppercase Roman numeral.
pub fn is_valid_roman(input: &str) -> bool {
    !input.is_empty() && ROMAN_PATTERN.is_match(input)
}

/// True iff `input` is a clean base-10 literal in [1, 3999].
///
/// The parsed value must serialize back to exactly `input`, which rules out
/// signs, whitespace, leading zeros and anything that is not an integer.
pub fn is_valid_arabic(input: &str) -> bool {
    match parse_integer_literal(input) {
        Some(n) => (MIN_VALUE..=MAX_VALUE).contains(&n),
        None => false,
    }
}

pub fn validate_range(n: i64) -> DomainResult<()> {
    if !(MIN_VALUE..=MAX_VALUE).contains(&n) {
        return Err(DomainError::validation(format!(
            "Number must be between {} and {}",
            MIN_VALUE, MAX_VALUE
        )));
    }
    Ok(())
}

/// Parses `input` as an integer only if it round-trips unchanged.
pub(crate) fn parse_integer_literal(input: &str) -> Option<i64> {
    let n: i64 = input.parse().ok()?;
    (n.to_string() == input).then_some(n)
}
