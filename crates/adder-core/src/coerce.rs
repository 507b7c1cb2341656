//! Loose-to-strict integer coercion for JSON values.

use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::FromPrimitive;
use serde_json::{Number, Value};

use crate::error::{json_type, InputError};

/// Most decimal digits accepted when converting text to an integer.
pub const MAX_DIGITS: usize = 4300;

/// Longest literal echoed back in an error message.
const PREVIEW_CHARS: usize = 200;

/// Coerces an arbitrary JSON value to an integer.
///
/// - integer literals keep their exact value, however large
/// - fractional or exponent literals are truncated toward zero
/// - booleans become `1` / `0`
/// - strings must hold a decimal integer; surrounding whitespace, a leading
///   sign and single underscores between digits are accepted
///
/// `null`, arrays and objects are rejected.
pub fn coerce_integer(field: &'static str, value: &Value) -> Result<BigInt, InputError> {
    match value {
        Value::Bool(flag) => Ok(BigInt::from(u8::from(*flag))),
        Value::Number(number) => coerce_number(field, number),
        Value::String(text) => parse_integer_str(field, text),
        other => Err(InputError::UnsupportedType {
            field,
            found: json_type(other),
        }),
    }
}

fn coerce_number(field: &'static str, number: &Number) -> Result<BigInt, InputError> {
    // Literal text as written in the body (serde_json `arbitrary_precision`).
    let text = number.to_string();
    if text.contains(['.', 'e', 'E']) {
        return truncate_float(field, &text);
    }

    check_digit_count(field, text.trim_start_matches('-').len())?;
    BigInt::from_str(&text).map_err(|_| InputError::InvalidLiteral {
        field,
        literal: preview(&text),
    })
}

fn truncate_float(field: &'static str, text: &str) -> Result<BigInt, InputError> {
    let value: f64 = text.parse().map_err(|_| InputError::InvalidLiteral {
        field,
        literal: preview(text),
    })?;

    let non_finite = || InputError::NonFiniteNumber {
        field,
        literal: preview(text),
    };
    if !value.is_finite() {
        return Err(non_finite());
    }
    BigInt::from_f64(value.trunc()).ok_or_else(non_finite)
}

fn parse_integer_str(field: &'static str, raw: &str) -> Result<BigInt, InputError> {
    let invalid = || InputError::InvalidLiteral {
        field,
        literal: preview(raw),
    };

    let trimmed = raw.trim();
    let (negative, body) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if !is_digit_groups(body) {
        return Err(invalid());
    }

    let digits: String = body.chars().filter(|c| *c != '_').collect();
    check_digit_count(field, digits.len())?;

    let magnitude = BigInt::from_str(&digits).map_err(|_| invalid())?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// ASCII digits, optionally split into groups by single underscores.
fn is_digit_groups(text: &str) -> bool {
    !text.is_empty()
        && text
            .split('_')
            .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()))
}

fn check_digit_count(field: &'static str, digits: usize) -> Result<(), InputError> {
    if digits > MAX_DIGITS {
        return Err(InputError::TooManyDigits { field, digits });
    }
    Ok(())
}

fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}
