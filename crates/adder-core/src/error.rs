use serde_json::Value;

use crate::coerce::MAX_DIGITS;

/// Failure to interpret the request body or one of its operands.
///
/// The `Display` output is sent to the client verbatim.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("request body must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("{field} must be an integer, number, boolean or numeric string, got {found}")]
    UnsupportedType {
        field: &'static str,
        found: &'static str,
    },

    #[error("{field} is not a valid integer: {literal:?}")]
    InvalidLiteral {
        field: &'static str,
        literal: String,
    },

    #[error("{field} has {digits} digits, exceeding the limit of {max}", max = MAX_DIGITS)]
    TooManyDigits { field: &'static str, digits: usize },

    #[error("{field} cannot be converted to an integer: {literal} is not finite")]
    NonFiniteNumber {
        field: &'static str,
        literal: String,
    },
}

impl InputError {
    /// Operand that failed to coerce, if the error concerns a single field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            InputError::NotAnObject { .. } => None,
            InputError::UnsupportedType { field, .. }
            | InputError::InvalidLiteral { field, .. }
            | InputError::TooManyDigits { field, .. }
            | InputError::NonFiniteNumber { field, .. } => Some(*field),
        }
    }
}

/// JSON type name used in error messages.
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_messages_name_the_field() {
        let err = InputError::InvalidLiteral {
            field: "num1",
            literal: "abc".into(),
        };
        assert_eq!(err.to_string(), "num1 is not a valid integer: \"abc\"");
        assert_eq!(err.field(), Some("num1"));
    }

    #[test]
    fn test_digit_limit_message() {
        let err = InputError::TooManyDigits {
            field: "num2",
            digits: 5000,
        };
        assert_eq!(
            err.to_string(),
            "num2 has 5000 digits, exceeding the limit of 4300"
        );
    }

    #[test]
    fn test_not_an_object_has_no_field() {
        let err = InputError::NotAnObject {
            found: json_type(&json!([1, 2])),
        };
        assert_eq!(err.to_string(), "request body must be a JSON object, got array");
        assert_eq!(err.field(), None);
    }
}
