use num_bigint::BigInt;
use serde_json::{Map, Value};

use crate::coerce::coerce_integer;
use crate::error::{json_type, InputError};

/// Operands of a single add request, already coerced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddRequest {
    pub num1: BigInt,
    pub num2: BigInt,
}

impl AddRequest {
    /// Extracts and coerces `num1` and `num2` from a request body.
    ///
    /// The body must be a JSON object. A missing operand defaults to 0; an
    /// operand that is present but `null` is rejected. `num1` is coerced
    /// first, so its error wins when both are invalid.
    pub fn from_body(body: &Value) -> Result<Self, InputError> {
        let Value::Object(fields) = body else {
            return Err(InputError::NotAnObject {
                found: json_type(body),
            });
        };

        Ok(Self {
            num1: operand(fields, "num1")?,
            num2: operand(fields, "num2")?,
        })
    }

    pub fn sum(&self) -> BigInt {
        &self.num1 + &self.num2
    }
}

fn operand(fields: &Map<String, Value>, name: &'static str) -> Result<BigInt, InputError> {
    match fields.get(name) {
        Some(value) => coerce_integer(name, value),
        None => Ok(BigInt::default()),
    }
}

/// Coerces both operands of `body` and returns their sum.
pub fn add(body: &Value) -> Result<BigInt, InputError> {
    AddRequest::from_body(body).map(|request| request.sum())
}
