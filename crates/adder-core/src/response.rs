use std::fmt::Display;
use std::str::FromStr;

use num_bigint::BigInt;
use serde::{Serialize, Serializer};
use serde_json::Number;

use crate::error::InputError;

/// Body of every `/add` response.
///
/// Serializes as either `{"status": "success", "result": <integer>}` or
/// `{"status": "error", "error": <message>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AddResponse {
    Success {
        #[serde(serialize_with = "serialize_integer")]
        result: BigInt,
    },
    Error {
        error: String,
    },
}

impl AddResponse {
    pub fn success(result: BigInt) -> Self {
        AddResponse::Success { result }
    }

    pub fn error(message: impl Display) -> Self {
        AddResponse::Error {
            error: message.to_string(),
        }
    }

    pub fn from_result(result: Result<BigInt, InputError>) -> Self {
        match result {
            Ok(sum) => Self::success(sum),
            Err(e) => Self::error(e),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AddResponse::Success { .. })
    }
}

/// Writes the integer as an exact JSON number literal.
fn serialize_integer<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
    let number = Number::from_str(&value.to_string()).map_err(serde::ser::Error::custom)?;
    number.serialize(serializer)
}
