//! Request coercion and integer arithmetic for the adder service.
//!
//! The request body arrives as an untyped [`serde_json::Value`]. Each operand
//! is coerced to an arbitrary-precision integer by an explicit, fallible
//! conversion; any failure surfaces as an [`InputError`] that the HTTP layer
//! reports back to the client.

mod coerce;
mod error;
mod request;
mod response;

pub use coerce::{coerce_integer, MAX_DIGITS};
pub use error::InputError;
pub use num_bigint::BigInt;
pub use request::{add, AddRequest};
pub use response::AddResponse;
