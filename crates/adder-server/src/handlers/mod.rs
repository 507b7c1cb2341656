//! HTTP route handlers for the adder server.

pub mod add;
