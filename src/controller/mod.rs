//! HTTP request handlers.
//!
//! Thin adapters between axum and the service layer: extract inputs,
//! invoke a service, convert the result to a DTO and status code.

pub mod user;
