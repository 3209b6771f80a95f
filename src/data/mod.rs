//! Data-access layer.
//!
//! This module contains the declarative query compiler (`query`) and the
//! generic per-entity repository (`repository`) that every service builds
//! on. Services describe what they want with a `QueryArgs` value; the
//! repository compiles it and executes against the shared database
//! connection.

pub mod query;
pub mod repository;

#[cfg(test)]
mod test;
