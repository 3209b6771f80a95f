//! Service layer for business logic.
//!
//! Services sit between the command/API controllers and the data layer.
//! They own the business rules — quest acceptance and completion, experience
//! awards, menu curation — and express their reads as `QueryArgs` values
//! executed through the generic repository. Domain rule violations surface
//! as the error types in `crate::error`.

pub mod experience;
pub mod quest;
pub mod tavern;
pub mod user;

#[cfg(test)]
mod test;
