//! User DTOs for the HTTP API.

use serde::{Deserialize, Serialize};

/// User representation returned by the HTTP API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDto {
    pub id: i32,
    pub discord_id: i64,
}

impl UserDto {
    /// Converts a user entity to its API representation.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            discord_id: entity.discord_id,
        }
    }
}

/// Payload for registering a user over the HTTP API.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserDto {
    pub discord_id: i64,
}
