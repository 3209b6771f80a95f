use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::user::{CreateUserDto, UserDto},
    service::user::UserService,
    state::AppState,
};

/// GET /api/user/{user_id} - Fetch a user by id
///
/// # Returns
/// - `200 OK`: JSON UserDto
/// - `404 Not Found`: No user with that id
/// - `500 Internal Server Error`: Database error
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .get_user_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(UserDto::from_entity(user))))
}

/// POST /api/user - Register a user by Discord id
///
/// # Returns
/// - `201 Created`: JSON UserDto for the new user
/// - `400 Bad Request`: The Discord id is already registered
/// - `500 Internal Server Error`: Database error
pub async fn create_user(
    State(state): State<AppState>,
    Json(dto): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(&state.db);

    if user_service
        .get_user_by_discord_id(dto.discord_id)
        .await?
        .is_some()
    {
        return Err(AppError::BadRequest(
            "A user with this discord id is already registered".to_string(),
        ));
    }

    let user = user_service.create_user(dto.discord_id).await?;

    Ok((StatusCode::CREATED, Json(UserDto::from_entity(user))))
}
