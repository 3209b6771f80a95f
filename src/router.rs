use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    controller::user::{create_user, get_user},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/user", post(create_user))
        .route("/api/user/{user_id}", get(get_user))
}
