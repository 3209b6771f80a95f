//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and the conversion
//! logic for turning errors into HTTP responses. `AppError` is the top-level
//! type that wraps the domain-specific errors; most variants use `#[from]`
//! for automatic conversion. Bot controllers catch the domain variants they
//! care about and turn them into chat replies instead.

pub mod config;
pub mod quest;
pub mod tavern;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    data::query::QueryArgsError,
    error::{config::ConfigError, quest::QuestError, tavern::TavernError},
    model::api::ErrorDto,
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Invalid query-arguments combination caught at construction time.
    #[error(transparent)]
    QueryErr(#[from] QueryArgsError),

    /// Quest workflow business error; surfaced to the user as a chat reply.
    #[error(transparent)]
    QuestErr(#[from] QuestError),

    /// Tavern menu business error; surfaced to the user as a chat reply.
    #[error(transparent)]
    TavernErr(#[from] TavernError),

    /// Discord API error from Serenity.
    ///
    /// Boxed because serenity::Error is large and would otherwise inflate
    /// every AppError value.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// IO error, e.g. while binding the API listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Caller identity was missing from the request.
    ///
    /// Defensive: the chat platform is expected to always supply an author
    /// id.
    #[error("No user ID was provided with this request")]
    NoIdProvided,

    /// Resource not found; results in 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request; results in 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal error with a message that is logged but never sent to the
    /// client.
    #[error("{0}")]
    InternalError(String),
}

impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

/// Converts application errors into HTTP responses.
///
/// Domain errors and bad requests map to 4xx responses carrying their
/// message; everything else is logged server-side and returned as a generic
/// 500 so internals never leak to the client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::QuestErr(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            Self::TavernErr(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            Self::NoIdProvided => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: Self::NoIdProvided.to_string(),
                }),
            )
                .into_response(),
            err => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
