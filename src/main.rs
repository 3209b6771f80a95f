mod bot;
mod config;
mod controller;
mod data;
mod error;
mod model;
mod router;
mod service;
mod startup;
mod state;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting server");

    // Start the Discord bot in a separate task
    let bot_config = config.clone();
    let bot_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(&bot_config, bot_db).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    // Serve the HTTP API on the main task
    let app = router::router().with_state(AppState::new(db));
    let listener = tokio::net::TcpListener::bind(&config.api_bind_address).await?;
    tracing::info!("API listening on {}", config.api_bind_address);
    axum::serve(listener, app).await?;

    Ok(())
}
