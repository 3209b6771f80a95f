use crate::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_PORT: &str = "5432";
const DEFAULT_COMMAND_PREFIX: &str = "/";
const DEFAULT_API_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Application configuration loaded from the environment.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,
    pub owner_id: u64,
    pub command_prefix: String,

    pub api_bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let host = require("DATABASE_HOST")?;
        let port =
            std::env::var("DATABASE_PORT").unwrap_or_else(|_| DEFAULT_DATABASE_PORT.to_string());
        let user = require("DATABASE_USER")?;
        let password = require("DATABASE_PASSWORD")?;
        let name = require("DATABASE_NAME")?;

        let owner_id = require("BOT_OWNER_ID")?
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BOT_OWNER_ID".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: format!("postgres://{user}:{password}@{host}:{port}/{name}"),
            discord_bot_token: require("DISCORD_BOT_TOKEN")?,
            owner_id,
            command_prefix: std::env::var("COMMAND_PREFIX")
                .unwrap_or_else(|_| DEFAULT_COMMAND_PREFIX.to_string()),
            api_bind_address: std::env::var("API_BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_API_BIND_ADDRESS.to_string()),
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
