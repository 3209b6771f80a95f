use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined.
    /// Check `.env.example` for the full set of configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but holds an unusable value.
    #[error("Invalid value for environment variable {name}: {reason}")]
    InvalidEnvVar { name: String, reason: String },
}
