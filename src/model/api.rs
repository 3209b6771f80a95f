use serde::Serialize;

/// Error payload returned by API endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorDto {
    pub error: String,
}
