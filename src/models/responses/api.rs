//! Generic API response models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every non-record response, success or failure.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable message (pt-BR)
    #[schema(example = "Usuário criado com sucesso!")]
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: &str) -> Self {
        Self {
            msg: msg.to_string(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Health status
    #[schema(example = "OK")]
    pub status: String,
    /// Status message
    #[schema(example = "Server is running")]
    pub message: String,
}
