use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response body.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct HealthCheckMessage {
    pub message: String,
}

impl Default for HealthCheckMessage {
    fn default() -> Self {
        Self {
            message: "I'm alive!".to_string(),
        }
    }
}
