use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorDetail {
    #[schema(example = "NOT_FOUND")]
    pub code: String,
    #[schema(example = "The requested resource was not found")]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"error": {"code": "NOT_FOUND", "message": "The requested resource was not found"}}))]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

impl ApiErrorResponse {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            error: ApiErrorDetail {
                code: code.to_string(),
                message: message.to_string(),
            },
        }
    }
}

/// Failures that stop the server before it serves a request.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("CORS configuration failed: {0}")]
    Cors(#[from] rocket_cors::Error),
    #[error("server launch failed: {0}")]
    Launch(#[from] rocket::Error),
}
