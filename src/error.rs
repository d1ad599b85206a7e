use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("{0}")]
    Validation(String),
    #[error("HuggingFace token not configured. Please set HF_TOKEN environment variable.")]
    Configuration,
    #[error("Model is loading")]
    ModelLoading,
    #[error("Invalid HuggingFace token")]
    UpstreamAuth,
    #[error("{message}")]
    Upstream { status: u16, message: String },
    #[error("Request timeout")]
    Timeout,
    #[error("Internal server error")]
    Internal(String),
}

impl RelayError {
    fn status(&self) -> StatusCode {
        match self {
            RelayError::Validation(_) => StatusCode::BAD_REQUEST,
            RelayError::Configuration => StatusCode::UNAUTHORIZED,
            RelayError::ModelLoading => StatusCode::SERVICE_UNAVAILABLE,
            RelayError::UpstreamAuth => StatusCode::UNAUTHORIZED,
            // Mirror whatever the upstream API answered.
            RelayError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            RelayError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            RelayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            RelayError::Configuration => serde_json::json!({
                "error": self.to_string(),
                "help": "Get your token from https://huggingface.co/settings/tokens",
            }),
            RelayError::ModelLoading => serde_json::json!({
                "error": self.to_string(),
                "message": "The model is currently loading. Please try again in 20-30 seconds.",
            }),
            RelayError::UpstreamAuth => serde_json::json!({
                "error": self.to_string(),
                "message": "Please check your HF_TOKEN is valid and has access to the model.",
            }),
            RelayError::Timeout => serde_json::json!({
                "error": self.to_string(),
                "message": "The request took too long. Try reducing steps or image size.",
            }),
            RelayError::Internal(detail) => serde_json::json!({
                "error": self.to_string(),
                "message": detail,
            }),
            _ => serde_json::json!({
                "error": self.to_string(),
            }),
        };

        (status, axum::Json(body)).into_response()
    }
}
