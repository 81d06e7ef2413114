use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use text_completion::UpstreamError;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing form field `components`")]
    InputMissing,

    #[error("invalid form: {0}")]
    InvalidForm(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InputMissing | AppError::InvalidForm(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Text sent to the client. The upstream body of a rejected key can echo
    /// part of the key, so it only goes to the log.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Upstream(UpstreamError::Unauthorized(_)) => {
                "Error: completion service rejected credentials".to_string()
            }
            _ => format!("Error: {}", self),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("request failed: {}", self);
        (self.status(), self.client_message()).into_response()
    }
}
