use thiserror::Error;

/// Failure of a call to the completion service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request to completion service failed: {0}")]
    Network(String),

    #[error("completion service rejected credentials: {0}")]
    Unauthorized(String),

    #[error("completion service rate limited the request: {0}")]
    RateLimited(String),

    #[error("completion service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response from completion service: {0}")]
    MalformedResponse(String),

    #[error("completion was dropped before answering")]
    Canceled,
}
