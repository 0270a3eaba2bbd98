// errors.rs
use crate::api::FetchError;
use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, bad input) or the listings API behind it.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Payload Too Large")]
    PayloadTooLarge,
    #[error("Upstream Error: {0}")]
    Upstream(#[from] FetchError),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::PayloadTooLarge => 413,
            ServerError::Upstream(err) => err.http_status(),
            ServerError::InternalError => 500,
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
