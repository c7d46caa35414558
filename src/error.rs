use reqwest::StatusCode;
use thiserror::Error;

/// Why a fetch left the screen unchanged.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected HTTP status {0}")]
    HttpStatus(StatusCode),
    #[error("malformed comic payload: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
