use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading diagram configuration or body data.
/// Conversion, scaling and scrolling never fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid diagram config: {0}")]
    InvalidConfig(String),

    #[error("invalid body #{index}: {reason}")]
    InvalidBody { index: usize, reason: String },
}
