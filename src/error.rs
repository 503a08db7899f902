use thiserror::Error;

/// A non-2xx status is not an error, it comes back as a `Response` with no body.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("Unsupported base URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
