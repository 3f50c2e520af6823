use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoglensError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The detector service answered with a non-2xx status. `detail` carries
    /// the machine-readable message from the response body when one was sent.
    #[error("Detector service error (status {status}, detail {detail:?})")]
    Service { status: u16, detail: Option<String> },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, LoglensError>;
