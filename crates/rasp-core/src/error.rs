use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("invalid status report: {0}")]
    InvalidReport(String),

    #[error("unrecognized slack payload: {0}")]
    UnrecognizedPayload(String),

    #[error("unexpected event type '{0}': expected 'message'")]
    UnexpectedEventType(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RelayError>;
