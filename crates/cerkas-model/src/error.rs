use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid route: {0}")]
    InvalidRoute(String),
    #[error("response envelope has no data")]
    MissingData,
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
