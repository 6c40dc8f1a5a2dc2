//! Error types for the fetch sequencer.

use cerkas_model::{ModelError, Stage};
use thiserror::Error;

/// Errors that can occur while running a fetch cycle.
///
/// Every variant surfaces the same way: the affected stage becomes
/// `Failed(error.to_string())`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The request could not be sent or its body could not be read.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("failed to fetch {stage}: HTTP {status}")]
    HttpStatus {
        /// Stage whose request failed.
        stage: Stage,
        /// Response status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The response body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// The response envelope carried no `data`.
    #[error("{stage} response has no data")]
    MissingData {
        /// Stage whose response was empty.
        stage: Stage,
    },

    /// The data request was never attempted because the layout stage failed.
    #[error("data request skipped: layout stage did not succeed")]
    SequenceSkipped,

    /// One or more route codes are empty.
    #[error("route identity is incomplete, missing: {0}")]
    IncompleteRoute(String),
}

impl ClientError {
    pub(crate) fn from_model(stage: Stage, err: ModelError) -> Self {
        match err {
            ModelError::MissingData => Self::MissingData { stage },
            ModelError::Json(e) => Self::JsonParse(e.to_string()),
            ModelError::InvalidRoute(route) => Self::IncompleteRoute(route),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_names_the_stage() {
        let err = ClientError::HttpStatus {
            stage: Stage::Layout,
            status: 404,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "failed to fetch layout: HTTP 404");
    }

    #[test]
    fn model_errors_keep_the_stage() {
        let err = ClientError::from_model(Stage::Data, ModelError::MissingData);
        assert_eq!(err.to_string(), "data response has no data");
    }
}
