//! Response envelope wrapping every backend payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ModelError, Result};

/// `{ status, code, data }` as written by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// The wrapped payload, or [`ModelError::MissingData`].
    pub fn into_data(self) -> Result<T> {
        self.data.ok_or(ModelError::MissingData)
    }
}

impl Envelope<Value> {
    /// Parse a response body. A `null` payload counts as absent.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_data() {
        let envelope =
            Envelope::from_slice(br#"{"status":"success","code":200,"data":{"items":[]}}"#)
                .unwrap();
        assert_eq!(envelope.code, Some(200));
        assert_eq!(envelope.into_data().unwrap(), serde_json::json!({"items": []}));
    }

    #[test]
    fn missing_data_is_an_error() {
        let envelope = Envelope::from_slice(br#"{"status":"success"}"#).unwrap();
        assert!(matches!(envelope.into_data(), Err(ModelError::MissingData)));
        let envelope = Envelope::from_slice(br#"{"data":null}"#).unwrap();
        assert!(matches!(envelope.into_data(), Err(ModelError::MissingData)));
    }

    #[test]
    fn malformed_body_is_a_json_error() {
        assert!(matches!(Envelope::from_slice(b"<html>"), Err(ModelError::Json(_))));
    }
}
