//! Data payload rows.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::de::null_as_default;

/// `data` of the data response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<RowRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_data: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_page: Option<u64>,
}

/// One row, keyed by field code. A `null` cell is kept as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowRecord(BTreeMap<String, Option<CellValue>>);

impl RowRecord {
    #[must_use]
    pub fn get(&self, field_code: &str) -> Option<&CellValue> {
        self.0.get(field_code).and_then(Option::as_ref)
    }

    pub fn insert(&mut self, field_code: impl Into<String>, cell: CellValue) {
        self.0.insert(field_code.into(), Some(cell));
    }

    /// Cell text for `field_code`.
    ///
    /// A missing key, a null cell or a null value renders as the empty string.
    #[must_use]
    pub fn display(&self, field_code: &str) -> String {
        self.get(field_code)
            .map(CellValue::display)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, CellValue)> for RowRecord {
    fn from_iter<I: IntoIterator<Item = (K, CellValue)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), Some(v))).collect())
    }
}

/// A single cell as sent by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellValue {
    #[serde(default)]
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
}

impl CellValue {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Strings render verbatim, null as empty, everything else as compact JSON.
    #[must_use]
    pub fn display(&self) -> String {
        match &self.value {
            Value::Null => String::new(),
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}
