//! Field descriptors supplied by the layout response.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One column definition of a table node.
///
/// Properties other than `field_code` and `field_name` are kept in `extra`
/// so the data request can send the descriptor back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub field_code: String,
    #[serde(default)]
    pub field_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FieldDescriptor {
    pub fn new(field_code: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self {
            field_code: field_code.into(),
            field_name: field_name.into(),
            extra: Map::new(),
        }
    }
}

/// Field selection of a data request, keyed and sorted by `field_code`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap(BTreeMap<String, FieldDescriptor>);

impl FieldMap {
    /// Key every descriptor by its code. A repeated code keeps the last one.
    pub fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = &'a FieldDescriptor>,
    {
        Self(
            fields
                .into_iter()
                .map(|field| (field.field_code.clone(), field.clone()))
                .collect(),
        )
    }

    #[must_use]
    pub fn get(&self, field_code: &str) -> Option<&FieldDescriptor> {
        self.0.get(field_code)
    }

    #[must_use]
    pub fn contains(&self, field_code: &str) -> bool {
        self.0.contains_key(field_code)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_unknown_properties() {
        let field: FieldDescriptor = serde_json::from_value(serde_json::json!({
            "field_code": "email",
            "field_name": "Email",
            "data_type": "text"
        }))
        .unwrap();
        assert_eq!(field.extra.get("data_type"), Some(&Value::from("text")));

        let back = serde_json::to_value(&field).unwrap();
        assert_eq!(back["data_type"], "text");
        assert_eq!(back["field_code"], "email");
    }

    #[test]
    fn duplicate_codes_keep_last() {
        let fields = vec![
            FieldDescriptor::new("name", "Name"),
            FieldDescriptor::new("name", "Full Name"),
        ];
        let map = FieldMap::from_fields(&fields);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("name").unwrap().field_name, "Full Name");
    }
}
