//! Column visibility and sizing.

use std::collections::BTreeSet;

use cerkas_model::FieldDescriptor;
use serde::{Deserialize, Serialize};

/// Bookkeeping fields hidden unless a table asks for metadata columns.
pub const METADATA_COLUMNS: [&str; 8] = [
    "created_at",
    "created_by",
    "deleted_at",
    "deleted_by",
    "updated_at",
    "updated_by",
    "serial",
    "id",
];

/// Minimum column width in pixels: ten per label character plus padding.
///
/// Characters are counted in UTF-16 code units, so a character outside the
/// Basic Multilingual Plane counts twice.
#[must_use]
pub fn min_width_px(label: &str) -> usize {
    label.encode_utf16().count() * 10 + 40
}

/// Which field codes count as metadata columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnPolicy {
    /// Field codes hidden while metadata columns are off.
    pub metadata: BTreeSet<String>,
}

impl Default for ColumnPolicy {
    fn default() -> Self {
        Self::new(METADATA_COLUMNS)
    }
}

impl ColumnPolicy {
    pub fn new<I, S>(metadata: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            metadata: metadata.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn is_metadata(&self, field_code: &str) -> bool {
        self.metadata.contains(field_code)
    }

    #[must_use]
    pub fn is_visible(&self, field: &FieldDescriptor, show_metadata: bool) -> bool {
        show_metadata || !self.is_metadata(&field.field_code)
    }

    /// Visible fields in layout order.
    pub fn visible<'a>(
        &'a self,
        fields: &'a [FieldDescriptor],
        show_metadata: bool,
    ) -> impl Iterator<Item = &'a FieldDescriptor> + 'a {
        fields
            .iter()
            .filter(move |field| self.is_visible(field, show_metadata))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_follow_label_length() {
        assert_eq!(min_width_px("Name"), 80);
        assert_eq!(min_width_px("Customer Email"), 180);
        assert_eq!(min_width_px(""), 40);
        assert_eq!(min_width_px("Größe"), 90);
        assert_eq!(min_width_px("Tag \u{1F600}"), 100);
    }

    #[test]
    fn default_policy_is_the_metadata_set() {
        let policy = ColumnPolicy::default();
        assert_eq!(policy.metadata.len(), 8);
        assert!(policy.is_metadata("serial"));
        assert!(!policy.is_metadata("name"));
    }

    #[test]
    fn custom_policy_replaces_the_set() {
        let policy = ColumnPolicy::new(["tenant_id"]);
        let fields = vec![
            FieldDescriptor::new("id", "Id"),
            FieldDescriptor::new("tenant_id", "Tenant"),
        ];
        let visible: Vec<_> = policy
            .visible(&fields, false)
            .map(|f| f.field_code.as_str())
            .collect();
        assert_eq!(visible, vec!["id"]);
    }
}
