//! Target-independent model of one dynamic table.

use cerkas_model::{FieldDescriptor, RowRecord};

use crate::columns::{ColumnPolicy, min_width_px};

/// Placeholder text of a table without rows.
pub const EMPTY_MESSAGE: &str = "No data available";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    pub field_code: String,
    pub label: String,
    pub min_width_px: usize,
}

impl TableColumn {
    fn from_field(field: &FieldDescriptor) -> Self {
        Self {
            field_code: field.field_code.clone(),
            label: field.field_name.clone(),
            min_width_px: min_width_px(&field.field_name),
        }
    }

    /// Minimum width in terminal cells, at ten pixels per cell.
    #[must_use]
    pub fn min_width_chars(&self) -> u16 {
        u16::try_from(self.min_width_px / 10).unwrap_or(u16::MAX)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    /// Cell texts, one inner vector per row, aligned with the columns.
    Rows(Vec<Vec<String>>),
    /// Single placeholder row spanning `colspan` columns.
    Empty { colspan: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub columns: Vec<TableColumn>,
    pub body: TableBody,
}

impl TableView {
    /// Build the table for `fields` and `rows`.
    ///
    /// Column and row order are preserved. Metadata columns (per `policy`)
    /// are dropped from header and body unless `show_metadata` is set.
    #[must_use]
    pub fn build(
        fields: &[FieldDescriptor],
        rows: &[RowRecord],
        show_metadata: bool,
        policy: &ColumnPolicy,
    ) -> Self {
        let columns: Vec<TableColumn> = policy
            .visible(fields, show_metadata)
            .map(TableColumn::from_field)
            .collect();

        let body = if rows.is_empty() {
            TableBody::Empty {
                colspan: columns.len().max(1),
            }
        } else {
            TableBody::Rows(
                rows.iter()
                    .map(|row| {
                        columns
                            .iter()
                            .map(|column| row.display(&column.field_code))
                            .collect()
                    })
                    .collect(),
            )
        };

        Self { columns, body }
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.label.as_str())
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        match &self.body {
            TableBody::Rows(rows) => rows.len(),
            TableBody::Empty { .. } => 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.body, TableBody::Empty { .. })
    }
}

#[cfg(test)]
mod tests {
    use cerkas_model::CellValue;

    use super::*;

    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("name", "Name"),
            FieldDescriptor::new("id", "Id"),
            FieldDescriptor::new("email", "Customer Email"),
        ]
    }

    fn row(pairs: &[(&str, &str)]) -> RowRecord {
        pairs
            .iter()
            .map(|(code, value)| (*code, CellValue::new(*value)))
            .collect()
    }

    #[test]
    fn hides_metadata_columns_by_default() {
        let view = TableView::build(&fields(), &[], false, &ColumnPolicy::default());
        assert_eq!(view.headers().collect::<Vec<_>>(), vec!["Name", "Customer Email"]);
        assert_eq!(view.columns[1].min_width_px, 180);
        assert_eq!(view.columns[1].min_width_chars(), 18);
    }

    #[test]
    fn shows_metadata_columns_on_request() {
        let view = TableView::build(&fields(), &[], true, &ColumnPolicy::default());
        assert_eq!(view.columns.len(), 3);
    }

    #[test]
    fn empty_rows_span_visible_columns() {
        let view = TableView::build(&fields(), &[], false, &ColumnPolicy::default());
        assert!(view.is_empty());
        assert_eq!(view.body, TableBody::Empty { colspan: 2 });
    }

    #[test]
    fn rows_follow_visible_columns() {
        let rows = vec![
            row(&[("name", "Alice"), ("id", "1"), ("email", "a@example.com")]),
            row(&[("name", "Bob")]),
        ];
        let view = TableView::build(&fields(), &rows, false, &ColumnPolicy::default());
        assert_eq!(
            view.body,
            TableBody::Rows(vec![
                vec!["Alice".to_string(), "a@example.com".to_string()],
                vec!["Bob".to_string(), String::new()],
            ])
        );
        assert_eq!(view.row_count(), 2);
    }
}
