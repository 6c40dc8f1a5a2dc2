//! Terminal rendering with `comfy-table`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ColumnConstraint, ContentArrangement, Table, Width};

use crate::page::{PageView, PanelContent};
use crate::table::{EMPTY_MESSAGE, TableBody, TableView};

/// Build a terminal table. Each column keeps at least its minimum width.
///
/// Terminal tables have no column spans, so the empty placeholder sits in
/// the first column only.
#[must_use]
pub fn render_table(view: &TableView) -> Table {
    let mut table = Table::new();
    table.set_header(view.columns.iter().map(|column| header_cell(&column.label)));
    apply_table_style(&mut table);

    match &view.body {
        TableBody::Rows(rows) => {
            for row in rows {
                table.add_row(row.iter().map(Cell::new));
            }
        }
        TableBody::Empty { .. } => {
            table.add_row(vec![Cell::new(EMPTY_MESSAGE).fg(Color::DarkGrey)]);
        }
    }

    for (index, column) in view.columns.iter().enumerate() {
        if let Some(target) = table.column_mut(index) {
            target.set_constraint(ColumnConstraint::LowerBoundary(Width::Fixed(
                column.min_width_chars(),
            )));
        }
    }
    table
}

/// Title, tables and the open debug panels as plain text.
#[must_use]
pub fn render_page(page: &PageView) -> String {
    let mut sections = vec![page.title.clone()];
    for view in &page.tables {
        sections.push(render_table(view).to_string());
    }
    for panel in page.open_panels() {
        let body = match &panel.content {
            PanelContent::Params(params) => params
                .iter()
                .map(|(label, value)| format!("{label}: {value}"))
                .collect::<Vec<_>>()
                .join("\n"),
            PanelContent::Json(json) => json.clone(),
        };
        sections.push(format!("{}\n{body}", panel.title));
    }
    sections.join("\n\n")
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

#[cfg(test)]
mod tests {
    use cerkas_model::{CellValue, FieldDescriptor, RowRecord};

    use super::*;
    use crate::columns::ColumnPolicy;

    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("name", "Name"),
            FieldDescriptor::new("serial", "Serial"),
        ]
    }

    #[test]
    fn columns_get_lower_bound_widths() {
        let view = TableView::build(&fields(), &[], true, &ColumnPolicy::default());
        let mut table = render_table(&view);
        assert_eq!(table.column_count(), 2);
        let constraint = table.column(0).and_then(|c| c.constraint().copied());
        assert_eq!(
            constraint,
            Some(ColumnConstraint::LowerBoundary(Width::Fixed(8)))
        );
    }

    #[test]
    fn rows_and_placeholder() {
        let rows: Vec<RowRecord> = vec![[("name", CellValue::new("Alice"))].into_iter().collect()];
        let view = TableView::build(&fields(), &rows, false, &ColumnPolicy::default());
        let rendered = render_table(&view).to_string();
        assert!(rendered.contains("Alice"));
        assert!(!rendered.contains("Serial"));

        let empty = TableView::build(&fields(), &[], true, &ColumnPolicy::default());
        let table = render_table(&empty);
        assert_eq!(table.row(0).map(comfy_table::Row::cell_count), Some(1));
        assert!(table.to_string().contains(EMPTY_MESSAGE));
    }
}
