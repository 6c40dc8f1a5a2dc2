//! HTML rendering.
//!
//! Output is one element per line without indentation. Class names are
//! Tailwind utility classes, so the markup drops into an admin page that
//! already loads Tailwind.

use crate::page::{DebugPanel, PageView, PanelContent};
use crate::table::{EMPTY_MESSAGE, TableBody, TableView};

/// Escape text for use in element content and quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render one dynamic table.
#[must_use]
pub fn render_table(view: &TableView) -> String {
    let mut lines = vec![
        r#"<div class="overflow-x-auto">"#.to_string(),
        r#"<table class="table-auto border border-gray-100 whitespace-nowrap">"#.to_string(),
        "<thead>".to_string(),
        r#"<tr class="bg-gray-100">"#.to_string(),
    ];
    for column in &view.columns {
        lines.push(format!(
            r#"<th class="px-2 py-2 border border-gray-100 text-left" style="min-width: {}px">{}</th>"#,
            column.min_width_px,
            escape_html(&column.label)
        ));
    }
    lines.push("</tr>".to_string());
    lines.push("</thead>".to_string());
    lines.push("<tbody>".to_string());
    match &view.body {
        TableBody::Rows(rows) => {
            for row in rows {
                lines.push("<tr>".to_string());
                for (column, cell) in view.columns.iter().zip(row) {
                    lines.push(format!(
                        r#"<td class="px-2 py-2 border border-gray-100 text-gray-600" style="min-width: {}px">{}</td>"#,
                        column.min_width_px,
                        escape_html(cell)
                    ));
                }
                lines.push("</tr>".to_string());
            }
        }
        TableBody::Empty { colspan } => {
            lines.push("<tr>".to_string());
            lines.push(format!(
                r#"<td colspan="{colspan}" class="text-center text-gray-400 py-4">{EMPTY_MESSAGE}</td>"#
            ));
            lines.push("</tr>".to_string());
        }
    }
    lines.push("</tbody>".to_string());
    lines.push("</table>".to_string());
    lines.push("</div>".to_string());
    lines.join("\n")
}

/// Render a complete HTML document for `page`.
///
/// Debug panels become `<details>` elements, expanded when the panel is open.
#[must_use]
pub fn render_page(page: &PageView) -> String {
    let title = escape_html(&page.title);
    let mut lines = vec![
        "<!DOCTYPE html>".to_string(),
        "<html>".to_string(),
        "<head>".to_string(),
        r#"<meta charset="utf-8">"#.to_string(),
        format!("<title>{title}</title>"),
        "</head>".to_string(),
        r#"<body class="bg-gray-100">"#.to_string(),
        r#"<div class="bg-white p-6 rounded-lg shadow-md">"#.to_string(),
        format!(r#"<h1 class="text-2xl font-bold text-cyan-600 mb-3">{title}</h1>"#),
        r#"<div class="space-y-4">"#.to_string(),
    ];
    for table in &page.tables {
        lines.push(r#"<div class="shadow-md">"#.to_string());
        lines.push(render_table(table));
        lines.push("</div>".to_string());
    }
    lines.push("</div>".to_string());
    for panel in &page.panels {
        lines.push(render_panel(panel));
    }
    lines.push("</div>".to_string());
    lines.push("</body>".to_string());
    lines.push("</html>".to_string());
    lines.join("\n")
}

fn render_panel(panel: &DebugPanel) -> String {
    let open = if panel.open { " open" } else { "" };
    let mut lines = vec![
        format!(r#"<details class="mt-4"{open}>"#),
        format!(
            r#"<summary class="bg-indigo-100 px-4 py-2 rounded-lg font-semibold text-gray-800">{}</summary>"#,
            escape_html(panel.title)
        ),
    ];
    match &panel.content {
        PanelContent::Params(params) => {
            lines.push(r#"<div class="mt-2 space-y-3 text-gray-700">"#.to_string());
            for (label, value) in params {
                lines.push(format!(
                    r#"<p><span class="font-semibold">{}:</span> <span class="text-indigo-600">{}</span></p>"#,
                    escape_html(label),
                    escape_html(value)
                ));
            }
            lines.push("</div>".to_string());
        }
        PanelContent::Json(json) => {
            lines.push(format!(
                r#"<pre class="mt-2 text-sm p-4 rounded overflow-auto"><code class="language-json">{}</code></pre>"#,
                escape_html(json)
            ));
        }
    }
    lines.push("</details>".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use cerkas_model::{CellValue, FieldDescriptor, RowRecord};

    use super::*;
    use crate::columns::ColumnPolicy;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn table_markup() {
        let fields = vec![
            FieldDescriptor::new("name", "Name"),
            FieldDescriptor::new("id", "Id"),
        ];
        let rows: Vec<RowRecord> = vec![
            [("name", CellValue::new("<b>Alice</b>"))].into_iter().collect(),
        ];
        let view = TableView::build(&fields, &rows, false, &ColumnPolicy::default());

        insta::assert_snapshot!(render_table(&view), @r#"
        <div class="overflow-x-auto">
        <table class="table-auto border border-gray-100 whitespace-nowrap">
        <thead>
        <tr class="bg-gray-100">
        <th class="px-2 py-2 border border-gray-100 text-left" style="min-width: 80px">Name</th>
        </tr>
        </thead>
        <tbody>
        <tr>
        <td class="px-2 py-2 border border-gray-100 text-gray-600" style="min-width: 80px">&lt;b&gt;Alice&lt;/b&gt;</td>
        </tr>
        </tbody>
        </table>
        </div>
        "#);
    }

    #[test]
    fn empty_table_markup() {
        let fields = vec![
            FieldDescriptor::new("name", "Name"),
            FieldDescriptor::new("email", "Email"),
            FieldDescriptor::new("created_at", "Created At"),
        ];
        let view = TableView::build(&fields, &[], false, &ColumnPolicy::default());
        let html = render_table(&view);

        assert_eq!(html.matches("<tr>").count(), 1);
        assert!(html.contains(r#"<td colspan="2" class="text-center text-gray-400 py-4">No data available</td>"#));
        assert!(!html.contains("Created At"));
    }
}
