//! Rendering properties of layout-driven tables.

use cerkas_client::ViewState;
use cerkas_model::{
    DataPayload, FetchState, Fetched, FieldDescriptor, LayoutPayload, RouteIdentity, RowRecord,
};
use cerkas_render::{
    ColumnPolicy, EMPTY_MESSAGE, METADATA_COLUMNS, PageView, PanelSelection, TableBody,
    TableView, html, min_width_px,
};
use proptest::prelude::*;
use serde_json::{Value, json};

fn fetched<T: serde::de::DeserializeOwned>(raw: Value) -> Fetched<T> {
    Fetched::new(serde_json::from_value(raw.clone()).unwrap(), raw)
}

fn field_code() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(METADATA_COLUMNS.to_vec()).prop_map(str::to_string),
        "[a-z][a-z_]{0,12}",
    ]
}

proptest! {
    #[test]
    fn hidden_columns_are_exactly_the_metadata_set(codes in proptest::collection::vec(field_code(), 0..16)) {
        let fields: Vec<FieldDescriptor> =
            codes.iter().map(|code| FieldDescriptor::new(code.clone(), code.to_uppercase())).collect();
        let policy = ColumnPolicy::default();

        let hidden = TableView::build(&fields, &[], false, &policy);
        let expected: Vec<&str> = codes
            .iter()
            .map(String::as_str)
            .filter(|code| !METADATA_COLUMNS.contains(code))
            .collect();
        let actual: Vec<&str> = hidden.columns.iter().map(|c| c.field_code.as_str()).collect();
        prop_assert_eq!(actual, expected);

        let shown = TableView::build(&fields, &[], true, &policy);
        prop_assert_eq!(shown.columns.len(), fields.len());
    }

    #[test]
    fn width_is_ten_per_char_plus_forty(label in "\\PC{0,40}") {
        prop_assert_eq!(min_width_px(&label), label.encode_utf16().count() * 10 + 40);
    }

    #[test]
    fn missing_cells_render_empty(code in "[a-z]{1,8}") {
        let row = RowRecord::default();
        prop_assert_eq!(row.display(&code), "");
    }
}

#[test]
fn zero_rows_render_one_spanning_placeholder() {
    let fields = vec![
        FieldDescriptor::new("name", "Name"),
        FieldDescriptor::new("email", "Email"),
        FieldDescriptor::new("phone", "Phone"),
    ];
    let view = TableView::build(&fields, &[], false, &ColumnPolicy::default());
    assert_eq!(view.body, TableBody::Empty { colspan: 3 });

    let markup = html::render_table(&view);
    let body = markup.split("<tbody>").nth(1).unwrap();
    assert_eq!(body.matches("<tr>").count(), 1);
    assert!(body.contains(r#"colspan="3""#));
    assert!(body.contains(EMPTY_MESSAGE));
}

#[test]
fn layout_with_hidden_id_column_end_to_end() {
    let layout = json!({"layout": {"children": [{"type": "table", "props": {"fields": [
        {"field_code": "name", "field_name": "Name"},
        {"field_code": "id", "field_name": "Id"}
    ]}}]}});
    let data = json!({"items": [
        {"name": {"value": "Alice"}, "id": {"value": 1}},
        {"id": {"value": 2}}
    ]});
    let state = ViewState {
        cycle: 1,
        route: Some(RouteIdentity::new("t1", "p1", "obj1", "v1")),
        layout: FetchState::Succeeded(fetched::<LayoutPayload>(layout)),
        data: FetchState::Succeeded(fetched::<DataPayload>(data)),
    };

    let page = PageView::from_state(&state, &ColumnPolicy::default(), PanelSelection::default());
    assert_eq!(page.title, "Obj1");
    assert_eq!(page.tables.len(), 1);
    let table = &page.tables[0];
    assert_eq!(table.headers().collect::<Vec<_>>(), vec!["Name"]);
    assert_eq!(
        table.body,
        TableBody::Rows(vec![vec!["Alice".to_string()], vec![String::new()]])
    );

    // The data request still selects the hidden column.
    let layout = state.layout.succeeded().unwrap();
    assert!(layout.payload.field_map().contains("id"));

    let document = html::render_page(&page);
    assert!(document.contains("<title>Obj1</title>"));
    assert!(!document.contains(">Id</th>"));
    assert!(!document.contains("undefined"));
    assert!(document.contains(r#"<details class="mt-4">"#));
}

#[test]
fn null_items_and_null_cells_still_render() {
    let layout = json!({"layout": {"children": [{"type": "table", "props": {"fields": [
        {"field_code": "name", "field_name": "Name"},
        {"field_code": "email", "field_name": "Email"}
    ]}}]}});
    let mut state = ViewState {
        cycle: 1,
        route: Some(RouteIdentity::new("t1", "p1", "customer", "v1")),
        layout: FetchState::Succeeded(fetched::<LayoutPayload>(layout)),
        data: FetchState::Succeeded(fetched::<DataPayload>(
            json!({"items": null, "total_data": 0}),
        )),
    };

    let page = PageView::from_state(&state, &ColumnPolicy::default(), PanelSelection::default());
    assert_eq!(page.tables[0].body, TableBody::Empty { colspan: 2 });

    state.data = FetchState::Succeeded(fetched::<DataPayload>(json!({
        "items": [{"name": null, "email": {"value": "a@x"}}]
    })));
    let page = PageView::from_state(&state, &ColumnPolicy::default(), PanelSelection::default());
    assert_eq!(
        page.tables[0].body,
        TableBody::Rows(vec![vec![String::new(), "a@x".to_string()]])
    );
}
