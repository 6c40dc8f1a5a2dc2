//! Page view: title, dynamic tables and debug panels of one list view.

use cerkas_client::ViewState;
use cerkas_model::{RouteIdentity, to_label};
use serde::Serialize;
use serde_json::Value;

use crate::columns::ColumnPolicy;
use crate::table::TableView;

pub const PARAMS_PANEL_TITLE: &str = "Dynamic Param";
pub const LAYOUT_PANEL_TITLE: &str = "Layout API Response";
pub const DATA_PANEL_TITLE: &str = "Data API Response";

/// Which debug panels start expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelSelection {
    pub params: bool,
    pub layout_response: bool,
    pub data_response: bool,
}

impl PanelSelection {
    #[must_use]
    pub fn all() -> Self {
        Self {
            params: true,
            layout_response: true,
            data_response: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelContent {
    /// Labelled route codes.
    Params(Vec<(&'static str, String)>),
    /// Pretty-printed JSON.
    Json(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugPanel {
    pub title: &'static str,
    pub open: bool,
    pub content: PanelContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub title: String,
    pub tables: Vec<TableView>,
    pub panels: Vec<DebugPanel>,
}

impl PageView {
    /// Build the page for the latest published state.
    ///
    /// Every `table` node of the layout becomes one table, filled with the
    /// data rows when the data stage succeeded and empty otherwise. Other
    /// node types render nothing.
    #[must_use]
    pub fn from_state(state: &ViewState, policy: &ColumnPolicy, panels: PanelSelection) -> Self {
        let route = state.route.clone().unwrap_or_default();
        let layout = state.layout.succeeded().map(|fetched| &fetched.payload);
        let rows = state
            .data
            .succeeded()
            .map(|fetched| fetched.payload.items.as_slice())
            .unwrap_or_default();

        let title = layout
            .and_then(|layout| layout.object_display_name())
            .map_or_else(|| to_label(&route.object), str::to_string);

        let tables = layout
            .into_iter()
            .flat_map(|layout| layout.table_nodes())
            .map(|node| {
                TableView::build(&node.props.fields, rows, node.shows_metadata_columns(), policy)
            })
            .collect();

        let panels = vec![
            DebugPanel {
                title: PARAMS_PANEL_TITLE,
                open: panels.params,
                content: params_content(&route),
            },
            DebugPanel {
                title: LAYOUT_PANEL_TITLE,
                open: panels.layout_response,
                content: PanelContent::Json(pretty_json(&state.layout.debug_json())),
            },
            DebugPanel {
                title: DATA_PANEL_TITLE,
                open: panels.data_response,
                content: PanelContent::Json(pretty_json(&state.data.debug_json())),
            },
        ];

        Self {
            title,
            tables,
            panels,
        }
    }

    pub fn open_panels(&self) -> impl Iterator<Item = &DebugPanel> {
        self.panels.iter().filter(|panel| panel.open)
    }
}

fn params_content(route: &RouteIdentity) -> PanelContent {
    PanelContent::Params(vec![
        ("Tenant Code", route.tenant.clone()),
        ("Product Code", route.product.clone()),
        ("Object Code", route.object.clone()),
        ("View Content Code", route.view_content.clone()),
    ])
}

pub(crate) fn pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not serialize debug payload");
        Value::Null.to_string()
    })
}
