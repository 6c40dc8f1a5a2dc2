//! Output formats of the `view` command.

use cerkas_client::ViewState;
use cerkas_render::{ColumnPolicy, PageView, PanelSelection, html, terminal};
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Terminal tables.
    Table,
    /// Standalone HTML document.
    Html,
    /// Route plus both stage results as JSON.
    Json,
}

/// Render the final state of a fetch cycle.
pub fn render(
    state: &ViewState,
    policy: &ColumnPolicy,
    panels: PanelSelection,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Table => Ok(terminal::render_page(&PageView::from_state(
            state, policy, panels,
        ))),
        OutputFormat::Html => Ok(html::render_page(&PageView::from_state(
            state, policy, panels,
        ))),
        OutputFormat::Json => serde_json::to_string_pretty(&state_json(state)),
    }
}

/// `{route, layout, data}` with each stage as shown in its debug panel.
#[must_use]
pub fn state_json(state: &ViewState) -> Value {
    json!({
        "route": state.route.as_ref().map(ToString::to_string),
        "layout": state.layout.debug_json(),
        "data": state.data.debug_json(),
    })
}

/// Human-readable error lines for the failed stages.
#[must_use]
pub fn stage_errors(state: &ViewState) -> Vec<String> {
    [("layout", state.layout.error()), ("data", state.data.error())]
        .into_iter()
        .filter_map(|(stage, error)| error.map(|message| format!("{stage}: {message}")))
        .collect()
}
