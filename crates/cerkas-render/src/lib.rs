//! Rendering of layout-driven list views.
//!
//! [`TableView`] is the target-independent model of one dynamic table:
//! visible columns with their minimum widths, and either body rows or the
//! empty placeholder. [`PageView`] adds the page title and debug panels
//! around every table node of a layout. Both render to HTML ([`html`]) or to
//! a terminal table ([`terminal`]).

pub mod columns;
pub mod html;
pub mod page;
pub mod table;
pub mod terminal;

pub use columns::{ColumnPolicy, METADATA_COLUMNS, min_width_px};
pub use page::{DebugPanel, PageView, PanelSelection};
pub use table::{EMPTY_MESSAGE, TableBody, TableColumn, TableView};
