//! Data model shared by the cerkas view client crates.
//!
//! The backend describes a list view in two payloads: a *layout* (which
//! fields a table shows) and the *data* rows for that layout. Both arrive
//! wrapped in an [`Envelope`].

mod de;
pub mod envelope;
pub mod error;
pub mod fetch;
pub mod field;
pub mod label;
pub mod layout;
pub mod query;
pub mod record;
pub mod route;

pub use envelope::Envelope;
pub use error::{ModelError, Result};
pub use fetch::{FetchState, Fetched, Stage};
pub use field::{FieldDescriptor, FieldMap};
pub use label::to_label;
pub use layout::{
    LayoutNode, LayoutPayload, OtherNode, TableNode, TableProps, ViewContent, ViewLayout, ViewObject,
};
pub use query::{DataQuery, Direction, FilterGroup, FilterItem, Order};
pub use record::{CellValue, DataPayload, RowRecord};
pub use route::RouteIdentity;
