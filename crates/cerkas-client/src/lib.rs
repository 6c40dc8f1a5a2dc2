//! Layout/data fetch sequencing for cerkas list views.
//!
//! A [`Sequencer`] runs one *fetch cycle* per route identity: it requests the
//! view layout, derives the data request's field selection from that layout,
//! then requests the data. Every state transition is published on a
//! `tokio::sync::watch` channel so renderers can follow along.
//!
//! # Example
//!
//! ```no_run
//! use cerkas_client::{ClientSettings, HttpBackend, Sequencer};
//! use cerkas_model::RouteIdentity;
//!
//! async fn show() -> cerkas_client::Result<()> {
//!     let settings = ClientSettings::default();
//!     let sequencer = Sequencer::new(HttpBackend::new(&settings)?, settings);
//!     let outcome = sequencer
//!         .run_cycle(RouteIdentity::new("acme", "crm", "customer", "all"))
//!         .await;
//!     println!("layout: {}", outcome.state.layout.label());
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod backend;
pub mod config;
pub mod error;
pub mod http;
pub mod sequencer;

pub use backend::ViewBackend;
pub use config::{ClientSettings, DEFAULT_BASE_URL};
pub use error::{ClientError, Result};
pub use http::HttpBackend;
pub use sequencer::{CycleOutcome, DataState, LayoutState, Sequencer, ViewState};

/// Current version of the client crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
