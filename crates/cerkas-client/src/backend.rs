//! Seam between the sequencer and the transport.

use async_trait::async_trait;
use cerkas_model::{DataPayload, DataQuery, Fetched, LayoutPayload, RouteIdentity};

use crate::error::Result;

/// Source of layout and data payloads for a route.
#[async_trait]
pub trait ViewBackend: Send + Sync {
    /// Fetch the view layout (the `record` endpoint).
    async fn fetch_layout(&self, route: &RouteIdentity) -> Result<Fetched<LayoutPayload>>;

    /// Fetch the rows selected by `query` (the `data` endpoint).
    async fn fetch_data(
        &self,
        route: &RouteIdentity,
        query: &DataQuery,
    ) -> Result<Fetched<DataPayload>>;
}

#[async_trait]
impl<B: ViewBackend + ?Sized> ViewBackend for std::sync::Arc<B> {
    async fn fetch_layout(&self, route: &RouteIdentity) -> Result<Fetched<LayoutPayload>> {
        (**self).fetch_layout(route).await
    }

    async fn fetch_data(
        &self,
        route: &RouteIdentity,
        query: &DataQuery,
    ) -> Result<Fetched<DataPayload>> {
        (**self).fetch_data(route, query).await
    }
}
