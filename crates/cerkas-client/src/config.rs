//! Settings for talking to the view backend.

use std::time::Duration;

use cerkas_model::query::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use cerkas_model::{DataQuery, FieldMap, Order, RouteIdentity};
use serde::{Deserialize, Serialize};

/// Backend used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable that overrides [`ClientSettings::base_url`].
pub const BASE_URL_ENV: &str = "CERKAS_BASE_URL";

/// Backend location and the static query parameters of every data request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Base URL the route paths are appended to.
    pub base_url: String,

    /// Page sent with every data request.
    pub page: u32,

    /// Page size sent with every data request.
    pub page_size: u32,

    /// Ordering sent with every data request.
    pub orders: Vec<Order>,

    /// Per-request timeout. Requests wait indefinitely when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            orders: Order::defaults(),
            request_timeout_secs: None,
        }
    }
}

impl ClientSettings {
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Apply `CERKAS_BASE_URL` when it is set and non-empty.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => self.with_base_url(url.trim()),
            _ => self,
        }
    }

    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Absolute URL for a route-relative endpoint path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Data request for `route` selecting `fields`.
    #[must_use]
    pub fn data_query(&self, route: &RouteIdentity, fields: FieldMap) -> DataQuery {
        DataQuery::for_route(route, fields)
            .with_orders(self.orders.clone())
            .with_page(self.page, self.page_size)
    }
}
