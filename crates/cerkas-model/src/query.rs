//! Body of the data request.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::FieldMap;
use crate::route::RouteIdentity;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    #[serde(alias = "asc")]
    Asc,
    #[serde(alias = "desc")]
    Desc,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub field_name: String,
    pub direction: Direction,
}

impl Order {
    pub fn asc(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            direction: Direction::Desc,
        }
    }

    /// Newest first, then by name.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![Self::desc("created_at"), Self::asc("name")]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterItem {
    pub field_name: String,
    pub operator: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub operator: String,
    #[serde(rename = "filter_item", default)]
    pub filters: Vec<FilterItem>,
}

/// Query sent to the data endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataQuery {
    pub fields: FieldMap,
    pub filters: Vec<FilterGroup>,
    pub orders: Vec<Order>,
    pub page: u32,
    pub page_size: u32,
    pub object_code: String,
    pub tenant_code: String,
    pub product_code: String,
    pub view_content_code: String,
}

impl DataQuery {
    /// Query for `route` with no filters, the default ordering and the first page.
    #[must_use]
    pub fn for_route(route: &RouteIdentity, fields: FieldMap) -> Self {
        Self {
            fields,
            filters: Vec::new(),
            orders: Order::defaults(),
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            object_code: route.object.clone(),
            tenant_code: route.tenant.clone(),
            product_code: route.product.clone(),
            view_content_code: route.view_content.clone(),
        }
    }

    #[must_use]
    pub fn with_orders(mut self, orders: Vec<Order>) -> Self {
        self.orders = orders;
        self
    }

    #[must_use]
    pub fn with_page(mut self, page: u32, page_size: u32) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }
}
