//! Route identity: the four codes that select a view endpoint.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Tenant, product, object and view-content codes of one list view.
///
/// A route is only fetchable once every code is non-empty; see
/// [`RouteIdentity::is_complete`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteIdentity {
    pub tenant: String,
    pub product: String,
    pub object: String,
    pub view_content: String,
}

impl RouteIdentity {
    pub fn new(
        tenant: impl Into<String>,
        product: impl Into<String>,
        object: impl Into<String>,
        view_content: impl Into<String>,
    ) -> Self {
        Self {
            tenant: tenant.into(),
            product: product.into(),
            object: object.into(),
            view_content: view_content.into(),
        }
    }

    /// Parse either `t/{tenant}/p/{product}/o/{object}/view/{view}` or four
    /// bare segments `{tenant}/{product}/{object}/{view}`.
    ///
    /// Leading, trailing and repeated slashes are ignored.
    pub fn parse(path: &str) -> Result<Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["t", tenant, "p", product, "o", object, "view", view] => {
                Ok(Self::new(*tenant, *product, *object, *view))
            }
            [tenant, product, object, view] => Ok(Self::new(*tenant, *product, *object, *view)),
            _ => Err(ModelError::InvalidRoute(format!(
                "expected t/{{tenant}}/p/{{product}}/o/{{object}}/view/{{view}} or four codes, got '{path}'"
            ))),
        }
    }

    /// True when none of the four codes is empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_codes().is_empty()
    }

    /// Names of the codes that are still empty, in route order.
    #[must_use]
    pub fn missing_codes(&self) -> Vec<&'static str> {
        [
            ("tenant", &self.tenant),
            ("product", &self.product),
            ("object", &self.object),
            ("view_content", &self.view_content),
        ]
        .into_iter()
        .filter(|(_, code)| code.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Path of the layout endpoint, relative to the backend base URL.
    #[must_use]
    pub fn layout_path(&self) -> String {
        format!("{self}/record")
    }

    /// Path of the data endpoint, relative to the backend base URL.
    #[must_use]
    pub fn data_path(&self) -> String {
        format!("{self}/data")
    }
}

impl fmt::Display for RouteIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t/{}/p/{}/o/{}/view/{}",
            self.tenant, self.product, self.object, self.view_content
        )
    }
}

impl FromStr for RouteIdentity {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
