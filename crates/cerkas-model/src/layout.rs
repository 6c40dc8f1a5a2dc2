//! Layout payload: the server-described structure of a view.
//!
//! Layout nodes are tagged by their `type` property. Only `"table"` nodes
//! carry meaning for the client; every other type is kept as an
//! [`OtherNode`] so it survives a round trip but is never rendered.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::de::null_as_default;
use crate::field::{FieldDescriptor, FieldMap};

/// Node type that renders as a dynamic table.
pub const TABLE_NODE_TYPE: &str = "table";

/// `data` of the layout response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_content: Option<ViewContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<ViewLayout>,
}

impl LayoutPayload {
    /// Field selection for the data request of the same cycle.
    ///
    /// Empty when the layout, its first child, or that child's fields are absent.
    #[must_use]
    pub fn field_map(&self) -> FieldMap {
        self.layout
            .as_ref()
            .map(ViewLayout::data_fields)
            .unwrap_or_default()
    }

    /// Display name of the object, when the backend sent a non-empty one.
    #[must_use]
    pub fn object_display_name(&self) -> Option<&str> {
        self.view_content
            .as_ref()
            .and_then(|content| content.object.as_ref())
            .and_then(|object| object.display_name.as_deref())
            .filter(|name| !name.is_empty())
    }

    pub fn table_nodes(&self) -> impl Iterator<Item = &TableNode> {
        self.layout.iter().flat_map(ViewLayout::table_nodes)
    }
}

/// View content metadata. Only the parts used for presentation are typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<ViewObject>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Root of the layout tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewLayout {
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<LayoutNode>,
}

impl ViewLayout {
    /// Fields of the first child, keyed by code.
    ///
    /// Only the first child is consulted, and only when it is a table.
    #[must_use]
    pub fn data_fields(&self) -> FieldMap {
        match self.children.first() {
            Some(LayoutNode::Table(table)) => FieldMap::from_fields(&table.props.fields),
            _ => FieldMap::default(),
        }
    }

    pub fn table_nodes(&self) -> impl Iterator<Item = &TableNode> {
        self.children.iter().filter_map(LayoutNode::as_table)
    }
}

/// A child of the layout tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNode", into = "RawNode")]
pub enum LayoutNode {
    Table(TableNode),
    Other(OtherNode),
}

impl LayoutNode {
    #[must_use]
    pub fn as_table(&self) -> Option<&TableNode> {
        match self {
            Self::Table(table) => Some(table),
            Self::Other(_) => None,
        }
    }

    #[must_use]
    pub fn node_type(&self) -> &str {
        match self {
            Self::Table(_) => TABLE_NODE_TYPE,
            Self::Other(other) => &other.node_type,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableNode {
    pub class_name: Option<String>,
    pub props: TableProps,
}

impl TableNode {
    #[must_use]
    pub fn with_fields(fields: Vec<FieldDescriptor>) -> Self {
        Self {
            class_name: None,
            props: TableProps {
                fields,
                is_displaying_metadata_column: None,
            },
        }
    }

    /// Whether metadata columns are shown; absent means hidden.
    #[must_use]
    pub fn shows_metadata_columns(&self) -> bool {
        self.props.is_displaying_metadata_column.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableProps {
    #[serde(default, deserialize_with = "null_as_default")]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_displaying_metadata_column: Option<bool>,
}

/// Node of a type the client does not render.
#[derive(Debug, Clone, PartialEq)]
pub struct OtherNode {
    pub node_type: String,
    pub class_name: Option<String>,
    pub props: Option<Value>,
}

/// Wire shape shared by every node type.
#[derive(Serialize, Deserialize)]
struct RawNode {
    #[serde(rename = "type")]
    node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    props: Option<Value>,
}

impl TryFrom<RawNode> for LayoutNode {
    type Error = serde_json::Error;

    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        if raw.node_type != TABLE_NODE_TYPE {
            return Ok(Self::Other(OtherNode {
                node_type: raw.node_type,
                class_name: raw.class_name,
                props: raw.props,
            }));
        }
        let props = match raw.props {
            Some(Value::Null) | None => TableProps::default(),
            Some(value) => serde_json::from_value(value)?,
        };
        Ok(Self::Table(TableNode {
            class_name: raw.class_name,
            props,
        }))
    }
}

impl From<LayoutNode> for RawNode {
    fn from(node: LayoutNode) -> Self {
        match node {
            LayoutNode::Table(table) => Self {
                node_type: TABLE_NODE_TYPE.to_string(),
                class_name: table.class_name,
                props: serde_json::to_value(table.props).ok(),
            },
            LayoutNode::Other(other) => Self {
                node_type: other.node_type,
                class_name: other.class_name,
                props: other.props,
            },
        }
    }
}
