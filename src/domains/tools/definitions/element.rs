//! Element resource tools.
//!
//! Elements form the platform's UI tree. The tree itself (parent links,
//! ordering, orphan cleanup) is stored and enforced remotely; these tools
//! pass identifiers and property bags through.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use crate::core::api::ApiClient;
use crate::domains::tools::common::{entity_summary, failure_result, success_result, tool};

/// Parameters for creating an element.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ElementCreateParams {
    /// Element kind, e.g. `container`, `text`, `button`, `input`.
    #[schemars(description = "Element kind (container, text, button, input, ...)")]
    pub kind: String,

    /// Parent element. Top-level when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "UUID of the parent element (top-level when omitted)")]
    pub parent_uuid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Kind-specific element properties")]
    pub properties: Option<Value>,
}

/// Parameters for fetching an element.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ElementGetParams {
    #[schemars(description = "UUID of the element")]
    pub element_uuid: String,

    /// Fetch the element's subtree as well. Resolved remotely.
    #[serde(default)]
    #[schemars(description = "Include the element's child subtree (default: false)")]
    pub include_children: bool,
}

/// Updatable element fields.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ElementFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "UUID of the new parent element")]
    pub parent_uuid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Replacement kind-specific properties")]
    pub properties: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ElementUpdateParams {
    #[schemars(description = "UUID of the element")]
    pub element_uuid: String,

    #[serde(flatten)]
    pub fields: ElementFields,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ElementDeleteParams {
    #[schemars(description = "UUID of the element")]
    pub element_uuid: String,
}

pub struct ElementCreateTool;

impl ElementCreateTool {
    pub const NAME: &'static str = "element_create";

    pub const DESCRIPTION: &'static str = "Create a UI element, optionally under a parent element. Properties are kind-specific and validated by the platform. Returns the created element including its UUID.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<ElementCreateParams>(),
        )
    }

    #[instrument(skip_all, fields(kind = %params.kind))]
    pub async fn execute(client: &ApiClient, params: ElementCreateParams) -> CallToolResult {
        match client.create_element(&params).await {
            Ok(data) => success_result(
                format!("Created {} element {}", params.kind, entity_summary(&data)),
                data,
            ),
            Err(e) => failure_result("Failed to create element", e),
        }
    }
}

pub struct ElementGetTool;

impl ElementGetTool {
    pub const NAME: &'static str = "element_get";

    pub const DESCRIPTION: &'static str =
        "Fetch a UI element by UUID, optionally including its child subtree.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<ElementGetParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, params: ElementGetParams) -> CallToolResult {
        match client
            .fetch_element(&params.element_uuid, params.include_children)
            .await
        {
            Ok(data) => success_result(format!("Fetched element {}", entity_summary(&data)), data),
            Err(e) => failure_result("Failed to fetch element", e),
        }
    }
}

pub struct ElementUpdateTool;

impl ElementUpdateTool {
    pub const NAME: &'static str = "element_update";

    pub const DESCRIPTION: &'static str = "Update a UI element by UUID. Supply only the fields to change: parent (reparent) or properties.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<ElementUpdateParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, params: ElementUpdateParams) -> CallToolResult {
        match client
            .update_element(&params.element_uuid, &params.fields)
            .await
        {
            Ok(data) => success_result(format!("Updated element {}", entity_summary(&data)), data),
            Err(e) => failure_result("Failed to update element", e),
        }
    }
}

pub struct ElementDeleteTool;

impl ElementDeleteTool {
    pub const NAME: &'static str = "element_delete";

    pub const DESCRIPTION: &'static str =
        "Delete a UI element by UUID. The platform removes its subtree with it.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<ElementDeleteParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, params: ElementDeleteParams) -> CallToolResult {
        match client.delete_element(&params.element_uuid).await {
            Ok(data) => success_result(format!("Deleted element {}", params.element_uuid), data),
            Err(e) => failure_result("Failed to delete element", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_params_include_children_defaults_false() {
        let params: ElementGetParams =
            serde_json::from_value(json!({"element_uuid": "e-1"})).unwrap();
        assert!(!params.include_children);
    }

    #[test]
    fn test_get_params_include_children_opt_in() {
        let params: ElementGetParams =
            serde_json::from_value(json!({"element_uuid": "e-1", "include_children": true}))
                .unwrap();
        assert!(params.include_children);
    }

    #[test]
    fn test_create_params_properties_passthrough() {
        let params: ElementCreateParams = serde_json::from_value(json!({
            "kind": "button",
            "parent_uuid": "e-root",
            "properties": {"label": "Save", "variant": "primary"}
        }))
        .unwrap();
        assert_eq!(params.properties.unwrap()["label"], "Save");
    }
}
