//! Capability registry tools.
//!
//! Read-only views over the platform's capability registry.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::api::ApiClient;
use crate::domains::tools::common::{entity_summary, failure_result, success_result, tool};

/// Parameters for listing capabilities.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CapabilityListParams {
    /// Restrict the listing to one category.
    #[schemars(description = "Optional category filter (e.g. storage, messaging, auth)")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CapabilityGetParams {
    #[schemars(description = "UUID of the capability")]
    pub capability_uuid: String,
}

pub struct CapabilityListTool;

impl CapabilityListTool {
    pub const NAME: &'static str = "capability_list";

    pub const DESCRIPTION: &'static str =
        "List the capabilities registered on the platform, optionally filtered by category.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<CapabilityListParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, params: CapabilityListParams) -> CallToolResult {
        match client.list_capabilities(params.category.as_deref()).await {
            Ok(data) => {
                let summary = match data.as_array().map(Vec::len) {
                    Some(n) => format!("Listed {n} capability(ies)"),
                    None => "Listed capabilities".to_string(),
                };
                success_result(summary, data)
            }
            Err(e) => failure_result("Failed to list capabilities", e),
        }
    }
}

pub struct CapabilityGetTool;

impl CapabilityGetTool {
    pub const NAME: &'static str = "capability_get";

    pub const DESCRIPTION: &'static str = "Fetch a capability by UUID.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<CapabilityGetParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, params: CapabilityGetParams) -> CallToolResult {
        match client.fetch_capability(&params.capability_uuid).await {
            Ok(data) => {
                success_result(format!("Fetched capability {}", entity_summary(&data)), data)
            }
            Err(e) => failure_result("Failed to fetch capability", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_params_empty_and_filtered() {
        let params: CapabilityListParams = serde_json::from_value(json!({})).unwrap();
        assert!(params.category.is_none());

        let params: CapabilityListParams =
            serde_json::from_value(json!({"category": "storage"})).unwrap();
        assert_eq!(params.category.as_deref(), Some("storage"));
    }
}
