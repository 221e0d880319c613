//! Resource scaffold tools.
//!
//! A scaffold asks the platform to generate a whole resource (routes,
//! methods, storage) from a kind and a name. The set of available kinds
//! is owned by the platform and queried, not hardcoded here.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use crate::core::api::ApiClient;
use crate::domains::tools::common::{entity_summary, failure_result, success_result, tool};

/// Parameters for creating a scaffold.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScaffoldCreateParams {
    /// Scaffold kind, one of the kinds reported by `scaffold_kinds`.
    #[schemars(description = "Scaffold kind, as reported by scaffold_kinds (e.g. crud, api, auth)")]
    pub kind: String,

    #[schemars(description = "Name of the resource to scaffold")]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "UUID of the module to scaffold into")]
    pub module_uuid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Kind-specific generation options")]
    pub options: Option<Value>,
}

/// Parameters for listing scaffold kinds. Takes no fields; an empty
/// arguments object is still required.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ScaffoldKindsParams {}

pub struct ScaffoldCreateTool;

impl ScaffoldCreateTool {
    pub const NAME: &'static str = "scaffold_create";

    pub const DESCRIPTION: &'static str = "Generate a complete resource (routes, methods, storage) from a scaffold kind and a name. Each call creates a new resource; calling twice creates two. Returns the scaffolded resource including its UUID.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<ScaffoldCreateParams>(),
        )
    }

    #[instrument(skip_all, fields(kind = %params.kind, name = %params.name))]
    pub async fn execute(client: &ApiClient, params: ScaffoldCreateParams) -> CallToolResult {
        match client.create_scaffold(&params).await {
            Ok(data) => success_result(
                format!(
                    "Scaffolded {} resource {}",
                    params.kind,
                    entity_summary(&data)
                ),
                data,
            ),
            Err(e) => failure_result("Failed to create scaffold", e),
        }
    }
}

pub struct ScaffoldKindsTool;

impl ScaffoldKindsTool {
    pub const NAME: &'static str = "scaffold_kinds";

    pub const DESCRIPTION: &'static str =
        "List the scaffold kinds the platform currently supports.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<ScaffoldKindsParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, _params: ScaffoldKindsParams) -> CallToolResult {
        match client.list_scaffold_kinds().await {
            Ok(data) => {
                let count = data.as_array().map(Vec::len);
                let summary = match count {
                    Some(n) => format!("Listed {n} scaffold kind(s)"),
                    None => "Listed scaffold kinds".to_string(),
                };
                success_result(summary, data)
            }
            Err(e) => failure_result("Failed to list scaffold kinds", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_params_body_shape() {
        let params: ScaffoldCreateParams = serde_json::from_value(json!({
            "kind": "crud",
            "name": "Widget"
        }))
        .unwrap();
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body, json!({"kind": "crud", "name": "Widget"}));
    }

    #[test]
    fn test_create_params_options_passthrough() {
        let params: ScaffoldCreateParams = serde_json::from_value(json!({
            "kind": "api",
            "name": "Orders",
            "options": {"soft_delete": true}
        }))
        .unwrap();
        assert_eq!(params.options.unwrap()["soft_delete"], true);
    }

    #[test]
    fn test_kinds_params_accept_empty_object() {
        let result = serde_json::from_value::<ScaffoldKindsParams>(json!({}));
        assert!(result.is_ok());
    }
}
