//! Module resource tools.
//!
//! Modules group routes, files and capabilities; dependency resolution
//! between modules happens on the platform.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::api::ApiClient;
use crate::domains::tools::common::{entity_summary, failure_result, success_result, tool};

/// Parameters for creating a module.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ModuleCreateParams {
    #[schemars(description = "Module name")]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Human-readable module description")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ModuleGetParams {
    #[schemars(description = "UUID of the module")]
    pub module_uuid: String,
}

/// Updatable module fields.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ModuleFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "New module name")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "New module description")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ModuleUpdateParams {
    #[schemars(description = "UUID of the module")]
    pub module_uuid: String,

    #[serde(flatten)]
    pub fields: ModuleFields,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ModuleDeleteParams {
    #[schemars(description = "UUID of the module")]
    pub module_uuid: String,
}

pub struct ModuleCreateTool;

impl ModuleCreateTool {
    pub const NAME: &'static str = "module_create";

    pub const DESCRIPTION: &'static str =
        "Create a module. Returns the created module including its UUID.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<ModuleCreateParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, params: ModuleCreateParams) -> CallToolResult {
        match client.create_module(&params).await {
            Ok(data) => success_result(format!("Created module {}", entity_summary(&data)), data),
            Err(e) => failure_result("Failed to create module", e),
        }
    }
}

pub struct ModuleGetTool;

impl ModuleGetTool {
    pub const NAME: &'static str = "module_get";

    pub const DESCRIPTION: &'static str =
        "Fetch a module by UUID, including its resolved dependencies.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<ModuleGetParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, params: ModuleGetParams) -> CallToolResult {
        match client.fetch_module(&params.module_uuid).await {
            Ok(data) => success_result(format!("Fetched module {}", entity_summary(&data)), data),
            Err(e) => failure_result("Failed to fetch module", e),
        }
    }
}

pub struct ModuleUpdateTool;

impl ModuleUpdateTool {
    pub const NAME: &'static str = "module_update";

    pub const DESCRIPTION: &'static str =
        "Update a module by UUID. Supply only the fields to change: name or description.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<ModuleUpdateParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, params: ModuleUpdateParams) -> CallToolResult {
        match client
            .update_module(&params.module_uuid, &params.fields)
            .await
        {
            Ok(data) => success_result(format!("Updated module {}", entity_summary(&data)), data),
            Err(e) => failure_result("Failed to update module", e),
        }
    }
}

pub struct ModuleDeleteTool;

impl ModuleDeleteTool {
    pub const NAME: &'static str = "module_delete";

    pub const DESCRIPTION: &'static str = "Delete a module by UUID.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<ModuleDeleteParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, params: ModuleDeleteParams) -> CallToolResult {
        match client.delete_module(&params.module_uuid).await {
            Ok(data) => success_result(format!("Deleted module {}", params.module_uuid), data),
            Err(e) => failure_result("Failed to delete module", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_params_minimal() {
        let params: ModuleCreateParams = serde_json::from_value(json!({"name": "billing"})).unwrap();
        assert_eq!(params.name, "billing");
        assert!(params.description.is_none());
    }

    #[test]
    fn test_update_body_excludes_uuid() {
        let params: ModuleUpdateParams = serde_json::from_value(json!({
            "module_uuid": "mod-1",
            "description": "Billing and invoicing"
        }))
        .unwrap();
        let body = serde_json::to_value(&params.fields).unwrap();
        assert_eq!(body, json!({"description": "Billing and invoicing"}));
    }
}
