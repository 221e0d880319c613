//! Method resource tools.
//!
//! Methods belong to files; whether a method UUID actually belongs to the
//! given file is enforced by the platform, not here.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use crate::core::api::ApiClient;
use crate::domains::tools::common::{entity_summary, failure_result, success_result, tool};

/// Parameters for creating a method.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MethodCreateParams {
    /// File the method is added to.
    #[schemars(description = "UUID of the file the method belongs to")]
    pub file_uuid: String,

    #[schemars(description = "Method name")]
    pub name: String,

    /// Parameter list, in the platform's method-signature shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Parameter list in the platform's signature shape")]
    pub parameters: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Declared return type")]
    pub return_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MethodGetParams {
    #[schemars(description = "UUID of the method")]
    pub method_uuid: String,
}

/// Updatable method fields. Only fields the caller supplies are sent.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MethodFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "New method name")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Replacement parameter list")]
    pub parameters: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "New declared return type")]
    pub return_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MethodUpdateParams {
    #[schemars(description = "UUID of the method")]
    pub method_uuid: String,

    #[serde(flatten)]
    pub fields: MethodFields,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MethodDeleteParams {
    #[schemars(description = "UUID of the method")]
    pub method_uuid: String,
}

pub struct MethodCreateTool;

impl MethodCreateTool {
    pub const NAME: &'static str = "method_create";

    pub const DESCRIPTION: &'static str = "Create a method in a file. The platform validates the signature and indexes the method; returns the created method including its UUID.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<MethodCreateParams>(),
        )
    }

    #[instrument(skip_all, fields(file_uuid = %params.file_uuid, name = %params.name))]
    pub async fn execute(client: &ApiClient, params: MethodCreateParams) -> CallToolResult {
        match client.create_method(&params).await {
            Ok(data) => success_result(format!("Created method {}", entity_summary(&data)), data),
            Err(e) => failure_result("Failed to create method", e),
        }
    }
}

pub struct MethodGetTool;

impl MethodGetTool {
    pub const NAME: &'static str = "method_get";

    pub const DESCRIPTION: &'static str =
        "Fetch a method by UUID, including its signature and statement list.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<MethodGetParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, params: MethodGetParams) -> CallToolResult {
        match client.fetch_method(&params.method_uuid).await {
            Ok(data) => success_result(format!("Fetched method {}", entity_summary(&data)), data),
            Err(e) => failure_result("Failed to fetch method", e),
        }
    }
}

pub struct MethodUpdateTool;

impl MethodUpdateTool {
    pub const NAME: &'static str = "method_update";

    pub const DESCRIPTION: &'static str =
        "Update a method by UUID. Supply only the fields to change: name, parameters, or return type.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<MethodUpdateParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, params: MethodUpdateParams) -> CallToolResult {
        match client
            .update_method(&params.method_uuid, &params.fields)
            .await
        {
            Ok(data) => success_result(format!("Updated method {}", entity_summary(&data)), data),
            Err(e) => failure_result("Failed to update method", e),
        }
    }
}

pub struct MethodDeleteTool;

impl MethodDeleteTool {
    pub const NAME: &'static str = "method_delete";

    pub const DESCRIPTION: &'static str = "Delete a method by UUID, including its statements.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<MethodDeleteParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, params: MethodDeleteParams) -> CallToolResult {
        match client.delete_method(&params.method_uuid).await {
            Ok(data) => success_result(format!("Deleted method {}", params.method_uuid), data),
            Err(e) => failure_result("Failed to delete method", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_params_with_signature() {
        let params: MethodCreateParams = serde_json::from_value(json!({
            "file_uuid": "f-1",
            "name": "calculate_total",
            "parameters": [{"name": "order_uuid", "type": "uuid"}],
            "return_type": "decimal"
        }))
        .unwrap();
        assert_eq!(params.name, "calculate_total");
        assert!(params.parameters.is_some());
    }

    #[test]
    fn test_create_params_missing_file_uuid_rejected() {
        let result = serde_json::from_value::<MethodCreateParams>(json!({"name": "m"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_update_body_excludes_uuid() {
        let params: MethodUpdateParams = serde_json::from_value(json!({
            "method_uuid": "m-1",
            "return_type": "string"
        }))
        .unwrap();
        let body = serde_json::to_value(&params.fields).unwrap();
        assert_eq!(body, json!({"return_type": "string"}));
    }
}
