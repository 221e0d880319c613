//! Statement resource tools.
//!
//! Statements are the platform's unit of executable logic inside a method.
//! Their `config` payload is schemaless by contract: each statement kind
//! defines its own shape and the platform validates it on write.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::api::ApiClient;
use crate::domains::tools::common::{entity_summary, failure_result, success_result, tool};

/// Parameters for creating a statement.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StatementCreateParams {
    #[schemars(description = "UUID of the method the statement is appended to")]
    pub method_uuid: String,

    /// Statement kind, e.g. `assign`, `call`, `return`, `condition`.
    #[schemars(description = "Statement kind (assign, call, return, condition, ...)")]
    pub kind: String,

    /// Zero-based position within the method. Appended when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Zero-based position within the method (appended when omitted)")]
    pub position: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Kind-specific configuration payload")]
    pub config: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct StatementGetParams {
    #[schemars(description = "UUID of the statement")]
    pub statement_uuid: String,
}

/// Updatable statement fields.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StatementFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "New zero-based position within the method")]
    pub position: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Replacement kind-specific configuration payload")]
    pub config: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct StatementUpdateParams {
    #[schemars(description = "UUID of the statement")]
    pub statement_uuid: String,

    #[serde(flatten)]
    pub fields: StatementFields,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct StatementDeleteParams {
    #[schemars(description = "UUID of the statement")]
    pub statement_uuid: String,
}

pub struct StatementCreateTool;

impl StatementCreateTool {
    pub const NAME: &'static str = "statement_create";

    pub const DESCRIPTION: &'static str = "Add a statement to a method. The config payload is kind-specific and validated by the platform. Returns the created statement including its UUID.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<StatementCreateParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, params: StatementCreateParams) -> CallToolResult {
        match client.create_statement(&params).await {
            Ok(data) => success_result(
                format!("Created {} statement {}", params.kind, entity_summary(&data)),
                data,
            ),
            Err(e) => failure_result("Failed to create statement", e),
        }
    }
}

pub struct StatementGetTool;

impl StatementGetTool {
    pub const NAME: &'static str = "statement_get";

    pub const DESCRIPTION: &'static str = "Fetch a statement by UUID.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<StatementGetParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, params: StatementGetParams) -> CallToolResult {
        match client.fetch_statement(&params.statement_uuid).await {
            Ok(data) => {
                success_result(format!("Fetched statement {}", entity_summary(&data)), data)
            }
            Err(e) => failure_result("Failed to fetch statement", e),
        }
    }
}

pub struct StatementUpdateTool;

impl StatementUpdateTool {
    pub const NAME: &'static str = "statement_update";

    pub const DESCRIPTION: &'static str =
        "Update a statement by UUID. Supply only the fields to change: position or config.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<StatementUpdateParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, params: StatementUpdateParams) -> CallToolResult {
        match client
            .update_statement(&params.statement_uuid, &params.fields)
            .await
        {
            Ok(data) => {
                success_result(format!("Updated statement {}", entity_summary(&data)), data)
            }
            Err(e) => failure_result("Failed to update statement", e),
        }
    }
}

pub struct StatementDeleteTool;

impl StatementDeleteTool {
    pub const NAME: &'static str = "statement_delete";

    pub const DESCRIPTION: &'static str = "Delete a statement by UUID.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<StatementDeleteParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, params: StatementDeleteParams) -> CallToolResult {
        match client.delete_statement(&params.statement_uuid).await {
            Ok(data) => {
                success_result(format!("Deleted statement {}", params.statement_uuid), data)
            }
            Err(e) => failure_result("Failed to delete statement", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_params_config_passthrough() {
        let params: StatementCreateParams = serde_json::from_value(json!({
            "method_uuid": "m-1",
            "kind": "assign",
            "config": {"target": "total", "expression": "price * quantity"}
        }))
        .unwrap();
        assert_eq!(params.kind, "assign");
        assert_eq!(params.config.unwrap()["target"], "total");
        assert!(params.position.is_none());
    }

    #[test]
    fn test_update_body_only_supplied_fields() {
        let params: StatementUpdateParams = serde_json::from_value(json!({
            "statement_uuid": "s-1",
            "position": 3
        }))
        .unwrap();
        let body = serde_json::to_value(&params.fields).unwrap();
        assert_eq!(body, json!({"position": 3}));
    }
}
