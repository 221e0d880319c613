//! Directory resource tools.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::api::ApiClient;
use crate::domains::tools::common::{entity_summary, failure_result, success_result, tool};

/// Parameters for creating a directory.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DirectoryCreateParams {
    #[schemars(description = "Directory name")]
    pub name: String,

    /// Parent directory. The workspace root is used when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "UUID of the parent directory (workspace root when omitted)")]
    pub parent_uuid: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DirectoryGetParams {
    #[schemars(description = "UUID of the directory")]
    pub directory_uuid: String,
}

/// Updatable directory fields.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DirectoryFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "New directory name")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "UUID of the directory to move this one into")]
    pub parent_uuid: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DirectoryUpdateParams {
    #[schemars(description = "UUID of the directory")]
    pub directory_uuid: String,

    #[serde(flatten)]
    pub fields: DirectoryFields,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DirectoryDeleteParams {
    #[schemars(description = "UUID of the directory")]
    pub directory_uuid: String,
}

pub struct DirectoryCreateTool;

impl DirectoryCreateTool {
    pub const NAME: &'static str = "directory_create";

    pub const DESCRIPTION: &'static str = "Create a directory, optionally inside a parent directory. Returns the created directory including its UUID.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<DirectoryCreateParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, params: DirectoryCreateParams) -> CallToolResult {
        match client.create_directory(&params).await {
            Ok(data) => {
                success_result(format!("Created directory {}", entity_summary(&data)), data)
            }
            Err(e) => failure_result("Failed to create directory", e),
        }
    }
}

pub struct DirectoryGetTool;

impl DirectoryGetTool {
    pub const NAME: &'static str = "directory_get";

    pub const DESCRIPTION: &'static str =
        "Fetch a directory by UUID, including its file and subdirectory listing.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<DirectoryGetParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, params: DirectoryGetParams) -> CallToolResult {
        match client.fetch_directory(&params.directory_uuid).await {
            Ok(data) => {
                success_result(format!("Fetched directory {}", entity_summary(&data)), data)
            }
            Err(e) => failure_result("Failed to fetch directory", e),
        }
    }
}

pub struct DirectoryUpdateTool;

impl DirectoryUpdateTool {
    pub const NAME: &'static str = "directory_update";

    pub const DESCRIPTION: &'static str =
        "Update a directory by UUID. Supply only the fields to change: name or parent (move).";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<DirectoryUpdateParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, params: DirectoryUpdateParams) -> CallToolResult {
        match client
            .update_directory(&params.directory_uuid, &params.fields)
            .await
        {
            Ok(data) => {
                success_result(format!("Updated directory {}", entity_summary(&data)), data)
            }
            Err(e) => failure_result("Failed to update directory", e),
        }
    }
}

pub struct DirectoryDeleteTool;

impl DirectoryDeleteTool {
    pub const NAME: &'static str = "directory_delete";

    pub const DESCRIPTION: &'static str =
        "Delete a directory by UUID. The platform removes its contents with it.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<DirectoryDeleteParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, params: DirectoryDeleteParams) -> CallToolResult {
        match client.delete_directory(&params.directory_uuid).await {
            Ok(data) => {
                success_result(format!("Deleted directory {}", params.directory_uuid), data)
            }
            Err(e) => failure_result("Failed to delete directory", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_params_minimal() {
        let params: DirectoryCreateParams =
            serde_json::from_value(json!({"name": "services"})).unwrap();
        assert_eq!(params.name, "services");
        assert!(params.parent_uuid.is_none());
    }

    #[test]
    fn test_update_move_body() {
        let params: DirectoryUpdateParams = serde_json::from_value(json!({
            "directory_uuid": "d-1",
            "parent_uuid": "d-2"
        }))
        .unwrap();
        let body = serde_json::to_value(&params.fields).unwrap();
        assert_eq!(body, json!({"parent_uuid": "d-2"}));
    }
}
