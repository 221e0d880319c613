//! File resource tools.
//!
//! Files hold source text on the platform; the platform parses them and
//! maintains their method index. These tools only carry identifiers and
//! fields through.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::core::api::ApiClient;
use crate::domains::tools::common::{entity_summary, failure_result, success_result, tool};

/// Parameters for creating a file.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FileCreateParams {
    /// File name, including its extension.
    #[schemars(description = "File name, including extension")]
    pub name: String,

    /// Parent directory. The workspace root is used when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "UUID of the parent directory (workspace root when omitted)")]
    pub directory_uuid: Option<String>,

    /// Initial source text.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Initial source text of the file")]
    pub source: Option<String>,
}

/// Parameters for fetching a file.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FileGetParams {
    #[schemars(description = "UUID of the file")]
    pub file_uuid: String,
}

/// Updatable file fields. Only fields the caller supplies are sent.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FileFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "New file name")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "UUID of the directory to move the file into")]
    pub directory_uuid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Replacement source text")]
    pub source: Option<String>,
}

/// Parameters for updating a file.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FileUpdateParams {
    #[schemars(description = "UUID of the file")]
    pub file_uuid: String,

    #[serde(flatten)]
    pub fields: FileFields,
}

/// Parameters for deleting a file.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FileDeleteParams {
    #[schemars(description = "UUID of the file")]
    pub file_uuid: String,
}

pub struct FileCreateTool;

impl FileCreateTool {
    pub const NAME: &'static str = "file_create";

    pub const DESCRIPTION: &'static str = "Create a file on the Codestore platform. Optionally place it in a directory and seed it with source text. Returns the created file including its UUID.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<FileCreateParams>(),
        )
    }

    #[instrument(skip_all, fields(name = %params.name))]
    pub async fn execute(client: &ApiClient, params: FileCreateParams) -> CallToolResult {
        match client.create_file(&params).await {
            Ok(data) => success_result(format!("Created file {}", entity_summary(&data)), data),
            Err(e) => failure_result("Failed to create file", e),
        }
    }
}

pub struct FileGetTool;

impl FileGetTool {
    pub const NAME: &'static str = "file_get";

    pub const DESCRIPTION: &'static str =
        "Fetch a file by UUID, including its metadata and source text.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<FileGetParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, params: FileGetParams) -> CallToolResult {
        match client.fetch_file(&params.file_uuid).await {
            Ok(data) => success_result(format!("Fetched file {}", entity_summary(&data)), data),
            Err(e) => failure_result("Failed to fetch file", e),
        }
    }
}

pub struct FileUpdateTool;

impl FileUpdateTool {
    pub const NAME: &'static str = "file_update";

    pub const DESCRIPTION: &'static str = "Update a file by UUID. Supply only the fields to change: name, directory (move), or source text.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<FileUpdateParams>(),
        )
    }

    #[instrument(skip_all, fields(file_uuid = %params.file_uuid))]
    pub async fn execute(client: &ApiClient, params: FileUpdateParams) -> CallToolResult {
        match client.update_file(&params.file_uuid, &params.fields).await {
            Ok(data) => success_result(format!("Updated file {}", entity_summary(&data)), data),
            Err(e) => failure_result("Failed to update file", e),
        }
    }
}

pub struct FileDeleteTool;

impl FileDeleteTool {
    pub const NAME: &'static str = "file_delete";

    pub const DESCRIPTION: &'static str =
        "Delete a file by UUID. The platform removes its methods and statements with it.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<FileDeleteParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, params: FileDeleteParams) -> CallToolResult {
        match client.delete_file(&params.file_uuid).await {
            Ok(data) => success_result(format!("Deleted file {}", params.file_uuid), data),
            Err(e) => failure_result("Failed to delete file", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_params_minimal() {
        let json = r#"{"name": "orders.cs"}"#;
        let params: FileCreateParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.name, "orders.cs");
        assert!(params.directory_uuid.is_none());
        assert!(params.source.is_none());
    }

    #[test]
    fn test_create_params_body_omits_absent_fields() {
        let params = FileCreateParams {
            name: "orders.cs".to_string(),
            directory_uuid: None,
            source: None,
        };
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body.as_object().unwrap().len(), 1);
        assert_eq!(body["name"], "orders.cs");
    }

    #[test]
    fn test_update_params_flatten_fields() {
        let json = r#"{"file_uuid": "f-1", "name": "renamed.cs"}"#;
        let params: FileUpdateParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.file_uuid, "f-1");
        assert_eq!(params.fields.name.as_deref(), Some("renamed.cs"));

        // The PUT body carries only the supplied fields, never the UUID.
        let body = serde_json::to_value(&params.fields).unwrap();
        assert_eq!(body.as_object().unwrap().len(), 1);
        assert!(body.get("file_uuid").is_none());
    }

    #[test]
    fn test_get_params_require_uuid() {
        let result = serde_json::from_str::<FileGetParams>("{}");
        assert!(result.is_err());
    }
}
