//! Tool Registry - central catalogue and dispatch for all tools.
//!
//! The registry is constructed once at startup with the API client and
//! passed into the server; there is no ambient/global catalogue state, so
//! tests can build as many independent instances as they like.
//!
//! Dispatch contract: every invocation, success or failure, produces
//! exactly one result envelope. Unknown names, missing argument bags and
//! argument-shape mismatches are reported on the same channel a success
//! would use; nothing here ever takes the process down.

use rmcp::model::{CallToolResult, JsonObject, Tool};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use super::definitions::{
    AnalysisGetTool, AnalysisRunTool, CapabilityGetTool, CapabilityListTool, CodeExecuteTool,
    DirectoryCreateTool, DirectoryDeleteTool, DirectoryGetTool, DirectoryUpdateTool,
    ElementCreateTool, ElementDeleteTool, ElementGetTool, ElementUpdateTool, FileCreateTool,
    FileDeleteTool, FileGetTool, FileUpdateTool, MethodCreateTool, MethodDeleteTool, MethodGetTool,
    MethodUpdateTool, ModuleCreateTool, ModuleDeleteTool, ModuleGetTool, ModuleUpdateTool,
    RouteCreateTool, RouteDeleteTool, RouteGetTool, RouteUpdateTool, ScaffoldCreateTool,
    ScaffoldKindsTool, StatementCreateTool, StatementDeleteTool, StatementGetTool,
    StatementUpdateTool,
};
use super::error::ToolError;
use crate::core::api::ApiClient;

/// Tool registry - owns the API client and dispatches every invocation.
pub struct ToolRegistry {
    client: ApiClient,
}

impl ToolRegistry {
    /// Create a new tool registry around an API client.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            FileCreateTool::NAME,
            FileGetTool::NAME,
            FileUpdateTool::NAME,
            FileDeleteTool::NAME,
            MethodCreateTool::NAME,
            MethodGetTool::NAME,
            MethodUpdateTool::NAME,
            MethodDeleteTool::NAME,
            StatementCreateTool::NAME,
            StatementGetTool::NAME,
            StatementUpdateTool::NAME,
            StatementDeleteTool::NAME,
            ElementCreateTool::NAME,
            ElementGetTool::NAME,
            ElementUpdateTool::NAME,
            ElementDeleteTool::NAME,
            RouteCreateTool::NAME,
            RouteGetTool::NAME,
            RouteUpdateTool::NAME,
            RouteDeleteTool::NAME,
            DirectoryCreateTool::NAME,
            DirectoryGetTool::NAME,
            DirectoryUpdateTool::NAME,
            DirectoryDeleteTool::NAME,
            ModuleCreateTool::NAME,
            ModuleGetTool::NAME,
            ModuleUpdateTool::NAME,
            ModuleDeleteTool::NAME,
            ScaffoldCreateTool::NAME,
            ScaffoldKindsTool::NAME,
            CodeExecuteTool::NAME,
            CapabilityListTool::NAME,
            CapabilityGetTool::NAME,
            AnalysisRunTool::NAME,
            AnalysisGetTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for the advertised catalogue;
    /// it is static for the lifetime of the process.
    pub fn tools() -> Vec<Tool> {
        vec![
            FileCreateTool::to_tool(),
            FileGetTool::to_tool(),
            FileUpdateTool::to_tool(),
            FileDeleteTool::to_tool(),
            MethodCreateTool::to_tool(),
            MethodGetTool::to_tool(),
            MethodUpdateTool::to_tool(),
            MethodDeleteTool::to_tool(),
            StatementCreateTool::to_tool(),
            StatementGetTool::to_tool(),
            StatementUpdateTool::to_tool(),
            StatementDeleteTool::to_tool(),
            ElementCreateTool::to_tool(),
            ElementGetTool::to_tool(),
            ElementUpdateTool::to_tool(),
            ElementDeleteTool::to_tool(),
            RouteCreateTool::to_tool(),
            RouteGetTool::to_tool(),
            RouteUpdateTool::to_tool(),
            RouteDeleteTool::to_tool(),
            DirectoryCreateTool::to_tool(),
            DirectoryGetTool::to_tool(),
            DirectoryUpdateTool::to_tool(),
            DirectoryDeleteTool::to_tool(),
            ModuleCreateTool::to_tool(),
            ModuleGetTool::to_tool(),
            ModuleUpdateTool::to_tool(),
            ModuleDeleteTool::to_tool(),
            ScaffoldCreateTool::to_tool(),
            ScaffoldKindsTool::to_tool(),
            CodeExecuteTool::to_tool(),
            CapabilityListTool::to_tool(),
            CapabilityGetTool::to_tool(),
            AnalysisRunTool::to_tool(),
            AnalysisGetTool::to_tool(),
        ]
    }

    /// Dispatch an invocation to its handler.
    ///
    /// Always returns an envelope; dispatch-boundary errors are converted
    /// into failure results here.
    pub async fn dispatch(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        info!("Tool call: {}", name);
        match self.try_dispatch(name, arguments).await {
            Ok(result) => result,
            Err(e) => {
                warn!("{}", e);
                e.into_result()
            }
        }
    }

    async fn try_dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let args = arguments.ok_or(ToolError::MissingArguments)?;
        let client = &self.client;

        Ok(match name {
            FileCreateTool::NAME => FileCreateTool::execute(client, parse(name, args)?).await,
            FileGetTool::NAME => FileGetTool::execute(client, parse(name, args)?).await,
            FileUpdateTool::NAME => FileUpdateTool::execute(client, parse(name, args)?).await,
            FileDeleteTool::NAME => FileDeleteTool::execute(client, parse(name, args)?).await,
            MethodCreateTool::NAME => MethodCreateTool::execute(client, parse(name, args)?).await,
            MethodGetTool::NAME => MethodGetTool::execute(client, parse(name, args)?).await,
            MethodUpdateTool::NAME => MethodUpdateTool::execute(client, parse(name, args)?).await,
            MethodDeleteTool::NAME => MethodDeleteTool::execute(client, parse(name, args)?).await,
            StatementCreateTool::NAME => {
                StatementCreateTool::execute(client, parse(name, args)?).await
            }
            StatementGetTool::NAME => StatementGetTool::execute(client, parse(name, args)?).await,
            StatementUpdateTool::NAME => {
                StatementUpdateTool::execute(client, parse(name, args)?).await
            }
            StatementDeleteTool::NAME => {
                StatementDeleteTool::execute(client, parse(name, args)?).await
            }
            ElementCreateTool::NAME => ElementCreateTool::execute(client, parse(name, args)?).await,
            ElementGetTool::NAME => ElementGetTool::execute(client, parse(name, args)?).await,
            ElementUpdateTool::NAME => ElementUpdateTool::execute(client, parse(name, args)?).await,
            ElementDeleteTool::NAME => ElementDeleteTool::execute(client, parse(name, args)?).await,
            RouteCreateTool::NAME => RouteCreateTool::execute(client, parse(name, args)?).await,
            RouteGetTool::NAME => RouteGetTool::execute(client, parse(name, args)?).await,
            RouteUpdateTool::NAME => RouteUpdateTool::execute(client, parse(name, args)?).await,
            RouteDeleteTool::NAME => RouteDeleteTool::execute(client, parse(name, args)?).await,
            DirectoryCreateTool::NAME => {
                DirectoryCreateTool::execute(client, parse(name, args)?).await
            }
            DirectoryGetTool::NAME => DirectoryGetTool::execute(client, parse(name, args)?).await,
            DirectoryUpdateTool::NAME => {
                DirectoryUpdateTool::execute(client, parse(name, args)?).await
            }
            DirectoryDeleteTool::NAME => {
                DirectoryDeleteTool::execute(client, parse(name, args)?).await
            }
            ModuleCreateTool::NAME => ModuleCreateTool::execute(client, parse(name, args)?).await,
            ModuleGetTool::NAME => ModuleGetTool::execute(client, parse(name, args)?).await,
            ModuleUpdateTool::NAME => ModuleUpdateTool::execute(client, parse(name, args)?).await,
            ModuleDeleteTool::NAME => ModuleDeleteTool::execute(client, parse(name, args)?).await,
            ScaffoldCreateTool::NAME => {
                ScaffoldCreateTool::execute(client, parse(name, args)?).await
            }
            ScaffoldKindsTool::NAME => ScaffoldKindsTool::execute(client, parse(name, args)?).await,
            CodeExecuteTool::NAME => CodeExecuteTool::execute(client, parse(name, args)?).await,
            CapabilityListTool::NAME => {
                CapabilityListTool::execute(client, parse(name, args)?).await
            }
            CapabilityGetTool::NAME => CapabilityGetTool::execute(client, parse(name, args)?).await,
            AnalysisRunTool::NAME => AnalysisRunTool::execute(client, parse(name, args)?).await,
            AnalysisGetTool::NAME => AnalysisGetTool::execute(client, parse(name, args)?).await,
            _ => return Err(ToolError::not_found(name)),
        })
    }
}

/// Validate the argument bag against the tool's typed contract.
fn parse<T: DeserializeOwned>(tool: &str, args: JsonObject) -> Result<T, ToolError> {
    serde_json::from_value(Value::Object(args))
        .map_err(|e| ToolError::invalid_arguments(tool, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::json;
    use std::collections::HashSet;
    use wiremock::matchers::{any, body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::core::config::ApiConfig;

    fn registry_for(uri: &str) -> ToolRegistry {
        ToolRegistry::new(ApiClient::new(&ApiConfig {
            base_url: uri.to_string(),
            token: "test-token".to_string(),
        }))
    }

    fn args(value: Value) -> Option<JsonObject> {
        match value {
            Value::Object(map) => Some(map),
            _ => panic!("test arguments must be an object"),
        }
    }

    fn summary_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            other => panic!("expected text content, got {other:?}"),
        }
    }

    /// Minimal valid argument bag for every catalogued tool.
    fn minimal_arguments(name: &str) -> Value {
        match name {
            "file_create" => json!({"name": "orders.cs"}),
            "file_get" | "file_update" | "file_delete" => json!({"file_uuid": "f-1"}),
            "method_create" => json!({"file_uuid": "f-1", "name": "calc"}),
            "method_get" | "method_update" | "method_delete" => json!({"method_uuid": "m-1"}),
            "statement_create" => json!({"method_uuid": "m-1", "kind": "assign"}),
            "statement_get" | "statement_update" | "statement_delete" => {
                json!({"statement_uuid": "s-1"})
            }
            "element_create" => json!({"kind": "container"}),
            "element_get" | "element_update" | "element_delete" => json!({"element_uuid": "e-1"}),
            "route_create" => json!({"path": "/orders"}),
            "route_get" | "route_update" | "route_delete" => json!({"route_uuid": "r-1"}),
            "directory_create" => json!({"name": "services"}),
            "directory_get" | "directory_update" | "directory_delete" => {
                json!({"directory_uuid": "d-1"})
            }
            "module_create" => json!({"name": "billing"}),
            "module_get" | "module_update" | "module_delete" => json!({"module_uuid": "mod-1"}),
            "scaffold_create" => json!({"kind": "crud", "name": "Widget"}),
            "scaffold_kinds" => json!({}),
            "code_execute" => json!({"method_uuid": "m-1"}),
            "capability_list" => json!({}),
            "capability_get" => json!({"capability_uuid": "c-1"}),
            "analysis_run" => json!({"kind": "quality", "target_uuid": "f-1"}),
            "analysis_get" => json!({"analysis_uuid": "a-1"}),
            other => panic!("no minimal arguments defined for tool {other}"),
        }
    }

    #[test]
    fn test_tool_names_unique() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 35);
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_catalogue_matches_names() {
        let names = ToolRegistry::tool_names();
        let tools = ToolRegistry::tools();
        assert_eq!(tools.len(), names.len());
        for tool in &tools {
            assert!(names.contains(&tool.name.as_ref()));
            assert!(tool.description.is_some());
        }
    }

    #[test]
    fn test_catalogue_stable_across_listings() {
        let first = serde_json::to_value(ToolRegistry::tools()).unwrap();
        let second = serde_json::to_value(ToolRegistry::tools()).unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_every_tool_succeeds_on_mocked_remote() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": {"uuid": "u-1", "name": "Thing"}})),
            )
            .mount(&server)
            .await;

        let registry = registry_for(&server.uri());
        for name in ToolRegistry::tool_names() {
            let result = registry.dispatch(name, args(minimal_arguments(name))).await;
            assert_eq!(
                result.is_error,
                Some(false),
                "tool {name} failed: {}",
                summary_text(&result)
            );
        }
    }

    #[tokio::test]
    async fn test_unknown_tool_then_valid_tool() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": {"uuid": "f-1"}})),
            )
            .mount(&server)
            .await;

        let registry = registry_for(&server.uri());

        let result = registry.dispatch("bogus_tool", args(json!({}))).await;
        assert_eq!(result.is_error, Some(true));
        assert!(summary_text(&result).contains("Unknown tool: bogus_tool"));

        // The registry keeps serving after a bad invocation.
        let result = registry
            .dispatch("file_get", args(json!({"file_uuid": "f-1"})))
            .await;
        assert_eq!(result.is_error, Some(false));
    }

    #[tokio::test]
    async fn test_missing_argument_bag_is_reported() {
        let registry = registry_for("http://127.0.0.1:1");
        let result = registry.dispatch("file_get", None).await;
        assert_eq!(result.is_error, Some(true));
        assert!(summary_text(&result).contains("Missing arguments"));
    }

    #[tokio::test]
    async fn test_shape_mismatch_is_caught_locally() {
        // No remote call should happen; the dead address would fail loudly.
        let registry = registry_for("http://127.0.0.1:1");
        let result = registry.dispatch("file_get", args(json!({}))).await;
        assert_eq!(result.is_error, Some(true));
        let text = summary_text(&result);
        assert!(text.contains("file_get"));
        assert!(text.contains("file_uuid"));
    }

    #[tokio::test]
    async fn test_remote_error_message_preserved() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/files"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "message": "a file named orders.cs already exists",
                "field": "name"
            })))
            .mount(&server)
            .await;

        let registry = registry_for(&server.uri());
        let result = registry
            .dispatch("file_create", args(json!({"name": "orders.cs"})))
            .await;
        assert_eq!(result.is_error, Some(true));
        assert!(summary_text(&result).contains("a file named orders.cs already exists"));
        assert_eq!(result.structured_content.unwrap()["field"], "name");
    }

    #[tokio::test]
    async fn test_connection_failure_becomes_failure_envelope() {
        let registry = registry_for("http://127.0.0.1:1");
        let result = registry
            .dispatch("file_get", args(json!({"file_uuid": "f-1"})))
            .await;
        assert_eq!(result.is_error, Some(true));
        assert!(summary_text(&result).contains("Failed to fetch file"));
    }

    #[tokio::test]
    async fn test_create_twice_issues_two_remote_calls() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/scaffolds"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": {"uuid": "abc-123", "name": "Widget"}})),
            )
            .expect(2)
            .mount(&server)
            .await;

        let registry = registry_for(&server.uri());
        let call = json!({"kind": "crud", "name": "Widget"});
        let first = registry.dispatch("scaffold_create", args(call.clone())).await;
        let second = registry.dispatch("scaffold_create", args(call)).await;
        assert_eq!(first.is_error, Some(false));
        assert_eq!(second.is_error, Some(false));
        // expect(2) verifies on drop that no local deduplication happened.
    }

    #[tokio::test]
    async fn test_scaffold_widget_end_to_end() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/scaffolds"))
            .and(body_json(json!({"kind": "crud", "name": "Widget"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": {"uuid": "abc-123", "name": "Widget"}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let registry = registry_for(&server.uri());
        let result = registry
            .dispatch("scaffold_create", args(json!({"kind": "crud", "name": "Widget"})))
            .await;

        assert_eq!(result.is_error, Some(false));
        let text = summary_text(&result);
        assert!(text.contains("Widget"));
        assert!(text.contains("abc-123"));
    }

    #[tokio::test]
    async fn test_malformed_remote_envelope_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/files/f-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"uuid": "f-1"})))
            .mount(&server)
            .await;

        let registry = registry_for(&server.uri());
        let result = registry
            .dispatch("file_get", args(json!({"file_uuid": "f-1"})))
            .await;
        assert_eq!(result.is_error, Some(true));
        assert!(summary_text(&result).contains("malformed remote response"));
    }
}
