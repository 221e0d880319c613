//! Code execution tool.
//!
//! Runs a stored method remotely. The adapter neither sandboxes nor times
//! the run; `timeout_ms` is passed through and enforced server-side.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use crate::core::api::ApiClient;
use crate::domains::tools::common::{failure_result, success_result, tool};

/// Parameters for executing a stored method.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CodeExecuteParams {
    #[schemars(description = "UUID of the method to execute")]
    pub method_uuid: String,

    /// Arguments handed to the method, keyed by parameter name.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Arguments for the method, keyed by parameter name")]
    pub arguments: Option<Value>,

    /// Wall-clock limit for the run, enforced by the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Execution timeout in milliseconds, enforced server-side")]
    pub timeout_ms: Option<u64>,
}

pub struct CodeExecuteTool;

impl CodeExecuteTool {
    pub const NAME: &'static str = "code_execute";

    pub const DESCRIPTION: &'static str = "Execute a stored method on the platform and return its result. The optional timeout is enforced by the platform, not locally.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<CodeExecuteParams>(),
        )
    }

    #[instrument(skip_all, fields(method_uuid = %params.method_uuid))]
    pub async fn execute(client: &ApiClient, params: CodeExecuteParams) -> CallToolResult {
        match client.run_execution(&params).await {
            Ok(data) => success_result(format!("Executed method {}", params.method_uuid), data),
            Err(e) => failure_result("Execution failed", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_params_timeout_passthrough() {
        let params: CodeExecuteParams = serde_json::from_value(json!({
            "method_uuid": "m-1",
            "arguments": {"order_uuid": "o-9"},
            "timeout_ms": 5000
        }))
        .unwrap();
        assert_eq!(params.timeout_ms, Some(5000));

        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body["timeout_ms"], 5000);
        assert_eq!(body["arguments"]["order_uuid"], "o-9");
    }

    #[test]
    fn test_params_minimal() {
        let params: CodeExecuteParams =
            serde_json::from_value(json!({"method_uuid": "m-1"})).unwrap();
        assert!(params.arguments.is_none());
        assert!(params.timeout_ms.is_none());
    }
}
