//! Shared helpers for tool definitions.
//!
//! Envelope construction lives here so every tool reports success and
//! failure the same way: one text summary, structured payload when there
//! is one, `is_error` always set.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use serde_json::Value;
use tracing::warn;

use crate::core::api::ApiError;

/// Build a Tool model from the catalogue constants.
pub fn tool(name: &'static str, description: &'static str, input_schema: Arc<JsonObject>) -> Tool {
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema,
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Create a success envelope with a text summary and the decoded remote
/// payload as structured content (omitted when the remote sent no body).
pub fn success_result(summary: String, payload: Value) -> CallToolResult {
    let structured = match payload {
        Value::Null => None,
        other => Some(other),
    };
    CallToolResult {
        content: vec![Content::text(summary)],
        structured_content: structured,
        is_error: Some(false),
        meta: None,
    }
}

/// Create a failure envelope from a remote call error.
///
/// The error message is preserved verbatim after the context prefix, and
/// any structured detail the remote response included rides along as
/// structured content.
pub fn failure_result(context: &str, error: ApiError) -> CallToolResult {
    let message = format!("{context}: {error}");
    warn!("{}", message);
    CallToolResult {
        content: vec![Content::text(message)],
        structured_content: error.detail().cloned(),
        is_error: Some(true),
        meta: None,
    }
}

/// Best-effort `'name' (uuid)` rendering of a remote entity for summaries.
pub fn entity_summary(payload: &Value) -> String {
    let name = payload.get("name").and_then(Value::as_str);
    let uuid = payload.get("uuid").and_then(Value::as_str);
    match (name, uuid) {
        (Some(name), Some(uuid)) => format!("'{name}' ({uuid})"),
        (Some(name), None) => format!("'{name}'"),
        (None, Some(uuid)) => uuid.to_string(),
        (None, None) => "resource".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_summary_variants() {
        assert_eq!(
            entity_summary(&json!({"name": "Widget", "uuid": "abc-123"})),
            "'Widget' (abc-123)"
        );
        assert_eq!(entity_summary(&json!({"name": "Widget"})), "'Widget'");
        assert_eq!(entity_summary(&json!({"uuid": "abc-123"})), "abc-123");
        assert_eq!(entity_summary(&json!({})), "resource");
    }

    #[test]
    fn test_success_result_carries_payload() {
        let result = success_result("done".to_string(), json!({"uuid": "u-1"}));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.structured_content.unwrap()["uuid"], "u-1");
    }

    #[test]
    fn test_success_result_null_payload_has_no_structured_content() {
        let result = success_result("done".to_string(), Value::Null);
        assert_eq!(result.is_error, Some(false));
        assert!(result.structured_content.is_none());
    }

    #[test]
    fn test_failure_result_preserves_detail() {
        let error = ApiError::Status {
            status: 422,
            message: "name is required".to_string(),
            detail: Some(json!({"field": "name"})),
        };
        let result = failure_result("Failed to create file", error);
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result.structured_content.unwrap()["field"], "name");
    }
}
