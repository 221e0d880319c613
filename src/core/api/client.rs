//! Thin HTTP wrapper over the Codestore platform API.
//!
//! Each public method maps to exactly one remote endpoint and performs
//! exactly one request. There is no retry, batching or caching here; the
//! only connection reuse is whatever `reqwest`'s default keep-alive does.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::error::{ApiError, ApiResult};
use crate::core::config::ApiConfig;

/// Client for the Codestore platform API.
///
/// Cheap to clone; the underlying `reqwest::Client` is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    /// Create a new client from API configuration.
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> ApiResult<Value> {
        debug!("GET {}", path);
        let mut request = self.http.get(self.url(path)).bearer_auth(&self.token);
        if !query.is_empty() {
            request = request.query(query);
        }
        self.send(request).await
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Value> {
        debug!("POST {}", path);
        let request = self
            .http
            .post(self.url(path))
            .bearer_auth(&self.token)
            .json(body);
        self.send(request).await
    }

    async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Value> {
        debug!("PUT {}", path);
        let request = self
            .http
            .put(self.url(path))
            .bearer_auth(&self.token)
            .json(body);
        self.send(request).await
    }

    async fn delete(&self, path: &str) -> ApiResult<Value> {
        debug!("DELETE {}", path);
        let request = self.http.delete(self.url(path)).bearer_auth(&self.token);
        self.send(request).await
    }

    /// Issue the request and decode the response body.
    ///
    /// Non-2xx statuses become [`ApiError::Status`] carrying the remote's
    /// structured error body when it sent one. Successful responses must
    /// carry the platform's `{"data": ...}` envelope; an empty body (204)
    /// decodes to `Null`.
    async fn send(&self, request: reqwest::RequestBuilder) -> ApiResult<Value> {
        let response = request.send().await.map_err(ApiError::transport)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(ApiError::transport)?;

        if !status.is_success() {
            let detail: Option<Value> = serde_json::from_slice(&bytes).ok();
            let message = detail
                .as_ref()
                .and_then(remote_error_message)
                .unwrap_or_else(|| format!("HTTP {status}"));
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
                detail,
            });
        }

        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        let body: Value = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::Decode(format!("response is not valid JSON: {e}")))?;
        decode_data(body)
    }

    // ========================================================================
    // Files
    // ========================================================================

    pub async fn create_file<B: Serialize>(&self, body: &B) -> ApiResult<Value> {
        self.post("/v1/files", body).await
    }

    pub async fn fetch_file(&self, uuid: &str) -> ApiResult<Value> {
        self.get(&format!("/v1/files/{uuid}"), &[]).await
    }

    pub async fn update_file<B: Serialize>(&self, uuid: &str, body: &B) -> ApiResult<Value> {
        self.put(&format!("/v1/files/{uuid}"), body).await
    }

    pub async fn delete_file(&self, uuid: &str) -> ApiResult<Value> {
        self.delete(&format!("/v1/files/{uuid}")).await
    }

    // ========================================================================
    // Methods
    // ========================================================================

    pub async fn create_method<B: Serialize>(&self, body: &B) -> ApiResult<Value> {
        self.post("/v1/methods", body).await
    }

    pub async fn fetch_method(&self, uuid: &str) -> ApiResult<Value> {
        self.get(&format!("/v1/methods/{uuid}"), &[]).await
    }

    pub async fn update_method<B: Serialize>(&self, uuid: &str, body: &B) -> ApiResult<Value> {
        self.put(&format!("/v1/methods/{uuid}"), body).await
    }

    pub async fn delete_method(&self, uuid: &str) -> ApiResult<Value> {
        self.delete(&format!("/v1/methods/{uuid}")).await
    }

    // ========================================================================
    // Statements
    // ========================================================================

    pub async fn create_statement<B: Serialize>(&self, body: &B) -> ApiResult<Value> {
        self.post("/v1/statements", body).await
    }

    pub async fn fetch_statement(&self, uuid: &str) -> ApiResult<Value> {
        self.get(&format!("/v1/statements/{uuid}"), &[]).await
    }

    pub async fn update_statement<B: Serialize>(&self, uuid: &str, body: &B) -> ApiResult<Value> {
        self.put(&format!("/v1/statements/{uuid}"), body).await
    }

    pub async fn delete_statement(&self, uuid: &str) -> ApiResult<Value> {
        self.delete(&format!("/v1/statements/{uuid}")).await
    }

    // ========================================================================
    // Elements
    // ========================================================================

    pub async fn create_element<B: Serialize>(&self, body: &B) -> ApiResult<Value> {
        self.post("/v1/elements", body).await
    }

    /// Fetch an element, optionally with its subtree. The element tree
    /// lives entirely on the remote; the flag is passed through untouched.
    pub async fn fetch_element(&self, uuid: &str, include_children: bool) -> ApiResult<Value> {
        let query: Vec<(&str, String)> = if include_children {
            vec![("include_children", "true".to_string())]
        } else {
            Vec::new()
        };
        self.get(&format!("/v1/elements/{uuid}"), &query).await
    }

    pub async fn update_element<B: Serialize>(&self, uuid: &str, body: &B) -> ApiResult<Value> {
        self.put(&format!("/v1/elements/{uuid}"), body).await
    }

    pub async fn delete_element(&self, uuid: &str) -> ApiResult<Value> {
        self.delete(&format!("/v1/elements/{uuid}")).await
    }

    // ========================================================================
    // Routes
    // ========================================================================

    pub async fn create_route<B: Serialize>(&self, body: &B) -> ApiResult<Value> {
        self.post("/v1/routes", body).await
    }

    pub async fn fetch_route(&self, uuid: &str) -> ApiResult<Value> {
        self.get(&format!("/v1/routes/{uuid}"), &[]).await
    }

    pub async fn update_route<B: Serialize>(&self, uuid: &str, body: &B) -> ApiResult<Value> {
        self.put(&format!("/v1/routes/{uuid}"), body).await
    }

    pub async fn delete_route(&self, uuid: &str) -> ApiResult<Value> {
        self.delete(&format!("/v1/routes/{uuid}")).await
    }

    // ========================================================================
    // Directories
    // ========================================================================

    pub async fn create_directory<B: Serialize>(&self, body: &B) -> ApiResult<Value> {
        self.post("/v1/directories", body).await
    }

    pub async fn fetch_directory(&self, uuid: &str) -> ApiResult<Value> {
        self.get(&format!("/v1/directories/{uuid}"), &[]).await
    }

    pub async fn update_directory<B: Serialize>(&self, uuid: &str, body: &B) -> ApiResult<Value> {
        self.put(&format!("/v1/directories/{uuid}"), body).await
    }

    pub async fn delete_directory(&self, uuid: &str) -> ApiResult<Value> {
        self.delete(&format!("/v1/directories/{uuid}")).await
    }

    // ========================================================================
    // Modules
    // ========================================================================

    pub async fn create_module<B: Serialize>(&self, body: &B) -> ApiResult<Value> {
        self.post("/v1/modules", body).await
    }

    pub async fn fetch_module(&self, uuid: &str) -> ApiResult<Value> {
        self.get(&format!("/v1/modules/{uuid}"), &[]).await
    }

    pub async fn update_module<B: Serialize>(&self, uuid: &str, body: &B) -> ApiResult<Value> {
        self.put(&format!("/v1/modules/{uuid}"), body).await
    }

    pub async fn delete_module(&self, uuid: &str) -> ApiResult<Value> {
        self.delete(&format!("/v1/modules/{uuid}")).await
    }

    // ========================================================================
    // Scaffolds
    // ========================================================================

    pub async fn create_scaffold<B: Serialize>(&self, body: &B) -> ApiResult<Value> {
        self.post("/v1/scaffolds", body).await
    }

    pub async fn list_scaffold_kinds(&self) -> ApiResult<Value> {
        self.get("/v1/scaffolds/kinds", &[]).await
    }

    // ========================================================================
    // Executions
    // ========================================================================

    /// Run a stored method remotely. Any timeout in the body is enforced
    /// server-side; the adapter waits for the call to resolve or fail.
    pub async fn run_execution<B: Serialize>(&self, body: &B) -> ApiResult<Value> {
        self.post("/v1/executions", body).await
    }

    // ========================================================================
    // Capabilities
    // ========================================================================

    pub async fn list_capabilities(&self, category: Option<&str>) -> ApiResult<Value> {
        let query: Vec<(&str, String)> = category
            .map(|c| vec![("category", c.to_string())])
            .unwrap_or_default();
        self.get("/v1/capabilities", &query).await
    }

    pub async fn fetch_capability(&self, uuid: &str) -> ApiResult<Value> {
        self.get(&format!("/v1/capabilities/{uuid}"), &[]).await
    }

    // ========================================================================
    // Analyses
    // ========================================================================

    pub async fn run_analysis<B: Serialize>(&self, body: &B) -> ApiResult<Value> {
        self.post("/v1/analyses", body).await
    }

    pub async fn fetch_analysis(&self, uuid: &str) -> ApiResult<Value> {
        self.get(&format!("/v1/analyses/{uuid}"), &[]).await
    }
}

/// Unwrap the platform's `{"data": ...}` response envelope.
///
/// Anything else is a decode error, so a malformed remote response never
/// masquerades as an empty result.
fn decode_data(body: Value) -> ApiResult<Value> {
    match body {
        Value::Object(mut map) => map
            .remove("data")
            .ok_or_else(|| ApiError::Decode("response object has no 'data' field".to_string())),
        other => Err(ApiError::Decode(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

/// Best-effort extraction of a human-readable message from a remote error
/// body. The platform uses `message`; older endpoints used `error`.
fn remote_error_message(detail: &Value) -> Option<String> {
    detail
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| detail.get("error").and_then(Value::as_str))
        .map(str::to_owned)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(uri: &str) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: uri.to_string(),
            token: "test-token".to_string(),
        })
    }

    #[test]
    fn test_decode_data_unwraps_envelope() {
        let body = json!({"data": {"uuid": "abc-123"}});
        let data = decode_data(body).unwrap();
        assert_eq!(data["uuid"], "abc-123");
    }

    #[test]
    fn test_decode_data_rejects_missing_envelope() {
        let err = decode_data(json!({"uuid": "abc-123"})).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));

        let err = decode_data(json!([1, 2, 3])).unwrap_err();
        assert!(err.to_string().contains("an array"));
    }

    #[tokio::test]
    async fn test_bearer_token_attached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/files/f-1"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"uuid": "f-1"}})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server.uri());
        let data = client.fetch_file("f-1").await.unwrap();
        assert_eq!(data["uuid"], "f-1");
    }

    #[tokio::test]
    async fn test_status_error_preserves_remote_detail() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/methods/m-404"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "message": "method not found",
                "code": "not_found"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server.uri());
        let err = client.fetch_method("m-404").await.unwrap_err();
        match err {
            ApiError::Status {
                status,
                ref message,
                ref detail,
            } => {
                assert_eq!(status, 404);
                assert_eq!(message, "method not found");
                assert_eq!(detail.as_ref().unwrap()["code"], "not_found");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_status_error_without_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/modules/m-1"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let client = client_for(&server.uri());
        let err = client.fetch_module("m-1").await.unwrap_err();
        match err {
            ApiError::Status { status, detail, .. } => {
                assert_eq!(status, 502);
                assert!(detail.is_none());
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_body_decodes_to_null() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v1/routes/r-1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = client_for(&server.uri());
        let data = client.delete_route("r-1").await.unwrap();
        assert!(data.is_null());
    }

    #[tokio::test]
    async fn test_success_without_data_envelope_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/elements/e-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"uuid": "e-1"})))
            .mount(&server)
            .await;

        let client = client_for(&server.uri());
        let err = client.fetch_element("e-1", false).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_include_children_query_passthrough() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/elements/e-1"))
            .and(wiremock::matchers::query_param("include_children", "true"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": {"uuid": "e-1", "children": []}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server.uri());
        let data = client.fetch_element("e-1", true).await.unwrap();
        assert_eq!(data["uuid"], "e-1");
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        // Nothing listens on this port.
        let client = client_for("http://127.0.0.1:1");
        let err = client.fetch_file("f-1").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport { .. }));
    }
}
