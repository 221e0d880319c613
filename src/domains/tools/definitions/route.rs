//! Route resource tools.
//!
//! Routes bind an HTTP path and verb to a stored method or element page.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::api::ApiClient;
use crate::domains::tools::common::{entity_summary, failure_result, success_result, tool};

/// HTTP verb a route responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum RouteVerb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Parameters for creating a route.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RouteCreateParams {
    /// Route path, e.g. `/orders/:uuid`.
    #[schemars(description = "Route path, e.g. /orders/:uuid")]
    pub path: String,

    /// Verb the route answers. GET when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "HTTP verb the route answers (GET when omitted)")]
    pub verb: Option<RouteVerb>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "UUID of the module the route belongs to")]
    pub module_uuid: Option<String>,

    /// Method invoked when the route is hit.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "UUID of the method the route dispatches to")]
    pub target_method_uuid: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RouteGetParams {
    #[schemars(description = "UUID of the route")]
    pub route_uuid: String,
}

/// Updatable route fields.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RouteFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "New route path")]
    pub path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "New HTTP verb")]
    pub verb: Option<RouteVerb>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "UUID of the method the route dispatches to")]
    pub target_method_uuid: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RouteUpdateParams {
    #[schemars(description = "UUID of the route")]
    pub route_uuid: String,

    #[serde(flatten)]
    pub fields: RouteFields,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RouteDeleteParams {
    #[schemars(description = "UUID of the route")]
    pub route_uuid: String,
}

pub struct RouteCreateTool;

impl RouteCreateTool {
    pub const NAME: &'static str = "route_create";

    pub const DESCRIPTION: &'static str = "Create a route binding an HTTP path and verb to a stored method. Returns the created route including its UUID.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<RouteCreateParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, params: RouteCreateParams) -> CallToolResult {
        match client.create_route(&params).await {
            Ok(data) => success_result(
                format!("Created route {} {}", params.path, entity_summary(&data)),
                data,
            ),
            Err(e) => failure_result("Failed to create route", e),
        }
    }
}

pub struct RouteGetTool;

impl RouteGetTool {
    pub const NAME: &'static str = "route_get";

    pub const DESCRIPTION: &'static str = "Fetch a route by UUID.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<RouteGetParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, params: RouteGetParams) -> CallToolResult {
        match client.fetch_route(&params.route_uuid).await {
            Ok(data) => success_result(format!("Fetched route {}", entity_summary(&data)), data),
            Err(e) => failure_result("Failed to fetch route", e),
        }
    }
}

pub struct RouteUpdateTool;

impl RouteUpdateTool {
    pub const NAME: &'static str = "route_update";

    pub const DESCRIPTION: &'static str =
        "Update a route by UUID. Supply only the fields to change: path, verb, or target method.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<RouteUpdateParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, params: RouteUpdateParams) -> CallToolResult {
        match client.update_route(&params.route_uuid, &params.fields).await {
            Ok(data) => success_result(format!("Updated route {}", entity_summary(&data)), data),
            Err(e) => failure_result("Failed to update route", e),
        }
    }
}

pub struct RouteDeleteTool;

impl RouteDeleteTool {
    pub const NAME: &'static str = "route_delete";

    pub const DESCRIPTION: &'static str = "Delete a route by UUID.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<RouteDeleteParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, params: RouteDeleteParams) -> CallToolResult {
        match client.delete_route(&params.route_uuid).await {
            Ok(data) => success_result(format!("Deleted route {}", params.route_uuid), data),
            Err(e) => failure_result("Failed to delete route", e),
        }
    }
}
