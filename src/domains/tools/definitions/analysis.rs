//! Performance and quality analysis tools.
//!
//! Analyses run asynchronously on the platform: `analysis_run` starts one
//! and returns its handle, `analysis_get` fetches the state and findings.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::api::ApiClient;
use crate::domains::tools::common::{entity_summary, failure_result, success_result, tool};

/// What an analysis measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    Performance,
    Quality,
}

impl AnalysisKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Performance => "performance",
            Self::Quality => "quality",
        }
    }
}

/// Parameters for starting an analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisRunParams {
    #[schemars(description = "Analysis kind: performance or quality")]
    pub kind: AnalysisKind,

    /// File or module to analyse; the platform resolves the entity type.
    #[schemars(description = "UUID of the file or module to analyse")]
    pub target_uuid: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Kind-specific analysis options")]
    pub options: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AnalysisGetParams {
    #[schemars(description = "UUID of the analysis")]
    pub analysis_uuid: String,
}

pub struct AnalysisRunTool;

impl AnalysisRunTool {
    pub const NAME: &'static str = "analysis_run";

    pub const DESCRIPTION: &'static str = "Start a performance or quality analysis over a file or module. Returns the analysis handle; poll it with analysis_get.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<AnalysisRunParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, params: AnalysisRunParams) -> CallToolResult {
        match client.run_analysis(&params).await {
            Ok(data) => success_result(
                format!(
                    "Started {} analysis {}",
                    params.kind.as_str(),
                    entity_summary(&data)
                ),
                data,
            ),
            Err(e) => failure_result("Failed to start analysis", e),
        }
    }
}

pub struct AnalysisGetTool;

impl AnalysisGetTool {
    pub const NAME: &'static str = "analysis_get";

    pub const DESCRIPTION: &'static str =
        "Fetch an analysis by UUID, including its state and any findings so far.";

    pub fn to_tool() -> Tool {
        tool(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<AnalysisGetParams>(),
        )
    }

    pub async fn execute(client: &ApiClient, params: AnalysisGetParams) -> CallToolResult {
        match client.fetch_analysis(&params.analysis_uuid).await {
            Ok(data) => success_result(format!("Fetched analysis {}", entity_summary(&data)), data),
            Err(e) => failure_result("Failed to fetch analysis", e),
        }
    }
}
