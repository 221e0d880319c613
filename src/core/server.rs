//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. The surface is deliberately small: the catalogue is listed
//! verbatim and every tool call is delegated to the registry, which always
//! answers with a result envelope.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::core::api::ApiClient;
use crate::domains::tools::ToolRegistry;

/// The main MCP server handler.
///
/// Holds the configuration and the tool registry, both built once at
/// startup and never mutated afterward.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Catalogue and dispatcher for all tool calls.
    registry: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let client = ApiClient::new(&config.api);

        Self {
            registry: Arc::new(ToolRegistry::new(client)),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the tool registry.
    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "This server exposes the Codestore platform API as tools: files, methods, \
                 statements, UI elements, routes, directories, modules, resource scaffolds, \
                 code execution, the capability registry and performance/quality analyses. \
                 Every call performs one remote request; failures are returned as tool \
                 results, so check isError before using a payload."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    #[instrument(skip_all)]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: ToolRegistry::tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip_all, fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self
            .registry
            .dispatch(&request.name, request.arguments)
            .await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_construction() {
        let server = McpServer::new(Config::default());
        assert_eq!(server.name(), "codestore-mcp-server");
        assert!(!server.version().is_empty());
    }

    #[test]
    fn test_get_info_advertises_tools_only() {
        let server = McpServer::new(Config::default());
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
        assert!(info.instructions.is_some());
    }
}
