//! MCP Server Entry Point
//!
//! This is the main entry point for the MCP server. It loads configuration,
//! initializes logging, attaches the server to stdin/stdout, and blocks
//! until the channel closes.

use anyhow::Result;
use rmcp::ServiceExt;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use codestore_mcp_server::core::{Config, McpServer};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment. Without the API token nothing
    // downstream can function, so bail out before serving anything.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("codestore-mcp-server: {e}");
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!("Remote API: {}", config.api.base_url);

    // Create the MCP server
    let server = McpServer::new(config);

    info!("Ready - communicating via stdin/stdout");

    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| anyhow::anyhow!("failed to start stdio transport: {e}"))?;

    service
        .waiting()
        .await
        .map_err(|e| anyhow::anyhow!("transport error: {e}"))?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level. Output goes to stderr;
/// stdout belongs to the protocol channel.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
