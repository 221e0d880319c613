//! Codestore MCP Server
//!
//! This crate exposes the Codestore platform's HTTPS API as a fixed
//! catalogue of MCP tools. Every tool invocation performs exactly one
//! remote call; the platform owns parsing, persistence, dependency
//! resolution and the element tree. Nothing is retried, cached or
//! persisted locally.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: configuration, error handling, the remote API client and
//!   the MCP server handler
//! - **domains::tools**: the tool catalogue (one definition file per
//!   resource family) and the dispatcher that turns every invocation into
//!   exactly one result envelope
//!
//! # Example
//!
//! ```rust,no_run
//! use codestore_mcp_server::core::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
