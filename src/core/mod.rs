//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including error handling, configuration, the remote API client, and
//! server lifecycle management.

pub mod api;
pub mod config;
pub mod error;
pub mod server;

pub use api::{ApiClient, ApiError};
pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
