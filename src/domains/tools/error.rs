//! Errors raised at the tool dispatch boundary.
//!
//! These cover everything that can go wrong before a handler runs. Remote
//! failures are handled inside the handlers themselves; see
//! [`crate::core::api::ApiError`].

use rmcp::model::{CallToolResult, Content};
use thiserror::Error;

/// Errors that can occur while routing an invocation to its handler.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not in the catalogue.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// The invocation carried no argument bag at all.
    #[error("Missing arguments: tool calls require an arguments object")]
    MissingArguments,

    /// The argument bag did not match the tool's input contract.
    #[error("Invalid arguments for tool '{tool}': {message}")]
    InvalidArguments { tool: String, message: String },
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Convert into a failure envelope.
    ///
    /// Dispatch errors are results on the normal channel, never
    /// protocol-level faults, so the caller can always parse a response.
    pub fn into_result(self) -> CallToolResult {
        CallToolResult::error(vec![Content::text(self.to_string())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ToolError::not_found("bogus_tool");
        assert_eq!(err.to_string(), "Unknown tool: bogus_tool");
    }

    #[test]
    fn test_into_result_is_error_envelope() {
        let result = ToolError::MissingArguments.into_result();
        assert_eq!(result.is_error, Some(true));
    }
}
