//! Precondition errors

use super::PkgsyncError;

/// Creates a tool unavailable error
pub fn tool_unavailable(tool: impl Into<String>, reason: impl Into<String>) -> PkgsyncError {
    PkgsyncError::ToolUnavailable {
        tool: tool.into(),
        reason: reason.into(),
    }
}

/// Creates an insufficient privilege error
pub fn insufficient_privilege(reason: impl Into<String>) -> PkgsyncError {
    PkgsyncError::InsufficientPrivilege {
        reason: reason.into(),
    }
}
