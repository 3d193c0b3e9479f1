/// Core error types for webcig
use thiserror::Error;
use crate::types::UserId;

/// Result type alias using `WebcigError`
pub type Result<T> = std::result::Result<T, WebcigError>;

/// Core error type for webcig
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WebcigError {
    /// A global id decoded to a type no fetcher is registered for
    #[error("Unknown node type: {0}")]
    UnknownNodeType(String),

    /// A global id that is not valid base64 of `Type:id`
    #[error("Invalid global id: {0}")]
    InvalidGlobalId(String),

    /// Negative limits or unreadable cursors on a connection field
    #[error("Invalid connection arguments: {0}")]
    InvalidConnectionArgs(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// User not found
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl WebcigError {
    /// Create an unknown node type error
    pub fn unknown_node_type(type_name: impl Into<String>) -> Self {
        Self::UnknownNodeType(type_name.into())
    }

    /// Create an invalid global id error
    pub fn invalid_global_id(msg: impl Into<String>) -> Self {
        Self::InvalidGlobalId(msg.into())
    }

    /// Create an invalid connection arguments error
    pub fn invalid_connection_args(msg: impl Into<String>) -> Self {
        Self::InvalidConnectionArgs(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Stable machine-readable code, surfaced to API clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownNodeType(_) => "UNKNOWN_NODE_TYPE",
            Self::InvalidGlobalId(_) => "INVALID_GLOBAL_ID",
            Self::InvalidConnectionArgs(_) => "INVALID_CONNECTION_ARGS",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::UserNotFound(_) => "NOT_FOUND",
            Self::Storage(_) => "STORAGE",
        }
    }
}
