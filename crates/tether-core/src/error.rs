//! Error types for tether operations.
//!
//! The decision functions never fail; errors only surface at the edges:
//! configuration loading, storage adapters and input parsing.

use thiserror::Error;

/// Result type alias for tether operations.
pub type TetherResult<T> = Result<T, TetherError>;

/// Main error type for all tether operations.
#[derive(Error, Debug)]
pub enum TetherError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input validation failed.
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        code: ErrorCode,
        suggestion: Option<String>,
    },

    /// Storage adapter failed.
    #[error("Store error: {message}")]
    Store {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Parse error.
    #[error("Parse error: {message}")]
    Parse { message: String, code: ErrorCode },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Configuration (CFG_xxx)
    CfgInvalid,
    CfgUnsupportedFormat,

    // Validation (VAL_xxx)
    ValInvalidInput,

    // Store (STORE_xxx)
    StoreReadFailed,
    StoreWriteFailed,

    // Parse (PARSE_xxx)
    ParseInvalidJson,

    // Internal
    Internal,
}

impl ErrorCode {
    /// Get the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::CfgInvalid => "CFG_001",
            ErrorCode::CfgUnsupportedFormat => "CFG_002",
            ErrorCode::ValInvalidInput => "VAL_001",
            ErrorCode::StoreReadFailed => "STORE_001",
            ErrorCode::StoreWriteFailed => "STORE_002",
            ErrorCode::ParseInvalidJson => "PARSE_001",
            ErrorCode::Internal => "INT_001",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TetherError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            code: ErrorCode::ValInvalidInput,
            suggestion: None,
        }
    }

    /// Create a validation error with suggestion.
    pub fn validation_with_suggestion(
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::Validation {
            message: message.into(),
            code: ErrorCode::ValInvalidInput,
            suggestion: Some(suggestion.into()),
        }
    }

    /// Create a store read error.
    pub fn store_read(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
            code: ErrorCode::StoreReadFailed,
            source: None,
        }
    }

    /// Create a store write error.
    pub fn store_write(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
            code: ErrorCode::StoreWriteFailed,
            source: None,
        }
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            code: ErrorCode::ParseInvalidJson,
        }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Configuration(_) => ErrorCode::CfgInvalid,
            Self::Validation { code, .. } => *code,
            Self::Store { code, .. } => *code,
            Self::Parse { code, .. } => *code,
            Self::Serialization(_) => ErrorCode::ParseInvalidJson,
            _ => ErrorCode::Internal,
        }
    }

    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Self::Configuration(_) => Some("Check the config file format and threshold values"),
            Self::Validation { suggestion, .. } => suggestion.as_deref(),
            Self::Store { .. } => Some("Check the host storage adapter"),
            Self::Parse { .. } | Self::Serialization(_) => Some("Input must be valid JSON"),
            _ => None,
        }
    }
}
