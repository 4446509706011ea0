//! Error types and exit codes for wavepath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, mismatched query endpoints)
//! - 3: Data/config error (malformed edge list, unknown vertex)

mod macros;

use thiserror::Error;

use crate::graph::EndpointKind;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/config error - malformed topology, unknown vertex (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or querying a topology
#[derive(Error, Debug)]
pub enum WavepathError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("query endpoints must be the same kind (from is {from}, to is {to})")]
    TypeMismatch {
        from: EndpointKind,
        to: EndpointKind,
    },

    // Data/config errors (exit code 3)
    #[error("vertex not found: {id}")]
    VertexNotFound { id: String },

    #[error("vertex {id} belongs to a different topology")]
    ForeignVertex { id: String },

    #[error("invalid edge #{index}: {reason}")]
    InvalidEdge { index: usize, reason: String },

    #[error("duplicate edge #{index}: {a} and {b} are already connected")]
    DuplicateEdge { index: usize, a: String, b: String },

    #[error("topology has no edges")]
    EmptyTopology,

    // Generic failures (exit code 1)
    #[error("no path from {from} to {to}")]
    NoPath { from: String, to: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl WavepathError {
    /// Create an error for a malformed configuration triple
    pub fn invalid_edge(index: usize, reason: impl std::fmt::Display) -> Self {
        WavepathError::InvalidEdge {
            index,
            reason: reason.to_string(),
        }
    }

    /// Create an error for an unknown vertex id
    pub fn vertex_not_found(id: impl std::fmt::Display) -> Self {
        WavepathError::VertexNotFound { id: id.to_string() }
    }

    /// Create an error for a failed operation
    pub fn failed(operation: &str, error: impl std::fmt::Display) -> Self {
        WavepathError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WavepathError::UsageError(_)
            | WavepathError::TypeMismatch { .. } => ExitCode::Usage,

            WavepathError::VertexNotFound { .. }
            | WavepathError::ForeignVertex { .. }
            | WavepathError::InvalidEdge { .. }
            | WavepathError::DuplicateEdge { .. }
            | WavepathError::EmptyTopology
            | WavepathError::Toml(_) => ExitCode::Data,

            WavepathError::NoPath { .. }
            | WavepathError::Io(_)
            | WavepathError::Json(_)
            | WavepathError::FailedOperation { .. }
            | WavepathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            WavepathError::UsageError(_) => "usage_error",
            WavepathError::TypeMismatch { .. } => "type_mismatch",
            WavepathError::VertexNotFound { .. } => "vertex_not_found",
            WavepathError::ForeignVertex { .. } => "foreign_vertex",
            WavepathError::InvalidEdge { .. } => "invalid_edge",
            WavepathError::DuplicateEdge { .. } => "duplicate_edge",
            WavepathError::EmptyTopology => "empty_topology",
            WavepathError::NoPath { .. } => "no_path",
            WavepathError::Io(_) => "io_error",
            WavepathError::Json(_) => "json_error",
            WavepathError::Toml(_) => "toml_error",
            WavepathError::FailedOperation { .. } => "failed_operation",
            WavepathError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for wavepath operations
pub type Result<T> = std::result::Result<T, WavepathError>;
