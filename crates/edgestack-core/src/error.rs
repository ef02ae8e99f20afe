//! Error types for the EdgeStack core.

/// Core error type for EdgeStack infrastructure.
#[derive(Debug, thiserror::Error)]
pub enum EdgeStackError {
    /// Invalid actor identity format.
    #[error("invalid actor identity: {0} (must be user:<id> or guest:<id>)")]
    InvalidActor(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal error with context.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Convenience result type for EdgeStack operations.
pub type EdgeStackResult<T> = Result<T, EdgeStackError>;
