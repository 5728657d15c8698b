//! Runner error types.

use thiserror::Error;

/// Errors raised while configuring the synthesizer. Synthesis itself never
/// fails; failures are reported inside the record.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("invalid runner config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A range field is negative, NaN or infinite.
    #[error("invalid runner config: {field} must be finite and non-negative")]
    InvalidRange { field: &'static str },
}

/// Runner result type alias.
pub type RunResult<T> = Result<T, RunError>;
