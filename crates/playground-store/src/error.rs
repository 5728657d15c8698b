//! Store error types.

use thiserror::Error;

/// Operations the store refuses. Everything else is a silent no-op on a miss.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A web project must keep at least one file.
    #[error("cannot delete the last file of a web project ({file_id})")]
    LastFile { file_id: String },
}

/// Store result type alias.
pub type StoreResult<T> = Result<T, StoreError>;
