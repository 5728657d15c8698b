//! Session error types.

use playground_store::StoreError;
use thiserror::Error;

/// User actions the session refuses. Each one is also queued as a warning
/// notice; the state is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Run requested with neither a current file nor a web project.
    #[error("no file selected")]
    NothingToRun,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Session result type alias.
pub type SessionResult<T> = Result<T, SessionError>;
