//! Playground session.
//!
//! [`Session`] is the single owner of all application state: the project
//! store, the run/console flags, the last [`ExecutionRecord`], the preview
//! panel and the notice queue. A run is split into [`Session::begin_run`]
//! and [`Session::finish_run`] so the host can drive the delay however it
//! likes; [`Session::run`] composes both on the tokio timer.
//!
//! [`ExecutionRecord`]: playground_types::ExecutionRecord

mod error;
mod session;

pub use error::{SessionError, SessionResult};
pub use session::{Preview, RunTicket, Session, Snapshot};
