//! Project store for the playground.
//!
//! Holds the single-file list, the exclusive editing [`Mode`] (selected
//! file or the web project), starter content, and the export shapes built
//! from that state.

mod error;
mod ids;
mod store;

pub mod export;
pub mod starter;

pub use error::{StoreError, StoreResult};
pub use export::{ArchiveEntry, ManifestEntry, ProjectArchive, ProjectManifest};
pub use ids::IdGenerator;
pub use starter::ensure_extension;
pub use store::{Mode, Store};
