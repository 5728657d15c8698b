//! Shared types for the playground.
//!
//! This crate defines the language catalog, single files, web projects,
//! execution records, source positions and user-facing notices used by the
//! store, the preview assembler, the synthesizer and the session.

mod error;
mod file;
mod language;
mod record;
mod source;

pub use error::{CatalogError, Notice, Severity};
pub use file::{CodeFile, WebFileKind, WebProject, WebProjectFile};
pub use language::{Language, LanguageCatalog, LanguageId};
pub use record::{ExecutionRecord, Status};
pub use source::{SourceText, Span};
