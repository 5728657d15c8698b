//! Live preview for the playground.
//!
//! Two entry points:
//! - [`assemble`] turns a multi-file web project into one HTML document,
//!   inlining every stylesheet and script the entry page references.
//! - [`render_single_file`] wraps a single file in a language-specific
//!   harness page.
//!
//! Both are pure functions of their input.

pub mod assemble;
pub mod harness;
pub mod resolve;
pub mod scan;

pub use assemble::{assemble, select_entry, PreviewDocument, ReferenceReport};
pub use harness::{preview_download_name, render_single_file, supports_live_preview};
pub use resolve::{resolve, Resolution};
pub use scan::{scan, Reference};
