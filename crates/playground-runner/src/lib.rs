//! Mock execution backend for the playground.
//!
//! Nothing is compiled or run. Source text is pattern-matched against a
//! per-language [`LanguageProfile`] and turned into a canned
//! [`ExecutionRecord`](playground_types::ExecutionRecord):
//!
//! - compiled languages check for structural markers and report a
//!   compilation error when one is missing;
//! - output calls (`console.log`, `print`, `System.out.println`, `cout`,
//!   `printf`, `println`) are echoed one per line;
//! - topic keywords append canned blocks;
//! - the web project gets a document statistics report instead.
//!
//! Only `time` and `memory` are random, drawn from an injectable
//! [`RandomSource`]. With the `delay` feature, [`Synthesizer::compile_and_run`]
//! also waits out an artificial latency on the tokio timer.

pub mod config;
pub mod error;
pub mod profile;
pub mod random;
pub mod synth;
pub mod values;
pub mod web;

pub use config::RunnerConfig;
pub use error::{RunError, RunResult};
pub use profile::{LanguageProfile, Outcome, ProfileRegistry};
pub use random::{Fixed, RandomSource};
pub use synth::Synthesizer;
pub use web::{WebAnalyzer, WebStats};
