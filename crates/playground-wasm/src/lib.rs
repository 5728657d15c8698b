//! The playground session as a WASM module for browser environments.
//!
//! Exposes a [`Playground`] handle via `wasm-bindgen`. State crosses the
//! boundary as JSON strings; the host owns the timer, so a run is started
//! with `begin_run` and completed with `finish_run` once `delay_ms` has
//! passed.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { Playground, languages } from 'playground-wasm';
//!
//! await init();
//!
//! const pg = new Playground();
//! const run = JSON.parse(pg.begin_run());
//! setTimeout(() => {
//!   console.log(JSON.parse(pg.finish_run(run.ticket)));
//!   console.log(JSON.parse(pg.take_notices()));
//! }, run.delay_ms);
//! ```

use std::collections::HashMap;

use playground_runner::Synthesizer;
use playground_session::{RunTicket, Session};
use playground_types::{LanguageCatalog, LanguageId, WebFileKind};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Serialize for the host, reporting failures in-band.
fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        format!(r#"{{"ok":false,"error":"Serialization error: {}"}}"#, e)
    })
}

#[derive(Serialize)]
struct RunStarted {
    ok: bool,
    ticket: u64,
    delay_ms: u64,
}

#[derive(Serialize)]
struct RunRefused {
    ok: bool,
    error: String,
}

/// One browser tab's playground.
#[wasm_bindgen]
pub struct Playground {
    session: Session,
    synth: Synthesizer,
    pending: HashMap<u64, RunTicket>,
}

impl Playground {
    fn from_parts(session: Session, synth: Synthesizer) -> Self {
        Self {
            session,
            synth,
            pending: HashMap::new(),
        }
    }
}

impl Default for Playground {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Playground {
    /// Fresh session with the built-in catalog and clock-seeded figures.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Playground {
        Self::from_parts(Session::default(), Synthesizer::new())
    }

    /// Reproducible time/memory/delay figures.
    pub fn with_seed(seed: u32) -> Playground {
        let synth = Synthesizer::seeded(Default::default(), u64::from(seed));
        Self::from_parts(Session::default(), synth)
    }

    // ── State ──────────────────────────────────────────────────────────────

    /// Session snapshot as JSON.
    pub fn state(&self) -> String {
        to_json(&self.session.snapshot())
    }

    /// Session snapshot as a plain JS object.
    pub fn state_value(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.session.snapshot())?)
    }

    /// Drain queued notices as a JSON array.
    pub fn take_notices(&mut self) -> String {
        to_json(&self.session.take_notices())
    }

    pub fn toggle_preview(&mut self) {
        self.session.toggle_preview();
    }

    pub fn toggle_console(&mut self) {
        self.session.toggle_console();
    }

    // ── Single files ───────────────────────────────────────────────────────

    /// New file from a language's starter. `undefined` for unknown ids.
    pub fn create_file(&mut self, language_id: u32) -> Option<String> {
        self.session.create_single_file_for(LanguageId(language_id))
    }

    pub fn upload_file(&mut self, name: &str, content: &str) -> String {
        self.session.add_uploaded_file(name, content)
    }

    pub fn update_file(&mut self, id: &str, content: &str) -> bool {
        self.session.update_file_content(id, content)
    }

    pub fn delete_file(&mut self, id: &str) -> bool {
        self.session.delete_file(id)
    }

    pub fn select_file(&mut self, id: Option<String>) {
        self.session.set_current_file(id.as_deref());
    }

    // ── Web project ────────────────────────────────────────────────────────

    pub fn create_web_project(&mut self) {
        self.session.create_web_project();
    }

    /// `kind` is `"html"`, `"css"` or `"js"`.
    pub fn add_web_file(&mut self, kind: &str, name: Option<String>) -> Option<String> {
        let kind = WebFileKind::parse(kind)?;
        self.session.add_web_project_file(kind, name.as_deref())
    }

    pub fn update_web_file(&mut self, id: &str, content: &str) -> bool {
        self.session.update_web_project_file(id, content)
    }

    pub fn rename_web_file(&mut self, id: &str, name: &str) -> bool {
        self.session.rename_web_project_file(id, name)
    }

    /// `false` when the delete was refused; a warning notice is queued.
    pub fn delete_web_file(&mut self, id: &str) -> bool {
        self.session.delete_web_project_file(id).is_ok()
    }

    pub fn set_active_web_file(&mut self, id: &str) {
        self.session.set_active_web_file(id);
    }

    // ── Preview ────────────────────────────────────────────────────────────

    /// HTML for the preview iframe.
    pub fn preview(&self) -> Option<String> {
        self.session.preview().map(|p| p.html().to_string())
    }

    /// The full preview, with the reference report in project mode, as JSON.
    pub fn preview_report(&self) -> String {
        to_json(&self.session.preview())
    }

    pub fn preview_file_name(&self) -> Option<String> {
        self.session.preview_file_name()
    }

    // ── Running ────────────────────────────────────────────────────────────

    /// Start a run. Returns `{ok, ticket, delay_ms}` or `{ok: false, error}`.
    pub fn begin_run(&mut self) -> String {
        match self.session.begin_run() {
            Ok(ticket) => {
                let started = RunStarted {
                    ok: true,
                    ticket: ticket.id,
                    delay_ms: self.synth.next_delay().as_millis() as u64,
                };
                self.pending.insert(ticket.id, ticket);
                to_json(&started)
            }
            Err(e) => to_json(&RunRefused {
                ok: false,
                error: e.to_string(),
            }),
        }
    }

    /// Synthesize a started run and store its record. `null` for a ticket
    /// that was never issued or already finished.
    pub fn finish_run(&mut self, ticket: u32) -> String {
        let Some(ticket) = self.pending.remove(&u64::from(ticket)) else {
            return "null".to_string();
        };
        let record = self.synth.synthesize(&ticket.source, ticket.language);
        let json = to_json(&record);
        self.session.finish_run(ticket.id, record);
        json
    }

    /// Begin and finish without waiting.
    pub fn run_now(&mut self) -> String {
        match self.session.run_now(&self.synth) {
            Ok(record) => to_json(record),
            Err(e) => to_json(&RunRefused {
                ok: false,
                error: e.to_string(),
            }),
        }
    }

    /// Clear the running flag. A pending ticket can still be finished.
    pub fn stop(&mut self) {
        self.session.stop();
    }

    // ── Export ─────────────────────────────────────────────────────────────

    /// Single-file manifest as pretty JSON, if there are any files.
    pub fn export_manifest(&self) -> Option<String> {
        self.session
            .export_manifest()
            .and_then(|m| m.to_json().ok())
    }

    /// Web project archive listing as JSON, in project mode.
    pub fn export_archive(&self) -> Option<String> {
        self.session.export_archive().map(|a| to_json(&a))
    }
}

/// The built-in language catalog as JSON.
#[wasm_bindgen]
pub fn languages() -> String {
    to_json(LanguageCatalog::builtin().languages())
}

/// Return the crate version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn parse(json: &str) -> Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_state_starts_in_project_mode() {
        let pg = Playground::with_seed(1);
        let state = parse(&pg.state());
        assert_eq!(state["mode"], "project");
        assert_eq!(state["web_project"]["files"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_begin_then_finish() {
        let mut pg = Playground::with_seed(1);
        let started = parse(&pg.begin_run());
        assert_eq!(started["ok"], true);
        let delay = started["delay_ms"].as_u64().unwrap();
        assert!((1500..3500).contains(&delay));

        let ticket = started["ticket"].as_u64().unwrap() as u32;
        let record = parse(&pg.finish_run(ticket));
        assert_eq!(record["status"]["id"], 3);
        assert_eq!(pg.finish_run(ticket), "null");
        assert_eq!(parse(&pg.state())["is_running"], false);
    }

    #[test]
    fn test_run_refused_without_file() {
        let mut pg = Playground::with_seed(1);
        pg.create_file(71).unwrap();
        pg.select_file(Some("gone".to_string()));
        let refused = parse(&pg.run_now());
        assert_eq!(refused["ok"], false);
        assert_eq!(refused["error"], "no file selected");
    }

    #[test]
    fn test_web_file_kind_parsing() {
        let mut pg = Playground::with_seed(1);
        assert!(pg.add_web_file("css", Some("extra".to_string())).is_some());
        assert!(pg.add_web_file("scss", None).is_none());
        let notices = parse(&pg.take_notices());
        assert_eq!(notices[0]["message"], "CSS file created!");
    }

    #[test]
    fn test_delete_last_web_file_refused() {
        let mut pg = Playground::with_seed(1);
        assert!(pg.delete_web_file("css-1"));
        assert!(pg.delete_web_file("js-1"));
        assert!(!pg.delete_web_file("html-1"));
    }

    #[test]
    fn test_upload_and_preview() {
        let mut pg = Playground::with_seed(1);
        pg.upload_file("app.js", "console.log('ready')");
        assert!(pg.preview().unwrap().contains("console.log('ready')"));
        assert_eq!(pg.preview_file_name().as_deref(), Some("preview-app.html"));
        assert!(pg.export_archive().is_none());
        assert!(pg.export_manifest().unwrap().contains("\"Code Compiler Project\""));
    }

    #[test]
    fn test_css_upload_has_no_download_name() {
        // No CSS entry in the catalog: `.css` falls back to the first language.
        let mut pg = Playground::with_seed(1);
        pg.upload_file("style.css", "body { color: red; }");
        let state = parse(&pg.state());
        assert_eq!(state["files"][0]["language"]["name"], "Web Project");
        assert_eq!(pg.preview_file_name(), None);
        assert_eq!(state["can_show_preview"], false);
    }

    #[test]
    fn test_languages_and_version() {
        let langs = parse(&languages());
        assert_eq!(langs.as_array().unwrap().len(), 7);
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }
}
