//! Session: the application root.
//!
//! Owns the project store, the run/console state, the notice queue and the
//! panel flags. UI events call into it; re-renders read from it. Nothing is
//! global: the host holds one `Session` and passes it where it is needed.

use chrono::Utc;
use playground_preview::{
    assemble, preview_download_name, render_single_file, supports_live_preview, PreviewDocument,
};
use playground_runner::Synthesizer;
use playground_store::{ensure_extension, Mode, ProjectArchive, ProjectManifest, Store};
use playground_types::{
    CodeFile, ExecutionRecord, Language, LanguageCatalog, LanguageId, Notice, WebFileKind,
    WebProject,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{SessionError, SessionResult};

/// What a run was started with. The synthesizer works from this snapshot,
/// so edits made while a run is in flight do not affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunTicket {
    pub id: u64,
    pub source: String,
    pub language: LanguageId,
}

/// A rendered preview for whichever mode is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Preview {
    Project(PreviewDocument),
    File { html: String },
}

impl Preview {
    pub fn html(&self) -> &str {
        match self {
            Self::Project(doc) => &doc.html,
            Self::File { html } => html,
        }
    }
}

/// Serializable view of the whole session for the host.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    /// `"files"` or `"project"`.
    pub mode: &'static str,
    pub files: &'a [CodeFile],
    pub current_file_id: Option<&'a str>,
    pub web_project: Option<&'a WebProject>,
    pub is_running: bool,
    pub result: Option<&'a ExecutionRecord>,
    pub preview_open: bool,
    pub console_open: bool,
    pub can_show_preview: bool,
}

#[derive(Debug)]
pub struct Session {
    store: Store,
    is_running: bool,
    result: Option<ExecutionRecord>,
    last_ticket: u64,
    notices: Vec<Notice>,
    preview_open: bool,
    console_open: bool,
}

impl Session {
    /// Start with the default web project open and the preview showing.
    pub fn new(catalog: LanguageCatalog) -> Self {
        let mut session = Self {
            store: Store::new(catalog),
            is_running: false,
            result: None,
            last_ticket: 0,
            notices: Vec::new(),
            preview_open: false,
            console_open: false,
        };
        session.create_web_project();
        session
    }

    // ──────────────────────────────────────────────────────────────────────
    // State access
    // ──────────────────────────────────────────────────────────────────────

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn result(&self) -> Option<&ExecutionRecord> {
        self.result.as_ref()
    }

    pub fn preview_open(&self) -> bool {
        self.preview_open
    }

    pub fn console_open(&self) -> bool {
        self.console_open
    }

    pub fn toggle_preview(&mut self) {
        self.preview_open = !self.preview_open;
    }

    pub fn toggle_console(&mut self) {
        self.console_open = !self.console_open;
    }

    /// Drain queued notices, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    fn notify(&mut self, notice: Notice) {
        debug!(%notice, "notice queued");
        self.notices.push(notice);
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let (mode, current_file_id) = match self.store.mode() {
            Mode::Files { current } => ("files", current.as_deref()),
            Mode::Project(_) => ("project", None),
        };
        Snapshot {
            mode,
            files: self.store.files(),
            current_file_id,
            web_project: self.store.web_project(),
            is_running: self.is_running,
            result: self.result.as_ref(),
            preview_open: self.preview_open,
            console_open: self.console_open,
            can_show_preview: self.can_show_preview(),
        }
    }

    /// Re-open the default project when nothing is selected at all.
    fn settle(&mut self) {
        if matches!(self.store.mode(), Mode::Files { current: None }) {
            debug!("nothing open, restoring default web project");
            self.create_web_project();
        }
    }

    // ──────────────────────────────────────────────────────────────────────
    // Single files
    // ──────────────────────────────────────────────────────────────────────

    pub fn create_single_file(&mut self, language: &Language) -> String {
        self.store.create_single_file(language).id.clone()
    }

    /// Create a single file for a catalog language. `None` for unknown ids.
    pub fn create_single_file_for(&mut self, language: LanguageId) -> Option<String> {
        let language = self.store.catalog().by_id(language)?.clone();
        Some(self.create_single_file(&language))
    }

    pub fn add_uploaded_file(&mut self, name: &str, content: &str) -> String {
        let id = self.store.add_uploaded_file(name, content).id.clone();
        self.notify(Notice::info(format!("{name} uploaded successfully!")));
        id
    }

    pub fn update_file_content(&mut self, id: &str, content: &str) -> bool {
        self.store.update_file_content(id, content)
    }

    pub fn delete_file(&mut self, id: &str) -> bool {
        let deleted = self.store.delete_file(id);
        self.settle();
        deleted
    }

    pub fn set_current_file(&mut self, id: Option<&str>) {
        self.store.set_current_file(id);
        self.settle();
    }

    // ──────────────────────────────────────────────────────────────────────
    // Web project
    // ──────────────────────────────────────────────────────────────────────

    /// Install the starter project and open the preview panel.
    pub fn create_web_project(&mut self) {
        self.store.create_web_project();
        self.preview_open = true;
    }

    /// Add a web file. A name without a dot gets the kind's extension.
    pub fn add_web_project_file(&mut self, kind: WebFileKind, name: Option<&str>) -> Option<String> {
        let name = name
            .filter(|n| !n.trim().is_empty())
            .map(|n| ensure_extension(n.trim(), kind));
        let id = self.store.add_web_project_file(kind, name.as_deref())?;
        self.notify(Notice::info(format!(
            "{} file created!",
            kind.as_str().to_uppercase()
        )));
        Some(id)
    }

    pub fn update_web_project_file(&mut self, file_id: &str, content: &str) -> bool {
        self.store.update_web_project_file(file_id, content)
    }

    pub fn rename_web_project_file(&mut self, file_id: &str, new_name: &str) -> bool {
        let renamed = self.store.rename_web_project_file(file_id, new_name);
        if renamed {
            self.notify(Notice::info("File renamed!"));
        }
        renamed
    }

    pub fn delete_web_project_file(&mut self, file_id: &str) -> SessionResult<()> {
        match self.store.delete_web_project_file(file_id) {
            Ok(()) => {
                self.notify(Notice::info("File deleted!"));
                Ok(())
            }
            Err(err) => {
                warn!(%err, "delete rejected");
                self.notify(Notice::warning("Cannot delete the last file!"));
                Err(err.into())
            }
        }
    }

    pub fn set_active_web_file(&mut self, file_id: &str) {
        self.store.set_active_web_file(file_id);
    }

    // ──────────────────────────────────────────────────────────────────────
    // Preview
    // ──────────────────────────────────────────────────────────────────────

    /// True in project mode, or for a current file with a live harness.
    pub fn can_show_preview(&self) -> bool {
        match self.store.mode() {
            Mode::Project(_) => true,
            Mode::Files { .. } => self
                .store
                .current_file()
                .is_some_and(|f| supports_live_preview(&f.language.name)),
        }
    }

    /// The assembled project, the current file's harness, or nothing.
    pub fn preview(&self) -> Option<Preview> {
        match self.store.mode() {
            Mode::Project(project) => Some(Preview::Project(assemble(project))),
            Mode::Files { .. } => self.store.current_file().map(|f| Preview::File {
                html: render_single_file(f),
            }),
        }
    }

    /// Download name for the current file's rendered preview.
    pub fn preview_file_name(&self) -> Option<String> {
        self.store
            .current_file()
            .filter(|f| supports_live_preview(&f.language.name))
            .map(|f| preview_download_name(&f.name))
    }

    // ──────────────────────────────────────────────────────────────────────
    // Running
    // ──────────────────────────────────────────────────────────────────────

    /// Snapshot the source to run and mark the session running.
    ///
    /// In project mode the first html file is run as language 1001 (an empty
    /// document when there is none); otherwise the current file.
    pub fn begin_run(&mut self) -> SessionResult<RunTicket> {
        let (source, language) = match self.store.mode() {
            Mode::Project(project) => (
                project
                    .files_of(WebFileKind::Html)
                    .next()
                    .map(|f| f.content.clone())
                    .unwrap_or_default(),
                LanguageId::WEB_PROJECT,
            ),
            Mode::Files { .. } => match self.store.current_file() {
                Some(file) => (file.content.clone(), file.language.id),
                None => {
                    self.notify(Notice::warning("No file selected"));
                    return Err(SessionError::NothingToRun);
                }
            },
        };

        self.console_open = true;
        self.is_running = true;
        self.result = None;
        self.last_ticket += 1;
        debug!(ticket = self.last_ticket, %language, "run started");
        Ok(RunTicket {
            id: self.last_ticket,
            source,
            language,
        })
    }

    /// Store a finished run's record.
    ///
    /// Runs are not fenced: a record from an older ticket that lands after a
    /// newer one still overwrites it.
    pub fn finish_run(&mut self, ticket_id: u64, record: ExecutionRecord) {
        if ticket_id != self.last_ticket {
            debug!(ticket_id, latest = self.last_ticket, "stale run finished");
        }
        let notice = if record.is_success() {
            Notice::info("Code executed successfully!")
        } else {
            Notice::error(format!("Execution failed: {}", record.status.description))
        };
        self.notify(notice);
        self.result = Some(record);
        self.is_running = false;
    }

    /// Clear the running flag. An in-flight run still delivers its record.
    pub fn stop(&mut self) {
        if self.is_running {
            self.is_running = false;
            self.notify(Notice::info("Execution stopped"));
        }
    }

    /// Begin, synthesize without delay, finish.
    pub fn run_now(&mut self, synth: &Synthesizer) -> SessionResult<&ExecutionRecord> {
        let ticket = self.begin_run()?;
        let record = synth.synthesize(&ticket.source, ticket.language);
        self.finish_run(ticket.id, record);
        self.result.as_ref().ok_or(SessionError::NothingToRun)
    }

    /// Begin, wait out the synthesizer's delay, finish.
    #[cfg(feature = "delay")]
    pub async fn run(&mut self, synth: &Synthesizer) -> SessionResult<&ExecutionRecord> {
        let ticket = self.begin_run()?;
        let record = synth.compile_and_run(&ticket.source, ticket.language).await;
        self.finish_run(ticket.id, record);
        self.result.as_ref().ok_or(SessionError::NothingToRun)
    }

    // ──────────────────────────────────────────────────────────────────────
    // Export
    // ──────────────────────────────────────────────────────────────────────

    /// Manifest of the single-file list; `None` when it is empty.
    pub fn export_manifest(&self) -> Option<ProjectManifest> {
        ProjectManifest::from_files(self.store.files(), Utc::now())
    }

    /// Archive listing of the web project; `None` outside project mode.
    pub fn export_archive(&self) -> Option<ProjectArchive> {
        self.store.web_project().map(ProjectArchive::from_project)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(LanguageCatalog::builtin())
    }
}
