//! Store: the single source of truth for file and project state.
//!
//! All mutation funnels through the operations on [`Store`]. Lookups that
//! miss are silent no-ops; the only refused operation is deleting the last
//! file of a web project.

use chrono::Utc;
use playground_types::{CodeFile, Language, LanguageCatalog, WebFileKind, WebProject, WebProjectFile};
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::ids::IdGenerator;
use crate::starter;

/// Which editing mode is active.
///
/// Single-file selection and the web project are mutually exclusive, so they
/// live in one enum instead of two nullable fields.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Single files; `current` points into [`Store::files`] and may be unset.
    Files { current: Option<String> },
    /// The (only) web project.
    Project(WebProject),
}

/// In-memory project store.
///
/// The single-file list survives mode switches (it backs the file sidebar);
/// only the selection pointer and the web project are exclusive.
#[derive(Debug, Clone)]
pub struct Store {
    catalog: LanguageCatalog,
    files: Vec<CodeFile>,
    mode: Mode,
    ids: IdGenerator,
}

impl Store {
    /// Create an empty store in single-file mode with nothing selected.
    pub fn new(catalog: LanguageCatalog) -> Self {
        Self {
            catalog,
            files: Vec::new(),
            mode: Mode::Files { current: None },
            ids: IdGenerator::new(),
        }
    }

    // ──────────────────────────────────────────────────────────────────────
    // Queries
    // ──────────────────────────────────────────────────────────────────────

    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn files(&self) -> &[CodeFile] {
        &self.files
    }

    pub fn file(&self, id: &str) -> Option<&CodeFile> {
        self.files.iter().find(|f| f.id == id)
    }

    /// The selected single file. `None` in project mode or when the pointer
    /// does not resolve.
    pub fn current_file(&self) -> Option<&CodeFile> {
        match &self.mode {
            Mode::Files { current: Some(id) } => self.file(id),
            _ => None,
        }
    }

    pub fn web_project(&self) -> Option<&WebProject> {
        match &self.mode {
            Mode::Project(project) => Some(project),
            Mode::Files { .. } => None,
        }
    }

    pub fn active_web_file(&self) -> Option<&WebProjectFile> {
        self.web_project().and_then(WebProject::active_file)
    }

    fn project_mut(&mut self) -> Option<&mut WebProject> {
        match &mut self.mode {
            Mode::Project(project) => Some(project),
            Mode::Files { .. } => None,
        }
    }

    // ──────────────────────────────────────────────────────────────────────
    // Single files
    // ──────────────────────────────────────────────────────────────────────

    /// Create `main.<ext>` with the language's starter source and select it.
    /// Leaves project mode.
    pub fn create_single_file(&mut self, language: &Language) -> &CodeFile {
        let name = format!("main.{}", language.extension);
        let content = language.default_source.clone();
        self.push_file(name, content, language.clone())
    }

    /// Add an uploaded file, inferring its language from the extension.
    /// Leaves project mode; the new file becomes current.
    pub fn add_uploaded_file(&mut self, name: &str, content: &str) -> &CodeFile {
        let language = self.catalog.for_file_name(name).clone();
        self.push_file(name.to_string(), content.to_string(), language)
    }

    fn push_file(&mut self, name: String, content: String, language: Language) -> &CodeFile {
        let now = Utc::now();
        let file = CodeFile {
            id: self.ids.next("file", now),
            name,
            content,
            language,
            last_modified: now,
        };
        debug!(id = %file.id, name = %file.name, language = %file.language.name, "file created");
        self.mode = Mode::Files {
            current: Some(file.id.clone()),
        };
        self.files.push(file);
        &self.files[self.files.len() - 1]
    }

    /// Replace a file's content. Returns `false` when the id is unknown.
    pub fn update_file_content(&mut self, id: &str, content: &str) -> bool {
        match self.files.iter_mut().find(|f| f.id == id) {
            Some(file) => {
                file.content = content.to_string();
                file.last_modified = Utc::now();
                true
            }
            None => false,
        }
    }

    /// Remove a file. If it was current, the first remaining file takes over.
    pub fn delete_file(&mut self, id: &str) -> bool {
        let before = self.files.len();
        self.files.retain(|f| f.id != id);
        if self.files.len() == before {
            return false;
        }
        if let Mode::Files { current } = &mut self.mode {
            if current.as_deref() == Some(id) {
                *current = self.files.first().map(|f| f.id.clone());
            }
        }
        debug!(id, remaining = self.files.len(), "file deleted");
        true
    }

    /// Point the selection at a file without checking that it exists.
    ///
    /// Selecting a file leaves project mode. Clearing the selection while a
    /// project is open does nothing.
    pub fn set_current_file(&mut self, id: Option<&str>) {
        match (id, &mut self.mode) {
            (Some(id), _) => {
                self.mode = Mode::Files {
                    current: Some(id.to_string()),
                }
            }
            (None, Mode::Files { current }) => *current = None,
            (None, Mode::Project(_)) => {}
        }
    }

    // ──────────────────────────────────────────────────────────────────────
    // Web project
    // ──────────────────────────────────────────────────────────────────────

    /// Install the three-file starter project, replacing any existing one
    /// and dropping the single-file selection.
    pub fn create_web_project(&mut self) {
        self.mode = Mode::Project(starter::default_project(Utc::now()));
        debug!("web project created");
    }

    /// Append a file of `kind` with boilerplate content and make it active.
    ///
    /// Returns the new file id, or `None` when no project is open. An empty
    /// or missing name falls back to the kind's default name.
    pub fn add_web_project_file(&mut self, kind: WebFileKind, name: Option<&str>) -> Option<String> {
        let now = Utc::now();
        let id = match self.mode {
            Mode::Project(_) => self.ids.next(kind.as_str(), now),
            Mode::Files { .. } => return None,
        };
        let project = self.project_mut()?;
        let name = name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| starter::default_name(kind));
        project.files.push(WebProjectFile {
            id: id.clone(),
            name: name.to_string(),
            content: starter::boilerplate(kind).to_string(),
            kind,
            last_modified: now,
        });
        project.active_file_id = Some(id.clone());
        project.last_modified = now;
        debug!(id = %id, name, %kind, "web file added");
        Some(id)
    }

    /// Replace a web file's content. Returns `false` on a miss.
    pub fn update_web_project_file(&mut self, file_id: &str, content: &str) -> bool {
        self.touch_web_file(file_id, |file| file.content = content.to_string())
    }

    /// Rename a web file. Returns `false` on a miss.
    pub fn rename_web_project_file(&mut self, file_id: &str, new_name: &str) -> bool {
        self.touch_web_file(file_id, |file| file.name = new_name.to_string())
    }

    fn touch_web_file(&mut self, file_id: &str, edit: impl FnOnce(&mut WebProjectFile)) -> bool {
        let Some(project) = self.project_mut() else {
            return false;
        };
        let now = Utc::now();
        let Some(file) = project.file_mut(file_id) else {
            return false;
        };
        edit(file);
        file.last_modified = now;
        project.last_modified = now;
        true
    }

    /// Delete a web file.
    ///
    /// Refused with [`StoreError::LastFile`] when the project has exactly one
    /// file. If the deleted file was active, the first remaining file becomes
    /// active. Unknown ids and a missing project are no-ops.
    pub fn delete_web_project_file(&mut self, file_id: &str) -> StoreResult<()> {
        let Some(project) = self.project_mut() else {
            return Ok(());
        };
        if project.files.len() == 1 {
            warn!(file_id, "refusing to delete the last project file");
            return Err(StoreError::LastFile {
                file_id: file_id.to_string(),
            });
        }
        let before = project.files.len();
        project.files.retain(|f| f.id != file_id);
        if project.files.len() == before {
            return Ok(());
        }
        if project.active_file_id.as_deref() == Some(file_id) {
            project.active_file_id = project.files.first().map(|f| f.id.clone());
        }
        project.last_modified = Utc::now();
        debug!(file_id, remaining = project.files.len(), "web file deleted");
        Ok(())
    }

    /// Point the project's active file at `file_id` without validation.
    pub fn set_active_web_file(&mut self, file_id: &str) {
        if let Some(project) = self.project_mut() {
            project.active_file_id = Some(file_id.to_string());
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(LanguageCatalog::builtin())
    }
}
