//! Export shapes for single files and the web project.
//!
//! Byte-level packaging (ZIP encoding, browser downloads) belongs to the
//! host; this module only decides what goes in and what it is called.

use chrono::{DateTime, Utc};
use playground_types::{CodeFile, WebProject};
use serde::{Deserialize, Serialize};

/// Name written into every manifest.
pub const MANIFEST_NAME: &str = "Code Compiler Project";

/// JSON manifest of the single-file list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectManifest {
    pub name: String,
    pub created: DateTime<Utc>,
    pub files: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    pub content: String,
    /// Language display name.
    pub language: String,
    pub extension: String,
}

impl ProjectManifest {
    /// Build a manifest, or `None` when there is nothing to export.
    pub fn from_files(files: &[CodeFile], created: DateTime<Utc>) -> Option<Self> {
        if files.is_empty() {
            return None;
        }
        let files = files
            .iter()
            .map(|f| ManifestEntry {
                name: f.name.clone(),
                content: f.content.clone(),
                language: f.language.name.clone(),
                extension: f.language.extension.clone(),
            })
            .collect();
        Some(Self {
            name: MANIFEST_NAME.to_string(),
            created,
            files,
        })
    }

    /// Pretty-printed JSON, two-space indent.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Ordered name → content listing of a web project, ready for zipping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectArchive {
    pub file_name: String,
    pub entries: Vec<ArchiveEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveEntry {
    pub name: String,
    pub content: String,
}

impl ProjectArchive {
    /// Archive entries keyed by file name. A repeated name keeps its first
    /// position but takes the later content, as writing into a zip would.
    pub fn from_project(project: &WebProject) -> Self {
        let mut entries: Vec<ArchiveEntry> = Vec::with_capacity(project.files.len());
        for file in &project.files {
            match entries.iter_mut().find(|e| e.name == file.name) {
                Some(entry) => entry.content = file.content.clone(),
                None => entries.push(ArchiveEntry {
                    name: file.name.clone(),
                    content: file.content.clone(),
                }),
            }
        }
        Self {
            file_name: archive_file_name(&project.name),
            entries,
        }
    }
}

/// `My Web  Project` → `my-web-project.zip`.
pub fn archive_file_name(project_name: &str) -> String {
    let mut out = String::with_capacity(project_name.len() + 4);
    let mut in_space = false;
    for ch in project_name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
        } else {
            out.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    out.push_str(".zip");
    out
}
