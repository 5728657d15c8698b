//! Single files and multi-file web projects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Language;

/// A single-file unit of work with its own language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeFile {
    pub id: String,
    pub name: String,
    pub content: String,
    pub language: Language,
    pub last_modified: DateTime<Utc>,
}

/// Kind of a file inside a web project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebFileKind {
    Html,
    Css,
    Js,
}

impl WebFileKind {
    pub const ALL: [WebFileKind; 3] = [Self::Html, Self::Css, Self::Js];

    /// Lowercase tag, also used as the file extension and id prefix.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Css => "css",
            Self::Js => "js",
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "html" | "htm" => Some(Self::Html),
            "css" => Some(Self::Css),
            "js" | "javascript" => Some(Self::Js),
            _ => None,
        }
    }
}

impl fmt::Display for WebFileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file within a [`WebProject`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebProjectFile {
    pub id: String,
    pub name: String,
    pub content: String,
    pub kind: WebFileKind,
    pub last_modified: DateTime<Utc>,
}

/// The multi-file HTML/CSS/JS project aggregate.
///
/// `files` is in display order. `active_file_id` names the file open in the
/// editor; it is `None` only when the project has no files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebProject {
    pub id: String,
    pub name: String,
    pub files: Vec<WebProjectFile>,
    pub active_file_id: Option<String>,
    pub last_modified: DateTime<Utc>,
}

impl WebProject {
    pub fn file(&self, id: &str) -> Option<&WebProjectFile> {
        self.files.iter().find(|f| f.id == id)
    }

    pub fn file_mut(&mut self, id: &str) -> Option<&mut WebProjectFile> {
        self.files.iter_mut().find(|f| f.id == id)
    }

    /// The active file, if the pointer resolves.
    pub fn active_file(&self) -> Option<&WebProjectFile> {
        self.active_file_id.as_deref().and_then(|id| self.file(id))
    }

    /// Files of one kind, in display order.
    pub fn files_of(&self, kind: WebFileKind) -> impl Iterator<Item = &WebProjectFile> {
        self.files.iter().filter(move |f| f.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(id: &str, name: &str, kind: WebFileKind) -> WebProjectFile {
        WebProjectFile {
            id: id.to_string(),
            name: name.to_string(),
            content: String::new(),
            kind,
            last_modified: Utc::now(),
        }
    }

    #[test]
    fn test_kind_parse_and_display() {
        assert_eq!(WebFileKind::parse("HTML"), Some(WebFileKind::Html));
        assert_eq!(WebFileKind::parse(" javascript "), Some(WebFileKind::Js));
        assert_eq!(WebFileKind::parse("scss"), None);
        assert_eq!(WebFileKind::Css.to_string(), "css");
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&WebFileKind::Js).unwrap(), "\"js\"");
    }

    #[test]
    fn test_active_file_and_files_of() {
        let project = WebProject {
            id: "p".into(),
            name: "P".into(),
            files: vec![
                file("a", "index.html", WebFileKind::Html),
                file("b", "a.css", WebFileKind::Css),
                file("c", "b.css", WebFileKind::Css),
            ],
            active_file_id: Some("b".into()),
            last_modified: Utc::now(),
        };
        assert_eq!(project.active_file().map(|f| f.name.as_str()), Some("a.css"));
        let css: Vec<&str> = project
            .files_of(WebFileKind::Css)
            .map(|f| f.id.as_str())
            .collect();
        assert_eq!(css, vec!["b", "c"]);

        let dangling = WebProject {
            active_file_id: Some("zzz".into()),
            ..project
        };
        assert!(dangling.active_file().is_none());
    }
}
