//! Reference resolution against the project's files.

use playground_types::{WebFileKind, WebProject, WebProjectFile};
use serde::Serialize;

/// How a reference was matched to a project file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "match", rename_all = "lowercase")]
pub enum Resolution {
    /// A file of the right kind has exactly the referenced name.
    Exact { file_id: String, file_name: String },
    /// No exact match; the first file whose name ends with the reference.
    Suffix { file_id: String, file_name: String },
    Missing,
}

impl Resolution {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Find the file a reference points at.
///
/// Exact name matches win over suffix matches, so `a.css` resolves to
/// `a.css` even when `big-a.css` comes earlier in the project.
pub fn resolve<'p>(
    project: &'p WebProject,
    kind: WebFileKind,
    target: &str,
) -> Option<(&'p WebProjectFile, Resolution)> {
    let exact = project.files_of(kind).find(|f| f.name == target);
    if let Some(file) = exact {
        let how = Resolution::Exact {
            file_id: file.id.clone(),
            file_name: file.name.clone(),
        };
        return Some((file, how));
    }
    project
        .files_of(kind)
        .find(|f| f.name.ends_with(target))
        .map(|file| {
            let how = Resolution::Suffix {
                file_id: file.id.clone(),
                file_name: file.name.clone(),
            };
            (file, how)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn project(files: &[(&str, WebFileKind)]) -> WebProject {
        WebProject {
            id: "p".into(),
            name: "P".into(),
            files: files
                .iter()
                .enumerate()
                .map(|(i, (name, kind))| WebProjectFile {
                    id: format!("f{i}"),
                    name: name.to_string(),
                    content: String::new(),
                    kind: *kind,
                    last_modified: Utc::now(),
                })
                .collect(),
            active_file_id: None,
            last_modified: Utc::now(),
        }
    }

    #[test]
    fn test_exact_beats_earlier_suffix() {
        let p = project(&[("big-a.css", WebFileKind::Css), ("a.css", WebFileKind::Css)]);
        let (file, how) = resolve(&p, WebFileKind::Css, "a.css").unwrap();
        assert_eq!(file.name, "a.css");
        assert!(matches!(how, Resolution::Exact { .. }));
    }

    #[test]
    fn test_suffix_fallback() {
        let p = project(&[("big-a.css", WebFileKind::Css)]);
        let (file, how) = resolve(&p, WebFileKind::Css, "a.css").unwrap();
        assert_eq!(file.name, "big-a.css");
        assert!(matches!(how, Resolution::Suffix { .. }));
    }

    #[test]
    fn test_kind_must_match() {
        let p = project(&[("a.css", WebFileKind::Js)]);
        assert!(resolve(&p, WebFileKind::Css, "a.css").is_none());
    }

    #[test]
    fn test_path_reference_does_not_match_bare_name() {
        let p = project(&[("style.css", WebFileKind::Css)]);
        assert!(resolve(&p, WebFileKind::Css, "css/style.css").is_none());
    }

    #[test]
    fn test_resolution_serializes_tagged() {
        let json = serde_json::to_value(Resolution::Missing).unwrap();
        assert_eq!(json["match"], "missing");
    }
}
