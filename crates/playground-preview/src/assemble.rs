//! Preview assembler: turns a web project into one self-contained HTML
//! document by inlining the stylesheets and scripts the entry page links.
//!
//! Assembly is pure: the same project always yields the same document and
//! fingerprint. Missing references never fail; they become visible warnings
//! inside the document instead.

use playground_types::{WebFileKind, WebProject, WebProjectFile};
use regex::Captures;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::resolve::{resolve, Resolution};
use crate::scan::{replaceable_re, scan, Reference};

const NO_HTML_PAGE: &str = include_str!("../templates/no_html.html");
const SCROLLBAR_CSS: &str = include_str!("../templates/scrollbar.css");

/// A scanned reference and what it resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceReport {
    #[serde(flatten)]
    pub reference: Reference,
    pub resolution: Resolution,
}

/// The assembled preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewDocument {
    /// Complete HTML document for the sandboxed frame.
    pub html: String,
    /// Name of the entry file, `None` for the no-HTML placeholder.
    pub entry: Option<String>,
    pub references: Vec<ReferenceReport>,
    /// Lowercase hex SHA-256 of `html`.
    pub fingerprint: String,
}

impl PreviewDocument {
    fn new(html: String, entry: Option<String>, references: Vec<ReferenceReport>) -> Self {
        let fingerprint = format!("{:x}", Sha256::digest(html.as_bytes()));
        Self {
            html,
            entry,
            references,
            fingerprint,
        }
    }

    /// References that matched no project file.
    pub fn missing(&self) -> impl Iterator<Item = &Reference> {
        self.references
            .iter()
            .filter(|r| r.resolution.is_missing())
            .map(|r| &r.reference)
    }
}

/// The entry document: the first html file whose lowercased name contains
/// `index`, otherwise the first html file.
pub fn select_entry(project: &WebProject) -> Option<&WebProjectFile> {
    project
        .files_of(WebFileKind::Html)
        .find(|f| f.name.to_lowercase().contains("index"))
        .or_else(|| project.files_of(WebFileKind::Html).next())
}

/// Assemble the preview document for `project`.
pub fn assemble(project: &WebProject) -> PreviewDocument {
    let Some(entry) = select_entry(project) else {
        debug!(project = %project.id, "no html file, rendering placeholder");
        return PreviewDocument::new(NO_HTML_PAGE.trim_end().to_string(), None, Vec::new());
    };

    let references: Vec<ReferenceReport> = scan(&entry.content)
        .into_iter()
        .map(|reference| {
            let resolution = resolve(project, reference.kind, &reference.target)
                .map(|(_, how)| how)
                .unwrap_or(Resolution::Missing);
            if resolution.is_missing() {
                warn!(
                    entry = %entry.name,
                    target = %reference.target,
                    at = %reference.span,
                    kind = %reference.kind,
                    "unresolved reference"
                );
            }
            ReferenceReport {
                reference,
                resolution,
            }
        })
        .collect();

    // Replacement text is produced by a closure, so `$` in file content is
    // inserted literally. Inlined content is never rescanned.
    let mut html = replaceable_re()
        .replace_all(&entry.content, |caps: &Captures| {
            if let Some(target) = caps.get(1) {
                inline_stylesheet(project, target.as_str())
            } else if let Some(target) = caps.get(2) {
                inline_script(project, target.as_str())
            } else {
                caps[0].to_string()
            }
        })
        .into_owned();

    if !html.contains("webkit-scrollbar") && html.contains("</head>") {
        let injection = format!("<style>\n{}\n</style>\n</head>", SCROLLBAR_CSS.trim_end());
        html = html.replacen("</head>", &injection, 1);
    }

    debug!(
        entry = %entry.name,
        references = references.len(),
        bytes = html.len(),
        "preview assembled"
    );
    PreviewDocument::new(html, Some(entry.name.clone()), references)
}

fn inline_stylesheet(project: &WebProject, target: &str) -> String {
    match resolve(project, WebFileKind::Css, target) {
        Some((file, _)) => format!("<style>\n/* {} */\n{}\n</style>", file.name, file.content),
        None => format!(
            "<style>\n/* Warning: {target} not found */\n\
             body::before {{ content: \"⚠️ CSS file '{target}' not found\"; \
             position: fixed; top: 0; left: 0; right: 0; background: #ff6b6b; \
             color: white; padding: 10px; text-align: center; z-index: 9999; \
             font-family: Arial, sans-serif; }}\n</style>"
        ),
    }
}

fn inline_script(project: &WebProject, target: &str) -> String {
    match resolve(project, WebFileKind::Js, target) {
        Some((file, _)) => format!("<script>\n/* {} */\n{}\n</script>", file.name, file.content),
        None => format!("<script>\nconsole.error(\"⚠️ JavaScript file '{target}' not found\");\n</script>"),
    }
}
