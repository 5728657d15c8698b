//! Starter content: the default three-file project and per-kind boilerplate.

use chrono::{DateTime, Utc};
use playground_types::{WebFileKind, WebProject, WebProjectFile};

pub const DEFAULT_PROJECT_ID: &str = "web-project-1";
pub const DEFAULT_PROJECT_NAME: &str = "My Web Project";

const PROJECT_HTML: &str = include_str!("../starters/project_index.html");
const PROJECT_CSS: &str = include_str!("../starters/project_styles.css");
const PROJECT_JS: &str = include_str!("../starters/project_script.js");

const NEW_HTML: &str = include_str!("../starters/new_file.html");
const NEW_CSS: &str = include_str!("../starters/new_file.css");
const NEW_JS: &str = include_str!("../starters/new_file.js");

/// Name given to a new web file when the caller supplies none.
pub fn default_name(kind: WebFileKind) -> &'static str {
    match kind {
        WebFileKind::Html => "page.html",
        WebFileKind::Css => "style.css",
        WebFileKind::Js => "script.js",
    }
}

/// Content of a freshly added web file.
pub fn boilerplate(kind: WebFileKind) -> &'static str {
    match kind {
        WebFileKind::Html => NEW_HTML.trim_end(),
        WebFileKind::Css => NEW_CSS.trim_end(),
        WebFileKind::Js => NEW_JS.trim_end(),
    }
}

/// Append the kind's extension to a name that has no dot.
pub fn ensure_extension(name: &str, kind: WebFileKind) -> String {
    if name.contains('.') {
        name.to_string()
    } else {
        format!("{name}.{}", kind.as_str())
    }
}

/// The chat-bot starter: `index.html` linking `styles.css` and `script.js`.
pub fn default_project(now: DateTime<Utc>) -> WebProject {
    let file = |id: &str, name: &str, kind, content: &str| WebProjectFile {
        id: id.to_string(),
        name: name.to_string(),
        content: content.trim_end().to_string(),
        kind,
        last_modified: now,
    };

    WebProject {
        id: DEFAULT_PROJECT_ID.to_string(),
        name: DEFAULT_PROJECT_NAME.to_string(),
        files: vec![
            file("html-1", "index.html", WebFileKind::Html, PROJECT_HTML),
            file("css-1", "styles.css", WebFileKind::Css, PROJECT_CSS),
            file("js-1", "script.js", WebFileKind::Js, PROJECT_JS),
        ],
        active_file_id: Some("html-1".to_string()),
        last_modified: now,
    }
}
