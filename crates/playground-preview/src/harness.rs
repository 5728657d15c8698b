//! Single-file preview harnesses, keyed by language display name.

use playground_types::CodeFile;

const CSS_HARNESS: &str = include_str!("../templates/css_harness.html");
const JS_HARNESS: &str = include_str!("../templates/js_harness.html");
const REACT_HARNESS: &str = include_str!("../templates/react_harness.html");
const CODE_HARNESS: &str = include_str!("../templates/code_harness.html");

const CONTENT_SLOT: &str = "{{CONTENT}}";
const NAME_SLOT: &str = "{{NAME}}";

/// Languages whose harness renders something live (and can be downloaded).
pub fn supports_live_preview(language_name: &str) -> bool {
    matches!(language_name, "HTML" | "CSS" | "JavaScript")
}

/// `page.v2.html` → `preview-page.html`.
pub fn preview_download_name(file_name: &str) -> String {
    let stem = file_name.split('.').next().unwrap_or_default();
    format!("preview-{stem}.html")
}

/// Wrap a single file's content in the page that previews it.
pub fn render_single_file(file: &CodeFile) -> String {
    let content = file.content.as_str();
    match file.language.name.as_str() {
        "HTML" => content.to_string(),
        "CSS" => fill(CSS_HARNESS, content),
        "JavaScript" => fill(JS_HARNESS, content),
        "React" => fill(REACT_HARNESS, content),
        name => {
            let escaped = content.replace('<', "&lt;").replace('>', "&gt;");
            fill(&CODE_HARNESS.replacen(NAME_SLOT, name, 1), &escaped)
        }
    }
}

fn fill(template: &str, content: &str) -> String {
    template.trim_end().replacen(CONTENT_SLOT, content, 1)
}
