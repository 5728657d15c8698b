//! Reference scanner: finds stylesheet and script references in an entry
//! document.
//!
//! Matching is regex based and case-insensitive on the tag name and the
//! `.css` / `.js` extension. Both quote styles are accepted. References are
//! reported per kind in order of first appearance; duplicates are kept.

use playground_types::{SourceText, Span, WebFileKind};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// A `<link href="*.css">` or `<script src="*.js">` reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub kind: WebFileKind,
    /// The referenced name exactly as written in the attribute.
    pub target: String,
    /// Position of the whole tag in the entry document.
    pub span: Span,
}

fn stylesheet_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)<link[^>]*href=["']([^"']*\.css)["'][^>]*>"#).expect("stylesheet pattern")
    })
}

fn script_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)<script[^>]*src=["']([^"']*\.js)["'][^>]*>"#).expect("script pattern")
    })
}

/// Tags that get replaced during inlining: every stylesheet link, and script
/// tags whose `</script>` follows the opening tag directly.
pub(crate) fn replaceable_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r#"(?i)<link[^>]*href=["']([^"']*\.css)["'][^>]*>"#,
            r#"|<script[^>]*src=["']([^"']*\.js)["'][^>]*></script>"#,
        ))
        .expect("replaceable tag pattern")
    })
}

/// Scan `html` for references. Stylesheets come first, then scripts.
pub fn scan(html: &str) -> Vec<Reference> {
    let source = SourceText::new(html);
    let mut refs = Vec::new();
    for (kind, re) in [
        (WebFileKind::Css, stylesheet_re()),
        (WebFileKind::Js, script_re()),
    ] {
        for caps in re.captures_iter(html) {
            let (Some(tag), Some(target)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            refs.push(Reference {
                kind,
                target: target.as_str().to_string(),
                span: source.span(tag.start(), tag.end()),
            });
        }
    }
    refs
}
