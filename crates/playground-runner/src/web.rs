//! Static report for the web project "run": counts and feature checks over
//! the entry HTML.

use playground_types::SourceText;
use regex::Regex;

/// Statistics gathered from an HTML document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebStats {
    pub elements: usize,
    pub css_rules: usize,
    pub functions: usize,
    pub lines: usize,
    pub doctype: bool,
    pub viewport: bool,
    pub styling: bool,
    pub script: bool,
}

#[derive(Debug, Clone)]
pub struct WebAnalyzer {
    tag: Regex,
    rule: Regex,
    function: Regex,
    stylesheet_link: Regex,
}

impl WebAnalyzer {
    pub fn new() -> Self {
        let re = |p: &str| Regex::new(p).expect("analyzer pattern");
        Self {
            tag: re(r"<[^>]+>"),
            rule: re(r"\{[^}]*\}"),
            function: re(r"function\s+\w+"),
            stylesheet_link: re(r"link.*css"),
        }
    }

    pub fn stats(&self, source: &str) -> WebStats {
        WebStats {
            elements: self.tag.find_iter(source).count(),
            css_rules: self.rule.find_iter(source).count(),
            functions: self.function.find_iter(source).count(),
            lines: SourceText::new(source).line_count(),
            doctype: source.contains("<!DOCTYPE"),
            viewport: source.contains("viewport"),
            styling: source.contains("<style") || self.stylesheet_link.is_match(source),
            script: source.contains("<script"),
        }
    }

    /// The full analysis report.
    pub fn report(&self, source: &str) -> String {
        let s = self.stats(source);
        let mark = |b: bool| if b { "✅" } else { "❌" };
        let interactive = if s.functions > 0 {
            format!("{} functions found", s.functions)
        } else {
            "None detected".to_string()
        };
        format!(
            "🌐 Web Project Analysis Complete!\n\
             \n\
             📊 Document Statistics:\n\
             - HTML Elements: {}\n\
             - CSS Rules: {}\n\
             - JavaScript Functions: {}\n\
             - Total Lines: {}\n\
             \n\
             ✅ Features Detected:\n\
             - DOCTYPE Declaration: {}\n\
             - Viewport Meta Tag: {}\n\
             - CSS Styling: {}\n\
             - JavaScript: {}\n\
             \n\
             🎨 Rendering Preview:\n\
             - Document Structure: Valid HTML5\n\
             - Responsive Design: {}\n\
             - Interactive Elements: {}\n\
             \n\
             ✨ Ready to display in browser!\n\
             💡 Tip: Use the preview panel to see live rendering.",
            s.elements,
            s.css_rules,
            s.functions,
            s.lines,
            mark(s.doctype),
            mark(s.viewport),
            mark(s.styling),
            mark(s.script),
            if s.viewport { "Enabled" } else { "Not detected" },
            interactive,
        )
    }
}

impl Default for WebAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta name="viewport" content="width=device-width">
<link rel="stylesheet" href="styles.css">
</head>
<body>
<script>function go() {} function stop() {}</script>
</body>
</html>"#;

    #[test]
    fn test_stats() {
        let s = WebAnalyzer::new().stats(PAGE);
        assert_eq!(s.elements, 11);
        assert_eq!(s.css_rules, 2);
        assert_eq!(s.functions, 2);
        assert_eq!(s.lines, 10);
        assert!(s.doctype && s.viewport && s.styling && s.script);
    }

    #[test]
    fn test_stylesheet_link_counts_as_styling() {
        let a = WebAnalyzer::new();
        assert!(a.stats(r#"<link href="a.css">"#).styling);
        assert!(!a.stats("<p>css</p>").styling);
    }

    #[test]
    fn test_report_lines() {
        let report = WebAnalyzer::new().report(PAGE);
        assert!(report.starts_with("🌐 Web Project Analysis Complete!\n\n📊 Document Statistics:\n"));
        assert!(report.contains("- Total Lines: 10\n"));
        assert!(report.contains("- Responsive Design: Enabled\n"));
        assert!(report.contains("- Interactive Elements: 2 functions found\n"));
        assert!(report.ends_with("💡 Tip: Use the preview panel to see live rendering."));
    }

    #[test]
    fn test_report_for_empty_document() {
        let report = WebAnalyzer::new().report("");
        assert!(report.contains("- HTML Elements: 0\n"));
        assert!(report.contains("- Total Lines: 1\n"));
        assert!(report.contains("- DOCTYPE Declaration: ❌\n"));
        assert!(report.contains("- Interactive Elements: None detected\n"));
    }
}
