//! Per-language execution profiles.
//!
//! A profile is a declared table: structural requirements, output-call
//! patterns, argument echo rules and topic blocks. The registry builds all
//! of them once; synthesis is a walk over the table.
//!
//! Topic predicates are plain substring checks on the whole source, so a
//! keyword inside a comment or string still triggers its block.

use playground_types::{LanguageId, Status};
use regex::Regex;

use crate::values::variable_value;

// ══════════════════════════════════════════════════════════════════════════════
// Table types
// ══════════════════════════════════════════════════════════════════════════════

/// Substring test over a piece of text.
#[derive(Debug, Clone, Copy)]
pub enum Markers {
    Any(&'static [&'static str]),
    All(&'static [&'static str]),
}

impl Markers {
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Self::Any(list) => list.iter().any(|m| text.contains(m)),
            Self::All(list) => list.iter().all(|m| text.contains(m)),
        }
    }
}

/// What to print for a matching argument.
#[derive(Debug, Clone)]
pub enum Echo {
    /// The argument with every match of the pattern removed.
    Strip(Regex),
    /// A fixed line.
    Say(&'static str),
}

/// First matching rule wins; no match falls back to `<arg>: <value>`.
#[derive(Debug, Clone)]
pub struct ArgRule {
    pub when: Markers,
    pub echo: Echo,
}

/// A canned block appended when its predicate holds.
#[derive(Debug, Clone)]
pub struct Topic {
    pub when: Markers,
    pub block: &'static str,
}

#[derive(Debug, Clone)]
pub struct LanguageProfile {
    pub id: LanguageId,
    /// Banner plus underline, ending in a blank line.
    pub header: &'static str,
    /// All must be present, otherwise the run is a compilation error.
    pub requires: &'static [&'static str],
    pub missing_reason: &'static str,
    /// Scanned pattern by pattern; all matches of one before the next.
    pub calls: Vec<Regex>,
    /// Removed from a matched call to leave its argument.
    pub call_syntax: Regex,
    pub output_heading: &'static str,
    pub args: Vec<ArgRule>,
    pub topics: Vec<Topic>,
    pub footer: &'static str,
}

/// Deterministic part of a run: everything but time and memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub stdout: String,
    pub stderr: String,
    pub status: Status,
}

impl Outcome {
    pub fn accepted(stdout: String) -> Self {
        Self {
            stdout,
            stderr: String::new(),
            status: Status::accepted(),
        }
    }

    pub fn compilation_error(reason: &str) -> Self {
        Self {
            stdout: String::new(),
            stderr: format!("Compilation Error: {reason}"),
            status: Status::compilation_error(),
        }
    }

    pub fn language_not_supported() -> Self {
        Self {
            stdout: "Language not supported in demo mode".to_string(),
            stderr: String::new(),
            status: Status::language_not_supported(),
        }
    }

    pub fn runtime_error(message: &str) -> Self {
        Self {
            stdout: String::new(),
            stderr: format!("Runtime Error: {message}"),
            status: Status::runtime_error(),
        }
    }
}

impl LanguageProfile {
    /// Run the table over `source`.
    pub fn execute(&self, source: &str) -> Outcome {
        if !self.requires.iter().all(|r| source.contains(r)) {
            return Outcome::compilation_error(self.missing_reason);
        }

        let mut out = String::from(self.header);

        let calls: Vec<&str> = self
            .calls
            .iter()
            .flat_map(|re| re.find_iter(source).map(|m| m.as_str()))
            .collect();
        if !calls.is_empty() {
            out.push_str(self.output_heading);
            out.push('\n');
            for (i, call) in calls.iter().enumerate() {
                let arg = self.call_syntax.replace_all(call, "");
                let line = self.echo(arg.trim());
                out.push_str(&format!("[{}] {}\n", i + 1, line));
            }
        }

        for topic in &self.topics {
            if topic.when.matches(source) {
                out.push_str(topic.block);
            }
        }

        out.push_str(self.footer);
        Outcome::accepted(out)
    }

    fn echo(&self, arg: &str) -> String {
        for rule in &self.args {
            if rule.when.matches(arg) {
                return match &rule.echo {
                    Echo::Strip(re) => re.replace_all(arg, "").into_owned(),
                    Echo::Say(text) => (*text).to_string(),
                };
            }
        }
        format!("{arg}: {}", variable_value(arg))
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Canned blocks
// ══════════════════════════════════════════════════════════════════════════════

const FIBONACCI_LIST: &str = "\n🔢 Fibonacci Sequence (first 10):\n\
F(0) = 0\nF(1) = 1\nF(2) = 1\nF(3) = 2\nF(4) = 3\n\
F(5) = 5\nF(6) = 8\nF(7) = 13\nF(8) = 21\nF(9) = 34\n";
const FIBONACCI_TENTH: &str = "\n🔢 Fibonacci Sequence:\nFibonacci(10): 55\n";
const FACTORIAL: &str = "\n🔢 Factorial Calculation:\nFactorial of 5: 120\n";
const LIST_SQUARES: &str = "\n📊 List Operations:\nNumbers: [1, 2, 3, 4, 5]\nSquares: [1, 4, 9, 16, 25]\n";

const STANDARD_OUTPUT: &str = "📤 Standard Output:";

// ══════════════════════════════════════════════════════════════════════════════
// Registry
// ══════════════════════════════════════════════════════════════════════════════

/// All language profiles, in registration order.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: Vec<LanguageProfile>,
}

impl ProfileRegistry {
    pub fn new() -> Self {
        let mut reg = Self {
            profiles: Vec::new(),
        };
        reg.register_javascript();
        reg.register_python();
        reg.register_java();
        reg.register_cpp();
        reg.register_c();
        reg.register_kotlin();
        reg
    }

    pub fn get(&self, id: LanguageId) -> Option<&LanguageProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn profiles(&self) -> &[LanguageProfile] {
        &self.profiles
    }

    // ──────────────────────────────────────────────────────────────────────
    // Registration helpers
    // ──────────────────────────────────────────────────────────────────────

    fn re(pattern: &str) -> Regex {
        Regex::new(pattern).expect("profile pattern")
    }

    fn strip(when: Markers, pattern: &str) -> ArgRule {
        ArgRule {
            when,
            echo: Echo::Strip(Self::re(pattern)),
        }
    }

    fn say(when: Markers, text: &'static str) -> ArgRule {
        ArgRule {
            when,
            echo: Echo::Say(text),
        }
    }

    fn topic(when: Markers, block: &'static str) -> Topic {
        Topic { when, block }
    }

    fn expression() -> ArgRule {
        Self::say(Markers::Any(&["+"]), "Expression evaluated")
    }

    // ══════════════════════════════════════════════════════════════════════
    // Languages
    // ══════════════════════════════════════════════════════════════════════

    fn register_javascript(&mut self) {
        use Markers::*;
        self.profiles.push(LanguageProfile {
            id: LanguageId::JAVASCRIPT,
            header: "🟨 JavaScript Execution Started\n==============================\n\n",
            requires: &[],
            missing_reason: "",
            calls: vec![Self::re(r"console\.log\([^)]*\)"), Self::re(r"print\([^)]*\)")],
            call_syntax: Self::re(r"console\.log\(|print\(|\)"),
            output_heading: "📤 Console Output:",
            args: vec![
                Self::strip(Any(&["\"", "'"]), r#"['"]"#),
                Self::expression(),
                Self::say(All(&["[", "]"]), "Array: [1, 2, 3, 4, 5]"),
            ],
            topics: vec![
                Self::topic(Any(&["fibonacci"]), FIBONACCI_LIST),
                Self::topic(
                    Any(&["squares", "map"]),
                    "\n📊 Array Operations:\nOriginal: [1, 2, 3, 4, 5]\nSquares: [1, 4, 9, 16, 25]\n",
                ),
                Self::topic(
                    Any(&["async", "Promise"]),
                    "\n⚡ Async Operations:\nAsync function executed!\nPromise resolved: Success!\n",
                ),
            ],
            footer: "\n✨ JavaScript execution completed successfully!",
        });
    }

    fn register_python(&mut self) {
        use Markers::*;
        self.profiles.push(LanguageProfile {
            id: LanguageId::PYTHON,
            header: "🐍 Python Execution Started\n==========================\n\n",
            requires: &[],
            missing_reason: "",
            calls: vec![Self::re(r"print\([^)]*\)")],
            call_syntax: Self::re(r"print\(|\)"),
            output_heading: STANDARD_OUTPUT,
            args: vec![
                Self::strip(Any(&["f\"", "f'"]), r#"f['"]|['"]"#),
                Self::strip(Any(&["\"", "'"]), r#"['"]"#),
                Self::expression(),
            ],
            topics: vec![
                Self::topic(Any(&["fibonacci"]), FIBONACCI_LIST),
                Self::topic(Any(&["list(range", "range("]), LIST_SQUARES),
                Self::topic(
                    Any(&["dict", "{"]),
                    "\n📋 Dictionary Example:\nStudent: Alice, Age: 20\nCourses: Math, Physics, Computer Science\n",
                ),
            ],
            footer: "\n✨ Python execution completed successfully!",
        });
    }

    fn register_java(&mut self) {
        use Markers::*;
        self.profiles.push(LanguageProfile {
            id: LanguageId::JAVA,
            header: "☕ Java Execution Started\n========================\n\n",
            requires: &["public class", "public static void main"],
            missing_reason: "Missing public class or main method",
            calls: vec![
                Self::re(r"System\.out\.println\([^)]*\)"),
                Self::re(r"System\.out\.print\([^)]*\)"),
            ],
            call_syntax: Self::re(r"System\.out\.(println|print)\(|\)"),
            output_heading: STANDARD_OUTPUT,
            args: vec![Self::strip(Any(&["\""]), "\""), Self::expression()],
            topics: vec![
                Self::topic(Any(&["factorial"]), FACTORIAL),
                Self::topic(Any(&["fibonacci"]), FIBONACCI_TENTH),
                Self::topic(
                    Any(&["Calculator", "calc"]),
                    "\n🧮 Calculator Operations:\nCalculator: 15 + 25 = 40\n",
                ),
            ],
            footer: "\n✨ Java execution completed successfully!",
        });
    }

    fn register_cpp(&mut self) {
        use Markers::*;
        self.profiles.push(LanguageProfile {
            id: LanguageId::CPP,
            header: "⚡ C++ Execution Started\n========================\n\n",
            requires: &["#include", "int main()"],
            missing_reason: "Missing includes or main function",
            calls: vec![Self::re(r"cout\s*<<[^;]*;")],
            call_syntax: Self::re(r"cout\s*<<|;"),
            output_heading: STANDARD_OUTPUT,
            args: vec![
                Self::strip(Any(&["\""]), "\""),
                Self::say(Any(&["endl"]), "New line"),
            ],
            topics: vec![
                Self::topic(
                    Any(&["vector", "transform"]),
                    "\n📊 Vector Operations:\nOriginal numbers: 1 2 3 4 5\nSquares: 1 4 9 16 25\n",
                ),
                Self::topic(Any(&["factorial"]), FACTORIAL),
                Self::topic(Any(&["fibonacci"]), FIBONACCI_TENTH),
            ],
            footer: "\n✨ C++ execution completed successfully!",
        });
    }

    fn register_c(&mut self) {
        use Markers::*;
        self.profiles.push(LanguageProfile {
            id: LanguageId::C,
            header: "🔧 C Execution Started\n=====================\n\n",
            requires: &["#include", "int main()"],
            missing_reason: "Missing includes or main function",
            calls: vec![Self::re(r"printf\([^)]*\)")],
            call_syntax: Self::re(r"printf\(|\)"),
            output_heading: STANDARD_OUTPUT,
            args: vec![
                Self::strip(Any(&["\""]), "\""),
                Self::say(Any(&["%d", "%s", "%f"]), "Formatted output"),
            ],
            topics: vec![
                Self::topic(
                    Any(&["sizeof", "array"]),
                    "\n📊 Array Operations:\nNumbers: 1 2 3 4 5\nSquares: 1 4 9 16 25\n",
                ),
                Self::topic(Any(&["factorial"]), FACTORIAL),
                Self::topic(Any(&["fibonacci"]), FIBONACCI_TENTH),
            ],
            footer: "\n✨ C execution completed successfully!",
        });
    }

    fn register_kotlin(&mut self) {
        use Markers::*;
        self.profiles.push(LanguageProfile {
            id: LanguageId::KOTLIN,
            header: "🎯 Kotlin Execution Started\n==========================\n\n",
            requires: &["fun main()"],
            missing_reason: "Missing main function",
            calls: vec![Self::re(r"println\([^)]*\)")],
            call_syntax: Self::re(r"println\(|\)"),
            output_heading: STANDARD_OUTPUT,
            args: vec![Self::strip(Any(&["\"", "$"]), r#"["$]"#), Self::expression()],
            topics: vec![
                Self::topic(Any(&["listOf", "map"]), LIST_SQUARES),
                Self::topic(Any(&["factorial"]), FACTORIAL),
                Self::topic(Any(&["fibonacci"]), FIBONACCI_TENTH),
                Self::topic(
                    Any(&["data class", "Person"]),
                    "\n👤 Data Class Example:\nPerson: Alice, Age: 25\n",
                ),
                Self::topic(
                    Any(&["when", "getGrade"]),
                    "\n📝 Grade Calculation:\nGrade for 85: B\n",
                ),
            ],
            footer: "\n✨ Kotlin execution completed successfully!",
        });
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}
