//! Language descriptors and the catalog they are loaded from.
//!
//! The catalog is read-only configuration: the store and the synthesizer
//! key off it, nothing mutates it at runtime.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::CatalogError;

/// Numeric language id (Judge0-style ids, plus 1001 for the web project).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageId(pub u32);

impl LanguageId {
    pub const C: Self = Self(50);
    pub const CPP: Self = Self(54);
    pub const JAVA: Self = Self(62);
    pub const JAVASCRIPT: Self = Self(63);
    pub const PYTHON: Self = Self(71);
    pub const KOTLIN: Self = Self(78);
    /// Multi-file HTML/CSS/JS project.
    pub const WEB_PROJECT: Self = Self(1001);
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Static language descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub id: LanguageId,
    /// Display name; the single-file preview harness is keyed by it.
    pub name: String,
    /// File extension without the dot.
    pub extension: String,
    /// Syntax-highlighting tag for the editor widget.
    pub syntax: String,
    /// Starter program for "new file".
    pub default_source: String,
    pub icon: String,
    pub category: String,
}

impl Language {
    fn builtin(
        id: LanguageId,
        name: &str,
        extension: &str,
        syntax: &str,
        icon: &str,
        category: &str,
        default_source: &str,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            extension: extension.to_string(),
            syntax: syntax.to_string(),
            default_source: default_source.trim_end().to_string(),
            icon: icon.to_string(),
            category: category.to_string(),
        }
    }
}

/// Ordered, immutable set of languages.
///
/// Order matters: the first entry is the fallback for unknown upload
/// extensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Language>", try_from = "Vec<Language>")]
pub struct LanguageCatalog {
    languages: Vec<Language>,
}

impl TryFrom<Vec<Language>> for LanguageCatalog {
    type Error = CatalogError;

    fn try_from(languages: Vec<Language>) -> Result<Self, Self::Error> {
        Self::new(languages)
    }
}

impl From<LanguageCatalog> for Vec<Language> {
    fn from(catalog: LanguageCatalog) -> Self {
        catalog.languages
    }
}

impl LanguageCatalog {
    /// Build a catalog, rejecting empty lists and duplicate ids.
    pub fn new(languages: Vec<Language>) -> Result<Self, CatalogError> {
        if languages.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for lang in &languages {
            if !seen.insert(lang.id) {
                return Err(CatalogError::DuplicateId(lang.id));
            }
        }
        Ok(Self { languages })
    }

    /// Load a catalog from a JSON array of language descriptors.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let languages: Vec<Language> = serde_json::from_str(json)?;
        Self::new(languages)
    }

    /// The built-in catalog shipped with the playground.
    pub fn builtin() -> Self {
        use LanguageId as Id;
        Self {
            languages: vec![
                Language::builtin(
                    Id::WEB_PROJECT,
                    "Web Project",
                    "html",
                    "html",
                    "🌐",
                    "Web",
                    include_str!("../starters/web_project.html"),
                ),
                Language::builtin(
                    Id::JAVASCRIPT,
                    "JavaScript",
                    "js",
                    "javascript",
                    "🟨",
                    "Web",
                    include_str!("../starters/javascript.js"),
                ),
                Language::builtin(
                    Id::PYTHON,
                    "Python",
                    "py",
                    "python",
                    "🐍",
                    "Backend",
                    include_str!("../starters/python.py"),
                ),
                Language::builtin(
                    Id::JAVA,
                    "Java",
                    "java",
                    "java",
                    "☕",
                    "Backend",
                    include_str!("../starters/java.java"),
                ),
                Language::builtin(
                    Id::CPP,
                    "C++",
                    "cpp",
                    "cpp",
                    "⚡",
                    "System",
                    include_str!("../starters/cpp.cpp"),
                ),
                Language::builtin(
                    Id::C,
                    "C",
                    "c",
                    "c",
                    "🔧",
                    "System",
                    include_str!("../starters/c.c"),
                ),
                Language::builtin(
                    Id::KOTLIN,
                    "Kotlin",
                    "kt",
                    "kotlin",
                    "🎯",
                    "Mobile",
                    include_str!("../starters/kotlin.kt"),
                ),
            ],
        }
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// The first entry, used as the fallback language.
    pub fn first(&self) -> &Language {
        // Non-empty by construction.
        &self.languages[0]
    }

    pub fn by_id(&self, id: LanguageId) -> Option<&Language> {
        self.languages.iter().find(|l| l.id == id)
    }

    /// Case-insensitive extension lookup, falling back to [`Self::first`].
    pub fn by_extension(&self, extension: &str) -> &Language {
        let ext = extension.to_lowercase();
        self.languages
            .iter()
            .find(|l| l.extension == ext)
            .unwrap_or_else(|| self.first())
    }

    /// Language for an uploaded file name: the text after the last `.`,
    /// or the whole name when it has no dot.
    pub fn for_file_name(&self, file_name: &str) -> &Language {
        let ext = file_name.rsplit('.').next().unwrap_or_default();
        self.by_extension(ext)
    }

    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Language> {
        self.languages.iter().filter(move |l| l.category == category)
    }

    /// Distinct categories in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for lang in &self.languages {
            if !out.contains(&lang.category.as_str()) {
                out.push(&lang.category);
            }
        }
        out
    }
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
