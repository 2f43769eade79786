//! Built-in skills vocabulary.
//!
//! An immutable, process-wide set of known skill names in lower-case
//! canonical form. Built once at startup and shared read-only; a broken
//! override file is a boot error, never discovered mid-request.

use anyhow::{bail, Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Common tech skills recognized even when the caller supplies no
/// requirement list. Multi-word entries are matched by substring, single
/// words by whole token.
const BUILTIN_SKILLS: &[&str] = &[
    "python", "java", "c++", "c", "c#", "javascript", "typescript", "html", "css", "sql", "nosql",
    "react", "angular", "vue", "node.js", "express", "django", "flask", "springboot", "dotnet",
    "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "git", "github", "gitlab",
    "machine learning", "deep learning", "nlp", "computer vision", "tensorflow", "pytorch",
    "pandas", "numpy", "scikit-learn", "matplotlib", "seaborn",
    "communication", "teamwork", "leadership", "problem solving", "agile", "scrum",
    "mongodb", "postgresql", "mysql", "redis", "elasticsearch",
    "linux", "unix", "bash", "shell scripting",
    "rest api", "graphql", "devops", "ci/cd",
    "data analysis", "data science", "big data", "hadoop", "spark",
    "figma", "adobe xd", "ui/ux", "terraform", "ansible",
];

#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    entries: BTreeSet<String>,
}

impl SkillVocabulary {
    /// The default vocabulary, compiled in.
    pub fn builtin() -> Self {
        SkillVocabulary {
            entries: BUILTIN_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Loads a vocabulary override: one skill per line, `#` comments and
    /// blank lines skipped, entries trimmed and lower-cased. An unreadable
    /// or effectively empty file is an error.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("could not read skills file {}", path.display()))?;

        let entries: BTreeSet<String> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| line.to_lowercase())
            .collect();

        if entries.is_empty() {
            bail!("skills file {} contains no entries", path.display());
        }

        Ok(SkillVocabulary { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.entries.contains(skill)
    }
}
