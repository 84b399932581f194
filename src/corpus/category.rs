//! Content category definitions.
//!
//! Defines [`ContentCategory`] (the four canonical groupings of the corpus),
//! the legacy alias table, and the file-kind allow-list used to decide which
//! files in a category directory are eligible for indexing.

use serde::{Deserialize, Serialize};

/// A logical grouping of corpus files. Each category owns exactly one
/// directory under the corpus root, named after [`ContentCategory::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentCategory {
    /// Coding guidelines applied to matching files (`*.instructions.md`).
    Instructions,
    /// Reusable prompt templates (`*.prompt.md`).
    Prompts,
    /// Curated bundles of other items (`*.collection.yml`).
    Collections,
    /// Agent and chat persona definitions (`*.agent.md`, `*.chatmode.md`).
    Agents,
}

/// Backward-compatible names, checked before the canonical names.
const ALIASES: &[(&str, ContentCategory)] = &[("chatmodes", ContentCategory::Agents)];

/// Extensions eligible for indexing, without the leading dot.
const ELIGIBLE_EXTENSIONS: &[(&str, FileKind)] = &[
    ("md", FileKind::Markdown),
    ("yml", FileKind::Yaml),
    ("yaml", FileKind::Yaml),
];

impl ContentCategory {
    /// Every canonical category, in the order search sweeps them.
    pub const ALL: [ContentCategory; 4] = [
        Self::Instructions,
        Self::Prompts,
        Self::Collections,
        Self::Agents,
    ];

    /// Canonical name, also the directory name under the corpus root.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instructions => "instructions",
            Self::Prompts => "prompts",
            Self::Collections => "collections",
            Self::Agents => "agents",
        }
    }

    /// Resolve a canonical name or legacy alias. Returns `None` for anything else.
    pub fn resolve(name: &str) -> Option<Self> {
        if let Some((_, category)) = ALIASES.iter().find(|(alias, _)| *alias == name) {
            return Some(*category);
        }
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }

    /// All names accepted by [`ContentCategory::resolve`]: canonical names
    /// first, then aliases.
    pub fn accepted_names() -> Vec<&'static str> {
        Self::ALL
            .iter()
            .map(|c| c.as_str())
            .chain(ALIASES.iter().map(|(alias, _)| *alias))
            .collect()
    }
}

impl std::fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContentCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s).ok_or_else(|| format!("unknown mode: {s}"))
    }
}

/// How a file's metadata is extracted, decided by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Markdown with an optional `---` front-matter block.
    Markdown,
    /// YAML document; metadata comes from top-level `name:` / `description:` lines.
    Yaml,
}

impl FileKind {
    /// Classify a filename, or `None` if it is not eligible for indexing.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        ELIGIBLE_EXTENSIONS
            .iter()
            .find(|(allowed, _)| *allowed == ext)
            .map(|(_, kind)| *kind)
    }
}
