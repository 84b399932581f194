//! Search, list, and load over the corpus.
//!
//! Every call re-scans the filesystem; nothing is cached between calls.

use serde::Serialize;

use super::accessor::Corpus;
use super::category::ContentCategory;
use super::error::{CorpusError, Result};
use super::metadata;

// ── Public types ──────────────────────────────────────────────────────────────

/// One file matched by [`search`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub mode: ContentCategory,
    pub filename: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auxiliary_mode: Option<String>,
}

/// One file in a [`list`] response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub filename: String,
    pub title: String,
    pub description: String,
}

/// Outcome of sweeping one category during a search.
#[derive(Debug)]
pub enum CategoryScan {
    Scanned {
        category: ContentCategory,
        items: Vec<SearchResult>,
    },
    Failed {
        category: ContentCategory,
        diagnostic: CorpusError,
    },
}

// ── Search ────────────────────────────────────────────────────────────────────

/// Keyword search across every category. A file matches when any keyword
/// occurs, case-insensitively, in its filename, description, or raw text.
///
/// Never fails: categories that cannot be read are logged and skipped.
pub fn search(corpus: &Corpus, keywords: &str) -> Vec<SearchResult> {
    scan_all(corpus, keywords)
        .into_iter()
        .flat_map(|scan| match scan {
            CategoryScan::Scanned { category, items } => {
                tracing::debug!(mode = %category, matches = items.len(), "mode matched");
                items
            }
            CategoryScan::Failed {
                category,
                diagnostic,
            } => {
                tracing::warn!(mode = %category, error = %diagnostic, "skipping mode during search");
                Vec::new()
            }
        })
        .collect()
}

/// Sweep every category in declared order, keeping per-category outcomes.
pub fn scan_all(corpus: &Corpus, keywords: &str) -> Vec<CategoryScan> {
    let tokens = tokenize(keywords);
    ContentCategory::ALL
        .into_iter()
        .map(|category| match scan_category(corpus, category, &tokens) {
            Ok(items) => CategoryScan::Scanned { category, items },
            Err(diagnostic) => CategoryScan::Failed {
                category,
                diagnostic,
            },
        })
        .collect()
}

fn scan_category(
    corpus: &Corpus,
    category: ContentCategory,
    tokens: &[String],
) -> Result<Vec<SearchResult>> {
    if tokens.is_empty() {
        return Ok(Vec::new());
    }

    let mut items = Vec::new();
    for filename in corpus.list_eligible_files(category)? {
        let raw = match corpus.read_file(category, &filename) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(mode = %category, filename = %filename, error = %e, "skipping unreadable file");
                continue;
            }
        };

        let meta = metadata::extract(&filename, &raw);
        let haystack = format!("{} {} {}", filename, meta.description, raw).to_lowercase();
        if tokens.iter().any(|t| haystack.contains(t.as_str())) {
            items.push(SearchResult {
                mode: category,
                filename,
                title: meta.title,
                description: meta.description,
                auxiliary_mode: meta.mode,
            });
        }
    }

    Ok(items)
}

/// Split on whitespace and lower-case each token.
fn tokenize(keywords: &str) -> Vec<String> {
    keywords
        .split_whitespace()
        .map(|t| t.to_lowercase())
        .collect()
}

// ── Load / list ───────────────────────────────────────────────────────────────

/// Resolve a mode name (canonical or alias) or fail with `InvalidCategory`.
pub fn resolve_category(name: &str) -> Result<ContentCategory> {
    ContentCategory::resolve(name).ok_or_else(|| CorpusError::invalid_category(name))
}

/// Raw text of one file, unmodified.
pub fn load(corpus: &Corpus, mode: &str, filename: &str) -> Result<String> {
    let category = resolve_category(mode)?;
    corpus.read_file(category, filename)
}

/// Metadata for every eligible file in one category, in enumeration order.
pub fn list(corpus: &Corpus, mode: &str) -> Result<Vec<ListEntry>> {
    let category = resolve_category(mode)?;
    let mut entries = Vec::new();
    for filename in corpus.list_eligible_files(category)? {
        let raw = match corpus.read_file(category, &filename) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(mode = %category, filename = %filename, error = %e, "skipping unreadable file");
                continue;
            }
        };
        let meta = metadata::extract(&filename, &raw);
        entries.push(ListEntry {
            filename,
            title: meta.title,
            description: meta.description,
        });
    }
    Ok(entries)
}
