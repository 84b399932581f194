//! Metadata extraction from raw corpus files.
//!
//! Markdown files carry an optional front-matter block:
//! ```markdown
//! ---
//! title: "Example Guide"
//! description: Helpful notes
//! mode: agent
//! ---
//! Body text.
//! ```
//! YAML files are not parsed as YAML; their `name:` and `description:` lines
//! are picked out wherever they appear. Extraction never fails: every miss
//! resolves to a default value.

use std::collections::HashMap;

use serde::Serialize;

use super::category::FileKind;

/// Category tags that may precede the `.md` extension, stripped when a
/// title is derived from the filename.
const TITLE_SUFFIX_TAGS: &[&str] = &["instructions", "prompt", "chatmode", "agent", "collection"];

const FRONT_MATTER_DELIMITER: &str = "---";

/// Metadata derived from one file. Always fully populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub title: String,
    pub description: String,
    /// Chat mode declared by a prompt's front-matter (`mode:`). Never set for YAML files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

/// Extract metadata from a file's raw text. Files whose extension is not
/// YAML are treated as markdown.
pub fn extract(filename: &str, raw: &str) -> Metadata {
    match FileKind::from_filename(filename) {
        Some(FileKind::Yaml) => extract_yaml(filename, raw),
        _ => extract_markdown(filename, raw),
    }
}

fn extract_markdown(filename: &str, raw: &str) -> Metadata {
    let mut fields = front_matter(raw)
        .map(parse_front_matter)
        .unwrap_or_default();

    let title = fields
        .remove("title")
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| default_title(filename).to_string());
    let description = fields.remove("description").unwrap_or_default();
    let mode = fields.remove("mode").filter(|m| !m.is_empty());

    Metadata {
        title,
        description,
        mode,
    }
}

fn extract_yaml(filename: &str, raw: &str) -> Metadata {
    Metadata {
        title: first_top_level_value(raw, "name").unwrap_or_else(|| filename.to_string()),
        description: first_top_level_value(raw, "description").unwrap_or_default(),
        mode: None,
    }
}

/// Return the lines between an opening `---` on the first line and the next
/// solitary `---` line, or `None` if the text does not open with a closed block.
fn front_matter(raw: &str) -> Option<Vec<&str>> {
    let mut lines = raw.lines().map(|l| l.strip_suffix('\r').unwrap_or(l));
    if lines.next()? != FRONT_MATTER_DELIMITER {
        return None;
    }

    let mut block = Vec::new();
    for line in lines {
        // The block holds at least one line, so a delimiter right after the
        // opener is content rather than the close.
        if line == FRONT_MATTER_DELIMITER && !block.is_empty() {
            return Some(block);
        }
        block.push(line);
    }
    None
}

/// Parse `key: value` lines. Later keys overwrite earlier ones.
fn parse_front_matter(lines: Vec<&str>) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    for line in lines {
        let Some(idx) = line.find(':') else {
            continue;
        };
        if idx == 0 {
            continue;
        }
        let key = line[..idx].trim();
        let value = strip_quotes(line[idx + 1..].trim());
        fields.insert(key.to_string(), value.to_string());
    }
    fields
}

/// Find the first line starting with `<key>:` followed by a non-blank value.
fn first_top_level_value(raw: &str, key: &str) -> Option<String> {
    raw.lines().find_map(|line| {
        let rest = line.strip_prefix(key)?.strip_prefix(':')?;
        let value = rest.trim();
        (!value.is_empty()).then(|| strip_quotes(value).to_string())
    })
}

/// Remove one layer of matching single or double quotes.
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// `foo.instructions.md` -> `foo`. Filenames without a known tag are returned as-is.
pub fn default_title(filename: &str) -> &str {
    let Some(stem) = filename.strip_suffix(".md") else {
        return filename;
    };
    TITLE_SUFFIX_TAGS
        .iter()
        .find_map(|tag| {
            stem.strip_suffix(*tag)
                .and_then(|rest| rest.strip_suffix('.'))
        })
        .unwrap_or(filename)
}
