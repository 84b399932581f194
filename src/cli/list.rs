//! CLI `list` command — print every file in one mode.

use anyhow::Result;

use crate::config::ShelfConfig;
use crate::corpus;

/// List the files in `mode`, sorted by filename for stable terminal output.
pub fn list(config: &ShelfConfig, mode: &str, json: bool) -> Result<()> {
    let corpus = super::open_corpus(config);
    let mut entries = corpus::list(&corpus, mode)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No files in mode '{mode}'.");
        return Ok(());
    }

    entries.sort_by(|a, b| a.filename.cmp(&b.filename));
    let width = entries.iter().map(|e| e.filename.len()).max().unwrap_or(0);
    for entry in &entries {
        println!(
            "{:<width$}  {}",
            entry.filename,
            super::preview(&entry.title, 60),
        );
        if !entry.description.is_empty() {
            println!("{:<width$}  {}", "", super::preview(&entry.description, 100));
        }
    }

    Ok(())
}
