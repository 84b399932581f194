//! CLI `doctor` command — check the corpus layout and print a health report.

use anyhow::Result;

use crate::config::ShelfConfig;
use crate::corpus::{ContentCategory, Corpus};

/// Inspect every mode directory and print a health report.
pub fn doctor(config: &ShelfConfig) -> Result<()> {
    let corpus = super::open_corpus(config);
    let root = corpus.root();

    println!("Shelf Health Report");
    println!("===================");
    println!();
    println!("Corpus root:       {}", root.display());
    println!("Transport:         {}", config.server.transport);
    println!("Accepted modes:    {}", ContentCategory::accepted_names().join(", "));

    if !root.is_dir() {
        println!();
        println!("Corpus root not found.");
        println!("Create it with one directory per mode, or point SHELF_ROOT at an existing corpus.");
        return Ok(());
    }

    println!();
    println!("Modes:");
    let mut problems = 0;
    for category in ContentCategory::ALL {
        let status = match check_category(&corpus, category) {
            CategoryHealth::Missing => "missing (treated as empty)".to_string(),
            CategoryHealth::Unreadable(e) => {
                problems += 1;
                format!("UNREADABLE ({e})")
            }
            CategoryHealth::Ok { files, unreadable } if unreadable.is_empty() => {
                format!("{files} file(s)")
            }
            CategoryHealth::Ok { files, unreadable } => {
                problems += 1;
                format!("{files} file(s), {} unreadable: {}", unreadable.len(), unreadable.join(", "))
            }
        };
        println!("  {:<16} {}", category.as_str(), status);
    }

    println!();
    if problems == 0 {
        println!("Read check:        PASSED");
    } else {
        println!("Read check:        FAILED ({problems} mode(s) with problems)");
    }

    Ok(())
}

enum CategoryHealth {
    Missing,
    Unreadable(crate::corpus::CorpusError),
    Ok { files: usize, unreadable: Vec<String> },
}

fn check_category(corpus: &Corpus, category: ContentCategory) -> CategoryHealth {
    if !corpus.category_dir(category).exists() {
        return CategoryHealth::Missing;
    }
    match corpus.list_eligible_files(category) {
        Ok(files) => {
            let unreadable = files
                .iter()
                .filter(|f| corpus.read_file(category, f).is_err())
                .cloned()
                .collect();
            CategoryHealth::Ok {
                files: files.len(),
                unreadable,
            }
        }
        Err(e) => CategoryHealth::Unreadable(e),
    }
}
