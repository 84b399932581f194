use anyhow::Result;

use crate::config::ShelfConfig;
use crate::corpus;

/// Run a keyword search from the terminal.
pub fn search(config: &ShelfConfig, keywords: &str, json: bool) -> Result<()> {
    let corpus = super::open_corpus(config);
    let results = corpus::search(&corpus, keywords);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results found.");
        return Ok(());
    }

    println!("Found {} result(s)\n", results.len());

    for (i, result) in results.iter().enumerate() {
        match &result.auxiliary_mode {
            Some(mode) => println!(
                "  {}. [{}] {} — {} (mode: {})",
                i + 1,
                result.mode,
                result.filename,
                result.title,
                mode
            ),
            None => println!(
                "  {}. [{}] {} — {}",
                i + 1,
                result.mode,
                result.filename,
                result.title
            ),
        }
        if !result.description.is_empty() {
            println!("     {}", super::preview(&result.description, 120));
        }
        println!();
    }

    Ok(())
}
