use anyhow::Result;
use std::io::Write;

use crate::config::ShelfConfig;
use crate::corpus;

/// Write one file's raw text to stdout, byte for byte.
pub fn load(config: &ShelfConfig, mode: &str, filename: &str) -> Result<()> {
    let corpus = super::open_corpus(config);
    let text = corpus::load(&corpus, mode, filename)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
