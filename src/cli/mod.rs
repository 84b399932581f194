pub mod doctor;
pub mod list;
pub mod load;
pub mod search;

use crate::config::ShelfConfig;
use crate::corpus::Corpus;

/// Open the corpus named by the config.
fn open_corpus(config: &ShelfConfig) -> Corpus {
    Corpus::new(config.resolved_root())
}

/// Trim a description to one terminal line.
fn preview(text: &str, max_chars: usize) -> String {
    let line = text.lines().next().unwrap_or("");
    if line.chars().count() > max_chars {
        let cut: String = line.chars().take(max_chars).collect();
        format!("{cut}...")
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::preview;

    #[test]
    fn preview_truncates_on_char_boundaries() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("ééééé", 3), "ééé...");
        assert_eq!(preview("first\nsecond", 20), "first");
    }
}
