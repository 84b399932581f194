//! Error types for corpus access.

use thiserror::Error;

/// Result type for corpus operations.
pub type Result<T> = std::result::Result<T, CorpusError>;

/// Failures that cross the corpus boundary. Metadata extraction never fails;
/// only category resolution and filesystem I/O produce these.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("invalid mode '{name}': expected one of {}", .accepted.join(", "))]
    InvalidCategory {
        name: String,
        accepted: Vec<&'static str>,
    },

    #[error("file '{filename}' not found in mode '{category}'")]
    NotFound {
        category: String,
        filename: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("mode '{category}' directory could not be read: {source}")]
    CategoryUnavailable {
        category: String,
        #[source]
        source: std::io::Error,
    },
}

impl CorpusError {
    pub(crate) fn invalid_category(name: &str) -> Self {
        Self::InvalidCategory {
            name: name.to_string(),
            accepted: super::ContentCategory::accepted_names(),
        }
    }
}
