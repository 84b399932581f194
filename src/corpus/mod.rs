//! The content corpus: category resolution, filesystem access, metadata
//! extraction, and the search / list / load operations built on them.

pub mod accessor;
pub mod category;
pub mod error;
pub mod metadata;
pub mod prompt;
pub mod query;

pub use accessor::Corpus;
pub use category::{ContentCategory, FileKind};
pub use error::{CorpusError, Result};
pub use metadata::Metadata;
pub use query::{list, load, scan_all, search, CategoryScan, ListEntry, SearchResult};
