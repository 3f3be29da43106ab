//! Store bootstrap: seed data loaded once before the server accepts requests.
//!
//! A seed file is a JSON array of entries, in listing order:
//!
//! ```json
//! [
//!   { "id": "1", "record": { "title": "A" } },
//!   { "id": "2", "visibility": "private", "record": { "title": "B" } }
//! ]
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use blogsvc_core::{BlogEntry, BlogId};

use crate::blog_store::InMemoryBlogStore;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate blog id in seed data: {0}")]
    DuplicateId(BlogId),
}

/// Parse seed entries from JSON text.
pub fn parse_seed(text: &str) -> Result<Vec<BlogEntry>, SeedError> {
    Ok(serde_json::from_str(text)?)
}

/// Read and parse a seed file.
pub fn load_seed_file(path: &Path) -> Result<Vec<BlogEntry>, SeedError> {
    let text = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(&text)
}

const SAMPLE_SEED: &str = r#"[
    { "id": "1", "record": { "title": "Hello, world", "author": "alice" } },
    { "id": "2", "record": { "title": "Second post", "author": "bob" } },
    { "id": "3", "visibility": "private", "record": { "title": "Drafts", "author": "carol" } }
]"#;

/// Built-in sample data used when no seed file is configured.
pub fn sample_entries() -> Result<Vec<BlogEntry>, SeedError> {
    parse_seed(SAMPLE_SEED)
}

impl InMemoryBlogStore {
    /// Bootstrap a store from a seed file.
    pub fn from_seed_file(path: &Path) -> Result<Self, SeedError> {
        let entries = load_seed_file(path)?;
        tracing::info!(path = %path.display(), entries = entries.len(), "loaded blog seed file");
        Self::from_entries(entries)
    }

    /// Bootstrap a store with [`sample_entries`].
    pub fn with_sample_data() -> Result<Self, SeedError> {
        Self::from_entries(sample_entries()?)
    }
}
