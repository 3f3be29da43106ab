use std::collections::HashMap;
use std::sync::RwLock;

use blogsvc_core::{blog, BlogEntry, BlogId, BlogRecord};

use super::r#trait::{BlogStore, StoreError};
use crate::seed::SeedError;

#[derive(Debug, Default)]
struct Entries {
    ordered: Vec<BlogEntry>,
    index: HashMap<BlogId, usize>,
}

/// In-memory blog store.
///
/// Keeps records in insertion order; intended for dev, tests and the seeded
/// default deployment.
#[derive(Debug, Default)]
pub struct InMemoryBlogStore {
    entries: RwLock<Entries>,
}

impl InMemoryBlogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from seed entries, rejecting duplicate identifiers.
    pub fn from_entries(entries: impl IntoIterator<Item = BlogEntry>) -> Result<Self, SeedError> {
        let mut inner = Entries::default();
        for entry in entries {
            if inner.index.contains_key(&entry.id) {
                return Err(SeedError::DuplicateId(entry.id));
            }
            inner.index.insert(entry.id.clone(), inner.ordered.len());
            inner.ordered.push(entry);
        }
        Ok(Self {
            entries: RwLock::new(inner),
        })
    }

    /// Insert or replace an entry. A replaced entry keeps its position.
    pub fn upsert(&self, entry: BlogEntry) -> Result<(), StoreError> {
        let mut inner = self
            .entries
            .write()
            .map_err(|_| StoreError::backend("blog store lock poisoned"))?;

        match inner.index.get(&entry.id).copied() {
            Some(pos) => inner.ordered[pos] = entry,
            None => {
                let pos = inner.ordered.len();
                inner.index.insert(entry.id.clone(), pos);
                inner.ordered.push(entry);
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.ordered.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl BlogStore for InMemoryBlogStore {
    async fn list_blogs(&self) -> Result<Vec<BlogRecord>, StoreError> {
        let inner = self
            .entries
            .read()
            .map_err(|_| StoreError::backend("blog store lock poisoned"))?;

        Ok(inner
            .ordered
            .iter()
            .filter(|e| e.is_public())
            .map(|e| e.record.clone())
            .collect())
    }

    async fn fetch_blog(&self, id: &BlogId) -> Result<BlogRecord, StoreError> {
        let inner = self
            .entries
            .read()
            .map_err(|_| StoreError::backend("blog store lock poisoned"))?;

        let entry = inner.index.get(id).map(|&pos| &inner.ordered[pos]);
        blog::resolve(entry).map_err(StoreError::from)
    }
}
