//! Store wiring: picks and bootstraps the blog store before the server starts.

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use blogsvc_infra::{BlogStore, InMemoryBlogStore, SeedError, StoreError};

use crate::config::StoreBackend;

/// Shared handle to the data store, injected into the router.
pub type BlogStoreHandle = Arc<dyn BlogStore>;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Seed(#[from] SeedError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Build the store selected by configuration.
///
/// `Postgres` without the `postgres` feature falls back to the in-memory
/// sample store with a warning.
pub async fn build_store(backend: &StoreBackend) -> Result<BlogStoreHandle, BootstrapError> {
    match backend {
        StoreBackend::InMemory { seed_path } => build_in_memory_store(seed_path.as_deref()),
        StoreBackend::Postgres { database_url } => build_persistent_store(database_url).await,
    }
}

pub fn build_in_memory_store(seed_path: Option<&Path>) -> Result<BlogStoreHandle, BootstrapError> {
    let store = match seed_path {
        Some(path) => InMemoryBlogStore::from_seed_file(path)?,
        None => {
            tracing::info!("BLOG_SEED_PATH not set; using built-in sample blogs");
            InMemoryBlogStore::with_sample_data()?
        }
    };
    Ok(Arc::new(store))
}

#[cfg(feature = "postgres")]
async fn build_persistent_store(database_url: &str) -> Result<BlogStoreHandle, BootstrapError> {
    let store = blogsvc_infra::PostgresBlogStore::connect(database_url).await?;
    tracing::info!("connected to postgres blog store");
    Ok(Arc::new(store))
}

#[cfg(not(feature = "postgres"))]
async fn build_persistent_store(_database_url: &str) -> Result<BlogStoreHandle, BootstrapError> {
    tracing::warn!(
        "USE_PERSISTENT_STORES=true but postgres feature not enabled, falling back to in-memory"
    );
    build_in_memory_store(None)
}
