use std::sync::Arc;

use thiserror::Error;

use blogsvc_core::{BlogError, BlogId, BlogRecord, InvalidRecord};

/// Failure of a storage operation.
///
/// `Blog` carries the domain failure signal of a single-record lookup; every
/// other variant is an infrastructure failure the HTTP layer does not
/// translate.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Blog(#[from] BlogError),

    #[error("storage backend failure: {0}")]
    Backend(String),

    #[error("stored blog {id} is not a valid record: {source}")]
    InvalidRecord {
        id: String,
        #[source]
        source: InvalidRecord,
    },
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    /// The domain failure signal, if this is one.
    pub fn as_blog_error(&self) -> Option<BlogError> {
        match self {
            StoreError::Blog(e) => Some(*e),
            _ => None,
        }
    }
}

/// Read access to blog records.
///
/// Implementations own their storage; callers only ever read.
#[async_trait::async_trait]
pub trait BlogStore: Send + Sync {
    /// All viewable records, in the store's order.
    async fn list_blogs(&self) -> Result<Vec<BlogRecord>, StoreError>;

    /// Exactly one record, or `StoreError::Blog` with `NotFound`/`NotAuthorized`.
    async fn fetch_blog(&self, id: &BlogId) -> Result<BlogRecord, StoreError>;
}

#[async_trait::async_trait]
impl<S> BlogStore for Arc<S>
where
    S: BlogStore + ?Sized,
{
    async fn list_blogs(&self) -> Result<Vec<BlogRecord>, StoreError> {
        (**self).list_blogs().await
    }

    async fn fetch_blog(&self, id: &BlogId) -> Result<BlogRecord, StoreError> {
        (**self).fetch_blog(id).await
    }
}
