//! Postgres-backed blog store.
//!
//! Reads from an existing table; creating and migrating it is a deployment
//! concern:
//!
//! ```sql
//! CREATE TABLE blogs (
//!     id       TEXT PRIMARY KEY,
//!     body     JSONB NOT NULL,
//!     private  BOOLEAN NOT NULL DEFAULT FALSE,
//!     position BIGSERIAL
//! );
//! ```

use serde_json::Value as JsonValue;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Row;

use blogsvc_core::{blog, BlogEntry, BlogId, BlogRecord, Visibility};

use super::r#trait::{BlogStore, StoreError};

pub struct PostgresBlogStore {
    pool: PgPool,
}

impl PostgresBlogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .map_err(|e| StoreError::backend(format!("connect: {e}")))?;
        Ok(Self::new(pool))
    }
}

fn decode_body(id: &str, body: JsonValue) -> Result<BlogRecord, StoreError> {
    BlogRecord::try_from(body).map_err(|source| StoreError::InvalidRecord {
        id: id.to_string(),
        source,
    })
}

#[async_trait::async_trait]
impl BlogStore for PostgresBlogStore {
    #[tracing::instrument(name = "list_blogs", skip(self), err)]
    async fn list_blogs(&self) -> Result<Vec<BlogRecord>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, body
            FROM blogs
            WHERE NOT private
            ORDER BY position, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::backend(format!("list blogs: {e}")))?;

        rows.into_iter()
            .map(|row| {
                let id: String = row
                    .try_get("id")
                    .map_err(|e| StoreError::backend(format!("decode id: {e}")))?;
                let body: JsonValue = row
                    .try_get("body")
                    .map_err(|e| StoreError::backend(format!("decode body: {e}")))?;
                decode_body(&id, body)
            })
            .collect()
    }

    #[tracing::instrument(name = "fetch_blog", skip(self, id), fields(blog_id = %id))]
    async fn fetch_blog(&self, id: &BlogId) -> Result<BlogRecord, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT body, private
            FROM blogs
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::backend(format!("fetch blog: {e}")))?;

        let entry = match row {
            Some(row) => {
                let body: JsonValue = row
                    .try_get("body")
                    .map_err(|e| StoreError::backend(format!("decode body: {e}")))?;
                let private: bool = row
                    .try_get("private")
                    .map_err(|e| StoreError::backend(format!("decode private: {e}")))?;
                Some(BlogEntry {
                    id: id.clone(),
                    visibility: if private {
                        Visibility::Private
                    } else {
                        Visibility::Public
                    },
                    record: decode_body(id.as_str(), body)?,
                })
            }
            None => None,
        };

        blog::resolve(entry.as_ref()).map_err(StoreError::from)
    }
}
