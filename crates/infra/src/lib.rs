//! Infrastructure layer: blog storage backends and bootstrap.

pub mod blog_store;
pub mod seed;

pub use blog_store::{BlogStore, InMemoryBlogStore, StoreError};
#[cfg(feature = "postgres")]
pub use blog_store::PostgresBlogStore;
pub use seed::SeedError;
