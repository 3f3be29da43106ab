//! Blog storage: the data access interface consumed by the HTTP layer.

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;
pub mod r#trait;

pub use in_memory::InMemoryBlogStore;
#[cfg(feature = "postgres")]
pub use postgres::PostgresBlogStore;
pub use r#trait::{BlogStore, StoreError};
