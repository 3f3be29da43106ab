//! `blogsvc-core` — domain building blocks for the blog service.
//!
//! This crate contains **pure domain** types (no infrastructure concerns).

pub mod blog;
pub mod error;
pub mod id;

pub use blog::{BlogEntry, BlogRecord, Visibility};
pub use error::{BlogError, BlogResult, InvalidRecord};
pub use id::{BlogId, InvalidBlogId};
