//! Blog identifier.

use core::borrow::Borrow;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a blog record, as supplied in the URL path.
///
/// Only non-emptiness is enforced; the format is otherwise opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BlogId(String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("blog id must not be empty")]
pub struct InvalidBlogId;

impl BlogId {
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidBlogId> {
        let value = value.into();
        if value.is_empty() {
            return Err(InvalidBlogId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for BlogId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BlogId {
    type Err = InvalidBlogId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for BlogId {
    type Error = InvalidBlogId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BlogId> for String {
    fn from(value: BlogId) -> Self {
        value.0
    }
}

impl AsRef<str> for BlogId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for BlogId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
