//! Instance identifiers.
//!
//! Components are opaque strings; equality is exact tuple equality. The
//! extractor stringifies numeric ids before they get here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An actor within a document (article-level tasks).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArticleInstance {
    /// Document identifier (`guid`)
    pub document_id: String,
    /// Actor identifier
    pub actor_id: String,
}

impl ArticleInstance {
    /// Create a new article-level instance key.
    #[must_use]
    pub fn new(document_id: impl Into<String>, actor_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            actor_id: actor_id.into(),
        }
    }
}

impl fmt::Display for ArticleInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.document_id, self.actor_id)
    }
}

/// An actor within a subevent within a document (subevent-level tasks).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubeventInstance {
    /// Document identifier (`guid`)
    pub document_id: String,
    /// Subevent identifier, unique within its document
    pub subevent_id: String,
    /// Actor identifier
    pub actor_id: String,
}

impl SubeventInstance {
    /// Create a new subevent-level instance key.
    #[must_use]
    pub fn new(
        document_id: impl Into<String>,
        subevent_id: impl Into<String>,
        actor_id: impl Into<String>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            subevent_id: subevent_id.into(),
            actor_id: actor_id.into(),
        }
    }
}

impl fmt::Display for SubeventInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.document_id, self.subevent_id, self.actor_id
        )
    }
}
