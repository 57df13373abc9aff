//! Post records handed in by the search collaborator.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A single post, in presentation order.
///
/// The list arrives already sorted by the search collaborator; the feed
/// builder never mutates or reorders it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Unique within the owning tenant.
    pub id: i64,
    pub title: String,
    /// May contain HTML markup; escaped only at serialization time.
    pub description: String,
    pub created_at: DateTime<FixedOffset>,
    /// Display name of the post author.
    pub author_name: String,
    /// Staff response, when one has been published.
    pub response: Option<PostResponse>,
}

/// Response metadata attached to an answered post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub responded_at: DateTime<FixedOffset>,
}
