//! Error types surfaced to the calling handler.

use thiserror::Error;

/// Errors this crate can hand back to its caller.
///
/// Nothing in here is retried locally; retry policy, if any, belongs to
/// the query collaborator.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The post-list collaborator failed before any document was built.
    ///
    /// The source is the collaborator's error, carried unchanged.
    #[error("post query failed")]
    UpstreamQuery(#[source] anyhow::Error),

    /// The assembled document could not be rendered to XML.
    #[error("failed to serialize atom feed")]
    Serialization(#[from] std::fmt::Error),
}
