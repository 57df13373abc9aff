//! Atom feed synthesis.
//!
//! Converts tenant metadata and an ordered post list into an Atom 1.0
//! document in two steps:
//!
//! - [`AtomFeed::build`] assembles the in-memory document
//! - [`AtomFeed::to_xml`] renders it to UTF-8 XML bytes
//!
//! [`render_feed`] chains both for the calling handler and propagates a
//! failed post query unchanged.

pub mod atom;
mod xml;

pub use atom::{AtomFeed, Content, Entry, Link, Person};

use crate::{error::FeedError, post::Post, tenant::Tenant};

/// Content type of the serialized feed body.
pub const ATOM_CONTENT_TYPE: &str = "application/atom+xml";

/// Build and serialize the tenant feed in one call.
///
/// `posts` is the search collaborator's outcome: an `Err` is wrapped as
/// [`FeedError::UpstreamQuery`] and no document is built.
pub fn render_feed(
    tenant: &Tenant,
    posts: Result<Vec<Post>, anyhow::Error>,
) -> Result<Vec<u8>, FeedError> {
    let posts = posts.map_err(FeedError::UpstreamQuery)?;
    let feed = AtomFeed::build(tenant, &posts);
    tracing::debug!(
        tenant = %tenant.name,
        entries = feed.entries.len(),
        "rendering atom feed"
    );
    feed.to_xml()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn acme() -> Tenant {
        Tenant {
            name: "Acme".to_string(),
            welcome_message: String::new(),
            base_url: "https://acme.example".to_string(),
        }
    }

    #[test]
    fn test_render_feed_single_post_scenario() {
        let posts = vec![Post {
            id: 1,
            title: "Idea A".to_string(),
            description: "An idea".to_string(),
            created_at: "2023-01-01T00:00:00+00:00".parse().unwrap(),
            author_name: "Alice".to_string(),
            response: None,
        }];

        let bytes = render_feed(&acme(), Ok(posts)).unwrap();
        let xml = String::from_utf8(bytes).unwrap();

        assert!(xml.contains("<id>https://acme.example</id>"));
        assert!(xml.contains("<id>https://acme.example/posts/1</id>"));
        assert!(xml.contains("<updated>2023-01-01T00:00:00+00:00</updated>"));
        // No response, so only the feed-level updated exists.
        assert_eq!(xml.matches("<updated>").count(), 1);
        assert_eq!(xml.matches("<entry>").count(), 1);
    }

    #[test]
    fn test_render_feed_empty_scenario() {
        let bytes = render_feed(&acme(), Ok(Vec::new())).unwrap();
        let xml = String::from_utf8(bytes).unwrap();

        assert!(!xml.contains("<entry>"));
        assert!(xml.contains("<updated>1970-01-01T00:00:00+00:00</updated>"));
        assert_eq!(xml.matches("<link ").count(), 2);
    }

    #[test]
    fn test_render_feed_propagates_upstream_error() {
        let err = render_feed(&acme(), Err(anyhow::anyhow!("search backend down"))).unwrap_err();

        assert!(matches!(err, FeedError::UpstreamQuery(_)));
        let source = err.source().expect("upstream cause should be attached");
        assert_eq!(source.to_string(), "search backend down");
    }

    #[test]
    fn test_content_type_label() {
        assert_eq!(ATOM_CONTENT_TYPE, "application/atom+xml");
    }
}
