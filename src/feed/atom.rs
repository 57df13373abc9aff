//! Atom 1.0 document model and its construction from posts.
//!
//! [`AtomFeed::build`] is a pure function over tenant metadata and an
//! ordered post list. Serialization is a separate step, see the sibling
//! `xml` module.

use crate::{
    feed::ATOM_CONTENT_TYPE,
    post::Post,
    tenant::Tenant,
    utils::date::{format_rfc3339, unix_epoch},
};

/// In-memory Atom document, built fresh per request.
///
/// Timestamps are stored pre-formatted; all time logic happens during
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomFeed {
    pub title: String,
    pub subtitle: Content,
    pub id: String,
    /// Latest creation or response instant across all posts, formatted.
    pub updated: String,
    /// Always the self/alternate pair, regardless of entry count.
    pub links: Vec<Link>,
    /// Feed-level author; [`AtomFeed::build`] leaves it unset.
    pub author: Option<Person>,
    /// One entry per post, in input order.
    pub entries: Vec<Entry>,
}

/// One syndicated post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    pub id: String,
    pub published: String,
    /// Present iff the post has a response; never an empty string.
    pub updated: Option<String>,
    pub links: Vec<Link>,
    pub author: Person,
    pub summary: Content,
}

/// `link` element attributes.
///
/// Everything but `href` is optional and omitted from the output when
/// unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub rel: Option<String>,
    pub mime_type: Option<String>,
    pub hreflang: Option<String>,
    pub title: Option<String>,
    pub length: Option<u64>,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Self::default()
        }
    }

    pub fn rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = Some(rel.into());
        self
    }

    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn hreflang(mut self, hreflang: impl Into<String>) -> Self {
        self.hreflang = Some(hreflang.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }
}

/// `author` person construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub uri: Option<String>,
    pub email: Option<String>,
}

impl Person {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: None,
            email: None,
        }
    }
}

/// Typed text construct (`subtitle`, `summary`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    /// Value of the `type` attribute, e.g. `text` or `html`.
    pub content_type: String,
    pub body: String,
}

impl Content {
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            content_type: "text".into(),
            body: body.into(),
        }
    }

    pub fn html(body: impl Into<String>) -> Self {
        Self {
            content_type: "html".into(),
            body: body.into(),
        }
    }
}

impl AtomFeed {
    /// Assemble the feed document for `tenant` from an ordered post list.
    ///
    /// Post order is preserved verbatim. The feed-level `updated` is the
    /// latest creation or response instant, with the Unix epoch as the
    /// floor: an empty list reports the formatted epoch, not "now".
    pub fn build(tenant: &Tenant, posts: &[Post]) -> Self {
        let base_url = tenant.base_url.trim_end_matches('/');

        let mut last_update = unix_epoch();
        for post in posts {
            if post.created_at > last_update {
                last_update = post.created_at;
            }
            if let Some(response) = &post.response {
                if response.responded_at > last_update {
                    last_update = response.responded_at;
                }
            }
        }

        let entries = posts
            .iter()
            .map(|post| Entry::from_post(post, base_url))
            .collect();

        Self {
            title: tenant.name.clone(),
            subtitle: Content::text(tenant.welcome_message.clone()),
            id: base_url.to_string(),
            updated: format_rfc3339(last_update),
            links: vec![
                Link::new(format!("{base_url}/feed.atom"))
                    .rel("self")
                    .mime_type(ATOM_CONTENT_TYPE),
                Link::new(base_url).rel("alternate").mime_type("text/html"),
            ],
            author: None,
            entries,
        }
    }
}

impl Entry {
    fn from_post(post: &Post, base_url: &str) -> Self {
        Self {
            title: post.title.clone(),
            id: format!("{base_url}/posts/{}", post.id),
            published: format_rfc3339(post.created_at),
            updated: post
                .response
                .as_ref()
                .map(|response| format_rfc3339(response.responded_at)),
            links: vec![
                Link::new(format!("{base_url}/feed/posts/{}.atom", post.id))
                    .rel("self")
                    .mime_type(ATOM_CONTENT_TYPE),
                Link::new(format!("{base_url}/posts/{}", post.id))
                    .rel("alternate")
                    .mime_type("text/html"),
            ],
            author: Person::named(post.author_name.clone()),
            summary: Content::html(post.description.clone()),
        }
    }
}
