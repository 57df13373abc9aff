//! Atom 1.0 feed synthesis for multi-tenant post boards.
//!
//! Turns tenant metadata and an ordered list of posts into a serialized
//! Atom document:
//!
//! - [`AtomFeed::build`] assembles the in-memory document
//! - [`AtomFeed::to_xml`] renders it to UTF-8 XML bytes
//! - [`render_feed`] is the one-call path for HTTP handlers
//!
//! The crate performs no I/O and keeps no state between calls. Query
//! dispatch, tenant resolution, and response writing belong to the
//! caller; this crate only determines the body bytes and the
//! [`ATOM_CONTENT_TYPE`] label.

pub mod error;
pub mod feed;
pub mod post;
pub mod tenant;
pub mod utils;

pub use error::FeedError;
pub use feed::{ATOM_CONTENT_TYPE, AtomFeed, render_feed};
pub use post::{Post, PostResponse};
pub use tenant::Tenant;
