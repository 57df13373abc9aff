//! Tenant metadata resolved by the host application.

use serde::{Deserialize, Serialize};

/// Branding and addressing for the tenant that owns the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    /// Display name, used as the feed title.
    pub name: String,
    /// Used as the feed subtitle; may be empty.
    pub welcome_message: String,
    /// Absolute origin like `https://acme.example`. A trailing slash is
    /// tolerated and trimmed during feed construction.
    pub base_url: String,
}
