//! XML rendering for feed documents.
//!
//! The element tree is rendered by hand so child and attribute order match
//! what feed readers expect; `quick_xml` supplies the escaping. The
//! two-space indentation is a presentation nicety only, whitespace-only
//! differences do not change the parsed structure.

use std::fmt::{self, Write};

use quick_xml::escape::escape;

use super::atom::{AtomFeed, Content, Entry, Link, Person};
use crate::error::FeedError;

/// Namespace the `feed` root element is bound to.
const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

/// Fixed first line of every serialized document.
const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>";

impl AtomFeed {
    /// Render the document to UTF-8 XML bytes.
    ///
    /// Never drops entries or emits a partial document: any rendering
    /// failure surfaces as [`FeedError::Serialization`].
    pub fn to_xml(&self) -> Result<Vec<u8>, FeedError> {
        let mut xml = String::with_capacity(1024 + 512 * self.entries.len());
        self.render(&mut xml)?;
        Ok(xml.into_bytes())
    }

    fn render(&self, xml: &mut String) -> fmt::Result {
        writeln!(xml, "{XML_DECL}")?;
        writeln!(xml, "<feed xmlns=\"{ATOM_NS}\">")?;
        write_text_element(xml, "  ", "title", &self.title)?;
        write_content(xml, "  ", "subtitle", &self.subtitle)?;
        write_text_element(xml, "  ", "id", &self.id)?;
        write_text_element(xml, "  ", "updated", &self.updated)?;
        for link in &self.links {
            write_link(xml, "  ", link)?;
        }
        if let Some(author) = &self.author {
            write_person(xml, "  ", author)?;
        }
        for entry in &self.entries {
            write_entry(xml, entry)?;
        }
        writeln!(xml, "</feed>")
    }
}

fn write_entry(xml: &mut String, entry: &Entry) -> fmt::Result {
    writeln!(xml, "  <entry>")?;
    write_text_element(xml, "    ", "title", &entry.title)?;
    write_text_element(xml, "    ", "id", &entry.id)?;
    write_text_element(xml, "    ", "published", &entry.published)?;
    if let Some(updated) = &entry.updated {
        write_text_element(xml, "    ", "updated", updated)?;
    }
    for link in &entry.links {
        write_link(xml, "    ", link)?;
    }
    write_person(xml, "    ", &entry.author)?;
    write_content(xml, "    ", "summary", &entry.summary)?;
    writeln!(xml, "  </entry>")
}

fn write_text_element(xml: &mut String, indent: &str, tag: &str, value: &str) -> fmt::Result {
    writeln!(xml, "{indent}<{tag}>{}</{tag}>", escape(value))
}

fn write_content(xml: &mut String, indent: &str, tag: &str, content: &Content) -> fmt::Result {
    writeln!(
        xml,
        "{indent}<{tag} type=\"{}\">{}</{tag}>",
        escape(content.content_type.as_str()),
        escape(content.body.as_str())
    )
}

/// Attribute order is fixed: rel, href, type, hreflang, title, length.
/// Unset attributes are omitted entirely.
fn write_link(xml: &mut String, indent: &str, link: &Link) -> fmt::Result {
    write!(xml, "{indent}<link")?;
    if let Some(rel) = &link.rel {
        write!(xml, " rel=\"{}\"", escape(rel.as_str()))?;
    }
    write!(xml, " href=\"{}\"", escape(link.href.as_str()))?;
    if let Some(mime_type) = &link.mime_type {
        write!(xml, " type=\"{}\"", escape(mime_type.as_str()))?;
    }
    if let Some(hreflang) = &link.hreflang {
        write!(xml, " hreflang=\"{}\"", escape(hreflang.as_str()))?;
    }
    if let Some(title) = &link.title {
        write!(xml, " title=\"{}\"", escape(title.as_str()))?;
    }
    if let Some(length) = link.length {
        write!(xml, " length=\"{length}\"")?;
    }
    writeln!(xml, "/>")
}

fn write_person(xml: &mut String, indent: &str, person: &Person) -> fmt::Result {
    writeln!(xml, "{indent}<author>")?;
    writeln!(xml, "{indent}  <name>{}</name>", escape(person.name.as_str()))?;
    if let Some(uri) = &person.uri {
        writeln!(xml, "{indent}  <uri>{}</uri>", escape(uri.as_str()))?;
    }
    if let Some(email) = &person.email {
        writeln!(xml, "{indent}  <email>{}</email>", escape(email.as_str()))?;
    }
    writeln!(xml, "{indent}</author>")
}
