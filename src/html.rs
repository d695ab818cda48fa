//! Final anchor markup for resolved links.
//!
//! The annotators only attach metadata; turning a [`LinkNode`] into its
//! `<a>` tag happens here, in the shape the client script expects:
//! attributes in alphabetical order, host classes followed by the framework
//! link classes, and `data-docpath` computed from the host's target URIs.

use crate::node::{LinkNode, attr};
use anyhow::Result;
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io::Cursor;

/// Writer used for link markup.
pub type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Framework classes every rendered reference link carries.
const LINK_CLASSES: [&str; 2] = ["reference", "internal"];

/// Maps a document id to the URI of its rendered page.
///
/// Implemented by the host builder; closures work too:
/// `|docname: &str| format!("{docname}.html")`.
pub trait DocUris {
    fn target_uri(&self, docname: &str) -> String;
}

impl<F> DocUris for F
where
    F: Fn(&str) -> String,
{
    fn target_uri(&self, docname: &str) -> String {
        self(docname)
    }
}

/// Write a link as an `<a>` element.
///
/// Attribute order is alphabetical, so annotated links always render as
/// `class`, `data-doc`, `data-docpath`, `data-project`, `data-section`,
/// `data-version`, `href`, `title`.
pub fn write_link(writer: &mut XmlWriter, node: &LinkNode, uris: &impl DocUris) -> Result<()> {
    let mut attrs: Vec<(&str, String)> = Vec::with_capacity(8);

    let classes: Vec<&str> = node
        .classes()
        .iter()
        .map(String::as_str)
        .chain(LINK_CLASSES)
        .collect();
    attrs.push(("class", classes.join(" ")));

    if let Some(metadata) = node.metadata() {
        attrs.push((attr::DOC, metadata.doc.clone()));
        attrs.push((attr::DOCPATH, docpath(uris, &metadata.doc)));
        attrs.push((attr::PROJECT, metadata.project.clone()));
        attrs.push((attr::SECTION, metadata.section.clone()));
        attrs.push((attr::VERSION, metadata.version.clone()));
    }
    attrs.push(("href", node.href().to_owned()));
    if let Some(title) = node.title() {
        attrs.push(("title", title.to_owned()));
    }
    attrs.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut elem = BytesStart::new("a");
    for (key, value) in &attrs {
        elem.push_attribute((*key, value.as_str()));
    }

    writer.write_event(Event::Start(elem))?;
    writer.write_event(Event::Text(BytesText::new(node.text())))?;
    writer.write_event(Event::End(BytesEnd::new("a")))?;
    Ok(())
}

/// Render a link to an owned markup string.
pub fn render_link(node: &LinkNode, uris: &impl DocUris) -> Result<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    write_link(&mut writer, node, uris)?;
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

/// Output path of a document, always with a leading `/`.
fn docpath(uris: &impl DocUris, docname: &str) -> String {
    let uri = uris.target_uri(docname);
    if uri.starts_with('/') {
        uri
    } else {
        format!("/{uri}")
    }
}
