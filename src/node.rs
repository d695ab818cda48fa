//! Link nodes and the hover metadata attached to them.
//!
//! A [`LinkNode`] is the resolved hyperlink the host pipeline produced. The
//! annotators may do exactly two things to it: replace its class list with
//! the [`HOVERXREF_CLASS`] marker and attach a whole [`Metadata`] record.
//! The reference target itself is sealed behind an accessor and never
//! changes after construction.

/// CSS class marking an annotated link for the client script.
pub const HOVERXREF_CLASS: &str = "hoverxref";

/// Name of the explicit hover role handled by the standard annotator.
pub const HOVERXREF_ROLE: &str = "hoverxref";

/// Names of the `data-*` attributes rendered into the final markup.
pub mod attr {
    pub const PROJECT: &str = "data-project";
    pub const VERSION: &str = "data-version";
    pub const DOC: &str = "data-doc";
    pub const SECTION: &str = "data-section";
    /// Written by the rendering stage, never by the annotators.
    pub const DOCPATH: &str = "data-docpath";
}

/// Preview metadata for one annotated link.
///
/// Built whole and attached in one step; a link never carries a partial
/// record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// Project slug for the preview endpoint.
    pub project: String,
    /// Version slug for the preview endpoint.
    pub version: String,
    /// Document the reference points into.
    pub doc: String,
    /// Section or object id inside that document.
    pub section: String,
}

/// A resolved cross-reference hyperlink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkNode {
    href: String,
    text: String,
    classes: Vec<String>,
    title: Option<String>,
    metadata: Option<Metadata>,
}

impl LinkNode {
    /// Create a plain, unannotated link.
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
            classes: Vec::new(),
            title: None,
            metadata: None,
        }
    }

    /// Set the `title` attribute (code API links carry the qualified name).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set host-provided CSS classes. Annotation replaces them.
    pub fn with_classes(mut self, classes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.classes = classes.into_iter().map(Into::into).collect();
        self
    }

    /// Reference target. There is no setter: annotation never rewrites it.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Display text of the link.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Optional `title` attribute.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// CSS classes currently on the node.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Attached preview metadata, if any.
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// Whether this link carries hover metadata.
    pub fn is_annotated(&self) -> bool {
        self.metadata.is_some()
    }

    /// Mark the node with [`HOVERXREF_CLASS`] and attach its record.
    pub(crate) fn annotate(&mut self, metadata: Metadata) {
        self.classes = vec![HOVERXREF_CLASS.to_owned()];
        self.metadata = Some(metadata);
    }
}
