//! Hover-preview metadata for documentation cross-references.
//!
//! This crate decorates resolved cross-reference links with the attributes
//! a client-side script needs to fetch and show preview tooltips: the
//! `hoverxref` class plus `data-project`, `data-version`, `data-doc` and
//! `data-section`. Resolution itself stays in the host pipeline; the
//! annotators here wrap its resolvers and post-process successful results.
//!
//! # Reference categories
//!
//! | Category                 | Entry point                          | Annotated when                                     |
//! |--------------------------|--------------------------------------|----------------------------------------------------|
//! | named/section references | [`StandardAnnotator::resolve_named`] | `hoverxref` role, or any with `hoverxref_auto_ref` |
//! | object-type references   | [`StandardAnnotator::resolve_object`]| role listed in `hoverxref_roles`                   |
//! | code API references      | [`DomainAnnotator::resolve`]         | domain listed in `hoverxref_domains`               |
//!
//! Annotation only happens while both `hoverxref_project` and
//! `hoverxref_version` are configured; everything else passes through
//! untouched, and a resolution miss stays a miss.
//!
//! # Example
//!
//! ```ignore
//! let mut config = HoverxrefConfig::from_path(Path::new("conf.toml"))?;
//! config.update_with_env();
//!
//! let annotator = StandardAnnotator::new(&config, registry);
//! let ctx = RefContext { fromdoc: "index" };
//! if let Some(link) = annotator.resolve_named(&ctx, "hoverxref", "section-i") {
//!     let markup = render_link(&link, &uris)?;
//! }
//! ```

pub mod annotate;
pub mod config;
pub mod html;
pub mod logger;
pub mod node;
pub mod resolve;

pub use annotate::{DomainAnnotator, StandardAnnotator};
pub use config::{ConfigError, HoverxrefConfig};
pub use html::{DocUris, XmlWriter, render_link, write_link};
pub use node::{HOVERXREF_CLASS, HOVERXREF_ROLE, LinkNode, Metadata};
pub use resolve::{
    CodeDomain, ObjectMatch, ObjectScope, RefContext, RefMatch, Resolution, StandardResolver,
};
