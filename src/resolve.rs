//! Seams between the annotators and the host resolution machinery.
//!
//! The host implements these traits on adapters over its real resolvers.
//! The annotators call through them unconditionally and post-process only
//! the success case, so a miss behaves exactly as it would without
//! annotation.

use crate::node::LinkNode;

/// Where a reference occurs.
#[derive(Debug, Clone, Copy)]
pub struct RefContext<'a> {
    /// Document the reference appears in.
    pub fromdoc: &'a str,
}

/// Registry data behind a resolved standard reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefMatch {
    /// Document the target lives in.
    pub docname: String,
    /// Label id of the target section or object.
    pub labelid: String,
}

/// A successful resolution: the built link plus the match that produced it.
///
/// `matched` may be `None` when the resolver built a link without exposing
/// its registry data; such links pass through unannotated.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub node: LinkNode,
    pub matched: Option<RefMatch>,
}

/// Module/class scoping of a code API lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectScope<'a> {
    /// Enclosing module of the reference site, if any.
    pub module: Option<&'a str>,
    /// Enclosing class of the reference site, if any.
    pub class: Option<&'a str>,
    /// The reference asked for specific (scoped-first) lookup.
    pub specific: bool,
}

/// One candidate returned by a code API domain lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectMatch {
    /// Fully qualified object name; becomes the section id.
    pub name: String,
    /// Document the object is declared in.
    pub docname: String,
}

/// Resolver for the standard domain: named references and object-type
/// references.
pub trait StandardResolver {
    /// Resolve a named (label/section) reference, e.g. a `ref` role.
    fn resolve_named(&self, ctx: &RefContext<'_>, role: &str, target: &str) -> Option<Resolution>;

    /// Resolve a reference through an object-type role, e.g. `confval`.
    fn resolve_object(&self, ctx: &RefContext<'_>, role: &str, target: &str) -> Option<Resolution>;
}

/// Resolver for one code API domain (module/class scoped objects).
pub trait CodeDomain {
    /// Domain name as listed in `hoverxref_domains` (e.g. `py`).
    fn name(&self) -> &str;

    /// Resolve a cross-reference to an API object.
    fn resolve(
        &self,
        ctx: &RefContext<'_>,
        scope: &ObjectScope<'_>,
        role: &str,
        target: &str,
    ) -> Option<LinkNode>;

    /// Look up candidate objects the way [`resolve`](Self::resolve) does,
    /// best match first.
    fn find_object(&self, scope: &ObjectScope<'_>, role: &str, target: &str) -> Vec<ObjectMatch>;
}
