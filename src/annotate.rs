//! Reference annotators.
//!
//! Composition wrappers around the host's resolvers: each annotator calls
//! through to the wrapped resolver and post-processes only the success
//! case, attaching hover metadata when the configuration enables it.
//!
//! | Wrapper                              | Reference category       | Annotated when                                   |
//! |--------------------------------------|--------------------------|--------------------------------------------------|
//! | [`StandardAnnotator::resolve_named`] | named/section references | `hoverxref` role, or any with `hoverxref_auto_ref` |
//! | [`StandardAnnotator::resolve_object`]| object-type references   | role listed in `hoverxref_roles`                 |
//! | [`DomainAnnotator::resolve`]         | code API references      | domain listed in `hoverxref_domains`             |
//!
//! Annotation additionally requires both `hoverxref_project` and
//! `hoverxref_version` to be configured. Everything else resolves exactly
//! as it would without the wrapper.

use crate::{
    config::HoverxrefConfig,
    log,
    node::{HOVERXREF_ROLE, LinkNode, Metadata},
    resolve::{CodeDomain, ObjectScope, RefContext, Resolution, StandardResolver},
};

// ============================================================================
// Standard domain
// ============================================================================

/// Annotates named and object-type references resolved by the standard
/// domain.
pub struct StandardAnnotator<'c, R> {
    config: &'c HoverxrefConfig,
    resolver: R,
}

impl<'c, R: StandardResolver> StandardAnnotator<'c, R> {
    pub fn new(config: &'c HoverxrefConfig, resolver: R) -> Self {
        Self { config, resolver }
    }

    /// Resolve a named (label/section) reference and annotate the result.
    ///
    /// The `hoverxref` role always requests annotation; with
    /// `hoverxref_auto_ref` every named reference does.
    ///
    /// | Condition                                   | Outcome                  |
    /// |---------------------------------------------|--------------------------|
    /// | resolution misses                           | `None`                   |
    /// | target in `hoverxref_ignore_refs`           | link unmodified, info log |
    /// | `hoverxref` role while unconfigured         | link unmodified, warning |
    /// | configured, `hoverxref` role or auto mode   | metadata attached        |
    /// | anything else                               | link unmodified          |
    pub fn resolve_named(
        &self,
        ctx: &RefContext<'_>,
        role: &str,
        target: &str,
    ) -> Option<LinkNode> {
        let Resolution { mut node, matched } = self.resolver.resolve_named(ctx, role, target)?;

        if self.config.is_ignored(target) {
            log!("annotate"; "ignoring reference in hoverxref_ignore_refs. target={target}");
            return Some(node);
        }

        let configured = self.config.is_configured();
        if !configured && role == HOVERXREF_ROLE {
            log!("warn"; "hoverxref role is not fully configured. Set hoverxref_project and hoverxref_version");
        }

        if configured
            && (self.config.hoverxref_auto_ref || role == HOVERXREF_ROLE)
            && let Some(matched) = matched
        {
            inject(self.config, &mut node, &matched.docname, &matched.labelid);
            log!("annotate"; ":{role}: metadata injected. fromdoc={} target={target}", ctx.fromdoc);
        }

        Some(node)
    }

    /// Resolve a reference made through an object-type role and annotate it
    /// when the role is listed in `hoverxref_roles`.
    ///
    /// The ignore list does not apply here: excluding an object role is done
    /// by leaving it out of `hoverxref_roles` altogether.
    pub fn resolve_object(
        &self,
        ctx: &RefContext<'_>,
        role: &str,
        target: &str,
    ) -> Option<LinkNode> {
        let Resolution { mut node, matched } = self.resolver.resolve_object(ctx, role, target)?;

        if self.config.hoverxref_roles.contains(role)
            && self.config.is_configured()
            && let Some(matched) = matched
        {
            inject(self.config, &mut node, &matched.docname, &matched.labelid);
            log!("annotate"; ":{role}: metadata injected. fromdoc={} target={target}", ctx.fromdoc);
        }

        Some(node)
    }
}

// ============================================================================
// Code API domains
// ============================================================================

/// Annotates references resolved by one code API domain (module/class
/// scoped objects, e.g. the `py` domain).
pub struct DomainAnnotator<'c, D> {
    config: &'c HoverxrefConfig,
    domain: D,
}

impl<'c, D: CodeDomain> DomainAnnotator<'c, D> {
    pub fn new(config: &'c HoverxrefConfig, domain: D) -> Self {
        Self { config, domain }
    }

    /// Resolve a code API reference through the wrapped domain and annotate
    /// the result.
    ///
    /// A domain missing from `hoverxref_domains` resolves untouched, as if
    /// it were not wrapped at all. For an enabled domain the lookup the
    /// resolver already performed is repeated through
    /// [`CodeDomain::find_object`] to recover the document and fully
    /// qualified name of the best match.
    pub fn resolve(
        &self,
        ctx: &RefContext<'_>,
        scope: &ObjectScope<'_>,
        role: &str,
        target: &str,
    ) -> Option<LinkNode> {
        let mut node = self.domain.resolve(ctx, scope, role, target)?;

        if !self.config.hoverxref_domains.contains(self.domain.name()) {
            return Some(node);
        }

        if self.config.is_ignored(target) {
            log!("annotate"; "ignoring reference in hoverxref_ignore_refs. target={target}");
            return Some(node);
        }

        if self.config.is_configured()
            && let Some(matched) = self
                .domain
                .find_object(scope, role, target)
                .into_iter()
                .next()
        {
            inject(self.config, &mut node, &matched.docname, &matched.name);
            log!("annotate"; ":{role}: metadata injected. fromdoc={} name={}", ctx.fromdoc, matched.name);
        }

        Some(node)
    }
}

// ============================================================================
// Injection
// ============================================================================

/// Attach the metadata record and the `hoverxref` class marker.
///
/// The record is built whole: a link either carries all four fields or none.
fn inject(config: &HoverxrefConfig, node: &mut LinkNode, docname: &str, labelid: &str) {
    node.annotate(Metadata {
        project: config.hoverxref_project.clone(),
        version: config.hoverxref_version.clone(),
        doc: docname.to_owned(),
        section: labelid.to_owned(),
    });
}

// ============================================================================
// Tests
// ============================================================================
