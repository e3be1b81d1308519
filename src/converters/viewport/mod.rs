//! Rewrites pixel-unit lengths in a parsed stylesheet into viewport-relative
//! (`vw`) and/or root-relative (`rem`) units.
//!
//! This module provides the main entry point `convert_stylesheet` and the
//! reusable [`PxToViewport`] converter, and organizes the rewriting logic
//! into submodules for clarity and maintainability.
//!
//! # Current Features & Limitations:
//! *   Rewrites bare `<number>px` tokens in declaration values; quoted
//!     strings and `url(...)` payloads pass through untouched.
//! *   Optional preservation of the original pixel declaration and optional
//!     `rem` fallback output, emitted as sibling declarations inserted
//!     before the converted one.
//! *   Selector blacklisting (substring or regex) exempts whole rules.
//! *   Optional rewriting of `@media` parameter strings.
//! *   Values are scanned as opaque text; CSS value syntax, custom
//!     properties and `calc()` expressions are not interpreted.

mod constants;
mod options;
mod props;
mod scanner;
mod selectors;
mod units;

pub use options::{ConversionOptions, SelectorFilter};

use log::debug;

use self::constants::MEDIA_AT_RULE;
use self::props::PropListMatcher;
use self::selectors::SelectorBlacklist;
use self::units::{RootConverter, ViewportConverter};
use crate::errors::{ConvertError, Result};
use crate::models::declaration::Declaration;
use crate::models::stylesheet::{Node, Rule, Stylesheet};

/// A configured, reusable px-to-viewport conversion pass.
///
/// Construction validates the options, compiles the selector blacklist and
/// partitions the property list; after that the converter is immutable and
/// can be applied to any number of independent stylesheet trees.
pub struct PxToViewport {
    options: ConversionOptions,
    viewport: ViewportConverter,
    root: RootConverter,
    prop_matcher: PropListMatcher,
    blacklist: SelectorBlacklist,
}

impl PxToViewport {
    pub fn new(options: ConversionOptions) -> Result<Self> {
        ensure_positive(options.viewport_width, "viewportWidth")?;
        ensure_positive(options.viewport_height, "viewportHeight")?;
        ensure_positive(options.root_value, "rootValue")?;

        let viewport = ViewportConverter::from_options(&options);
        let root = RootConverter::from_options(&options);
        let prop_matcher = PropListMatcher::new(&options.prop_list);
        let blacklist = SelectorBlacklist::new(&options.selector_black_list)?;

        Ok(Self {
            options,
            viewport,
            root,
            prop_matcher,
            blacklist,
        })
    }

    /// Rewrites the stylesheet in place.
    ///
    /// Declarations are visited depth-first in document order; clones
    /// requested during the pass are inserted immediately before the
    /// declaration they were split from. When media-query conversion is
    /// enabled, `@media` parameter strings are rewritten afterwards —
    /// selector blacklisting and rem output do not apply to at-rule params.
    pub fn process(&self, stylesheet: &mut Stylesheet) {
        self.process_nodes(&mut stylesheet.nodes, None);

        if self.options.media_query {
            stylesheet.walk_at_rules_mut(MEDIA_AT_RULE, |at_rule| {
                if at_rule.params.contains("px") {
                    let rewritten = scanner::rewrite_value(&at_rule.params, &self.viewport);
                    debug!("media params '{}' -> '{}'", at_rule.params, rewritten);
                    at_rule.params = rewritten;
                }
            });
        }
    }

    fn process_nodes(&self, nodes: &mut Vec<Node>, selector: Option<&str>) {
        // Insertions are collected during the walk and applied in one batch
        // afterwards, so the node sequence is never grown while it is being
        // iterated.
        let mut pending: Vec<(usize, Vec<Declaration>)> = Vec::new();
        for (index, node) in nodes.iter_mut().enumerate() {
            if let Node::Declaration(declaration) = node {
                let clones = self.rewrite_declaration(declaration, selector);
                if !clones.is_empty() {
                    pending.push((index, clones));
                }
            }
        }
        // Back-to-front so earlier indices stay valid; each batch keeps its
        // own order, placing the clones directly before their declaration.
        for (index, clones) in pending.into_iter().rev() {
            for clone in clones.into_iter().rev() {
                nodes.insert(index, Node::Declaration(clone));
            }
        }

        for node in nodes.iter_mut() {
            match node {
                Node::Rule(Rule { selector, nodes }) => {
                    self.process_nodes(nodes, selector.as_deref());
                }
                Node::AtRule(at_rule) => self.process_nodes(&mut at_rule.nodes, None),
                Node::Declaration(_) => {}
            }
        }
    }

    /// Applies the per-declaration decision tree. Mutates `declaration` in
    /// place and returns the clones to insert before it, in order.
    fn rewrite_declaration(
        &self,
        declaration: &mut Declaration,
        selector: Option<&str>,
    ) -> Vec<Declaration> {
        if !declaration.value.contains("px") {
            return Vec::new();
        }
        if self.blacklist.is_blacklisted(selector) {
            debug!(
                "selector '{}' is blacklisted, leaving '{}' untouched",
                selector.unwrap_or_default(),
                declaration.property
            );
            return Vec::new();
        }

        // Threshold and duplication decisions below all read the
        // pre-conversion value.
        let original = declaration.value.clone();
        let opts = &self.options;
        let mut clones = Vec::new();

        if opts.to_viewport {
            declaration.value = scanner::rewrite_value(&original, &self.viewport);
        }

        if opts.is_save_px
            && opts.to_viewport
            && scanner::has_px_length(&original)
            && declaration.value != original
        {
            clones.push(declaration.clone_with_value(original.clone()));
        }

        if opts.to_rem {
            if opts.to_viewport && self.prop_matcher.permits(&declaration.property) {
                let rem = scanner::rewrite_value(&original, &self.root);
                if rem != original {
                    clones.push(declaration.clone_with_value(rem));
                }
            } else {
                // Properties exempt from duplication (and every property
                // when viewport output is off) take the root-relative value
                // in place, overwriting a viewport rewrite from above.
                declaration.value = scanner::rewrite_value(&original, &self.root);
            }
        }

        if opts.is_save_px
            && !opts.to_viewport
            && scanner::has_px_length(&original)
            && declaration.value != original
        {
            clones.push(declaration.clone_with_value(original.clone()));
        }

        clones
    }
}

/// Converts a stylesheet in one shot with the given options.
///
/// Equivalent to building a [`PxToViewport`] and calling
/// [`process`](PxToViewport::process) once; the tree is mutated in place.
pub fn convert_stylesheet(stylesheet: &mut Stylesheet, options: ConversionOptions) -> Result<()> {
    let converter = PxToViewport::new(options)?;
    converter.process(stylesheet);
    Ok(())
}

fn ensure_positive(value: f64, name: &str) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConvertError::InvalidInput(format!(
            "{} must be positive, got {}",
            name, value
        )))
    }
}
