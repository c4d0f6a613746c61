//! Relocation directives and descriptors

use serde::{Deserialize, Serialize};

use crate::models::media::DEFAULT_BREAKPOINT;
use crate::models::order::Order;

/// Parsed value of a `data-da` attribute, before any DOM resolution.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Directive {
    /// Selector for the destination container, resolved at scan time.
    pub target_selector: String,
    /// Pixel threshold at which relocation state flips.
    pub breakpoint: u32,
    /// Insertion position inside the target.
    pub order: Order,
}

impl Directive {
    pub fn new(target_selector: impl Into<String>) -> Self {
        Self {
            target_selector: target_selector.into(),
            breakpoint: DEFAULT_BREAKPOINT,
            order: Order::Last,
        }
    }
}

/// One relocatable element, bound to concrete DOM handles.
///
/// `N` is the node handle of the `DomAdapter` in use (`web_sys::Element`
/// in the browser, an arena id in native tests). The element, its source
/// parent, and its target are all captured once at scan time and never
/// re-derived from the live tree.
#[derive(Clone, Debug)]
pub struct RelocationDescriptor<N> {
    /// Original parent, kept for restoration.
    pub source_parent: N,
    /// The node being relocated. Identity is stable; never copied.
    pub element: N,
    /// Destination container.
    pub target: N,
    pub breakpoint: u32,
    pub order: Order,
    /// Index among the element's siblings at the moment it was last
    /// moved. Meaningful only while the element carries the relocated
    /// marker class; recomputed on every move, stale after a move back.
    pub original_index: Option<usize>,
}

impl<N> RelocationDescriptor<N> {
    pub fn new(source_parent: N, element: N, target: N, directive: &Directive) -> Self {
        Self {
            source_parent,
            element,
            target,
            breakpoint: directive.breakpoint,
            order: directive.order,
            original_index: None,
        }
    }
}
