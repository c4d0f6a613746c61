//! DOM abstraction layer
//!
//! The engine never touches `web_sys` directly; it goes through the
//! [`DomAdapter`] trait so the same code runs against the live browser
//! document ([`WebDom`]) and against an in-memory tree in native tests
//! ([`HeadlessDom`]).

pub mod headless;
pub mod web;

pub use headless::{HeadlessDom, NodeId};
pub use web::WebDom;

/// Handle-based view of a document tree.
///
/// Node handles are cheap to clone and compare by identity. All mutating
/// operations are total: implementations swallow host-side failures, so
/// callers never observe an error (stale inputs degrade to defined
/// fallbacks at the engine level instead).
pub trait DomAdapter {
    type Node: Clone + PartialEq;

    /// All elements carrying the given attribute, in document order.
    fn elements_with_attribute(&self, name: &str) -> Vec<Self::Node>;

    /// The attribute's value on a node, if present.
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// First element matching a selector, document order. Malformed
    /// selectors resolve to `None`.
    fn query_selector(&self, selector: &str) -> Option<Self::Node>;

    /// The node's parent element, if any.
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Number of element children.
    fn child_count(&self, parent: &Self::Node) -> usize;

    /// Element child at the given position.
    fn child_at(&self, parent: &Self::Node, index: usize) -> Option<Self::Node>;

    /// Position of `child` among `parent`'s element children.
    fn index_in_parent(&self, parent: &Self::Node, child: &Self::Node) -> Option<usize>;

    /// Move `child` to be `parent`'s last child.
    fn append_child(&self, parent: &Self::Node, child: &Self::Node);

    /// Move `child` to be `parent`'s first child.
    fn prepend_child(&self, parent: &Self::Node, child: &Self::Node);

    /// Move `child` immediately before `reference` under `parent`. If
    /// `reference` is no longer a child of `parent`, appends instead.
    fn insert_before(&self, parent: &Self::Node, child: &Self::Node, reference: &Self::Node);

    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
}
