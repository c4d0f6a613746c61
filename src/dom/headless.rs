//! In-memory document tree for native tests
//!
//! A minimal arena-backed stand-in for the browser DOM, enough for the
//! relocation engine: elements with tag / id / classes / attributes,
//! parent-child links, and the three simple selector forms the engine's
//! directives use in practice (`#id`, `.class`, `tag`).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::dom::DomAdapter;

/// Handle to a node in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Default)]
struct NodeData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: HashMap<String, String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed document. Cloning the handle shares the same tree.
#[derive(Clone)]
pub struct HeadlessDom {
    arena: Rc<RefCell<Vec<NodeData>>>,
}

impl HeadlessDom {
    /// Create a document with a single `body` root at index 0.
    pub fn new() -> Self {
        let root = NodeData {
            tag: "body".to_string(),
            ..NodeData::default()
        };
        Self {
            arena: Rc::new(RefCell::new(vec![root])),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Create a detached element.
    pub fn create_element(&self, tag: &str) -> NodeId {
        let mut arena = self.arena.borrow_mut();
        arena.push(NodeData {
            tag: tag.to_string(),
            ..NodeData::default()
        });
        NodeId(arena.len() - 1)
    }

    /// Create an element and append it to `parent`.
    pub fn element_in(&self, parent: NodeId, tag: &str) -> NodeId {
        let node = self.create_element(tag);
        self.append_child(&parent, &node);
        node
    }

    pub fn set_id(&self, node: NodeId, id: &str) {
        self.arena.borrow_mut()[node.0].id = Some(id.to_string());
    }

    pub fn set_attribute(&self, node: NodeId, name: &str, value: &str) {
        self.arena.borrow_mut()[node.0]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    pub fn set_class(&self, node: NodeId, class: &str) {
        self.add_class(&node, class);
    }

    /// Element children in order, for test assertions.
    pub fn children_of(&self, parent: NodeId) -> Vec<NodeId> {
        self.arena.borrow()[parent.0].children.clone()
    }

    pub fn tag_of(&self, node: NodeId) -> String {
        self.arena.borrow()[node.0].tag.clone()
    }

    /// Depth-first walk in document order, root included. The visitor
    /// returns `false` to stop early.
    fn walk(&self, mut visit: impl FnMut(NodeId, &NodeData) -> bool) {
        let arena = self.arena.borrow();
        let mut stack = vec![NodeId(0)];
        while let Some(node) = stack.pop() {
            let data = &arena[node.0];
            if !visit(node, data) {
                return;
            }
            // Push in reverse so children are visited in document order.
            for child in data.children.iter().rev() {
                stack.push(*child);
            }
        }
    }

    fn matches(data: &NodeData, selector: &str) -> bool {
        if let Some(id) = selector.strip_prefix('#') {
            data.id.as_deref() == Some(id)
        } else if let Some(class) = selector.strip_prefix('.') {
            data.classes.iter().any(|c| c == class)
        } else {
            data.tag == selector
        }
    }

    fn detach(arena: &mut [NodeData], child: NodeId) {
        if let Some(parent) = arena[child.0].parent.take() {
            arena[parent.0].children.retain(|c| *c != child);
        }
    }
}

impl Default for HeadlessDom {
    fn default() -> Self {
        Self::new()
    }
}

impl DomAdapter for HeadlessDom {
    type Node = NodeId;

    fn elements_with_attribute(&self, name: &str) -> Vec<NodeId> {
        let mut result = Vec::new();
        self.walk(|node, data| {
            if data.attrs.contains_key(name) {
                result.push(node);
            }
            true
        });
        result
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.arena.borrow()[node.0].attrs.get(name).cloned()
    }

    fn query_selector(&self, selector: &str) -> Option<NodeId> {
        let selector = selector.trim();
        if selector.is_empty() {
            return None;
        }
        let mut found = None;
        self.walk(|node, data| {
            if Self::matches(data, selector) {
                found = Some(node);
                return false;
            }
            true
        });
        found
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.arena.borrow()[node.0].parent
    }

    fn child_count(&self, parent: &NodeId) -> usize {
        self.arena.borrow()[parent.0].children.len()
    }

    fn child_at(&self, parent: &NodeId, index: usize) -> Option<NodeId> {
        self.arena.borrow()[parent.0].children.get(index).copied()
    }

    fn index_in_parent(&self, parent: &NodeId, child: &NodeId) -> Option<usize> {
        self.arena.borrow()[parent.0]
            .children
            .iter()
            .position(|c| c == child)
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) {
        let mut arena = self.arena.borrow_mut();
        Self::detach(&mut arena, *child);
        arena[parent.0].children.push(*child);
        arena[child.0].parent = Some(*parent);
    }

    fn prepend_child(&self, parent: &NodeId, child: &NodeId) {
        let mut arena = self.arena.borrow_mut();
        Self::detach(&mut arena, *child);
        arena[parent.0].children.insert(0, *child);
        arena[child.0].parent = Some(*parent);
    }

    fn insert_before(&self, parent: &NodeId, child: &NodeId, reference: &NodeId) {
        let mut arena = self.arena.borrow_mut();
        Self::detach(&mut arena, *child);
        let position = arena[parent.0]
            .children
            .iter()
            .position(|c| c == reference)
            .unwrap_or(arena[parent.0].children.len());
        arena[parent.0].children.insert(position, *child);
        arena[child.0].parent = Some(*parent);
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        let mut arena = self.arena.borrow_mut();
        let classes = &mut arena[node.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        self.arena.borrow_mut()[node.0].classes.retain(|c| c != class);
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.arena.borrow()[node.0].classes.iter().any(|c| c == class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_selector_document_order() {
        let dom = HeadlessDom::new();
        let first = dom.element_in(dom.root(), "div");
        dom.set_class(first, "hit");
        let nested = dom.element_in(first, "span");
        dom.set_class(nested, "hit");

        assert_eq!(dom.query_selector(".hit"), Some(first));
        assert_eq!(dom.query_selector("span"), Some(nested));
        assert_eq!(dom.query_selector("#missing"), None);
        assert_eq!(dom.query_selector(""), None);
    }

    #[test]
    fn test_append_detaches_from_old_parent() {
        let dom = HeadlessDom::new();
        let a = dom.element_in(dom.root(), "div");
        let b = dom.element_in(dom.root(), "div");
        let child = dom.element_in(a, "span");

        dom.append_child(&b, &child);

        assert_eq!(dom.children_of(a), vec![]);
        assert_eq!(dom.children_of(b), vec![child]);
        assert_eq!(dom.parent(&child), Some(b));
    }

    #[test]
    fn test_insert_before_missing_reference_appends() {
        let dom = HeadlessDom::new();
        let a = dom.element_in(dom.root(), "div");
        let x = dom.element_in(a, "span");
        let detached = dom.create_element("i");
        let newcomer = dom.create_element("b");

        dom.insert_before(&a, &newcomer, &detached);

        assert_eq!(dom.children_of(a), vec![x, newcomer]);
    }

    #[test]
    fn test_class_list() {
        let dom = HeadlessDom::new();
        let node = dom.element_in(dom.root(), "div");

        dom.add_class(&node, "x");
        dom.add_class(&node, "x");
        assert!(dom.has_class(&node, "x"));

        dom.remove_class(&node, "x");
        assert!(!dom.has_class(&node, "x"));
    }
}
