//! `DomAdapter` over the live browser document
//!
//! Node handles are `web_sys::Element`s, which compare by JS reference
//! identity. Host-side failures (hierarchy errors, malformed selectors)
//! are swallowed: the engine's contract has no error surface.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::dom::DomAdapter;

/// Adapter over a `web_sys::Document`.
pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl DomAdapter for WebDom {
    type Node = Element;

    fn elements_with_attribute(&self, name: &str) -> Vec<Element> {
        let mut result = Vec::new();
        if let Ok(list) = self.document.query_selector_all(&format!("[{}]", name)) {
            for i in 0..list.length() {
                if let Some(element) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                    result.push(element);
                }
            }
        }
        result
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn query_selector(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn child_count(&self, parent: &Element) -> usize {
        parent.child_element_count() as usize
    }

    fn child_at(&self, parent: &Element, index: usize) -> Option<Element> {
        parent.children().item(index as u32)
    }

    fn index_in_parent(&self, parent: &Element, child: &Element) -> Option<usize> {
        let children = parent.children();
        (0..children.length()).find_map(|i| {
            children
                .item(i)
                .filter(|candidate| candidate == child)
                .map(|_| i as usize)
        })
    }

    fn append_child(&self, parent: &Element, child: &Element) {
        let _ = parent.append_child(child);
    }

    fn prepend_child(&self, parent: &Element, child: &Element) {
        let _ = parent.insert_before(child, parent.first_child().as_ref());
    }

    fn insert_before(&self, parent: &Element, child: &Element, reference: &Element) {
        let _ = parent.insert_before(child, Some(reference));
    }

    fn add_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().add_1(class);
    }

    fn remove_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().remove_1(class);
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }
}
