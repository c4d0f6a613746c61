//! Relocation primitives
//!
//! `move_to` and `move_back` are total: stale indices and shifted
//! siblings degrade to append-at-end, never to an error.

use crate::dom::DomAdapter;
use crate::models::{Order, RelocationDescriptor, RELOCATED_CLASS};

/// Move the descriptor's element into its target container.
///
/// Records the element's index among its current siblings before moving,
/// and sets the relocated marker class. Insertion position follows the
/// descriptor's order token; numeric indices at or past the target's
/// child count append instead.
pub fn move_to<D: DomAdapter>(dom: &D, descriptor: &mut RelocationDescriptor<D::Node>) {
    descriptor.original_index = dom
        .parent(&descriptor.element)
        .and_then(|parent| dom.index_in_parent(&parent, &descriptor.element));
    dom.add_class(&descriptor.element, RELOCATED_CLASS);

    let child_count = dom.child_count(&descriptor.target);
    match descriptor.order {
        Order::Last => dom.append_child(&descriptor.target, &descriptor.element),
        Order::Index(index) if index >= child_count => {
            dom.append_child(&descriptor.target, &descriptor.element)
        }
        Order::First => dom.prepend_child(&descriptor.target, &descriptor.element),
        Order::Index(index) => match dom.child_at(&descriptor.target, index) {
            Some(reference) => {
                dom.insert_before(&descriptor.target, &descriptor.element, &reference)
            }
            None => dom.append_child(&descriptor.target, &descriptor.element),
        },
    }
}

/// Move the descriptor's element back under its source parent.
///
/// Clears the relocated marker class, then reinserts the element at its
/// recorded index if the source parent still has a child there; otherwise
/// appends (siblings shifted or the index is stale).
pub fn move_back<D: DomAdapter>(dom: &D, descriptor: &mut RelocationDescriptor<D::Node>) {
    dom.remove_class(&descriptor.element, RELOCATED_CLASS);

    let anchor = descriptor
        .original_index
        .and_then(|index| dom.child_at(&descriptor.source_parent, index));
    match anchor {
        Some(reference) => {
            dom.insert_before(&descriptor.source_parent, &descriptor.element, &reference)
        }
        None => dom.append_child(&descriptor.source_parent, &descriptor.element),
    }
}
