//! Condition watcher
//!
//! One state machine per breakpoint group, driven by boolean match
//! notifications from the host's media-query mechanism (or a simulated
//! viewport in tests). Handlers run to completion on the single UI
//! thread; groups never interleave.

use crate::dom::DomAdapter;
use crate::engine::grouper::BreakpointGroup;
use crate::engine::mover;
use crate::models::RELOCATED_CLASS;

/// Apply or revert one group's relocations.
///
/// Apply walks the descriptors in stored order and moves each to its
/// target. Revert walks the (reversed) list and moves back only the
/// elements still carrying the relocated marker class, so a repeated
/// notification in the same state cannot double-move anything. Both
/// branches reverse the list afterwards; across toggles this makes the
/// last element applied the first one reverted.
pub fn on_change<D: DomAdapter>(dom: &D, group: &mut BreakpointGroup<D::Node>, matches: bool) {
    if matches {
        log::debug!(
            "applying {} relocations for {}",
            group.descriptors.len(),
            group.query.css()
        );
        for descriptor in group.descriptors.iter_mut() {
            mover::move_to(dom, descriptor);
        }
    } else {
        log::debug!(
            "reverting relocations for {}",
            group.query.css()
        );
        for descriptor in group.descriptors.iter_mut() {
            if dom.has_class(&descriptor.element, RELOCATED_CLASS) {
                mover::move_back(dom, descriptor);
            }
        }
    }

    group.descriptors.reverse();
}
