//! Node registry
//!
//! Scans the document for directive-bearing elements, resolves their
//! targets, and produces the sorted descriptor list the grouper
//! partitions. Directives whose target does not resolve are dropped
//! silently; the document is treated as static for this purpose.

use crate::dom::DomAdapter;
use crate::models::{MediaMode, RelocationDescriptor, DIRECTIVE_ATTR};
use crate::parse::parse_directive;

/// Build the full descriptor list from a one-time document scan, sorted
/// for deterministic apply order.
pub fn scan<D: DomAdapter>(dom: &D, mode: MediaMode) -> Vec<RelocationDescriptor<D::Node>> {
    let mut descriptors = Vec::new();

    for element in dom.elements_with_attribute(DIRECTIVE_ATTR) {
        let raw = match dom.attribute(&element, DIRECTIVE_ATTR) {
            Some(raw) => raw,
            None => continue,
        };
        let directive = match parse_directive(&raw) {
            Some(directive) => directive,
            None => continue,
        };
        // Inert directive: no such target in the document.
        let target = match dom.query_selector(&directive.target_selector) {
            Some(target) => target,
            None => continue,
        };
        let source_parent = match dom.parent(&element) {
            Some(parent) => parent,
            None => continue,
        };
        descriptors.push(RelocationDescriptor::new(
            source_parent,
            element,
            target,
            &directive,
        ));
    }

    log::debug!("registered {} relocation descriptors", descriptors.len());
    sort_descriptors(&mut descriptors, mode);
    descriptors
}

/// Sort descriptors by breakpoint (ascending for `min` mode, descending
/// for `max`), then among equal breakpoints by order token edge rank:
/// `first` before everything, `last` after everything, numeric indices
/// equal-ranked. The sort is stable, so document order breaks ties.
pub fn sort_descriptors<N>(descriptors: &mut [RelocationDescriptor<N>], mode: MediaMode) {
    descriptors.sort_by(|a, b| {
        let by_breakpoint = match mode {
            MediaMode::Min => a.breakpoint.cmp(&b.breakpoint),
            MediaMode::Max => b.breakpoint.cmp(&a.breakpoint),
        };
        by_breakpoint.then(a.order.sort_rank().cmp(&b.order.sort_rank()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::HeadlessDom;
    use crate::models::Order;

    fn dom_with_directives(directives: &[&str]) -> HeadlessDom {
        let dom = HeadlessDom::new();
        let target = dom.element_in(dom.root(), "aside");
        dom.set_class(target, "target");
        let source = dom.element_in(dom.root(), "main");
        for directive in directives {
            let element = dom.element_in(source, "div");
            dom.set_attribute(element, DIRECTIVE_ATTR, directive);
        }
        dom
    }

    #[test]
    fn test_scan_applies_defaults() {
        let dom = dom_with_directives(&[".target"]);
        let descriptors = scan(&dom, MediaMode::Max);

        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].breakpoint, 767);
        assert_eq!(descriptors[0].order, Order::Last);
        assert_eq!(descriptors[0].original_index, None);
    }

    #[test]
    fn test_scan_drops_missing_target() {
        let dom = dom_with_directives(&[".target", ".nowhere, 992"]);
        let descriptors = scan(&dom, MediaMode::Max);

        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].breakpoint, 767);
    }

    #[test]
    fn test_scan_captures_source_parent() {
        let dom = dom_with_directives(&[".target"]);
        let source = dom.query_selector("main").unwrap();
        let descriptors = scan(&dom, MediaMode::Max);

        assert_eq!(descriptors[0].source_parent, source);
    }

    #[test]
    fn test_sort_max_mode_descends_by_breakpoint() {
        let dom = dom_with_directives(&[".target, 480", ".target, 992", ".target, 767"]);
        let descriptors = scan(&dom, MediaMode::Max);

        let breakpoints: Vec<u32> = descriptors.iter().map(|d| d.breakpoint).collect();
        assert_eq!(breakpoints, vec![992, 767, 480]);
    }

    #[test]
    fn test_sort_min_mode_ascends_by_breakpoint() {
        let dom = dom_with_directives(&[".target, 992", ".target, 480"]);
        let descriptors = scan(&dom, MediaMode::Min);

        let breakpoints: Vec<u32> = descriptors.iter().map(|d| d.breakpoint).collect();
        assert_eq!(breakpoints, vec![480, 992]);
    }

    #[test]
    fn test_sort_orders_edges_within_breakpoint() {
        let dom = dom_with_directives(&[
            ".target, 767, last",
            ".target, 767, 0",
            ".target, 767, first",
        ]);
        let descriptors = scan(&dom, MediaMode::Max);

        let orders: Vec<Order> = descriptors.iter().map(|d| d.order).collect();
        assert_eq!(orders, vec![Order::First, Order::Index(0), Order::Last]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_indices() {
        let dom = dom_with_directives(&[".target, 767, 2", ".target, 767, 1"]);
        let descriptors = scan(&dom, MediaMode::Max);

        // Index tokens are equal-ranked; document order is preserved.
        let orders: Vec<Order> = descriptors.iter().map(|d| d.order).collect();
        assert_eq!(orders, vec![Order::Index(2), Order::Index(1)]);
    }
}
