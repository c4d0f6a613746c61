//! Parser for the `data-da` directive value
//!
//! Format: `<target-selector>[, <breakpoint-px>[, <order>]]`
//!
//! Parsing is deliberately permissive: malformed breakpoint or order
//! tokens degrade to their defaults (767 / `last`) rather than failing.
//! Only a missing target selector makes the directive inert.

use crate::models::{Directive, Order, DEFAULT_BREAKPOINT};

/// Parse a raw attribute value into a [`Directive`].
///
/// Returns `None` when the target selector field is empty; such a
/// directive can never resolve and is dropped by the registry.
pub fn parse_directive(raw: &str) -> Option<Directive> {
    let mut fields = raw.split(',').map(str::trim);

    let target_selector = fields.next().filter(|s| !s.is_empty())?;

    let breakpoint = fields
        .next()
        .and_then(|token| token.parse::<u32>().ok())
        .unwrap_or(DEFAULT_BREAKPOINT);

    let order = fields.next().map(Order::parse).unwrap_or_default();

    Some(Directive {
        target_selector: target_selector.to_string(),
        breakpoint,
        order,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_only_applies_defaults() {
        let d = parse_directive(".target").unwrap();
        assert_eq!(d.target_selector, ".target");
        assert_eq!(d.breakpoint, 767);
        assert_eq!(d.order, Order::Last);
    }

    #[test]
    fn test_full_triple() {
        let d = parse_directive(".sidebar, 992, first").unwrap();
        assert_eq!(d.target_selector, ".sidebar");
        assert_eq!(d.breakpoint, 992);
        assert_eq!(d.order, Order::First);
    }

    #[test]
    fn test_numeric_order() {
        let d = parse_directive("#menu, 767, 2").unwrap();
        assert_eq!(d.order, Order::Index(2));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let d = parse_directive("  .target ,  1200 ,  first ").unwrap();
        assert_eq!(d.target_selector, ".target");
        assert_eq!(d.breakpoint, 1200);
        assert_eq!(d.order, Order::First);
    }

    #[test]
    fn test_malformed_breakpoint_falls_back() {
        let d = parse_directive(".target, wide, first").unwrap();
        assert_eq!(d.breakpoint, 767);
        assert_eq!(d.order, Order::First);
    }

    #[test]
    fn test_malformed_order_falls_back() {
        let d = parse_directive(".target, 992, -3").unwrap();
        assert_eq!(d.order, Order::Last);
    }

    #[test]
    fn test_empty_selector_is_inert() {
        assert!(parse_directive("").is_none());
        assert!(parse_directive("  , 992, first").is_none());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let d = parse_directive(".target, 992, first, junk").unwrap();
        assert_eq!(d.breakpoint, 992);
        assert_eq!(d.order, Order::First);
    }
}
