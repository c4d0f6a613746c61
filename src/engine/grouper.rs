//! Breakpoint grouping
//!
//! Partitions the sorted descriptor list into one group per distinct
//! breakpoint, each carrying the media query the watcher subscribes to.

use crate::models::{MediaMode, MediaQuery, RelocationDescriptor};

/// Descriptors sharing one breakpoint, in apply order.
///
/// The watcher reverses `descriptors` after every handler run, giving
/// stack-like revert order across repeated toggles.
pub struct BreakpointGroup<N> {
    pub query: MediaQuery,
    pub descriptors: Vec<RelocationDescriptor<N>>,
}

/// Group descriptors by breakpoint value, preserving both the group
/// order of first occurrence and the intra-group descriptor order.
pub fn group_by_breakpoint<N>(
    descriptors: Vec<RelocationDescriptor<N>>,
    mode: MediaMode,
) -> Vec<BreakpointGroup<N>> {
    let mut groups: Vec<BreakpointGroup<N>> = Vec::new();

    for descriptor in descriptors {
        let existing = groups
            .iter()
            .position(|g| g.query.breakpoint == descriptor.breakpoint);
        match existing {
            Some(index) => groups[index].descriptors.push(descriptor),
            None => groups.push(BreakpointGroup {
                query: MediaQuery::new(mode, descriptor.breakpoint),
                descriptors: vec![descriptor],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Directive;

    fn descriptor(breakpoint: u32) -> RelocationDescriptor<u32> {
        let mut directive = Directive::new(".target");
        directive.breakpoint = breakpoint;
        RelocationDescriptor::new(0, 1, 2, &directive)
    }

    #[test]
    fn test_distinct_breakpoints_yield_distinct_groups() {
        let groups = group_by_breakpoint(
            vec![descriptor(992), descriptor(767), descriptor(992)],
            MediaMode::Max,
        );

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].query.breakpoint, 992);
        assert_eq!(groups[0].descriptors.len(), 2);
        assert_eq!(groups[1].query.breakpoint, 767);
        assert_eq!(groups[1].descriptors.len(), 1);
    }

    #[test]
    fn test_group_query_uses_mode() {
        let groups = group_by_breakpoint(vec![descriptor(767)], MediaMode::Min);
        assert_eq!(groups[0].query.css(), "(min-width: 767px)");
    }
}
