//! The responsive relocation engine
//!
//! Ties the four responsibilities together: the registry scans and sorts,
//! the grouper partitions by breakpoint, the watcher applies or reverts a
//! group on every condition change, and the mover performs the individual
//! relocations.
//!
//! The engine owns its DOM adapter and all per-group state; nothing lives
//! in module-level globals. Condition subscriptions are the caller's job
//! (`matchMedia` in the browser, a simulated viewport in tests): the
//! caller routes each notification to [`AdaptEngine::handle`] with the
//! group's breakpoint and the current match state.

pub mod grouper;
pub mod mover;
pub mod registry;
pub mod watcher;

pub use grouper::BreakpointGroup;

use serde::Serialize;

use crate::dom::DomAdapter;
use crate::models::{MediaMode, MediaQuery, RELOCATED_CLASS};

/// Per-descriptor state snapshot exposed through the debug report.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RelocationSnapshot {
    pub breakpoint: u32,
    pub order: String,
    pub relocated: bool,
}

/// The relocation engine for one document.
///
/// Built once at initialization; lives for the page's lifetime. The only
/// state it mutates afterwards is descriptor bookkeeping (original index,
/// marker class) and the per-group list order.
pub struct AdaptEngine<D: DomAdapter> {
    dom: D,
    groups: Vec<BreakpointGroup<D::Node>>,
}

impl<D: DomAdapter> AdaptEngine<D> {
    /// Scan the document and build one breakpoint group per distinct
    /// breakpoint value.
    pub fn new(dom: D, mode: MediaMode) -> Self {
        let descriptors = registry::scan(&dom, mode);
        let groups = grouper::group_by_breakpoint(descriptors, mode);
        log::info!(
            "dynamic adapt initialized: {} breakpoint group(s), {} mode",
            groups.len(),
            mode.keyword()
        );
        Self { dom, groups }
    }

    /// One media query per group, in group order.
    pub fn media_queries(&self) -> Vec<MediaQuery> {
        self.groups.iter().map(|g| g.query).collect()
    }

    /// Route a condition notification to its breakpoint group. Unknown
    /// breakpoints are ignored.
    pub fn handle(&mut self, breakpoint: u32, matches: bool) {
        if let Some(group) = self
            .groups
            .iter_mut()
            .find(|g| g.query.breakpoint == breakpoint)
        {
            watcher::on_change(&self.dom, group, matches);
        }
    }

    pub fn descriptor_count(&self) -> usize {
        self.groups.iter().map(|g| g.descriptors.len()).sum()
    }

    /// Current state of every descriptor, for devtools inspection.
    pub fn snapshots(&self) -> Vec<RelocationSnapshot> {
        self.groups
            .iter()
            .flat_map(|group| {
                group.descriptors.iter().map(|d| RelocationSnapshot {
                    breakpoint: d.breakpoint,
                    order: d.order.to_string(),
                    relocated: self.dom.has_class(&d.element, RELOCATED_CLASS),
                })
            })
            .collect()
    }
}
