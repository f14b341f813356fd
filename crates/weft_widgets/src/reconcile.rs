//! Reconciliation
//!
//! Merges a freshly rendered widget description onto the previously mounted
//! node tree. Slots are matched by tree position and widget kind only:
//!
//! - same kind: the new widget inherits the old one's live state (its
//!   actuators), then children are merged slot by slot
//! - different kind, or no old node: the old subtree is dropped and the new
//!   widget is mounted from scratch
//!
//! Excess old children are dropped; excess new children are mounted fresh.
//! Merging never fails.

use std::ops::AddAssign;

use tracing::{debug, trace};

use crate::node::Node;
use crate::widget::Widget;

/// What one merge pass did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Slots whose previous node was the same kind
    pub reused: usize,
    /// Slots with no previous node
    pub mounted: usize,
    /// Slots whose previous node was a different kind
    pub remounted: usize,
    /// Previously mounted nodes dropped, counting whole subtrees
    pub discarded: usize,
}

impl MergeStats {
    /// Slots in the merged tree
    pub fn total(&self) -> usize {
        self.reused + self.mounted + self.remounted
    }
}

impl AddAssign for MergeStats {
    fn add_assign(&mut self, other: Self) {
        self.reused += other.reused;
        self.mounted += other.mounted;
        self.remounted += other.remounted;
        self.discarded += other.discarded;
    }
}

/// Tree merger that accumulates [`MergeStats`] across passes
#[derive(Debug, Default)]
pub struct Reconciler {
    stats: MergeStats,
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `widget` onto `old`, returning the node that now occupies the
    /// slot
    pub fn merge(&mut self, old: Option<Node>, mut widget: Box<dyn Widget>) -> Node {
        let kind = widget.kind();

        let previous_children = match old {
            Some(mut old) if old.kind() == kind => {
                trace!(kind = kind.name(), "reusing slot");
                widget.inherit(&mut *old.widget);
                self.stats.reused += 1;
                std::mem::take(&mut old.children)
            }
            Some(old) => {
                let dropped = old.node_count();
                debug!(
                    old = old.kind().name(),
                    new = kind.name(),
                    dropped,
                    "kind changed, remounting"
                );
                self.stats.remounted += 1;
                self.stats.discarded += dropped;
                Vec::new()
            }
            None => {
                self.stats.mounted += 1;
                Vec::new()
            }
        };

        let mut previous = previous_children.into_iter();
        let children: Vec<Node> = widget
            .render()
            .map(|child| self.merge(previous.next(), child))
            .collect();

        let excess: usize = previous.map(|node| node.node_count()).sum();
        if excess > 0 {
            debug!(kind = kind.name(), excess, "dropping excess children");
            self.stats.discarded += excess;
        }

        Node::new(widget, children)
    }

    pub fn stats(&self) -> MergeStats {
        self.stats
    }

    /// Return the accumulated stats and reset them
    pub fn take_stats(&mut self) -> MergeStats {
        std::mem::take(&mut self.stats)
    }
}

/// Run a single merge pass
pub fn merge(old: Option<Node>, widget: Box<dyn Widget>) -> (Node, MergeStats) {
    let mut reconciler = Reconciler::new();
    let node = reconciler.merge(old, widget);
    (node, reconciler.take_stats())
}
