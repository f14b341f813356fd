//! Visual nodes
//!
//! A [`Node`] is the mounted counterpart of one widget description. It owns
//! the widget (and through it the widget's actuators), its child nodes, and
//! the "state changed" flag a paint pass consumes.

use std::ops::AddAssign;

use weft_animation::FrameTime;
use weft_core::PointerEvent;

use crate::widget::{Widget, WidgetKind};

/// Totals from one tick pass over a subtree
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Nodes visited
    pub nodes: usize,
    /// Nodes whose actuators wrote to them this frame
    pub changed: usize,
    pub actuators_ticked: usize,
    pub actuators_finished: usize,
}

impl FrameStats {
    pub fn any_changed(&self) -> bool {
        self.changed > 0
    }
}

impl AddAssign for FrameStats {
    fn add_assign(&mut self, other: Self) {
        self.nodes += other.nodes;
        self.changed += other.changed;
        self.actuators_ticked += other.actuators_ticked;
        self.actuators_finished += other.actuators_finished;
    }
}

/// One mounted widget and its mounted children
#[derive(Debug)]
pub struct Node {
    pub(crate) widget: Box<dyn Widget>,
    pub(crate) children: Vec<Node>,
    state_changed: bool,
}

impl Node {
    /// Freshly merged nodes always need a paint
    pub(crate) fn new(widget: Box<dyn Widget>, children: Vec<Node>) -> Self {
        Self {
            widget,
            children,
            state_changed: true,
        }
    }

    pub fn kind(&self) -> WidgetKind {
        self.widget.kind()
    }

    pub fn widget(&self) -> &dyn Widget {
        &*self.widget
    }

    pub fn widget_mut(&mut self) -> &mut dyn Widget {
        &mut *self.widget
    }

    pub fn downcast_ref<W: Widget>(&self) -> Option<&W> {
        self.widget.downcast_ref::<W>()
    }

    pub fn downcast_mut<W: Widget>(&mut self) -> Option<&mut W> {
        self.widget.downcast_mut::<W>()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.children.get_mut(index)
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }

    /// Run one animation frame over this subtree, parent before children
    pub fn tick(&mut self, frame: FrameTime) -> FrameStats {
        let outcome = self.widget.on_animate(frame);
        let mut stats = FrameStats {
            nodes: 1,
            changed: 0,
            actuators_ticked: outcome.ticked,
            actuators_finished: outcome.finished,
        };
        if outcome.changed() {
            self.state_changed = true;
            stats.changed = 1;
        }

        for child in &mut self.children {
            stats += child.tick(frame);
        }
        stats
    }

    /// Route a pointer event to this node's widget
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        self.widget.handle_pointer(event)
    }

    pub fn state_changed(&self) -> bool {
        self.state_changed
    }

    pub fn mark_state_changed(&mut self) {
        self.state_changed = true;
    }

    /// Read and clear this node's own flag
    pub fn take_state_changed(&mut self) -> bool {
        std::mem::take(&mut self.state_changed)
    }

    /// Whether any node in this subtree is flagged
    pub fn any_state_changed(&self) -> bool {
        self.state_changed || self.children.iter().any(Node::any_state_changed)
    }

    /// Clear the flag on every node in this subtree
    pub fn clear_state_changed(&mut self) {
        self.state_changed = false;
        for child in &mut self.children {
            child.clear_state_changed();
        }
    }

    /// Visit every node depth-first, parent before children
    pub fn walk(&self, visit: &mut impl FnMut(&Node)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}
