//! Base widget trait and types

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

use weft_animation::{FrameTime, TickOutcome};
use weft_core::PointerEvent;

/// Children produced by one render pass.
///
/// The iterator may borrow the widget; the reconciler drains it before the
/// widget is stored in its node.
pub type Children<'a> = Box<dyn Iterator<Item = Box<dyn Widget>> + 'a>;

/// Reconciliation identity of a widget: its concrete type
#[derive(Clone, Copy)]
pub struct WidgetKind {
    id: TypeId,
    name: &'static str,
}

impl WidgetKind {
    pub fn of<W: Widget>() -> Self {
        Self {
            id: TypeId::of::<W>(),
            name: type_name::<W>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for WidgetKind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for WidgetKind {}

impl Hash for WidgetKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WidgetKind").field(&self.name).finish()
    }
}

/// Base trait for all widgets
///
/// A widget value is a description. Once mounted it lives inside a
/// [`Node`](crate::Node) until a later render replaces it.
pub trait Widget: Any {
    /// Kind used to decide whether a later description may reuse this
    /// widget's slot
    fn kind(&self) -> WidgetKind {
        WidgetKind {
            id: TypeId::of::<Self>(),
            name: type_name::<Self>(),
        }
    }

    /// Produce this widget's children, in slot order
    fn render(&mut self) -> Children<'_> {
        Box::new(std::iter::empty())
    }

    /// Take over live state from the widget this one replaces.
    ///
    /// Only called when both widgets have the same [`kind`](Widget::kind).
    fn inherit(&mut self, _previous: &mut dyn Widget) {}

    /// Run resident animations for one frame
    fn on_animate(&mut self, _frame: FrameTime) -> TickOutcome {
        TickOutcome::default()
    }

    /// Handle a pointer event already routed to this widget.
    ///
    /// Returns whether a callback ran.
    fn handle_pointer(&mut self, _event: PointerEvent) -> bool {
        false
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl dyn Widget {
    pub fn is<W: Widget>(&self) -> bool {
        self.as_any().is::<W>()
    }

    pub fn downcast_ref<W: Widget>(&self) -> Option<&W> {
        self.as_any().downcast_ref::<W>()
    }

    pub fn downcast_mut<W: Widget>(&mut self) -> Option<&mut W> {
        self.as_any_mut().downcast_mut::<W>()
    }
}

impl fmt::Debug for dyn Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Widget").field(&self.kind().name()).finish()
    }
}
