//! Container widget

use std::any::Any;

use weft_animation::{FrameTime, TickOutcome};
use weft_core::PointerEvent;

use crate::element::{Element, UiElement};
use crate::registry::StyleRegistry;
use crate::widget::{Children, Widget};

/// A container that renders its children in insertion order
pub struct Panel {
    element: UiElement<Panel>,
    children: Vec<Box<dyn Widget>>,
}

impl Panel {
    pub fn new(styles: &StyleRegistry) -> Self {
        Self {
            element: UiElement::new(styles),
            children: Vec::new(),
        }
    }

    /// Add a child
    pub fn child(mut self, child: impl Widget) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Add several boxed children
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Widget>>,
    {
        self.children.extend(children);
        self
    }

    /// Children not yet handed to the reconciler
    pub fn pending_children(&self) -> usize {
        self.children.len()
    }
}

impl Widget for Panel {
    fn render(&mut self) -> Children<'_> {
        Box::new(self.children.drain(..))
    }

    fn inherit(&mut self, previous: &mut dyn Widget) {
        self.inherit_element(previous);
    }

    fn on_animate(&mut self, frame: FrameTime) -> TickOutcome {
        self.tick_element(frame)
    }

    fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        self.dispatch_pointer(event)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Element for Panel {
    fn element(&self) -> &UiElement<Self> {
        &self.element
    }

    fn element_mut(&mut self) -> &mut UiElement<Self> {
        &mut self.element
    }
}
