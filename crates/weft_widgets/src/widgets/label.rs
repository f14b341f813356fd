//! Text leaf widget

use std::any::Any;

use weft_animation::{FrameTime, TickOutcome};
use weft_core::PointerEvent;

use crate::element::{Element, UiElement};
use crate::registry::StyleRegistry;
use crate::widget::Widget;

/// A single run of text
pub struct Label {
    element: UiElement<Label>,
    text: String,
}

impl Label {
    pub fn new(styles: &StyleRegistry, text: impl Into<String>) -> Self {
        Self {
            element: UiElement::new(styles),
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Widget for Label {
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

impl Element for Label {
    fn element(&self) -> &UiElement<Self> {
        &self.element
    }

    fn element_mut(&mut self) -> &mut UiElement<Self> {
        &mut self.element
    }
}
