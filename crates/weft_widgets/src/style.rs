//! Element style bundles
//!
//! A [`Style`] is a reusable set of element settings. Applying it overwrites
//! only the fields it actually sets, so a style carrying just an opacity
//! leaves a running transform animation's output alone.

use std::fmt;
use std::sync::Arc;

use weft_core::{PointerEvent, Transform};

use crate::element::PointerCallback;

/// Settings applied to elements of type `T`
pub struct Style<T> {
    /// Left unchanged on the element when `None`
    pub opacity: Option<f32>,
    /// Left unchanged on the element when `None`
    pub transform: Option<Transform>,
    pub enabled: Option<bool>,
    pub visible: Option<bool>,
    pub hit_test_visible: Option<bool>,
    callbacks: [Option<PointerCallback<T>>; 4],
}

impl<T> Style<T> {
    /// An empty style; applying it changes nothing
    pub fn new() -> Self {
        Self {
            opacity: None,
            transform: None,
            enabled: None,
            visible: None,
            hit_test_visible: None,
            callbacks: Default::default(),
        }
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn hit_test_visible(mut self, hit_test_visible: bool) -> Self {
        self.hit_test_visible = Some(hit_test_visible);
        self
    }

    /// Set the callback for one pointer event
    pub fn on(mut self, event: PointerEvent, f: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.callbacks[event.index()] = Some(Arc::new(f));
        self
    }

    pub fn on_mouse_enter(self, f: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.on(PointerEvent::Enter, f)
    }

    pub fn on_mouse_leave(self, f: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.on(PointerEvent::Leave, f)
    }

    pub fn on_mouse_down(self, f: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.on(PointerEvent::Down, f)
    }

    pub fn on_mouse_up(self, f: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.on(PointerEvent::Up, f)
    }

    pub fn callback(&self, event: PointerEvent) -> Option<&PointerCallback<T>> {
        self.callbacks[event.index()].as_ref()
    }

    /// Whether applying this style would change anything
    pub fn is_empty(&self) -> bool {
        self.opacity.is_none()
            && self.transform.is_none()
            && self.enabled.is_none()
            && self.visible.is_none()
            && self.hit_test_visible.is_none()
            && self.callbacks.iter().all(Option::is_none)
    }
}

impl<T> Default for Style<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Style<T> {
    fn clone(&self) -> Self {
        Self {
            opacity: self.opacity,
            transform: self.transform,
            enabled: self.enabled,
            visible: self.visible,
            hit_test_visible: self.hit_test_visible,
            callbacks: self.callbacks.clone(),
        }
    }
}

impl<T> fmt::Debug for Style<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let callbacks: Vec<_> = PointerEvent::ALL
            .iter()
            .filter(|e| self.callback(**e).is_some())
            .map(|e| e.name())
            .collect();
        f.debug_struct("Style")
            .field("opacity", &self.opacity)
            .field("transform", &self.transform)
            .field("enabled", &self.enabled)
            .field("visible", &self.visible)
            .field("hit_test_visible", &self.hit_test_visible)
            .field("callbacks", &callbacks)
            .finish()
    }
}
