//! UI element base
//!
//! [`UiElement<T>`] is the property surface every interactive widget embeds:
//! enabled, visible, hit-test visibility, opacity, transform, one callback
//! slot per pointer event, and the element's resident animation actuators.
//!
//! `T` is the concrete widget type that embeds the element, so callbacks and
//! actuators are typed against the widget itself and never need a downcast
//! when they run.

use std::fmt;
use std::mem;
use std::sync::Arc;

use tracing::trace;
use weft_animation::{
    ActuatorSet, AnimationActuator, Easing, FrameTime, NumberAnimation, Result, TickOutcome,
    TransformAnimation,
};
use weft_core::{PointerEvent, Transform};

use crate::properties::{OpacityActuator, TransformActuator};
use crate::registry::StyleRegistry;
use crate::style::Style;
use crate::widget::Widget;

/// Callback invoked with the element that received a pointer event
pub type PointerCallback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Common mutable surface of an interactive widget
pub struct UiElement<T> {
    pub enabled: bool,
    pub hit_test_visible: bool,
    pub visible: bool,
    /// Conventionally 0.0..=1.0, not clamped
    pub opacity: f32,
    pub transform: Transform,
    callbacks: [Option<PointerCallback<T>>; 4],
    actuators: ActuatorSet<T>,
}

impl<T: 'static> UiElement<T> {
    /// Create an element and apply the default style registered for `T`
    pub fn new(styles: &StyleRegistry) -> Self {
        let mut element = Self::unstyled();
        if let Some(style) = styles.default_for::<T>() {
            element.apply_style(style);
        }
        element
    }

    /// Create an element with the built-in defaults only
    pub fn unstyled() -> Self {
        Self {
            enabled: false,
            hit_test_visible: false,
            visible: true,
            opacity: 1.0,
            transform: Transform::identity(),
            callbacks: Default::default(),
            actuators: ActuatorSet::new(),
        }
    }

    /// Overwrite every field the style sets; leave the rest untouched
    pub fn apply_style(&mut self, style: &Style<T>) {
        if let Some(opacity) = style.opacity {
            self.opacity = opacity;
        }
        if let Some(transform) = style.transform {
            self.transform = transform;
        }
        if let Some(enabled) = style.enabled {
            self.enabled = enabled;
        }
        if let Some(visible) = style.visible {
            self.visible = visible;
        }
        if let Some(hit_test_visible) = style.hit_test_visible {
            self.hit_test_visible = hit_test_visible;
        }
        for event in PointerEvent::ALL {
            if let Some(callback) = style.callback(event) {
                self.callbacks[event.index()] = Some(Arc::clone(callback));
            }
        }
    }

    pub fn callback(&self, event: PointerEvent) -> Option<&PointerCallback<T>> {
        self.callbacks[event.index()].as_ref()
    }

    /// Replace the callback slot for `event`
    pub fn set_callback(&mut self, event: PointerEvent, callback: Option<PointerCallback<T>>) {
        self.callbacks[event.index()] = callback;
    }

    pub fn actuators(&self) -> &ActuatorSet<T> {
        &self.actuators
    }

    pub fn actuators_mut(&mut self) -> &mut ActuatorSet<T> {
        &mut self.actuators
    }

    /// Register an actuator, replacing any running actuator of the same kind
    pub fn animate(&mut self, actuator: Box<dyn AnimationActuator<T>>) {
        self.actuators.insert(actuator);
    }

    /// Take over the running actuators of the element this one supersedes.
    ///
    /// The previous set replaces this element's set wholesale; actuators
    /// declared on `self` before the merge are dropped.
    pub fn inherit_from(&mut self, previous: &mut UiElement<T>) {
        let dropped = self.actuators.len();
        self.actuators = mem::take(&mut previous.actuators);
        trace!(
            inherited = self.actuators.len(),
            dropped,
            "inherited element actuators"
        );
    }
}

impl<T> fmt::Debug for UiElement<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiElement")
            .field("enabled", &self.enabled)
            .field("hit_test_visible", &self.hit_test_visible)
            .field("visible", &self.visible)
            .field("opacity", &self.opacity)
            .field("transform", &self.transform)
            .field("actuators", &self.actuators)
            .finish_non_exhaustive()
    }
}

/// A widget that embeds a [`UiElement`] typed against itself
///
/// The provided methods implement the element side of the [`Widget`]
/// contract; widgets forward `inherit`, `on_animate` and `handle_pointer` to
/// them.
pub trait Element: Widget + Sized {
    fn element(&self) -> &UiElement<Self>;

    fn element_mut(&mut self) -> &mut UiElement<Self>;

    /// Take over the actuators of the widget this one replaces
    fn inherit_element(&mut self, previous: &mut dyn Widget) {
        if let Some(previous) = previous.downcast_mut::<Self>() {
            self.element_mut().inherit_from(previous.element_mut());
        }
    }

    /// Run this element's actuators for one frame
    fn tick_element(&mut self, frame: FrameTime) -> TickOutcome {
        ActuatorSet::tick_resident(self, frame.delta_ms, |widget: &mut Self| {
            widget.element_mut().actuators_mut()
        })
    }

    /// Invoke the callback slot for `event`, if one is set
    fn dispatch_pointer(&mut self, event: PointerEvent) -> bool {
        let Some(callback) = self.element().callback(event).cloned() else {
            return false;
        };
        trace!(event = event.name(), widget = self.kind().name(), "pointer callback");
        callback(self);
        true
    }
}

/// Builder helpers over the element surface
pub trait ElementExt: Element {
    fn opacity(mut self, opacity: f32) -> Self {
        self.element_mut().opacity = opacity;
        self
    }

    fn transform(mut self, transform: Transform) -> Self {
        self.element_mut().transform = transform;
        self
    }

    fn enabled(mut self, enabled: bool) -> Self {
        self.element_mut().enabled = enabled;
        self
    }

    fn visible(mut self, visible: bool) -> Self {
        self.element_mut().visible = visible;
        self
    }

    fn hit_test_visible(mut self, hit_test_visible: bool) -> Self {
        self.element_mut().hit_test_visible = hit_test_visible;
        self
    }

    fn on_mouse_enter(mut self, f: impl Fn(&Self) + Send + Sync + 'static) -> Self {
        self.element_mut()
            .set_callback(PointerEvent::Enter, Some(Arc::new(f)));
        self
    }

    fn on_mouse_leave(mut self, f: impl Fn(&Self) + Send + Sync + 'static) -> Self {
        self.element_mut()
            .set_callback(PointerEvent::Leave, Some(Arc::new(f)));
        self
    }

    fn on_mouse_down(mut self, f: impl Fn(&Self) + Send + Sync + 'static) -> Self {
        self.element_mut()
            .set_callback(PointerEvent::Down, Some(Arc::new(f)));
        self
    }

    fn on_mouse_up(mut self, f: impl Fn(&Self) + Send + Sync + 'static) -> Self {
        self.element_mut()
            .set_callback(PointerEvent::Up, Some(Arc::new(f)));
        self
    }

    fn style(mut self, style: &Style<Self>) -> Self {
        self.element_mut().apply_style(style);
        self
    }

    /// Register an actuator on a live element
    fn animate<A>(&mut self, actuator: A)
    where
        A: AnimationActuator<Self> + 'static,
    {
        self.element_mut().animate(Box::new(actuator));
    }

    /// Builder form of [`animate`](ElementExt::animate)
    fn with_animation<A>(mut self, actuator: A) -> Self
    where
        A: AnimationActuator<Self> + 'static,
    {
        self.animate(actuator);
        self
    }

    /// Animate opacity between explicit bounds
    fn animate_opacity(self, from: f32, to: f32, duration_ms: u32, easing: Easing) -> Result<Self> {
        let animation = NumberAnimation::new(from, to, duration_ms, easing)?;
        Ok(self.with_animation(OpacityActuator::<Self>::new(animation)))
    }

    /// Animate opacity from its live value
    fn animate_opacity_to(self, to: f32, duration_ms: u32, easing: Easing) -> Result<Self> {
        let animation = NumberAnimation::to(to, duration_ms, easing)?;
        Ok(self.with_animation(OpacityActuator::<Self>::new(animation)))
    }

    fn animate_transform(self, animation: TransformAnimation) -> Self {
        self.with_animation(TransformActuator::<Self>::new(animation))
    }
}

impl<E: Element> ElementExt for E {}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use weft_animation::ActuatorKind;

    use super::*;

    struct Chip {
        element: UiElement<Chip>,
    }

    impl Chip {
        fn new(styles: &StyleRegistry) -> Self {
            Self {
                element: UiElement::new(styles),
            }
        }
    }

    impl Widget for Chip {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    impl Element for Chip {
        fn element(&self) -> &UiElement<Self> {
            &self.element
        }

        fn element_mut(&mut self) -> &mut UiElement<Self> {
            &mut self.element
        }
    }

    #[test]
    fn test_defaults() {
        let chip = Chip::new(&StyleRegistry::new());
        let e = chip.element();
        assert!(!e.enabled);
        assert!(!e.hit_test_visible);
        assert!(e.visible);
        assert_eq!(e.opacity, 1.0);
        assert!(e.transform.is_identity());
        assert!(e.actuators().is_empty());
        for event in PointerEvent::ALL {
            assert!(e.callback(event).is_none());
        }
    }

    #[test]
    fn test_registry_default_applied_once_at_construction() {
        let mut styles = StyleRegistry::new();
        styles.register(Style::<Chip>::new().opacity(0.4).enabled(true));

        let chip = Chip::new(&styles);
        assert_eq!(chip.element().opacity, 0.4);
        assert!(chip.element().enabled);
    }

    #[test]
    fn test_style_overwrites_only_provided_fields() {
        let leaves = Arc::new(AtomicUsize::new(0));
        let enters = Arc::new(AtomicUsize::new(0));

        let leave_count = Arc::clone(&leaves);
        let mut chip = Chip::new(&StyleRegistry::new())
            .transform(Transform::translate(5.0, 0.0))
            .on_mouse_leave(move |_| {
                leave_count.fetch_add(1, Ordering::SeqCst);
            });

        let enter_count = Arc::clone(&enters);
        let style = Style::<Chip>::new().opacity(0.3).on_mouse_enter(move |_| {
            enter_count.fetch_add(1, Ordering::SeqCst);
        });
        chip.element_mut().apply_style(&style);

        assert_eq!(chip.element().opacity, 0.3);
        assert_eq!(chip.element().transform, Transform::translate(5.0, 0.0));

        assert!(chip.dispatch_pointer(PointerEvent::Enter));
        assert!(chip.dispatch_pointer(PointerEvent::Leave));
        assert!(!chip.dispatch_pointer(PointerEvent::Down));
        assert_eq!(enters.load(Ordering::SeqCst), 1);
        assert_eq!(leaves.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_style_without_opacity_keeps_element_opacity() {
        let mut chip = Chip::new(&StyleRegistry::new()).opacity(0.4);
        chip.element_mut()
            .apply_style(&Style::new().transform(Transform::scale_uniform(2.0)));

        assert_eq!(chip.element().opacity, 0.4);
        assert_eq!(chip.element().transform, Transform::scale_uniform(2.0));

        chip.element_mut().apply_style(&Style::new());
        assert_eq!(chip.element().opacity, 0.4);
        assert_eq!(chip.element().transform, Transform::scale_uniform(2.0));
    }

    #[test]
    fn test_callback_receives_concrete_element() {
        let seen = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&seen);
        let mut chip = Chip::new(&StyleRegistry::new())
            .opacity(0.5)
            .on_mouse_down(move |chip: &Chip| {
                sink.store((chip.element().opacity * 10.0) as usize, Ordering::SeqCst);
            });

        chip.dispatch_pointer(PointerEvent::Down);
        assert_eq!(seen.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_last_callback_assignment_wins() {
        let hits = Arc::new(AtomicUsize::new(0));
        let first = Arc::clone(&hits);
        let second = Arc::clone(&hits);
        let mut chip = Chip::new(&StyleRegistry::new())
            .on_mouse_up(move |_| {
                first.fetch_add(1, Ordering::SeqCst);
            })
            .on_mouse_up(move |_| {
                second.fetch_add(100, Ordering::SeqCst);
            });

        chip.dispatch_pointer(PointerEvent::Up);
        assert_eq!(hits.load(Ordering::SeqCst), 100);
    }

    #[test]
    fn test_animate_replaces_same_kind() {
        let mut chip = Chip::new(&StyleRegistry::new())
            .animate_opacity(0.0, 1.0, 100, Easing::Linear)
            .unwrap()
            .animate_opacity_to(0.0, 100, Easing::Linear)
            .unwrap();
        assert_eq!(chip.element().actuators().len(), 1);

        chip.tick_element(FrameTime::new(50.0, 0));
        assert_eq!(chip.element().opacity, 0.5);
    }

    #[test]
    fn test_animate_rejects_malformed_descriptor() {
        let chip = Chip::new(&StyleRegistry::new());
        assert!(chip.animate_opacity(0.0, f32::NAN, 100, Easing::Linear).is_err());
    }

    #[test]
    fn test_tick_element_runs_and_prunes() {
        let target = Transform::translate(10.0, 0.0);
        let mut chip = Chip::new(&StyleRegistry::new()).animate_transform(
            TransformAnimation::to(target, 100, Easing::Linear).unwrap(),
        );

        let outcome = chip.tick_element(FrameTime::new(50.0, 0));
        assert!(outcome.changed());
        assert_eq!(chip.element().transform, Transform::translate(5.0, 0.0));

        let outcome = chip.tick_element(FrameTime::new(50.0, 1));
        assert_eq!(outcome.finished, 1);
        assert_eq!(chip.element().transform, target);
        assert!(chip.element().actuators().is_empty());
    }

    #[test]
    fn test_inherit_moves_actuators() {
        let styles = StyleRegistry::new();
        let mut old = Chip::new(&styles)
            .animate_opacity(0.0, 1.0, 100, Easing::Linear)
            .unwrap();
        old.tick_element(FrameTime::new(25.0, 0));

        let mut new = Chip::new(&styles);
        new.inherit_element(&mut old);

        assert!(old.element().actuators().is_empty());
        assert_eq!(new.element().actuators().len(), 1);
        let kind = new.element().actuators().kinds().next().unwrap();
        assert_eq!(
            new.element().actuators().get(kind).map(|a| a.elapsed_ms()),
            Some(25.0)
        );
    }

    #[test]
    fn test_inherit_replaces_redeclared_actuators() {
        let styles = StyleRegistry::new();
        let mut old = Chip::new(&styles)
            .animate_opacity(0.0, 1.0, 100, Easing::Linear)
            .unwrap();
        old.tick_element(FrameTime::new(25.0, 0));

        let mut new = Chip::new(&styles)
            .animate_opacity(0.0, 1.0, 100, Easing::Linear)
            .unwrap()
            .animate_transform(
                TransformAnimation::to(Transform::translate(10.0, 0.0), 100, Easing::Linear)
                    .unwrap(),
            );
        new.inherit_element(&mut old);

        let actuators = new.element().actuators();
        assert_eq!(actuators.len(), 1);
        let kind = ActuatorKind::of::<OpacityActuator<Chip>>();
        assert_eq!(actuators.get(kind).map(|a| a.elapsed_ms()), Some(25.0));

        new.tick_element(FrameTime::new(25.0, 1));
        assert_eq!(new.element().opacity, 0.5);
        assert!(new.element().transform.is_identity());
    }
}
