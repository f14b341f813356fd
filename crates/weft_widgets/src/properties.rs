//! Animatable element properties

use weft_animation::{Property, PropertyActuator};
use weft_core::Transform;

use crate::element::Element;

/// The element's opacity
pub struct OpacityProperty;

impl<T: Element> Property<T> for OpacityProperty {
    type Value = f32;
    const NAME: &'static str = "opacity";

    fn get(target: &T) -> f32 {
        target.element().opacity
    }

    fn set(target: &mut T, value: f32) {
        target.element_mut().opacity = value;
    }
}

/// The element's transform
pub struct TransformProperty;

impl<T: Element> Property<T> for TransformProperty {
    type Value = Transform;
    const NAME: &'static str = "transform";

    fn get(target: &T) -> Transform {
        target.element().transform
    }

    fn set(target: &mut T, value: Transform) {
        target.element_mut().transform = value;
    }
}

pub type OpacityActuator<T> = PropertyActuator<T, OpacityProperty>;
pub type TransformActuator<T> = PropertyActuator<T, TransformProperty>;
