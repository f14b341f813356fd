//! Interpolatable values

use weft_core::Transform;

/// A value an actuator can interpolate
pub trait Animatable: Clone + std::fmt::Debug + 'static {
    /// Interpolate toward `to`. `t` may fall outside `[0, 1]` for
    /// overshooting easings and must extrapolate rather than clamp.
    fn lerp(&self, to: &Self, t: f32) -> Self;

    /// Whether every component is a finite number
    fn is_finite(&self) -> bool;
}

impl Animatable for f32 {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        self + (to - self) * t
    }

    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }
}

impl Animatable for Transform {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        Transform::lerp(self, to, t)
    }

    fn is_finite(&self) -> bool {
        Transform::is_finite(self)
    }
}
