//! Animation descriptors
//!
//! A descriptor is the immutable request "move this property to that value
//! over this long". It holds no progress; actuators own the running state.

use weft_core::Transform;

use crate::easing::Easing;
use crate::error::{AnimationError, Result};
use crate::value::Animatable;

/// Timing shared by every typed animation
#[derive(Clone, Copy, Debug)]
pub struct AnimationTiming {
    duration_ms: u32,
    easing: Easing,
    reverse: bool,
    looping: bool,
    keep_target_value: bool,
}

impl AnimationTiming {
    /// Create timing with the default flags: no reverse, no loop, keep the
    /// end value once finished.
    pub fn new(duration_ms: u32, easing: Easing) -> Result<Self> {
        if duration_ms == 0 {
            return Err(AnimationError::ZeroDuration);
        }
        Ok(Self {
            duration_ms,
            easing,
            reverse: false,
            looping: false,
            keep_target_value: true,
        })
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Play backward to the start after the forward leg
    pub fn is_reverse(&self) -> bool {
        self.reverse
    }

    /// Restart indefinitely
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Hold the last applied value after finishing instead of restoring the
    /// start value
    pub fn keeps_target_value(&self) -> bool {
        self.keep_target_value
    }
}

/// A timed change of one typed value
#[derive(Clone, Debug)]
pub struct ValueAnimation<V> {
    from: Option<V>,
    to: V,
    timing: AnimationTiming,
}

/// Animation of a scalar property such as opacity
pub type NumberAnimation = ValueAnimation<f32>;

/// Animation of an element transform
pub type TransformAnimation = ValueAnimation<Transform>;

impl<V: Animatable> ValueAnimation<V> {
    /// Animate from an explicit start value
    pub fn new(from: V, to: V, duration_ms: u32, easing: Easing) -> Result<Self> {
        if !from.is_finite() {
            return Err(AnimationError::NonFiniteFrom);
        }
        Self::build(Some(from), to, duration_ms, easing)
    }

    /// Animate from whatever value the property holds when the actuator
    /// first ticks
    pub fn to(to: V, duration_ms: u32, easing: Easing) -> Result<Self> {
        Self::build(None, to, duration_ms, easing)
    }

    fn build(from: Option<V>, to: V, duration_ms: u32, easing: Easing) -> Result<Self> {
        if !to.is_finite() {
            return Err(AnimationError::NonFiniteTo);
        }
        Ok(Self {
            from,
            to,
            timing: AnimationTiming::new(duration_ms, easing)?,
        })
    }

    /// Play back to the start after reaching the end
    pub fn reverse(mut self) -> Self {
        self.timing.reverse = true;
        self
    }

    /// Repeat forever
    pub fn looping(mut self) -> Self {
        self.timing.looping = true;
        self
    }

    /// Whether the property keeps the last applied value when finished
    pub fn keep_target_value(mut self, keep: bool) -> Self {
        self.timing.keep_target_value = keep;
        self
    }

    pub fn from(&self) -> Option<&V> {
        self.from.as_ref()
    }

    pub fn target(&self) -> &V {
        &self.to
    }

    pub fn timing(&self) -> &AnimationTiming {
        &self.timing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_descriptor_contract() {
        let anim = NumberAnimation::new(0.0, 1.0, 300, Easing::Linear).unwrap();
        let timing = anim.timing();
        assert_eq!(timing.duration_ms(), 300);
        assert!(!timing.is_reverse());
        assert!(!timing.is_looping());
        assert!(timing.keeps_target_value());
        assert_eq!(anim.from(), Some(&0.0));
        assert_eq!(*anim.target(), 1.0);
    }

    #[test]
    fn test_flags() {
        let anim = NumberAnimation::to(0.5, 100, Easing::EaseOutCubic)
            .unwrap()
            .reverse()
            .looping()
            .keep_target_value(false);
        assert!(anim.from().is_none());
        assert!(anim.timing().is_reverse());
        assert!(anim.timing().is_looping());
        assert!(!anim.timing().keeps_target_value());
    }

    #[test]
    fn test_zero_duration_rejected() {
        let err = NumberAnimation::to(1.0, 0, Easing::Linear).unwrap_err();
        assert_eq!(err, AnimationError::ZeroDuration);
    }

    #[test]
    fn test_non_finite_bounds_rejected() {
        assert_eq!(
            NumberAnimation::new(f32::NAN, 1.0, 100, Easing::Linear).unwrap_err(),
            AnimationError::NonFiniteFrom
        );
        assert_eq!(
            NumberAnimation::to(f32::INFINITY, 100, Easing::Linear).unwrap_err(),
            AnimationError::NonFiniteTo
        );
        assert_eq!(
            TransformAnimation::to(Transform::translate(f32::NAN, 0.0), 100, Easing::Linear)
                .unwrap_err(),
            AnimationError::NonFiniteTo
        );
    }
}
