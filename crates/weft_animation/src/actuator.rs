//! Animation actuators
//!
//! An actuator binds one descriptor to one property of a target and drives it
//! frame by frame:
//!
//! ```text
//!            elapsed >= duration                 elapsed >= duration
//! Forward ───────────────────────► Backward ───────────────────────► Finished
//!    │        (reverse set)                        (loop not set)
//!    │                                                   │
//!    └──── elapsed >= duration, loop set: restart Forward ◄┘
//! ```
//!
//! Each tick advances elapsed time by the frame delta, samples the eased
//! progress, writes the interpolated value onto the target and decides
//! whether a leg has completed. A leg completes at most once per tick, so
//! an oversized delta can never spin through several cycles.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::animation::ValueAnimation;
use crate::property::Property;
use crate::value::Animatable;

/// Key under which an actuator is stored on its target
///
/// Two actuators with the same kind drive the same property, so registering
/// one replaces the other.
#[derive(Clone, Copy)]
pub struct ActuatorKind {
    id: TypeId,
    name: &'static str,
}

impl ActuatorKind {
    pub fn of<A: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<A>(),
            name: std::any::type_name::<A>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ActuatorKind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ActuatorKind {}

impl Hash for ActuatorKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ActuatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ActuatorKind").field(&self.name).finish()
    }
}

/// Which leg of the animation is playing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Forward,
    /// Return leg of a reversing animation
    Backward,
}

/// A stateful driver that advances one animation on a target of type `T`
pub trait AnimationActuator<T: ?Sized> {
    /// Deduplication key on the owning target
    fn kind(&self) -> ActuatorKind;

    /// Advance by `dt_ms`, apply the current value to `target` and report
    /// whether the actuator is still active.
    fn tick(&mut self, target: &mut T, dt_ms: f32) -> bool;

    /// Time spent in the current leg
    fn elapsed_ms(&self) -> f32;

    fn phase(&self) -> Phase;
}

/// Actuator that animates the property `P` of `T` with a [`ValueAnimation`]
pub struct PropertyActuator<T: ?Sized, P: Property<T>> {
    animation: ValueAnimation<P::Value>,
    /// Effective start value, captured on the first tick
    start: Option<P::Value>,
    elapsed_ms: f32,
    phase: Phase,
    finished: bool,
    _target: PhantomData<fn(&mut T)>,
}

impl<T: ?Sized, P: Property<T>> PropertyActuator<T, P> {
    pub fn new(animation: ValueAnimation<P::Value>) -> Self {
        Self {
            animation,
            start: None,
            elapsed_ms: 0.0,
            phase: Phase::Forward,
            finished: false,
            _target: PhantomData,
        }
    }

    pub fn animation(&self) -> &ValueAnimation<P::Value> {
        &self.animation
    }

    /// Start value in effect, once the first tick has captured it
    pub fn start_value(&self) -> Option<&P::Value> {
        self.start.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn capture_start(&mut self, target: &T) -> P::Value {
        if let Some(start) = &self.start {
            return start.clone();
        }
        let start = match self.animation.from() {
            Some(from) => from.clone(),
            None => P::get(target),
        };
        tracing::trace!(property = P::NAME, ?start, "actuator captured start value");
        self.start = Some(start.clone());
        start
    }

    fn progress(&self) -> f32 {
        let duration = self.animation.timing().duration_ms() as f32;
        if duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / duration).clamp(0.0, 1.0)
    }
}

impl<T, P> AnimationActuator<T> for PropertyActuator<T, P>
where
    T: ?Sized + 'static,
    P: Property<T>,
{
    fn kind(&self) -> ActuatorKind {
        ActuatorKind::of::<Self>()
    }

    fn tick(&mut self, target: &mut T, dt_ms: f32) -> bool {
        if self.finished {
            return false;
        }

        let start = self.capture_start(target);

        // Negative or NaN deltas would break monotonic elapsed time
        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.elapsed_ms += dt_ms;
        }

        let timing = *self.animation.timing();
        let eased = timing.easing().apply(self.progress());
        let end = self.animation.target();
        let value = match self.phase {
            Phase::Forward => start.lerp(end, eased),
            Phase::Backward => end.lerp(&start, eased),
        };
        P::set(target, value);

        if self.elapsed_ms < timing.duration_ms() as f32 {
            return true;
        }

        if timing.is_reverse() && self.phase == Phase::Forward {
            tracing::trace!(property = P::NAME, "actuator reversing");
            self.phase = Phase::Backward;
            self.elapsed_ms = 0.0;
            return true;
        }

        if timing.is_looping() {
            tracing::trace!(property = P::NAME, "actuator looping");
            self.phase = Phase::Forward;
            self.elapsed_ms = 0.0;
            return true;
        }

        self.finished = true;
        if !timing.keeps_target_value() {
            P::set(target, start);
        }
        tracing::trace!(
            property = P::NAME,
            kept = timing.keeps_target_value(),
            "actuator finished"
        );
        false
    }

    fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    fn phase(&self) -> Phase {
        self.phase
    }
}

impl<T: ?Sized, P: Property<T>> fmt::Debug for PropertyActuator<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyActuator")
            .field("property", &P::NAME)
            .field("elapsed_ms", &self.elapsed_ms)
            .field("phase", &self.phase)
            .field("finished", &self.finished)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::NumberAnimation;
    use crate::easing::Easing;

    #[derive(Default)]
    struct Gauge {
        level: f32,
    }

    struct Level;

    impl Property<Gauge> for Level {
        type Value = f32;
        const NAME: &'static str = "level";

        fn get(target: &Gauge) -> f32 {
            target.level
        }

        fn set(target: &mut Gauge, value: f32) {
            target.level = value;
        }
    }

    fn actuator(anim: NumberAnimation) -> PropertyActuator<Gauge, Level> {
        PropertyActuator::new(anim)
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    /// Run until finished or `max_ticks`, returning ticks taken
    fn run_to_end(
        act: &mut PropertyActuator<Gauge, Level>,
        gauge: &mut Gauge,
        dt: f32,
        max_ticks: usize,
    ) -> Option<usize> {
        (1..=max_ticks).find(|_| !act.tick(gauge, dt))
    }

    #[test]
    fn test_linear_scenario() {
        let mut act = actuator(NumberAnimation::new(0.0, 1.0, 1000, Easing::Linear).unwrap());
        let mut gauge = Gauge::default();

        let mut last_time = 0.0;
        let mut seen = Vec::new();
        for time in [0.0, 250.0, 500.0, 1000.0] {
            let active = act.tick(&mut gauge, time - last_time);
            last_time = time;
            seen.push((gauge.level, active));
        }

        assert_eq!(
            seen,
            vec![(0.0, true), (0.25, true), (0.5, true), (1.0, false)]
        );
    }

    #[test]
    fn test_captures_live_value_when_from_absent() {
        let mut act = actuator(NumberAnimation::to(1.0, 100, Easing::Linear).unwrap());
        let mut gauge = Gauge { level: 0.6 };

        assert!(act.tick(&mut gauge, 0.0));
        assert_eq!(act.start_value(), Some(&0.6));
        assert!(act.tick(&mut gauge, 50.0));
        assert!(approx(gauge.level, 0.8));
    }

    #[test]
    fn test_keep_target_value_false_restores_start() {
        let mut act = actuator(
            NumberAnimation::new(0.2, 0.9, 100, Easing::Linear)
                .unwrap()
                .keep_target_value(false),
        );
        let mut gauge = Gauge::default();

        assert_eq!(run_to_end(&mut act, &mut gauge, 30.0, 100), Some(4));
        assert_eq!(gauge.level, 0.2);
        assert!(act.is_finished());
    }

    #[test]
    fn test_keep_target_value_true_holds_end() {
        let mut act = actuator(NumberAnimation::new(0.2, 0.9, 100, Easing::EaseInOutCubic).unwrap());
        let mut gauge = Gauge::default();

        assert!(run_to_end(&mut act, &mut gauge, 16.0, 100).is_some());
        assert!(approx(gauge.level, 0.9));
    }

    #[test]
    fn test_reverse_returns_to_start() {
        for keep in [true, false] {
            let mut act = actuator(
                NumberAnimation::new(0.0, 1.0, 100, Easing::Linear)
                    .unwrap()
                    .reverse()
                    .keep_target_value(keep),
            );
            let mut gauge = Gauge::default();

            // Forward leg ends on the third tick, backward leg on the fifth
            assert!(act.tick(&mut gauge, 0.0));
            assert!(act.tick(&mut gauge, 50.0));
            assert!(act.tick(&mut gauge, 50.0));
            assert_eq!(gauge.level, 1.0);
            assert_eq!(act.phase(), Phase::Backward);
            assert!(act.tick(&mut gauge, 25.0));
            assert!(approx(gauge.level, 0.75));
            assert!(!act.tick(&mut gauge, 75.0));
            assert_eq!(gauge.level, 0.0);
        }
    }

    #[test]
    fn test_loop_never_finishes() {
        let mut act = actuator(
            NumberAnimation::new(0.0, 1.0, 100, Easing::Linear)
                .unwrap()
                .looping(),
        );
        let mut gauge = Gauge::default();

        for _ in 0..10_000 {
            assert!(act.tick(&mut gauge, 17.0));
        }
    }

    #[test]
    fn test_loop_with_reverse_restarts_forward() {
        let mut act = actuator(
            NumberAnimation::new(0.0, 1.0, 100, Easing::Linear)
                .unwrap()
                .reverse()
                .looping(),
        );
        let mut gauge = Gauge::default();

        assert!(act.tick(&mut gauge, 100.0));
        assert_eq!(act.phase(), Phase::Backward);
        assert!(act.tick(&mut gauge, 100.0));
        assert_eq!(gauge.level, 0.0);
        assert_eq!(act.phase(), Phase::Forward);
        assert!(act.tick(&mut gauge, 50.0));
        assert!(approx(gauge.level, 0.5));
    }

    #[test]
    fn test_oversized_delta_completes_one_leg() {
        let mut act = actuator(
            NumberAnimation::new(0.0, 1.0, 10, Easing::Linear)
                .unwrap()
                .reverse(),
        );
        let mut gauge = Gauge::default();

        // Ten durations worth of time still only ends the forward leg
        assert!(act.tick(&mut gauge, 100.0));
        assert_eq!(gauge.level, 1.0);
        assert_eq!(act.elapsed_ms(), 0.0);
        assert!(!act.tick(&mut gauge, 100.0));
        assert_eq!(gauge.level, 0.0);
    }

    #[test]
    fn test_eased_value_is_not_clamped() {
        let mut act = actuator(NumberAnimation::new(0.0, 1.0, 100, Easing::EaseOutBack).unwrap());
        let mut gauge = Gauge::default();

        act.tick(&mut gauge, 60.0);
        assert!(gauge.level > 1.0);
    }

    #[test]
    fn test_negative_delta_is_ignored() {
        let mut act = actuator(NumberAnimation::new(0.0, 1.0, 100, Easing::Linear).unwrap());
        let mut gauge = Gauge::default();

        act.tick(&mut gauge, 40.0);
        act.tick(&mut gauge, -30.0);
        act.tick(&mut gauge, f32::NAN);
        assert_eq!(act.elapsed_ms(), 40.0);
    }

    #[test]
    fn test_finished_actuator_stays_finished() {
        let mut act = actuator(NumberAnimation::new(0.0, 1.0, 10, Easing::Linear).unwrap());
        let mut gauge = Gauge::default();

        assert!(!act.tick(&mut gauge, 10.0));
        gauge.level = 0.3;
        assert!(!act.tick(&mut gauge, 10.0));
        assert_eq!(gauge.level, 0.3);
    }

    #[test]
    fn test_kind_is_per_property() {
        struct Other;
        impl Property<Gauge> for Other {
            type Value = f32;
            const NAME: &'static str = "other";
            fn get(_: &Gauge) -> f32 {
                0.0
            }
            fn set(_: &mut Gauge, _: f32) {}
        }

        let anim = NumberAnimation::to(1.0, 10, Easing::Linear).unwrap();
        let a = PropertyActuator::<Gauge, Level>::new(anim.clone());
        let b = PropertyActuator::<Gauge, Level>::new(anim.clone());
        let c = PropertyActuator::<Gauge, Other>::new(anim);
        assert_eq!(a.kind(), b.kind());
        assert_ne!(a.kind(), c.kind());
    }
}
