//! Weft Animation System
//!
//! Time-based property animations for mounted UI elements.
//!
//! # Features
//!
//! - **Descriptors**: immutable [`ValueAnimation`]s (duration, easing, from/to,
//!   reverse, loop, keep-target-value), validated at construction
//! - **Actuators**: per-property state machines that sample the descriptor each
//!   frame and write the value onto their target through a [`Property`]
//! - **Actuator sets**: one actuator per kind on each target, with
//!   last-registered-wins replacement and deferred removal of finished entries
//! - **Frame clock**: fixed or measured frame deltas
//!
//! # Example
//!
//! ```rust
//! use weft_animation::{Easing, NumberAnimation, Property, PropertyActuator, AnimationActuator};
//!
//! struct Fader { alpha: f32 }
//!
//! struct Alpha;
//! impl Property<Fader> for Alpha {
//!     type Value = f32;
//!     const NAME: &'static str = "alpha";
//!     fn get(target: &Fader) -> f32 { target.alpha }
//!     fn set(target: &mut Fader, value: f32) { target.alpha = value; }
//! }
//!
//! let fade = NumberAnimation::new(0.0, 1.0, 100, Easing::Linear).unwrap();
//! let mut actuator = PropertyActuator::<Fader, Alpha>::new(fade);
//! let mut fader = Fader { alpha: 0.0 };
//!
//! assert!(actuator.tick(&mut fader, 0.0));
//! assert!(actuator.tick(&mut fader, 50.0));
//! assert_eq!(fader.alpha, 0.5);
//! assert!(!actuator.tick(&mut fader, 50.0));
//! assert_eq!(fader.alpha, 1.0);
//! ```

pub mod actuator;
pub mod actuator_set;
pub mod animation;
pub mod clock;
pub mod easing;
pub mod error;
pub mod property;
pub mod value;

pub use actuator::{ActuatorKind, AnimationActuator, Phase, PropertyActuator};
pub use actuator_set::{ActuatorSet, TickOutcome};
pub use animation::{AnimationTiming, NumberAnimation, TransformAnimation, ValueAnimation};
pub use clock::{FrameClock, FrameTime};
pub use easing::Easing;
pub use error::{AnimationError, Result};
pub use property::Property;
pub use value::Animatable;
