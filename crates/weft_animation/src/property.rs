//! Property assignment contract
//!
//! Actuators never know the concrete shape of their target. A `Property`
//! names one animatable slot on a target type and how to read and write it;
//! the target's type decides which properties exist.

use crate::value::Animatable;

/// One animatable property of `T`
pub trait Property<T: ?Sized>: 'static {
    /// Value stored in the property
    type Value: Animatable;

    /// Name used in logs
    const NAME: &'static str;

    /// Read the live value
    fn get(target: &T) -> Self::Value;

    /// Write a computed value
    fn set(target: &mut T, value: Self::Value);
}
