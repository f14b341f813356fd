//! Minimal concrete widgets
//!
//! [`Panel`] is a container that renders the children it was built with;
//! [`Label`] is a text leaf. Both embed a [`UiElement`](crate::UiElement).

mod label;
mod panel;

pub use label::Label;
pub use panel::Panel;
