//! Weft Widget Tree
//!
//! Application code describes UI as a tree of [`Widget`]s. This crate mounts
//! that description as a tree of [`Node`]s and keeps the two in sync:
//!
//! - **Reconciliation**: [`Reconciler::merge`] matches a freshly rendered
//!   description against the mounted tree slot by slot. Same widget kind at a
//!   slot means the new description takes over the old node's live state
//!   (its running animations); a different kind remounts the whole subtree.
//! - **Animation ticks**: [`Node::tick`] runs every element's resident
//!   actuators once per frame, parent before children, and flags nodes whose
//!   visual state changed.
//! - **Elements**: [`UiElement`] carries the common interactive surface
//!   (enabled, visible, hit-test, opacity, transform, pointer callbacks) and
//!   applies [`Style`] bundles field by field.
//!
//! # Example
//!
//! ```rust
//! use weft_animation::{Easing, FrameTime};
//! use weft_widgets::prelude::*;
//!
//! let styles = StyleRegistry::new();
//! let label = Label::new(&styles, "hello")
//!     .animate_opacity(0.0, 1.0, 100, Easing::Linear)
//!     .unwrap();
//!
//! let (mut root, _) = merge(None, Box::new(label));
//! root.tick(FrameTime::new(50.0, 0));
//!
//! // A re-render with the same kind keeps the animation running
//! let (mut root, stats) = merge(Some(root), Box::new(Label::new(&styles, "hello")));
//! assert_eq!(stats.reused, 1);
//! root.tick(FrameTime::new(25.0, 1));
//! assert_eq!(root.downcast_ref::<Label>().unwrap().element().opacity, 0.75);
//! ```

pub mod element;
pub mod node;
pub mod properties;
pub mod reconcile;
pub mod registry;
pub mod style;
pub mod widget;
pub mod widgets;

pub use element::{Element, ElementExt, PointerCallback, UiElement};
pub use node::{FrameStats, Node};
pub use properties::{OpacityActuator, OpacityProperty, TransformActuator, TransformProperty};
pub use reconcile::{merge, MergeStats, Reconciler};
pub use registry::StyleRegistry;
pub use style::Style;
pub use widget::{Children, Widget, WidgetKind};
pub use widgets::{Label, Panel};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::element::{Element, ElementExt, UiElement};
    pub use crate::node::Node;
    pub use crate::reconcile::{merge, Reconciler};
    pub use crate::registry::StyleRegistry;
    pub use crate::style::Style;
    pub use crate::widget::{Children, Widget};
    pub use crate::widgets::{Label, Panel};

    pub use weft_core::{PointerEvent, Transform};
}
