//! Weft Core
//!
//! Value types shared by every layer of the Weft UI framework:
//!
//! - **Geometry**: 2D affine [`Transform`]
//! - **Events**: the pointer event kinds an element can react to
//!
//! This crate is a leaf: it has no dependency on the widget tree or the
//! animation system so both can share its types without cycles.

pub mod events;
pub mod geometry;

pub use events::PointerEvent;
pub use geometry::Transform;
