//! Weft Runtime
//!
//! Ties the widget tree to a frame clock, runtime configuration and logging.
//!
//! # Example
//!
//! ```rust
//! use weft_app::prelude::*;
//!
//! let config = RuntimeConfig::from_toml_str("[frame]\nfixed_delta_ms = 50.0\n").unwrap();
//! let mut runtime = Runtime::new(&config);
//!
//! runtime.render_with(|styles| {
//!     Box::new(
//!         Label::new(styles, "hello")
//!             .animate_opacity(0.0, 1.0, 100, Easing::Linear)
//!             .unwrap(),
//!     )
//! });
//!
//! runtime.frame();
//! assert!(runtime.frame().any_changed());
//! assert!(!runtime.frame().any_changed());
//! ```

pub mod config;
mod error;
pub mod logging;
mod runtime;


pub use config::{FrameConfig, LoggingConfig, RuntimeConfig};
pub use error::{ConfigError, Result};
pub use runtime::Runtime;

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::config::{FrameConfig, LoggingConfig, RuntimeConfig};
    pub use crate::error::{ConfigError, Result};
    pub use crate::runtime::Runtime;

    pub use weft_animation::{
        Easing, FrameClock, FrameTime, NumberAnimation, TransformAnimation, ValueAnimation,
    };
    pub use weft_widgets::prelude::*;
}
