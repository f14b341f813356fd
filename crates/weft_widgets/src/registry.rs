//! Default style registry
//!
//! Holds at most one default [`Style`] per element type. Elements look their
//! default up once, at construction; the registry is passed in explicitly so
//! tests and separate runtimes never share style state.

use std::any::{type_name, Any, TypeId};
use std::fmt;

use rustc_hash::FxHashMap;

use crate::style::Style;

struct Entry {
    name: &'static str,
    style: Box<dyn Any + Send + Sync>,
}

/// Default styles keyed by element type
#[derive(Default)]
pub struct StyleRegistry {
    defaults: FxHashMap<TypeId, Entry>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default style for elements of type `T`, replacing any
    /// previous default
    pub fn register<T: 'static>(&mut self, style: Style<T>) {
        let name = type_name::<T>();
        tracing::debug!(element = name, "default style registered");
        self.defaults.insert(
            TypeId::of::<T>(),
            Entry {
                name,
                style: Box::new(style),
            },
        );
    }

    pub fn default_for<T: 'static>(&self) -> Option<&Style<T>> {
        self.defaults
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.style.downcast_ref::<Style<T>>())
    }

    pub fn unregister<T: 'static>(&mut self) -> bool {
        self.defaults.remove(&TypeId::of::<T>()).is_some()
    }

    pub fn len(&self) -> usize {
        self.defaults.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty()
    }
}

impl fmt::Debug for StyleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.defaults.values().map(|entry| entry.name))
            .finish()
    }
}
