//! Per-target actuator storage
//!
//! A target holds at most one actuator per [`ActuatorKind`]. Registering an
//! actuator of a kind that is already present replaces the old one outright.
//! Ticking runs every resident actuator once, then removes the ones that
//! finished; removal waits until the whole set has been visited.

use std::fmt;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;

use crate::actuator::{ActuatorKind, AnimationActuator};

/// Result of ticking an actuator set once
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Actuators that ran (and therefore wrote to the target)
    pub ticked: usize,
    /// Actuators that reported completion and were removed
    pub finished: usize,
}

impl TickOutcome {
    /// Whether any actuator wrote to the target this tick
    pub fn changed(&self) -> bool {
        self.ticked > 0
    }

    /// Actuators still resident after the tick
    pub fn still_active(&self) -> usize {
        self.ticked - self.finished
    }
}

/// The actuators resident on one target, keyed by kind
pub struct ActuatorSet<T: ?Sized> {
    actuators: IndexMap<ActuatorKind, Box<dyn AnimationActuator<T>>, FxBuildHasher>,
}

impl<T: ?Sized> Default for ActuatorSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> ActuatorSet<T> {
    pub fn new() -> Self {
        Self {
            actuators: IndexMap::with_hasher(FxBuildHasher),
        }
    }

    pub fn len(&self) -> usize {
        self.actuators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actuators.is_empty()
    }

    pub fn contains(&self, kind: ActuatorKind) -> bool {
        self.actuators.contains_key(&kind)
    }

    pub fn get(&self, kind: ActuatorKind) -> Option<&dyn AnimationActuator<T>> {
        self.actuators.get(&kind).map(|a| &**a)
    }

    /// Kinds in registration order
    pub fn kinds(&self) -> impl Iterator<Item = ActuatorKind> + '_ {
        self.actuators.keys().copied()
    }

    /// Register an actuator, returning the one it replaced
    pub fn insert(
        &mut self,
        actuator: Box<dyn AnimationActuator<T>>,
    ) -> Option<Box<dyn AnimationActuator<T>>> {
        let kind = actuator.kind();
        let replaced = self.actuators.insert(kind, actuator);
        if replaced.is_some() {
            tracing::trace!(kind = kind.name(), "actuator replaced");
        }
        replaced
    }

    pub fn remove(&mut self, kind: ActuatorKind) -> Option<Box<dyn AnimationActuator<T>>> {
        self.actuators.shift_remove(&kind)
    }

    pub fn clear(&mut self) {
        self.actuators.clear();
    }

    /// Tick every resident actuator against `target`, then drop the finished
    /// ones.
    pub fn tick(&mut self, target: &mut T, dt_ms: f32) -> TickOutcome {
        let mut finished: SmallVec<[ActuatorKind; 4]> = SmallVec::new();
        let mut ticked = 0;

        for (kind, actuator) in self.actuators.iter_mut() {
            ticked += 1;
            if !actuator.tick(target, dt_ms) {
                finished.push(*kind);
            }
        }

        for kind in &finished {
            self.actuators.shift_remove(kind);
        }

        TickOutcome {
            ticked,
            finished: finished.len(),
        }
    }

    /// Fold in actuators registered elsewhere; entries in `newer` win.
    pub fn absorb(&mut self, newer: ActuatorSet<T>) {
        for (kind, actuator) in newer.actuators {
            self.actuators.insert(kind, actuator);
        }
    }
}

impl<T: ?Sized> ActuatorSet<T> {
    /// Tick the set that lives inside `target` itself.
    ///
    /// The set is moved out of the target for the duration of the tick so the
    /// actuators can borrow the target mutably. Anything registered on the
    /// target while its actuators run is merged back in afterwards and takes
    /// precedence.
    pub fn tick_resident<F>(target: &mut T, dt_ms: f32, slot: F) -> TickOutcome
    where
        F: Fn(&mut T) -> &mut ActuatorSet<T>,
    {
        let mut resident = std::mem::take(slot(target));
        if resident.is_empty() {
            return TickOutcome::default();
        }

        let outcome = resident.tick(target, dt_ms);

        let registered_during_tick = std::mem::take(slot(target));
        resident.absorb(registered_during_tick);
        *slot(target) = resident;

        outcome
    }
}

impl<T: ?Sized> fmt::Debug for ActuatorSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.actuators.keys()).finish()
    }
}
