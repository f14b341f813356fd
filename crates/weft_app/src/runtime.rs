//! Frame driver
//!
//! A [`Runtime`] owns the mounted root and alternates the two phases of a
//! frame: a merge pass when the application re-renders, and a tick pass on
//! every clock pulse. Both take `&mut self`, so they can never overlap.

use tracing::{debug, trace};
use weft_animation::{FrameClock, FrameTime};
use weft_core::PointerEvent;
use weft_widgets::{FrameStats, MergeStats, Node, Reconciler, StyleRegistry, Widget};

use crate::config::RuntimeConfig;

/// Owner of one mounted widget tree
#[derive(Debug)]
pub struct Runtime {
    styles: StyleRegistry,
    reconciler: Reconciler,
    clock: FrameClock,
    root: Option<Node>,
}

impl Runtime {
    pub fn new(config: &RuntimeConfig) -> Self {
        Self::with_clock(config.frame.clock())
    }

    pub fn with_clock(clock: FrameClock) -> Self {
        Self {
            styles: StyleRegistry::new(),
            reconciler: Reconciler::new(),
            clock,
            root: None,
        }
    }

    /// Default styles handed to widgets built through
    /// [`render_with`](Runtime::render_with)
    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    pub fn styles_mut(&mut self) -> &mut StyleRegistry {
        &mut self.styles
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Merge a new description onto the mounted tree
    pub fn render(&mut self, widget: Box<dyn Widget>) -> MergeStats {
        let old = self.root.take();
        self.root = Some(self.reconciler.merge(old, widget));

        let stats = self.reconciler.take_stats();
        debug!(
            reused = stats.reused,
            mounted = stats.mounted,
            remounted = stats.remounted,
            discarded = stats.discarded,
            "merge pass"
        );
        stats
    }

    /// Build a description against this runtime's styles and merge it
    pub fn render_with<F>(&mut self, build: F) -> MergeStats
    where
        F: FnOnce(&StyleRegistry) -> Box<dyn Widget>,
    {
        let widget = build(&self.styles);
        self.render(widget)
    }

    /// Run one tick pass with the next delta from the clock
    pub fn frame(&mut self) -> FrameStats {
        let time = self.clock.tick();
        self.frame_with(time)
    }

    /// Simulate `duration_ms` of time in frames of the clock's target
    /// interval; the last frame takes whatever is left over
    pub fn advance(&mut self, duration_ms: f32) -> FrameStats {
        let interval = self.clock.frame_interval_ms();
        let mut remaining = if duration_ms.is_finite() { duration_ms } else { 0.0 };
        let mut stats = FrameStats::default();
        while remaining > 0.0 {
            let delta = remaining.min(interval);
            let time = self.clock.tick_by(delta);
            stats += self.frame_with(time);
            remaining -= delta;
        }
        stats
    }

    /// Run one tick pass with an explicit frame time
    pub fn frame_with(&mut self, time: FrameTime) -> FrameStats {
        let Some(root) = self.root.as_mut() else {
            trace!(frame = time.frame, "frame with nothing mounted");
            return FrameStats::default();
        };

        let stats = root.tick(time);
        if stats.any_changed() {
            debug!(
                frame = time.frame,
                delta_ms = time.delta_ms,
                changed = stats.changed,
                finished = stats.actuators_finished,
                "frame changed state"
            );
        }
        stats
    }

    /// Deliver a pointer event to the node at `path`, given as child indices
    /// from the root
    pub fn dispatch_pointer(&mut self, path: &[usize], event: PointerEvent) -> bool {
        let Some(mut node) = self.root.as_mut() else {
            return false;
        };
        for &index in path {
            match node.child_mut(index) {
                Some(child) => node = child,
                None => {
                    debug!(?path, "pointer target no longer mounted");
                    return false;
                }
            }
        }
        node.handle_pointer(event)
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn root_mut(&mut self) -> Option<&mut Node> {
        self.root.as_mut()
    }

    /// Whether any mounted node changed since the last paint
    pub fn needs_paint(&self) -> bool {
        self.root.as_ref().is_some_and(Node::any_state_changed)
    }

    /// Clear every "state changed" flag after a paint pass
    pub fn finish_paint(&mut self) {
        if let Some(root) = self.root.as_mut() {
            root.clear_state_changed();
        }
    }

    /// Drop the mounted tree and everything running on it
    pub fn unmount(&mut self) -> Option<Node> {
        self.root.take()
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new(&RuntimeConfig::default())
    }
}
