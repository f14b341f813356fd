//! Frame clock
//!
//! Produces the delta every animation tick consumes. A fixed clock advances
//! by the same amount each frame (headless runs, tests, replays); a measured
//! clock reads wall-clock time and clamps long stalls.

use std::time::Instant;

/// Timing of one animation frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Milliseconds since the previous frame
    pub delta_ms: f32,
    /// Frame counter, starting at 0
    pub frame: u64,
}

impl FrameTime {
    pub fn new(delta_ms: f32, frame: u64) -> Self {
        Self { delta_ms, frame }
    }
}

#[derive(Clone, Copy, Debug)]
enum ClockSource {
    Fixed { delta_ms: f32 },
    Measured { last: Option<Instant>, max_delta_ms: f32 },
}

/// Source of per-frame deltas
#[derive(Clone, Debug)]
pub struct FrameClock {
    source: ClockSource,
    target_fps: u32,
    next_frame: u64,
}

impl FrameClock {
    /// Advance by exactly `delta_ms` every frame
    pub fn fixed(delta_ms: f32) -> Self {
        Self {
            source: ClockSource::Fixed {
                delta_ms: delta_ms.max(0.0),
            },
            target_fps: 60,
            next_frame: 0,
        }
    }

    /// Measure wall-clock time between frames, clamped to `max_delta_ms`.
    ///
    /// The first frame reports a zero delta.
    pub fn measured(max_delta_ms: f32) -> Self {
        Self {
            source: ClockSource::Measured {
                last: None,
                max_delta_ms: max_delta_ms.max(0.0),
            },
            target_fps: 60,
            next_frame: 0,
        }
    }

    pub fn set_target_fps(&mut self, fps: u32) {
        self.target_fps = fps.max(1);
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Nominal time between frames at the target rate
    pub fn frame_interval_ms(&self) -> f32 {
        1000.0 / self.target_fps as f32
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self.source, ClockSource::Fixed { .. })
    }

    /// Produce the timing for the next frame
    pub fn tick(&mut self) -> FrameTime {
        let delta_ms = match &mut self.source {
            ClockSource::Fixed { delta_ms } => *delta_ms,
            ClockSource::Measured { last, max_delta_ms } => {
                let now = Instant::now();
                let delta = last
                    .map(|prev| now.duration_since(prev).as_secs_f32() * 1000.0)
                    .unwrap_or(0.0);
                *last = Some(now);
                delta.min(*max_delta_ms)
            }
        };

        self.tick_by(delta_ms)
    }

    /// Produce the next frame with an explicit delta, bypassing the source
    pub fn tick_by(&mut self, delta_ms: f32) -> FrameTime {
        let frame = self.next_frame;
        self.next_frame += 1;
        FrameTime {
            delta_ms: delta_ms.max(0.0),
            frame,
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::measured(250.0)
    }
}
