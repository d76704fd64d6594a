use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Time source for the frame step and the trigger effects.
///
/// `now` is measured from an arbitrary origin (the engine only ever compares
/// readings from the same clock).
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock anchored at construction.
#[derive(Debug)]
pub struct SystemClock {
    boot_timestamp: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            boot_timestamp: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.boot_timestamp.elapsed()
    }
}

/// Hand-driven clock. Clones share the same reading, so a test can keep one
/// handle and give the other to the engine.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }

    pub fn advance_ms(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FrameTiming {
    pub delta_seconds: f32,
    pub fps: f32,
}

impl FrameTiming {
    /// Timing between two consecutive clock readings.
    pub fn between(previous: Duration, current: Duration) -> Self {
        let delta_seconds = current.saturating_sub(previous).as_secs_f32();
        let fps = if delta_seconds > 0.0 {
            1.0 / delta_seconds
        } else {
            0.0
        };
        Self { delta_seconds, fps }
    }
}
