//! Loading animation timer.
//!
//! Advanced by the frontend in milliseconds, the same way UI tweens are
//! ticked. The timer owns no clock, so tests drive it deterministically.

/// Number of animation frames before the dot pattern repeats.
const DOT_CYCLE: u32 = 4;

/// A one-shot timer that gates the end of the loading phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingTimer {
    /// Total loading duration in milliseconds.
    pub delay_ms: u32,
    /// Animation frame interval in milliseconds.
    pub tick_ms: u32,
    /// Elapsed time in milliseconds, capped at `delay_ms`.
    pub elapsed_ms: u32,
}

impl LoadingTimer {
    /// Create a timer. A zero `tick_ms` is treated as 1.
    pub fn new(delay_ms: u32, tick_ms: u32) -> Self {
        Self {
            delay_ms,
            tick_ms: tick_ms.max(1),
            elapsed_ms: 0,
        }
    }

    /// Advance by `dt_ms`. Returns `true` once the delay has elapsed.
    pub fn tick(&mut self, dt_ms: u32) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms).min(self.delay_ms);
        self.is_done()
    }

    pub fn is_done(&self) -> bool {
        self.elapsed_ms >= self.delay_ms
    }

    /// Index of the current animation frame.
    pub fn frame(&self) -> u32 {
        self.elapsed_ms / self.tick_ms
    }

    /// `Loading` followed by zero to three dots.
    pub fn text(&self) -> String {
        format!("Loading{}", ".".repeat((self.frame() % DOT_CYCLE) as usize))
    }
}
