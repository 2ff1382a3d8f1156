//! Fixed-timestep game clock using an accumulator pattern.
//!
//! A UI draw loop calls in at ~60fps with variable delta. GameTime converts
//! this into a fixed number of discrete ticks per second, keeping the
//! simulation deterministic and fully testable.

/// Frames further apart than this many ticks are clamped, so a
/// backgrounded tab does not replay its whole absence in one frame.
pub const DEFAULT_MAX_CATCH_UP_TICKS: u32 = 5;

#[derive(Clone, Debug)]
pub struct GameTime {
    /// Milliseconds per tick (e.g. 1000ms = 1 tick/sec)
    ms_per_tick: f64,
    /// Largest delta accepted from a single frame
    max_delta_ms: f64,
    /// Accumulated milliseconds not yet consumed as ticks
    accumulator: f64,
    /// Total elapsed ticks since creation
    pub total_ticks: u64,
    /// Timestamp of the last update (ms), None if first frame
    last_timestamp: Option<f64>,
}

impl GameTime {
    /// Create a new GameTime with the given tick rate.
    /// `ticks_per_sec`: how many game ticks per real-time second (e.g. 1).
    pub fn new(ticks_per_sec: u32) -> Self {
        let ms_per_tick = 1000.0 / ticks_per_sec.max(1) as f64;
        Self {
            ms_per_tick,
            max_delta_ms: ms_per_tick * DEFAULT_MAX_CATCH_UP_TICKS as f64,
            accumulator: 0.0,
            total_ticks: 0,
            last_timestamp: None,
        }
    }

    pub fn with_max_catch_up_ticks(mut self, ticks: u32) -> Self {
        self.max_delta_ms = self.ms_per_tick * ticks as f64;
        self
    }

    /// Feed wall-clock timestamp (from `performance.now()` or similar).
    /// Returns the number of discrete ticks to process this frame.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_timestamp {
            // Clamp to avoid spiral-of-death if tab was backgrounded
            Some(prev) => (now_ms - prev).clamp(0.0, self.max_delta_ms),
            None => 0.0, // First frame: no delta
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let ticks = (self.accumulator / self.ms_per_tick) as u32;
        self.accumulator -= ticks as f64 * self.ms_per_tick;
        self.total_ticks += ticks as u64;
        ticks
    }
}

impl Default for GameTime {
    /// One tick per second.
    fn default() -> Self {
        Self::new(1)
    }
}
