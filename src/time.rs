//! Fixed-period clock.
//!
//! The driver feeds wall-clock timestamps at whatever rate it renders; the
//! clock hands back how many whole periods elapsed so the simulation is
//! ticked exactly once per period regardless of frame jitter.

pub struct GameTime {
    /// Milliseconds per tick (1000ms = one tick per second)
    ms_per_tick: f64,
    /// Upper bound on one frame's delta, so a backgrounded tab does not
    /// replay hours of ticks in one frame.
    max_frame_ms: f64,
    /// Elapsed milliseconds not yet consumed as ticks
    accumulator: f64,
    pub total_ticks: u64,
    last_timestamp: Option<f64>,
}

impl GameTime {
    pub fn new(ticks_per_sec: u32, max_frame_ms: f64) -> Self {
        Self {
            ms_per_tick: 1000.0 / ticks_per_sec.max(1) as f64,
            max_frame_ms: max_frame_ms.max(0.0),
            accumulator: 0.0,
            total_ticks: 0,
            last_timestamp: None,
        }
    }

    /// Feed a timestamp (`performance.now()` or similar) and get the number
    /// of ticks to run. The first call only records the timestamp.
    /// Non-finite timestamps are ignored.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        if !now_ms.is_finite() {
            return 0;
        }
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).clamp(0.0, self.max_frame_ms),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let ticks = (self.accumulator / self.ms_per_tick) as u32;
        self.accumulator -= ticks as f64 * self.ms_per_tick;
        self.total_ticks += ticks as u64;
        ticks
    }

    /// Forget the last timestamp; the next `update` starts a fresh interval.
    pub fn pause(&mut self) {
        self.last_timestamp = None;
        self.accumulator = 0.0;
    }
}
