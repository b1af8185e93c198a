//! Fixed-step frame timing

use crate::consts::{MAX_SUBSTEPS, TICK_MS};

/// Turns display-refresh timestamps into a whole number of ticks
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f64,
    last_ms: Option<f64>,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks to run for a frame at `now_ms`
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let dt = match self.last_ms {
            // First frame runs exactly one tick
            None => TICK_MS,
            Some(last) => (now_ms - last).clamp(0.0, 100.0),
        };
        self.last_ms = Some(now_ms);
        self.accumulator += dt;

        let mut steps = 0;
        while self.accumulator >= TICK_MS && steps < MAX_SUBSTEPS {
            self.accumulator -= TICK_MS;
            steps += 1;
        }
        if steps == MAX_SUBSTEPS {
            // Drop the backlog rather than fast-forwarding later
            self.accumulator = self.accumulator.min(TICK_MS);
        }
        steps
    }

    /// Forget the last timestamp (tab hidden, paused)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last_ms = None;
    }
}
