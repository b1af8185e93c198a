//! Coyote time: a short grace window after leaving a surface during which a
//! jump is still honoured. A window of zero means only grounded jumps.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoyoteTimer {
    window: u32,
    remaining: u32,
}

impl CoyoteTimer {
    pub fn new(window: u32) -> Self {
        Self {
            window,
            remaining: 0,
        }
    }

    /// Call once per tick after support resolution
    pub fn update(&mut self, grounded: bool) {
        if grounded {
            self.remaining = self.window;
        } else {
            self.remaining = self.remaining.saturating_sub(1);
        }
    }

    pub fn can_jump(&self, grounded: bool) -> bool {
        grounded || self.remaining > 0
    }

    /// Spend the window so one ledge gives one jump
    pub fn consume(&mut self) {
        self.remaining = 0;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}
