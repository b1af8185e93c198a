//! Checkpoints every `interval` units of scroll progress
//!
//! The tracker only records which boundaries were crossed; restarting from one
//! is the game core's job.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointTracker {
    /// Spacing (0 disables)
    interval: f32,
    /// Latest boundary reached
    latest: Option<f32>,
}

impl CheckpointTracker {
    pub fn new(interval: f32) -> Self {
        Self {
            interval: if interval.is_finite() { interval.max(0.0) } else { 0.0 },
            latest: None,
        }
    }

    pub fn enabled(&self) -> bool {
        self.interval > 0.0
    }

    /// Record progress. Returns the boundary when a new one is crossed; a tick
    /// that jumps several boundaries reports only the furthest.
    pub fn observe(&mut self, progress: f32) -> Option<f32> {
        if !self.enabled() {
            return None;
        }
        let reached = (progress / self.interval).floor() * self.interval;
        if reached <= 0.0 || self.latest.is_some_and(|l| reached <= l) {
            return None;
        }
        self.latest = Some(reached);
        Some(reached)
    }

    pub fn latest(&self) -> Option<f32> {
        self.latest
    }

    /// Carry the reached checkpoint into a resumed run
    pub fn resume_from(&mut self, distance: f32) {
        self.latest = Some(distance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled() {
        let mut cp = CheckpointTracker::new(0.0);
        assert_eq!(cp.observe(10_000.0), None);
        assert_eq!(cp.latest(), None);
    }

    #[test]
    fn test_reports_each_boundary_once() {
        let mut cp = CheckpointTracker::new(1000.0);
        assert_eq!(cp.observe(999.0), None);
        assert_eq!(cp.observe(1000.0), Some(1000.0));
        assert_eq!(cp.observe(1500.0), None);
        assert_eq!(cp.observe(2004.0), Some(2000.0));
        assert_eq!(cp.latest(), Some(2000.0));
    }

    #[test]
    fn test_big_jump_reports_furthest() {
        let mut cp = CheckpointTracker::new(100.0);
        assert_eq!(cp.observe(350.0), Some(300.0));
    }

    #[test]
    fn test_resume() {
        let mut cp = CheckpointTracker::new(1000.0);
        cp.resume_from(2000.0);
        assert_eq!(cp.observe(2500.0), None);
        assert_eq!(cp.observe(3000.0), Some(3000.0));
    }
}
